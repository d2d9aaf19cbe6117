use serde::{Deserialize, Serialize};

/// A credential-store user record.
///
/// Created at process start from static configuration and immutable
/// thereafter; there is no runtime create/update/delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique primary key; token subjects reference this.
    pub username: String,
    pub display_name: String,
    /// Argon2 hash of the user's secret. Never serialized outward.
    #[serde(skip_serializing)]
    pub hashed_secret: String,
    #[serde(default)]
    pub disabled: bool,
}
