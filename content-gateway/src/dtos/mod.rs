pub mod auth;
pub mod content;

use serde::{Deserialize, Serialize};

/// Wire shape for error responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
