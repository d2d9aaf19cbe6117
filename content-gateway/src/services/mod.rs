//! Services layer for the content gateway.
//!
//! Credential lookup, token issue/verify, and the content provider
//! adapter live here; handlers stay thin.

mod auth;
mod content;
mod credentials;
mod jwt;
pub mod providers;

pub use auth::{AuthError, AuthService};
pub use content::ContentService;
pub use credentials::{CredentialStore, StaticCredentialStore};
pub use jwt::{JwtService, TokenClaims};
