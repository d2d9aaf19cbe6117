use std::sync::Arc;

use gateway_core::error::AppError;
use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

use crate::models::User;
use crate::services::{CredentialStore, JwtService};
use crate::utils::verify_secret;

/// Authentication failures. Every variant surfaces as HTTP 401; the
/// variants exist so logs and tests can tell the cases apart.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    AuthFailure,

    #[error("Could not validate credentials")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Unknown token subject")]
    UnknownSubject,

    #[error("Account is disabled")]
    DisabledAccount,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Unauthorized(anyhow::Error::new(err))
    }
}

/// Verifies credentials against the store and manages bearer tokens.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, jwt: JwtService) -> Self {
        Self { store, jwt }
    }

    /// Check a submitted username/secret pair.
    ///
    /// Unknown user, wrong secret, and disabled account all collapse
    /// into `AuthFailure` so the response does not reveal which one
    /// it was.
    pub fn authenticate(&self, username: &str, secret: &str) -> Result<User, AuthError> {
        let user = self.store.lookup(username).ok_or(AuthError::AuthFailure)?;

        verify_secret(secret, &user.hashed_secret).map_err(|_| AuthError::AuthFailure)?;

        if user.disabled {
            tracing::warn!(username = %user.username, "Login attempt on disabled account");
            return Err(AuthError::AuthFailure);
        }

        Ok(user)
    }

    /// Issue a signed bearer token for an authenticated user.
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        self.jwt.issue(&user.username).map_err(AppError::InternalError)
    }

    /// Resolve a bearer token back to its user.
    ///
    /// Token state machine: issued -> valid -> (expired |
    /// signature-invalid | subject-missing | subject-disabled). Every
    /// terminal failure is equivalent to the caller: 401.
    pub fn verify_token(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.jwt.decode(token).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })?;

        let user = self
            .store
            .lookup(&claims.sub)
            .ok_or(AuthError::UnknownSubject)?;

        if user.disabled {
            return Err(AuthError::DisabledAccount);
        }

        Ok(user)
    }
}
