use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use gateway_core::error::AppError;

use crate::{AppState, models::User};

/// Hard authentication gate for content routes.
///
/// Runs before the handler body, so a request that fails auth is
/// rejected with 401 before any validation or adapter call happens —
/// an invalid token plus an invalid content_type is a 401, not a 400.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized(anyhow::anyhow!("Not authenticated")))?;

    let user = state.auth.verify_token(token)?;

    // Handlers pick the user up through the AuthUser extractor.
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Extractor for the authenticated user resolved by the middleware.
pub struct AuthUser(pub User);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts.extensions.get::<User>().ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!(
                "Authenticated user missing from request extensions"
            ))
        })?;

        Ok(AuthUser(user.clone()))
    }
}
