use axum::{Form, Json, extract::State, http::StatusCode, response::IntoResponse};
use gateway_core::error::AppError;

use crate::{
    AppState,
    dtos::auth::{TokenRequest, TokenResponse},
};

/// Exchange a username/password pair for a time-limited bearer token.
///
/// Failure is always 401 with a `WWW-Authenticate: Bearer` challenge
/// and the detail `"Incorrect username or password"`.
pub async fn token(
    State(state): State<AppState>,
    Form(req): Form<TokenRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.auth.authenticate(&req.username, &req.password)?;
    let access_token = state.auth.issue_token(&user)?;

    tracing::info!(username = %user.username, "Issued access token");

    Ok((
        StatusCode::OK,
        Json(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
        }),
    ))
}
