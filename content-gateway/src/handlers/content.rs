use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use gateway_core::error::AppError;

use crate::{
    AppState,
    dtos::content::{ContentRequest, ContentType},
    middleware::AuthUser,
    utils::ValidatedJson,
};

/// Route a content-generation request by type.
///
/// Provider-level failures never reach this error path: the adapter
/// folds them into a `status=error` envelope that still returns 200.
/// Only validation failures and errors escaping the adapter become
/// HTTP errors here.
pub async fn get_content(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(req): ValidatedJson<ContentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let content_type: ContentType = req
        .content_type
        .parse()
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid content type")))?;

    tracing::info!(
        username = %user.username,
        content_type = %req.content_type,
        "Dispatching content request"
    );

    let parameters = req.parameters.as_ref();
    let result = match content_type {
        ContentType::Text => state.content.generate_text(&req.prompt, parameters).await,
        ContentType::Audio => state.content.generate_audio(&req.prompt, parameters),
        ContentType::Video => state.content.generate_video(&req.prompt, parameters),
    };

    Ok((StatusCode::OK, Json(result)))
}
