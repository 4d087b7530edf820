//! Emoji HTTP handlers.

use crate::{error::HttpError, models::Emoji, AppState};
use axum::{extract::State, http::StatusCode, Json};

/// Submit a new emoji.
///
/// # Arguments
/// - `state`: Application state.
/// - `req`: Emoji and its source.
///
/// # Returns
/// `201 Created` with an empty body.
///
/// # Errors
/// Returns a `400` with a coded description when validation fails or the
/// emoji is already registered.
pub async fn submit_emoji(
    State(state): State<AppState>,
    Json(req): Json<Emoji>,
) -> Result<StatusCode, HttpError> {
    if !req.emoji.is_empty() {
        tracing::debug!("Received an emoji {} from {}", req.emoji, req.source);
    }

    state.registry.submit(&req.emoji, &req.source)?;

    tracing::debug!("Remembering {}. Thank you {}!", req.emoji, req.source);
    Ok(StatusCode::CREATED)
}

/// Return a random registered emoji.
///
/// # Errors
/// Returns a `400` when the registry holds no emoji.
pub async fn pick_emoji(State(state): State<AppState>) -> Result<Json<Emoji>, HttpError> {
    let entry = state.registry.pick()?;
    Ok(Json(Emoji::from(entry)))
}
