//! Liveness endpoint.

use crate::{error::HttpError, models::HealthReport, AppState};
use axum::{extract::State, Json};

/// Report liveness and the current registry size.
///
/// # Arguments
/// - `state`: Application state.
///
/// # Returns
/// `{ "status": "ok", "emojis": <count> }` as JSON.
///
/// # Errors
/// Returns a `500` when the registry is unavailable.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthReport>, HttpError> {
    let emojis = state.registry.count()?;
    Ok(Json(HealthReport {
        status: "ok".to_string(),
        emojis,
    }))
}
