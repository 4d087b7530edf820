//! HTTP error mapping for registry failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use emojibox_core::{models::SubmitError, RegistryError};
use serde_json::json;

/// Registry failure rendered as an HTTP response.
///
/// Validation outcomes become `400` with a `{code, description}` body; anything
/// without a wire code is a `500`.
#[derive(Debug)]
pub struct HttpError(pub RegistryError);

impl From<RegistryError> for HttpError {
    fn from(value: RegistryError) -> Self {
        Self(value)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match SubmitError::from_registry_error(&self.0) {
            Some(body) => {
                tracing::debug!("{}", body.description);
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            None => {
                tracing::error!("Internal error: {}", self.0);
                let body = Json(json!({ "error": "Internal server error" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
