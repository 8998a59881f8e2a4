use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use pokedex_core::{error_to_status_code, PokedexError};

/// Handler-facing error wrapper.
///
/// Converts a [`PokedexError`] into the JSON error body the API exposes:
/// `{message, error, statusCode}`, where `message` is a list of per-field
/// messages for validation failures and a single string otherwise.
pub struct ApiError(pub PokedexError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        tracing::warn!(status = %status, error = %self.0, "API error");

        let message = match &self.0 {
            PokedexError::Validation { messages } => json!(messages),
            other => json!(other.to_string()),
        };

        let body = json!({
            "message": message,
            "error": status.canonical_reason().unwrap_or("Unknown"),
            "statusCode": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<PokedexError> for ApiError {
    fn from(err: PokedexError) -> Self {
        Self(err)
    }
}
