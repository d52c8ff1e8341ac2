use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArogyaError {
    #[error("{0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ArogyaError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ArogyaError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ArogyaError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        // The frontend reads `detail` from error bodies.
        let body = Json(json!({ "detail": message }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ArogyaError>;
