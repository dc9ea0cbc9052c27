use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::validation::Violation;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Menu item not found")]
    NotFound,

    #[error("Validation failed: {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    #[error("Malformed payload")]
    MalformedPayload,
}

impl From<Vec<Violation>> for AppError {
    fn from(violations: Vec<Violation>) -> Self {
        AppError::Validation(violations)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": message })),
            AppError::Validation(violations) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": violations }))
            }
            AppError::MalformedPayload => (StatusCode::BAD_REQUEST, json!({ "error": message })),
        };

        (status, Json(body)).into_response()
    }
}
