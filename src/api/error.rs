//! Error replies for the HTTP API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::handlers::{send_json, TranslateResponse};

/// Message returned when the provider call fails
pub const TRANSLATION_FAILED: &str = "Translation failed";

/// Message returned when a detected language has no known code
pub const DETECTION_FAILED: &str = "Language Detection is failed";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request payload")]
    InvalidPayload,

    /// Translation or detection failed; the detail stays server-side
    #[error("{0}")]
    Upstream(&'static str),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::MethodNotAllowed => (status, self.to_string()).into_response(),
            _ => send_json(status, &TranslateResponse::failure(self.to_string())),
        }
    }
}
