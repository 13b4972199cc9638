//! API handlers

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::api::error::{ApiError, DETECTION_FAILED, TRANSLATION_FAILED};
use crate::api::AppState;

/// Fixed `translatedText` marker on detection replies
pub const DETECT_MARKER: &str = "Detectlanguage";

/// Request body shared by both endpoints; detection ignores `to`
#[derive(Debug, Default, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub to: String,
}

/// Reply envelope for successes and failures alike
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    #[serde(default, skip_serializing_if = "is_blank")]
    pub translated_text: Option<String>,
    pub status: bool,
    pub message: String,
}

impl TranslateResponse {
    pub fn success(translated_text: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            translated_text: Some(translated_text.into()),
            status: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            translated_text: None,
            status: false,
            message: message.into(),
        }
    }
}

/// Absent and empty text are both left out of the reply
fn is_blank(text: &Option<String>) -> bool {
    text.as_deref().map_or(true, str::is_empty)
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Reply for any method other than POST on the API routes
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Translate text into the requested language
pub async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = parse_request(&body)?;

    let translated = state
        .translator
        .translate(&request.text, &request.to)
        .await
        .map_err(|e| {
            warn!("Translation to '{}' failed: {:#}", request.to, e);
            ApiError::Upstream(TRANSLATION_FAILED)
        })?;

    Ok(send_json(
        StatusCode::OK,
        &TranslateResponse::success(translated, ""),
    ))
}

/// Detect the language of the text and reply with its two-letter code
pub async fn detect_language(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = parse_request(&body)?;

    let code = match state.detector.detect_code(&request.text) {
        Ok(Some(code)) => {
            info!("Detected language code: {}", code);
            code
        }
        Ok(None) => {
            info!("No language detected");
            ""
        }
        Err(name) => {
            warn!("Detected language '{}' has no code mapping", name);
            return Err(ApiError::Upstream(DETECTION_FAILED));
        }
    };

    Ok(send_json(
        StatusCode::OK,
        &TranslateResponse::success(DETECT_MARKER, code),
    ))
}

/// Decode the first JSON value in the body, ignoring anything after it.
///
/// A `null` body decodes to an empty request.
fn parse_request(body: &[u8]) -> Result<TranslateRequest, ApiError> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<TranslateRequest>>()
        .next()
        .and_then(Result::ok)
        .map(Option::unwrap_or_default)
        .ok_or(ApiError::InvalidPayload)
}

/// Encode `data` as a JSON reply.
///
/// Encoding failures are logged and never surfaced to the client.
pub fn send_json<T: Serialize>(status: StatusCode, data: &T) -> Response {
    match serde_json::to_vec(data) {
        Ok(mut body) => {
            body.push(b'\n');
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(e) => {
            error!("Failed to encode JSON response: {}", e);
            status.into_response()
        }
    }
}
