//! Translation service - Routes text to the external translation provider
//!
//! The provider is the public Google Translate web endpoint. The source
//! language is always left to the provider (`sl=auto`).

use crate::config::TranslationConfig;
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

/// Path of the provider's single-shot translation endpoint
const TRANSLATE_PATH: &str = "/translate_a/single";

/// Translation service that forwards text to the configured provider
#[derive(Debug, Clone)]
pub struct TranslatorService {
    provider_url: String,
    client: reqwest::Client,
}

impl TranslatorService {
    /// Create a new translator service
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            provider_url: config.provider_url.trim_end_matches('/').to_string(),
            client: builder.build().context("Failed to build HTTP client")?,
        })
    }

    /// Translate text into `to`, letting the provider detect the source language.
    ///
    /// `to` is passed through untouched; unknown codes fail however the
    /// provider decides they fail.
    pub async fn translate(&self, text: &str, to: &str) -> Result<String> {
        let url = format!("{}{}", self.provider_url, TRANSLATE_PATH);

        debug!("Translating via provider: auto -> {}", to);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", to),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .context("Failed to send translation request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Translation request failed: {} - {}", status, body);
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse translation response")?;

        parse_translation(&body)
    }
}

/// Join the translated chunks of a provider response.
///
/// The response is a nested array: `[[["chunk", "source", ...], ...], ...]`.
fn parse_translation(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .context("Translation response has no segments")?;

    if segments.is_empty() {
        anyhow::bail!("Empty translation response");
    }

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;
    use tokio_test::{assert_err, assert_ok};

    /// Serve `app` on an ephemeral port and return its base URL
    async fn spawn_provider(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn service_for(url: String) -> TranslatorService {
        TranslatorService::new(&TranslationConfig {
            provider_url: url,
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    #[test]
    fn test_parse_translation_joins_chunks() {
        let body = json!([
            [["Hola. ", "Hello. ", null, null, 10], ["Adiós", "Goodbye", null, null, 10]],
            null,
            "en"
        ]);
        assert_eq!(parse_translation(&body).unwrap(), "Hola. Adiós");
    }

    #[test]
    fn test_parse_translation_rejects_malformed() {
        assert_err!(parse_translation(&json!({"error": "nope"})));
        assert_err!(parse_translation(&json!([null, null, "en"])));
        assert_err!(parse_translation(&json!([[], null, "en"])));
    }

    #[tokio::test]
    async fn test_translate_sends_auto_source() {
        let app = Router::new().route(
            TRANSLATE_PATH,
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("sl").map(String::as_str), Some("auto"));
                let tl = params.get("tl").cloned().unwrap_or_default();
                let q = params.get("q").cloned().unwrap_or_default();
                Json(json!([[[format!("[{}] {}", tl, q), q, null, null, 10]], null, "en"]))
            }),
        );
        let url = spawn_provider(app).await;

        let translated = assert_ok!(service_for(url).translate("Hello & welcome", "es").await);
        assert_eq!(translated, "[es] Hello & welcome");
    }

    #[tokio::test]
    async fn test_translate_provider_error() {
        let app = Router::new().route(
            TRANSLATE_PATH,
            get(|| async { (StatusCode::BAD_REQUEST, "bad target language") }),
        );
        let url = spawn_provider(app).await;

        let err = assert_err!(service_for(url).translate("Hello", "zz").await);
        assert!(err.to_string().contains("400"));
    }

    #[tokio::test]
    async fn test_translate_unreachable_provider() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        assert_err!(service_for(format!("http://{}", addr)).translate("Hello", "es").await);
    }
}
