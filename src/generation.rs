use axum::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::config::GenerationConfig;

/// Returned in place of generated text when the upstream payload does not
/// carry the expected candidate structure. The call itself still succeeds.
pub const FORMAT_ERROR_TEXT: &str =
    "The generation service returned a response in an unexpected format.";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation service rejected the request: {0}")]
    Upstream(String),
    #[error("generation model not found: {0}")]
    ModelNotFound(String),
}

#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Client for the Gemini `generateContent` endpoint. One request/response
/// call per generation, no streaming, no retries.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(cfg: &GenerationConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            api_key: cfg.api_key.clone(),
        }
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            if is_model_not_found(&detail) {
                return Err(GenerationError::ModelNotFound(detail));
            }
            return Err(GenerationError::Upstream(format!("{status}: {detail}")));
        }

        let payload: Value = response.json().await?;
        let text = extract_text(&payload);
        debug!(model = %self.model, chars = text.len(), "generation response received");
        Ok(text)
    }
}

/// Pull the generated text out of a `generateContent` payload. A payload
/// without the candidate structure degrades to [`FORMAT_ERROR_TEXT`] instead
/// of failing the whole call.
pub(crate) fn extract_text(payload: &Value) -> String {
    payload["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(|s| s.to_string())
        .unwrap_or_else(|| FORMAT_ERROR_TEXT.to_string())
}

/// Upstream rejections that name a missing model get their own error so an
/// operator can tell a bad `GEMINI_MODEL` apart from a transient failure.
pub(crate) fn is_model_not_found(detail: &str) -> bool {
    let lower = detail.to_lowercase();
    lower.contains("model") && lower.contains("not found")
}
