use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hosted model behind the HF inference router.
pub const ZEPHYR_MODEL_URL: &str =
    "https://router.huggingface.co/models/HuggingFaceH4/zephyr-7b-beta";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("model request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model endpoint returned {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("model returned no generations")]
    EmptyResponse,
}

/// Text-generation client for the hosted advice model.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    model_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Serialize)]
struct GenerateParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

#[derive(Deserialize)]
struct Generation {
    generated_text: String,
}

impl LlmClient {
    pub fn new(api_key: impl Into<String>) -> LlmClient {
        LlmClient::with_model_url(api_key, ZEPHYR_MODEL_URL)
    }

    /// Points the client at an arbitrary endpoint; tests use a local mock.
    pub fn with_model_url(api_key: impl Into<String>, model_url: impl Into<String>) -> LlmClient {
        LlmClient {
            http: reqwest::Client::new(),
            model_url: model_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Runs one completion and returns the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let body = GenerateRequest {
            inputs: prompt,
            parameters: GenerateParameters {
                max_new_tokens: 1000,
                temperature: 0.3,
                return_full_text: false,
            },
        };

        let response = self
            .http
            .post(&self.model_url)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let generations: Vec<Generation> = response.json().await?;
        let first = generations.into_iter().next().ok_or(LlmError::EmptyResponse)?;
        Ok(first.generated_text)
    }
}
