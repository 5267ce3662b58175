//! Google Gemini provider implementation.

use super::provider::{GenerationOptions, GenerativeProvider, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Name of the environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini provider.
///
/// Connects to the Gemini REST API and uses its `generateContent`
/// endpoint for completions.
#[derive(Debug)]
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// Fails with [`ProviderError::Configuration`] when the API key is
    /// empty, so a misconfigured deployment dies at startup instead of
    /// failing on the first request.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, ProviderError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ProviderError::Configuration(
                "Gemini API key is empty".to_string(),
            ));
        }
        Ok(Self {
            client: Client::new(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: model.into(),
            api_key,
        })
    }

    /// Create a provider from the `GEMINI_API_KEY` environment variable.
    pub fn from_env(model: impl Into<String>) -> Result<Self, ProviderError> {
        let api_key = std::env::var(GEMINI_API_KEY_ENV).map_err(|_| {
            ProviderError::Configuration(format!(
                "{} environment variable is not set",
                GEMINI_API_KEY_ENV
            ))
        })?;
        Self::new(api_key, model)
    }

    /// Override the API base URL. Intended for tests and proxies.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request = GenerateContentRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(options.temperature),
                max_output_tokens: options.max_output_tokens,
            }),
        };

        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending generation request to Gemini"
        );

        let response = self
            .client
            .post(&url)
            // The key must never appear in the URL.
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .timeout(options.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let gemini_response: GenerateContentResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse Gemini response: {}", e))
        })?;

        let text = gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                ProviderError::InvalidResponse("Gemini response contained no candidates".to_string())
            })?;

        debug!(completion_len = text.len(), "Received Gemini completion");

        Ok(text)
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}
