//! Generative text provider trait definition.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Options for a generation request.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative).
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_output_tokens: Option<u32>,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_output_tokens: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Errors that can occur when interacting with a generative provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Request timeout")]
    Timeout,
}

/// Trait for generative text providers.
///
/// Implementations of this trait can connect to different backends while
/// providing a unified interface, so the analysis pipeline never needs to
/// know which vendor is behind a completion.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Get the provider's name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Get the model being used.
    fn model(&self) -> &str;

    /// Generate a free-form text completion for a single prompt.
    ///
    /// # Arguments
    /// * `prompt` - The full prompt text.
    /// * `options` - Generation options (temperature, timeout, etc.).
    ///
    /// # Returns
    /// The completion text, with whatever formatting the model chose.
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ProviderError>;
}
