//! Provider-backed text analysis adapter.

use super::models::TextAnalysis;
use super::parser::parse_analysis;
use super::prompt::analysis_prompt;
use crate::provider::{GenerationOptions, GenerativeProvider, ProviderError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from a single analysis attempt.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider answered but the reply was unusable. The raw text is
    /// kept for diagnostics.
    #[error("Unparseable reply: {reason}")]
    Parse { reason: String, raw: String },
}

/// A successfully parsed analysis together with the verbatim completion.
#[derive(Debug, Clone)]
pub struct AnalyzedText {
    pub analysis: TextAnalysis,
    pub raw: String,
}

/// Adapter between the pipeline and the generative provider: builds the
/// prompt, performs the single provider call, parses the reply.
pub struct TextAnalyzer {
    provider: Arc<dyn GenerativeProvider>,
    options: GenerationOptions,
}

impl TextAnalyzer {
    pub fn new(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self {
            provider,
            options: GenerationOptions::default(),
        }
    }

    /// Set generation options.
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Analyze a piece of text. A single provider attempt, no retries.
    pub async fn analyze(&self, text: &str) -> Result<AnalyzedText, AnalysisError> {
        let prompt = analysis_prompt(text);

        debug!(
            provider = self.provider.name(),
            model = self.provider.model(),
            text_len = text.len(),
            "Requesting text analysis"
        );

        let raw = self.provider.generate(&prompt, &self.options).await?;

        match parse_analysis(&raw) {
            Ok(analysis) => {
                debug!(
                    color_count = analysis.dominant_colors.len(),
                    energy_level = analysis.energy_level,
                    has_svg_path = analysis.svg_path.is_some(),
                    "Parsed provider analysis"
                );
                Ok(AnalyzedText { analysis, raw })
            }
            Err(e) => {
                warn!(
                    reason = %e,
                    raw_preview = %preview(&raw, 200),
                    "Failed to parse provider reply"
                );
                Err(AnalysisError::Parse {
                    reason: e.to_string(),
                    raw,
                })
            }
        }
    }
}

fn preview(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}
