//! Request log records

use crate::analysis::{AnalyzeRequest, AnimationParams};
use serde::{Deserialize, Serialize};

/// Marker stored in place of the raw provider text when the fallback
/// response was substituted.
pub const FALLBACK_RAW_MARKER: &str = "FALLBACK_USED";

/// Request summary embedded in every log record.
///
/// `text_length` counts characters, not bytes. `use_provider` is absent
/// on failure records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedRequest {
    pub text: String,
    pub text_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_provider: Option<bool>,
}

/// One line of the NDJSON request log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// RFC 3339 timestamp of when the record was written.
    pub timestamp: String,
    pub request: LoggedRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<AnimationParams>,
    /// Verbatim provider completion, or [`FALLBACK_RAW_MARKER`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_provider_text: Option<String>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogRecord {
    /// Record for a request that completed with a response, whether mapped
    /// or fallback.
    pub fn success(
        request: &AnalyzeRequest,
        response: &AnimationParams,
        raw_provider_text: Option<String>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            request: LoggedRequest {
                text: request.text.clone(),
                text_length: request.text.chars().count(),
                use_provider: Some(request.use_gemini),
            },
            response: Some(response.clone()),
            raw_provider_text,
            success: true,
            error: None,
        }
    }

    /// Record for a request that died with an internal error.
    pub fn failure(text: &str, error: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            request: LoggedRequest {
                text: text.to_string(),
                text_length: text.chars().count(),
                use_provider: None,
            },
            response: None,
            raw_provider_text: None,
            success: false,
            error: Some(error.into()),
        }
    }
}
