//! Swrlr Analysis Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod analysis;
pub mod config;
pub mod provider;
pub mod request_log;
pub mod server;

// Re-export commonly used types for convenience
pub use analysis::{AnalysisPipeline, AnalyzeRequest, AnimationParams, TextAnalyzer};
pub use provider::{GeminiProvider, GenerativeProvider};
pub use request_log::{FileRequestLog, LogRecord, RequestLogStore};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
