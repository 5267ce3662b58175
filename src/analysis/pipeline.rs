//! Request orchestration: provider call, mapping, fallback, logging.

use super::analyzer::TextAnalyzer;
use super::mapper::parameters_for_analysis;
use super::models::{AnalyzeRequest, AnimationParams};
use super::observer::{PipelineObserver, PipelineStage, TracingObserver};
use crate::request_log::{LogRecord, RequestLogStore, FALLBACK_RAW_MARKER};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// The only error the HTTP caller ever sees; every provider or parse
/// problem degrades to the fallback response instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to record request outcome: {0}")]
    Logging(String),
}

/// Sequences one analysis request end to end.
///
/// States move `Received -> (ProviderRequested | SkippedProvider) ->
/// (Mapped | Fallback) -> Logged -> Responded`, with one observer event
/// per transition and exactly one log record per request.
pub struct AnalysisPipeline {
    analyzer: TextAnalyzer,
    request_log: Arc<dyn RequestLogStore>,
    observer: Arc<dyn PipelineObserver>,
}

impl AnalysisPipeline {
    pub fn new(analyzer: TextAnalyzer, request_log: Arc<dyn RequestLogStore>) -> Self {
        Self {
            analyzer,
            request_log,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the default tracing observer.
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Run one request through provider, mapper and log.
    pub async fn run(&self, request: &AnalyzeRequest) -> Result<AnimationParams, PipelineError> {
        self.observer.stage_changed(PipelineStage::Received);
        debug!(
            text_len = request.text.len(),
            use_provider = request.use_gemini,
            "Analysis request received"
        );

        let mapped = if request.use_gemini && !request.text.trim().is_empty() {
            self.observer.stage_changed(PipelineStage::ProviderRequested);
            match self.analyzer.analyze(&request.text).await {
                Ok(analyzed) => Some((parameters_for_analysis(&analyzed.analysis), analyzed.raw)),
                Err(e) => {
                    warn!(error = %e, "Analysis attempt failed, using fallback");
                    None
                }
            }
        } else {
            self.observer.stage_changed(PipelineStage::SkippedProvider);
            None
        };

        let (response, raw_provider_text) = match mapped {
            Some((params, raw)) => {
                self.observer.stage_changed(PipelineStage::Mapped);
                (params, raw)
            }
            None => {
                self.observer.stage_changed(PipelineStage::Fallback);
                (
                    AnimationParams::fallback(),
                    FALLBACK_RAW_MARKER.to_string(),
                )
            }
        };

        let record = LogRecord::success(request, &response, Some(raw_provider_text));
        if let Err(e) = self.request_log.append(&record) {
            // Terminal side effect: an unrecorded request must not
            // report success.
            let message = format!("{:#}", e);
            let failure = LogRecord::failure(&request.text, &message);
            if let Err(e2) = self.request_log.append(&failure) {
                warn!(error = %format!("{:#}", e2), "Failed to write failure record");
            }
            return Err(PipelineError::Logging(message));
        }
        self.observer.stage_changed(PipelineStage::Logged);

        self.observer.stage_changed(PipelineStage::Responded);
        Ok(response)
    }
}
