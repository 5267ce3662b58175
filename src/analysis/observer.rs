//! Pipeline stage observability hook.

use tracing::debug;

/// Stage of the analysis pipeline, reported in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Request accepted.
    Received,
    /// Provider call issued.
    ProviderRequested,
    /// Provider skipped (flag off or empty text).
    SkippedProvider,
    /// Provider reply validated and mapped.
    Mapped,
    /// Fallback constant substituted.
    Fallback,
    /// Outcome appended to the request log.
    Logged,
    /// Response handed back to the caller.
    Responded,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Received => "received",
            PipelineStage::ProviderRequested => "provider_requested",
            PipelineStage::SkippedProvider => "skipped_provider",
            PipelineStage::Mapped => "mapped",
            PipelineStage::Fallback => "fallback",
            PipelineStage::Logged => "logged",
            PipelineStage::Responded => "responded",
        }
    }
}

/// Hook invoked by the pipeline at every stage transition.
///
/// Implementations run inline on the request path and must not block.
pub trait PipelineObserver: Send + Sync {
    fn stage_changed(&self, stage: PipelineStage);
}

/// Default observer emitting one tracing event per transition.
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn stage_changed(&self, stage: PipelineStage) {
        debug!(stage = stage.as_str(), "Analysis pipeline transition");
    }
}
