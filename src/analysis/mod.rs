//! Text analysis core.
//!
//! Turns arbitrary user text into discrete animation parameters:
//! - a provider adapter builds the prompt and parses the loosely
//!   structured reply,
//! - a pure mapper converts the energy level to motion parameters,
//! - a pipeline sequences the two with fallback and exactly-once logging.

mod analyzer;
mod mapper;
mod models;
mod observer;
mod parser;
mod pipeline;
mod prompt;

pub use analyzer::{AnalysisError, AnalyzedText, TextAnalyzer};
pub use mapper::{map_energy_to_parameters, parameters_for_analysis, MotionParams};
pub use models::{
    AnalyzeRequest, AnimationParams, AnimationType, GradientType, Mood, TextAnalysis,
};
pub use observer::{PipelineObserver, PipelineStage, TracingObserver};
pub use parser::{parse_analysis, ReplyParseError};
pub use pipeline::{AnalysisPipeline, PipelineError};
pub use prompt::analysis_prompt;
