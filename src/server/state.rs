use axum::extract::FromRef;

use crate::analysis::AnalysisPipeline;
use crate::request_log::RequestLogStore;
use std::sync::Arc;

use super::ServerConfig;

pub type GuardedPipeline = Arc<AnalysisPipeline>;
pub type GuardedRequestLog = Arc<dyn RequestLogStore>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub pipeline: GuardedPipeline,
    pub request_log: GuardedRequestLog,
}

impl FromRef<ServerState> for GuardedPipeline {
    fn from_ref(input: &ServerState) -> Self {
        input.pipeline.clone()
    }
}

impl FromRef<ServerState> for GuardedRequestLog {
    fn from_ref(input: &ServerState) -> Self {
        input.request_log.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
