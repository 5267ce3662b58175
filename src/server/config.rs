use super::RequestsLoggingLevel;
use crate::config::default_allowed_origins;

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// Origins the browser frontend may call us from.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 8000,
            allowed_origins: default_allowed_origins(),
        }
    }
}
