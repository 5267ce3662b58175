mod file_config;

pub use file_config::{FileConfig, ProviderConfig};

use crate::provider::{GenerationOptions, DEFAULT_GEMINI_MODEL};
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

/// Log file used when neither the CLI nor the config file names one.
pub const DEFAULT_LOG_FILE: &str = "api_requests.log";

/// Origins allowed by default: the local dev frontend and the deployed app.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "https://swrlr.vercel.app",
];

pub fn default_allowed_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub log_file: PathBuf,
    pub logging_level: RequestsLoggingLevel,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Core settings
    pub port: u16,
    pub log_file: PathBuf,
    pub logging_level: RequestsLoggingLevel,
    pub allowed_origins: Vec<String>,

    // Provider settings (with defaults)
    pub provider: ProviderSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        // TOML overrides CLI for each field
        let port = file.port.unwrap_or(cli.port);

        let log_file = file
            .log_file
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.log_file.clone());
        if log_file.as_os_str().is_empty() {
            bail!("log_file must not be empty");
        }

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let allowed_origins = match file.allowed_origins {
            Some(origins) => origins,
            None if cli.allowed_origins.is_empty() => default_allowed_origins(),
            None => cli.allowed_origins.clone(),
        };
        if allowed_origins.is_empty() {
            bail!("allowed_origins must not be empty");
        }

        // Provider settings - merge file config with defaults
        let provider_file = file.provider.unwrap_or_default();
        let provider = ProviderSettings {
            model: provider_file
                .model
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: provider_file.base_url,
            timeout_secs: provider_file.timeout_secs.unwrap_or(30),
            temperature: provider_file.temperature.unwrap_or(0.3),
            max_output_tokens: provider_file.max_output_tokens,
        };
        if provider.model.trim().is_empty() {
            bail!("provider model must not be empty");
        }
        if provider.timeout_secs == 0 {
            bail!("provider timeout_secs must be greater than zero");
        }

        Ok(Self {
            port,
            log_file,
            logging_level,
            allowed_origins,
            provider,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub model: String,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_output_tokens: Option<u32>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: None,
            timeout_secs: 30,
            temperature: 0.3,
            max_output_tokens: None,
        }
    }
}

impl ProviderSettings {
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
