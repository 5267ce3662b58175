use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod analysis;
use analysis::{AnalysisPipeline, TextAnalyzer};

mod config;
use config::{AppConfig, CliConfig, FileConfig, DEFAULT_LOG_FILE};

mod provider;
use provider::{GeminiProvider, GenerativeProvider};

mod request_log;
use request_log::FileRequestLog;

mod server;
use server::{run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Values from the file override CLI arguments.
    #[clap(short, long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Path to the request log file (one JSON record per line).
    #[clap(long, default_value = DEFAULT_LOG_FILE, value_parser = parse_path)]
    pub log_file: PathBuf,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Origin allowed to make cross-site requests. Repeat for multiple
    /// origins; defaults to the Swrlr frontend origins when omitted.
    #[clap(long = "allowed-origin")]
    pub allowed_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };

    let cli_config = CliConfig {
        port: cli_args.port,
        log_file: cli_args.log_file,
        logging_level: cli_args.logging_level,
        allowed_origins: cli_args.allowed_origins,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let mut provider = GeminiProvider::from_env(&config.provider.model)
        .context("A valid GEMINI_API_KEY is required to start")?;
    if let Some(base_url) = &config.provider.base_url {
        provider = provider.with_base_url(base_url);
    }
    info!(
        "Using provider {} with model {}",
        provider.name(),
        provider.model()
    );

    info!("Opening request log at {:?}...", config.log_file);
    let request_log = Arc::new(FileRequestLog::new(&config.log_file)?);

    let analyzer =
        TextAnalyzer::new(Arc::new(provider)).with_options(config.provider.generation_options());
    let pipeline = Arc::new(AnalysisPipeline::new(analyzer, request_log.clone()));

    let server_config = ServerConfig {
        requests_logging_level: config.logging_level,
        port: config.port,
        allowed_origins: config.allowed_origins,
    };

    info!("Ready to serve at port {}!", server_config.port);
    run_server(server_config, pipeline, request_log).await
}
