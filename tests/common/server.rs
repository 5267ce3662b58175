//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own request log file and
//! a scripted stand-in for the generative provider.

use super::constants::*;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use swrlr_server::analysis::{AnalysisPipeline, TextAnalyzer};
use swrlr_server::provider::{GenerationOptions, GenerativeProvider, ProviderError};
use swrlr_server::request_log::{FileRequestLog, LogRecord, RequestLogStore};
use swrlr_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// What the scripted provider does for every request
pub enum ProviderScript {
    /// Always answer with this completion text
    Reply(&'static str),
    /// Always fail as if the upstream service were unreachable
    Failure,
}

/// Scripted provider for testing - no network involved
struct ScriptedProvider {
    script: ProviderScript,
}

#[async_trait]
impl GenerativeProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn generate(
        &self,
        _prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, ProviderError> {
        match &self.script {
            ProviderScript::Reply(text) => Ok(text.to_string()),
            ProviderScript::Failure => Err(ProviderError::Connection("scripted outage".to_string())),
        }
    }
}

/// Request log store that rejects every operation, for the error paths
struct FailingLog;

impl RequestLogStore for FailingLog {
    fn append(&self, _record: &LogRecord) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("log file unavailable"))
    }

    fn recent(&self, _count: usize) -> anyhow::Result<Vec<LogRecord>> {
        Err(anyhow::anyhow!("log file unavailable"))
    }

    fn clear(&self) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("log file unavailable"))
    }
}

/// Test server instance with an isolated request log
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Path of the NDJSON request log backing this server, for direct
    /// file inspection in tests
    pub log_path: PathBuf,

    // Private fields - keep resources alive until drop
    _temp_dir: Option<TempDir>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server whose provider always answers with [`WAVE_REPLY`]
    ///
    /// This function:
    /// 1. Creates a temporary request log file
    /// 2. Wires a scripted provider into the analysis pipeline
    /// 3. Binds to a random port (127.0.0.1:0)
    /// 4. Spawns the server in a background task
    /// 5. Waits for the server to be ready
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Log file creation fails
    /// - Port binding fails
    /// - Server fails to start
    /// - Server doesn't become ready within timeout
    pub async fn spawn() -> Self {
        Self::spawn_with_script(ProviderScript::Reply(WAVE_REPLY)).await
    }

    /// Spawns a server with the given provider behavior
    pub async fn spawn_with_script(script: ProviderScript) -> Self {
        // Create temporary test resources
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_path = temp_dir.path().join("api_requests.log");
        let request_log: Arc<dyn RequestLogStore> =
            Arc::new(FileRequestLog::new(&log_path).expect("Failed to open request log"));

        Self::spawn_inner(script, request_log, log_path, Some(temp_dir)).await
    }

    /// Spawns a server whose request log rejects every operation
    ///
    /// Use this for testing the 500 responses of the analyze and logs
    /// endpoints.
    pub async fn spawn_with_failing_log() -> Self {
        Self::spawn_inner(
            ProviderScript::Reply(WAVE_REPLY),
            Arc::new(FailingLog),
            PathBuf::new(),
            None,
        )
        .await
    }

    async fn spawn_inner(
        script: ProviderScript,
        request_log: Arc<dyn RequestLogStore>,
        log_path: PathBuf,
        temp_dir: Option<TempDir>,
    ) -> Self {
        let analyzer = TextAnalyzer::new(Arc::new(ScriptedProvider { script }));
        let pipeline = Arc::new(AnalysisPipeline::new(analyzer, request_log.clone()));

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        // Build the app
        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            ..Default::default()
        };

        let app = make_app(config, pipeline, request_log).expect("Failed to build app");

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        // Wait for server to be ready
        let server = Self {
            base_url,
            port,
            log_path,
            _temp_dir: temp_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => {
                    // Server is ready
                    return;
                }
                _ => {
                    // Server not ready yet, wait and retry
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Send shutdown signal
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
        // TempDir will be cleaned up automatically
    }
}
