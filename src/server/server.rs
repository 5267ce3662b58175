use anyhow::{Context, Result};
use std::sync::Arc;

use tracing::{error, info};

use crate::analysis::{AnalysisPipeline, AnalyzeRequest};
use crate::request_log::{LogRecord, RequestLogStore};

use axum::{
    extract::{Query, State},
    http::{HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use super::{log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct StatusMessage {
    message: &'static str,
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

#[derive(Deserialize, Debug)]
struct LogsQuery {
    #[serde(default = "default_logs_count")]
    count: usize,
}

fn default_logs_count() -> usize {
    10
}

#[derive(Serialize)]
struct LogsResponse {
    logs: Vec<LogRecord>,
    count: usize,
}

#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

fn error_response(status: StatusCode, detail: String) -> Response {
    (status, Json(ErrorDetail { detail })).into_response()
}

async fn home() -> impl IntoResponse {
    Json(StatusMessage {
        message: "Swrlr API is running",
    })
}

async fn health() -> impl IntoResponse {
    Json(HealthStatus { status: "healthy" })
}

async fn analyze_text(
    State(pipeline): State<GuardedPipeline>,
    Json(body): Json<AnalyzeRequest>,
) -> Response {
    match pipeline.run(&body).await {
        Ok(params) => Json(params).into_response(),
        Err(err) => {
            error!("Analysis request failed: {}", err);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error analyzing text: {}", err),
            )
        }
    }
}

async fn get_logs(
    State(request_log): State<GuardedRequestLog>,
    Query(query): Query<LogsQuery>,
) -> Response {
    match request_log.recent(query.count) {
        Ok(logs) => {
            let count = logs.len();
            Json(LogsResponse { logs, count }).into_response()
        }
        Err(err) => {
            error!("Failed to read request logs: {:#}", err);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error reading logs: {}", err),
            )
        }
    }
}

async fn clear_logs(State(request_log): State<GuardedRequestLog>) -> Response {
    match request_log.clear() {
        Ok(()) => Json(StatusMessage {
            message: "Logs cleared successfully",
        })
        .into_response(),
        Err(err) => {
            error!("Failed to clear request logs: {:#}", err);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error clearing logs: {}", err),
            )
        }
    }
}

impl ServerState {
    fn new(
        config: ServerConfig,
        pipeline: Arc<AnalysisPipeline>,
        request_log: Arc<dyn RequestLogStore>,
    ) -> ServerState {
        ServerState {
            config,
            pipeline,
            request_log,
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid allowed origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    // Credentialed CORS forbids wildcard headers, so the allowed headers
    // are mirrored from each preflight request instead.
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn make_app(
    config: ServerConfig,
    pipeline: Arc<AnalysisPipeline>,
    request_log: Arc<dyn RequestLogStore>,
) -> Result<Router> {
    let state = ServerState::new(config.clone(), pipeline, request_log);

    let api_routes: Router = Router::new()
        .route("/analyze", post(analyze_text))
        .route("/logs", get(get_logs).delete(clear_logs))
        .with_state(state.clone());

    let app: Router = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .nest("/api", api_routes)
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(
    config: ServerConfig,
    pipeline: Arc<AnalysisPipeline>,
    request_log: Arc<dyn RequestLogStore>,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, pipeline, request_log)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    Ok(axum::serve(listener, app).await?)
}
