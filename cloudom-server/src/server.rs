use std::{fmt, sync::Arc};

use axum::{
    Json, Router,
    response::IntoResponse,
    routing::{any, get},
};
use cloudom_model::{ChatModel, DeepSeekClient};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::chat::chat_endpoint;
use crate::config::ServerConfig;

pub const SERVICE_NAME: &str = "cloudom-support";

/// Shared handler state.
///
/// `model` is `None` when no API key was configured; chat requests then
/// fail with 500 while `/health` keeps answering.
#[derive(Clone, Default)]
pub struct AppState {
    pub model: Option<Arc<dyn ChatModel>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").field("model", &self.model.as_ref().map(|m| m.name())).finish()
    }
}

impl AppState {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model: Some(model) }
    }

    /// Build state from the `DEEPSEEK_*` variables.
    pub fn from_env() -> Self {
        match DeepSeekClient::from_env() {
            Ok(client) => {
                info!(
                    model = %client.config().model,
                    base_url = %client.config().base_url,
                    "DeepSeek client configured"
                );
                Self::new(Arc::new(client))
            }
            Err(e) => {
                warn!(error = %e, "chat completions disabled");
                Self::default()
            }
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/chat", any(chat_endpoint))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run_server(config: ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = app_router(state);
    let addr = config.socket_addr()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("{SERVICE_NAME} listening on http://{addr}");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": SERVICE_NAME}))
}
