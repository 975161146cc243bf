use cloudom_server::{AppState, ServerConfig, run_server, telemetry::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::from_env();
    let state = AppState::from_env();

    run_server(config, state).await
}
