use tracing_subscriber::EnvFilter;

use faktur_server::config::ServerConfig;
use faktur_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env();
    let addr = format!("{}:{}", config.host, config.port);

    let state = AppState::new(config);
    let app = faktur_server::app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "faktur-server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
