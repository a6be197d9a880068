//! Function Calling API — maps free-text queries to function calls.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use fc_api::config::ApiConfig;
use fc_api::routes;
use fc_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fc-api starting");

    let config = match std::env::var("FC_API_CONFIG") {
        Ok(path) => {
            tracing::info!(path = %path, "loading config file");
            ApiConfig::from_file(&path)?.with_env_overrides()?
        }
        Err(_) => ApiConfig::from_env()?,
    };

    let addr = config.bind_addr();
    let app = routes::build_router(AppState::new(config));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
