use anyhow::Context;
use listing_writer::{routes, AppState, Config};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listing_writer=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🏠 Listing Writer - property description generator");

    let config = Config::from_env()?;
    for name in config.missing_credentials() {
        warn!("{} is not set; requests that need it will fail", name);
    }
    if config.debug {
        warn!("Debug mode is on: error responses include provider details");
    }

    let state = AppState::from_config(&config)?;
    let app = routes(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on http://{}/prompt-generator", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
