use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use counsel::AnthropicClient;
use counsel::schema::MODEL_LABEL;
use counsel_api::{AppConfig, AppState};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // No credential, no server.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    let client = AnthropicClient::new(config.api_key.clone(), config.anthropic_base_url.clone());
    let state = Arc::new(AppState::new(Arc::new(client)));
    let app = counsel_api::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        port = config.port,
        model = MODEL_LABEL,
        cors = "*",
        "{} listening on http://localhost:{}",
        counsel_api::handlers::SERVICE_NAME,
        config.port
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
