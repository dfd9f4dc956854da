use anyhow::Context;
use tracing::info;

use config_viewer::{
    config::AppConfig, http::create_app, service::F5ConfigSource, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let f5_source = F5ConfigSource::from_path(config.f5.config_file.clone());

    info!("Starting Operation Engine UI server");
    info!("Configuration loaded:");
    info!("  Server: {}:{}", config.server.host, config.server.port);
    info!("  Log level: {}", config.server.log_level);
    info!("  F5 configuration: {}", f5_source.describe());
    info!("  Static files: {}", config.statics.dir.display());
    if !config.statics.dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html under {}; run `trunk build` in crates/config-viewer-front first",
            config.statics.dir.display()
        );
    }

    let app = create_app(AppState::new(f5_source, config.statics.dir.clone()));

    let addr = config.bind_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
