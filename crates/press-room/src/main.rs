mod config;
mod error;
mod markup;
mod params;
mod server;
mod views;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use press_common::contentful::ContentfulClient;

use config::Config;
use error::AppError;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting press-room");

    let config = Config::from_env()?;
    info!(
        listen_addr = %config.listen_addr,
        max_age_secs = config.max_age_secs,
        base_url = %config.contentful.base_url,
        environment = %config.contentful.environment,
        "configured"
    );
    if !config.contentful.has_credentials() {
        warn!("Contentful credentials are not set; pages will show a configuration error");
    }

    run(config).await.inspect_err(|e| {
        tracing::error!(error = %e, "press-room error");
    })?;
    info!("press-room shut down");
    Ok(())
}

async fn run(config: Config) -> Result<(), AppError> {
    let content = Arc::new(ContentfulClient::new(config.contentful)?);
    let app = server::router(AppState {
        content,
        max_age_secs: config.max_age_secs,
    });

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "listening");
    server::serve(listener, app, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
