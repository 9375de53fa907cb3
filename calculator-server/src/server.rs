use crate::api::routes;
use crate::config::Config;
use anyhow::{Context, Result};
use log::{info, warn};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Binds the configured port and serves requests until Ctrl-C or SIGTERM.
pub async fn run(config: &Config) -> Result<()> {
    let router = routes::router(&config.api_version);
    let address = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("could not bind to {}", address))?;
    info!(
        "{} {} listening on {}, POST /api/{}/calculate",
        config.app_name, config.app_version, address, config.api_version
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server stopped unexpectedly")?;

    info!("{} shut down gracefully", config.app_name);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!("could not listen for Ctrl-C: {}", error);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                warn!("could not listen for SIGTERM: {}", error);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
