mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use hashlink_core::Store;
use hashlink_gateway::{App, AppState};
use hashlink_shortener::ShortenerService;
use hashlink_storage::{InMemoryStore, RedisStore, RedisStoreConfig};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    hashlink_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        default_ttl_secs = config.default_ttl_secs,
        "starting gateway"
    );

    match config.storage {
        StorageBackendArg::InMemory => run_server(&config, InMemoryStore::new()).await,
        StorageBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .clone()
                .context("redis url is required when storage backend is redis")?;
            let store = RedisStore::connect(
                RedisStoreConfig::builder()
                    .url(redis_url)
                    .key_prefix(config.redis_key_prefix.clone())
                    .connect_timeout(config.redis_connect_timeout())
                    .response_timeout(config.redis_response_timeout())
                    .build(),
            )
            .await
            .context("failed to connect to redis")?;
            run_server(&config, store).await
        }
    }
}

async fn run_server<S: Store>(config: &CLI, store: S) -> anyhow::Result<()> {
    let service = ShortenerService::new(store).with_default_ttl(config.default_ttl());
    let state = AppState::new(Arc::new(service), config.public_base_url.clone());

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("gateway server failed")?;

    info!("gateway stopped");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
