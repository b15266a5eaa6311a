//! HTTP server initialization and runtime setup.
//!
//! Builds the stores, spawns the session sweeper and runs the Axum server.

use crate::config::Config;
use crate::domain::session_sweeper::run_session_sweeper;
use crate::infrastructure::catalog::StaticStatsRepository;
use crate::infrastructure::session::InMemorySessionStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory session store
/// - Demo statistics catalogue
/// - Background session sweeper
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The demo catalogue fails to load
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let sessions = Arc::new(InMemorySessionStore::new(config.max_sessions));
    let stats_repository = Arc::new(
        StaticStatsRepository::seeded().context("Failed to load demo statistics")?,
    );
    tracing::info!("Loaded {} demo statistics records", stats_repository.len());

    let sweeper = tokio::spawn(run_session_sweeper(
        sessions.clone(),
        config.session_sweep_interval(),
        config.session_idle_timeout(),
    ));
    tracing::info!("Session sweeper started");

    let state = AppState::new(&config, sessions, stats_repository);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    sweeper.abort();
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
