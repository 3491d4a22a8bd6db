//! Application builder and server lifecycle.

use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use vidhub_core::config::AppConfig;
use vidhub_core::error::AppError;
use vidhub_database::DatabasePool;
use vidhub_database::migration::run_migrations;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the VidHub server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting VidHub server...");

    // ── Step 1: Database ─────────────────────────────────────────
    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;

    // ── Step 2: Media root ───────────────────────────────────────
    if tokio::fs::metadata(&config.media.root).await.is_err() {
        tracing::warn!(root = %config.media.root, "Media root does not exist; video links will 404");
    }

    // ── Step 3: State and bootstrap admin ────────────────────────
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let cleanup_every = Duration::from_secs(config.session.cleanup_interval_minutes.max(1) * 60);
    let bind_address = config.server.bind_address();

    let state = AppState::new(config, db.clone());
    state.bootstrap_service.ensure_admin().await?;

    // ── Step 4: Background session cleanup ───────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let cleanup_task = spawn_session_cleanup(&state, cleanup_every, shutdown_rx);

    // ── Step 5: HTTP server ──────────────────────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_address}: {e}")))?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "VidHub server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 6: Drain ────────────────────────────────────────────
    if tokio::time::timeout(grace, cleanup_task).await.is_err() {
        tracing::warn!("Session cleanup task did not stop within the grace period");
    }
    db.close().await;

    tracing::info!("VidHub server stopped");
    Ok(())
}

/// Periodically purge expired and idle sessions until shutdown is signalled.
fn spawn_session_cleanup(
    state: &AppState,
    every: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let cleanup = state.session_cleanup.clone();

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = cleanup.run_cleanup().await {
                        tracing::error!(error = %e, "Session cleanup failed");
                    }
                }
                _ = shutdown.changed() => break,
            }
        }

        tracing::debug!("Session cleanup task stopped");
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
}
