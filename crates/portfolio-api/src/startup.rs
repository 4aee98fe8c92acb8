//! Startup phase: open the store, prepare and seed it, then serve
//!
//! The order is fixed. [`initialize`] runs to completion before
//! [`serve`] binds a listener, so no request ever sees a partly seeded
//! store.

use axum::Router;
use portfolio_core::{SeedData, SeedLoadError};
use portfolio_storage::{
    MemoryStore, PgStore, SeedOutcome, SharedStore, StoreResult,
};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::StoreSettings;
use crate::handler::AppState;

/// Connect to the configured backend
pub async fn open_store(settings: &StoreSettings) -> StoreResult<SharedStore> {
    let store: SharedStore = match settings {
        StoreSettings::Postgres(config) => Arc::new(PgStore::connect(config).await?),
        StoreSettings::Memory => Arc::new(MemoryStore::new()),
    };
    Ok(store)
}

/// Built-in dataset, or the one in `path` when given
pub fn load_seed(path: Option<&Path>) -> Result<SeedData, SeedLoadError> {
    match path {
        Some(path) => {
            let seed = SeedData::from_path(path)?;
            info!(path = %path.display(), "Loaded seed file");
            Ok(seed)
        }
        None => Ok(SeedData::default()),
    }
}

/// Create tables and seed an empty store.
///
/// Returns the seeding outcome alongside the state the router is built
/// from. Any failure aborts startup; nothing is retried.
pub async fn initialize(
    store: SharedStore,
    seed: &SeedData,
) -> StoreResult<(AppState, SeedOutcome)> {
    store.prepare_schema().await?;

    let outcome = store.seed_if_empty(seed).await?;
    match &outcome {
        SeedOutcome::Seeded(counts) => info!(
            backend = store.backend(),
            experience = counts.experience,
            education = counts.education,
            skills = counts.skills,
            projects = counts.projects,
            "Seeded empty store"
        ),
        SeedOutcome::AlreadySeeded => info!(
            backend = store.backend(),
            "Profile present, skipping seed"
        ),
    }

    Ok((AppState::new(store), outcome))
}

/// Serve `app` on `listener` until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, version = crate::VERSION, "Portfolio API listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received");
}
