//! CourseHub Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use coursehub_core::config::AppConfig;
use coursehub_core::error::AppError;
use coursehub_database::repositories::{
    NotificationCounter, NotificationRepository, VideoRepository, VideoStore,
};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `COURSEHUB_ENV` overlay and environment
/// variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("COURSEHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.server.environment,
        "Starting CourseHub"
    );

    // ── Step 1: Data directories ─────────────────────────────────
    tokio::fs::create_dir_all(&config.storage.local.root_path)
        .await
        .map_err(|e| {
            AppError::internal(format!(
                "Failed to create dir '{}': {e}",
                config.storage.local.root_path
            ))
        })?;

    // ── Step 2: Database connection + migrations ─────────────────
    let db = coursehub_database::DatabasePool::connect(&config.database).await?;
    coursehub_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 3: Storage ──────────────────────────────────────────
    let storage =
        Arc::new(coursehub_storage::StorageManager::from_config(&config.storage).await?);
    tracing::info!(root = %config.storage.local.root_path, "Video storage initialized");

    // ── Step 4: Repositories ─────────────────────────────────────
    let videos: Arc<dyn VideoStore> = Arc::new(VideoRepository::new(db.pool().clone()));
    let counter: Arc<dyn NotificationCounter> =
        Arc::new(NotificationRepository::new(db.pool().clone()));

    // ── Step 5: Application ──────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = coursehub_api::AppState::new(config, videos, counter, storage);
    let app = coursehub_api::build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "CourseHub server listening");

    // ── Step 6: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if tokio::time::timeout(grace, db.close()).await.is_err() {
        tracing::warn!(
            grace_seconds = grace.as_secs(),
            "Database pool did not close in time"
        );
    }

    tracing::info!("CourseHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
