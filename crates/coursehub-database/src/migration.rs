//! Embedded schema migrations.

use sqlx::PgPool;
use tracing::info;

use coursehub_core::error::{AppError, ErrorKind};

/// Apply any migrations under `migrations/` that the database has not seen.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let migrator = sqlx::migrate!("../../migrations");
    info!(
        available = migrator.iter().count(),
        "Applying CourseHub schema migrations"
    );

    migrator.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Schema is up to date");
    Ok(())
}
