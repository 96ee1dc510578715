//! Data access for the site: connection settings, pool lifecycle,
//! migrations, row models, and repositories.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod models;
pub mod repositories;

pub use config::DatabaseSettings;

pub type DbPool = sqlx::PgPool;

/// Create a bounded connection pool from resolved settings.
///
/// Requests wait for a free connection up to the configured acquire timeout.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(settings.connect_options()?)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
