//! Connection pool construction, migrations and liveness checks

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use thiserror::Error;

use crate::config::DatabaseConfig;

/// Database operation errors with contextual information
#[derive(Error, Debug)]
pub enum DbError {
    /// SQL query or connection error
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("Database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Database configuration is invalid or missing
    #[error("Database configuration error: {0}. Check DATABASE_URL and connection settings.")]
    Config(String),
}

pub type DbResult<T> = Result<T, DbError>;

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
}

/// Connect eagerly, failing fast when the database is unreachable
pub async fn create_pool(config: &DatabaseConfig) -> DbResult<PgPool> {
    if config.url.is_empty() {
        return Err(DbError::Config("DATABASE_URL is empty".to_string()));
    }

    let pool = pool_options(config).connect(&config.url).await?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        max_lifetime_secs = config.max_lifetime_secs,
        "Database connection pool created"
    );

    Ok(pool)
}

/// Build a pool that opens connections on first use
pub fn create_lazy_pool(config: &DatabaseConfig) -> DbResult<PgPool> {
    Ok(pool_options(config).connect_lazy(&config.url)?)
}

pub async fn run_migrations(pool: &PgPool) -> DbResult<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    tracing::info!("Database migrations completed");
    Ok(())
}

pub async fn health_check(pool: &PgPool) -> DbResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(DbError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_lazy_pool_does_not_connect() {
        let mut config = Config::default().database;
        config.url = "postgresql://127.0.0.1:1/unreachable".to_string();

        let pool = create_lazy_pool(&config).unwrap();
        assert!(!pool.is_closed());
    }

    #[tokio::test]
    async fn test_lazy_pool_rejects_malformed_url() {
        let mut config = Config::default().database;
        config.url = "not a url".to_string();
        assert!(create_lazy_pool(&config).is_err());
    }

    #[tokio::test]
    async fn test_create_pool_rejects_empty_url() {
        let mut config = Config::default().database;
        config.url = String::new();
        assert!(matches!(create_pool(&config).await, Err(DbError::Config(_))));
    }
}
