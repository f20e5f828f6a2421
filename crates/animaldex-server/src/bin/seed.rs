//! Seed an AnimalDex database with the reference catalog
//!
//! Runs pending migrations first, then inserts the fixture rows unless the
//! database already holds animals.
//!
//! Usage:
//!   cargo run --bin animaldex-seed
//!   cargo run --bin animaldex-seed -- --database-url postgres://localhost/animaldex

use animaldex_common::logging::{init_logging, LogConfig};
use animaldex_server::{config::Config, db, seed};
use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "animaldex-seed", version, about = "Load the AnimalDex reference data")]
struct Args {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Apply migrations only, without inserting fixture rows
    #[arg(long)]
    migrate_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let log_config = LogConfig::builder()
        .log_file_prefix("animaldex-seed")
        .filter_directives("animaldex_server=info,sqlx=warn")
        .build()
        .merge_env()?;
    let _log_guard = init_logging(&log_config)?;

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(url) = args.database_url {
        config.database.url = url;
    }
    config.database.min_connections = 0;
    config.database.max_connections = 2;

    let pool = db::create_pool(&config.database)
        .await
        .context("Failed to connect to the database")?;
    db::run_migrations(&pool).await?;

    if args.migrate_only {
        tracing::info!("Migrations applied, skipping fixture rows");
        return Ok(());
    }

    let outcome = seed::seed_database(&pool).await?;
    tracing::info!(?outcome, "Seeding finished");

    pool.close().await;
    Ok(())
}
