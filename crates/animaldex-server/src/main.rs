//! AnimalDex Server - Main entry point

use anyhow::Result;
use animaldex_common::logging::{init_logging, LogConfig};
use tracing::info;

use animaldex_server::{
    api,
    config::Config,
    db,
    seed::{self, SeedOutcome},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("animaldex-server")
        .filter_directives("animaldex_server=debug,tower_http=debug,sqlx=warn")
        .build()
        .merge_env()?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting AnimalDex Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;

    if config.server.seed_on_startup {
        match seed::seed_database(&pool).await? {
            SeedOutcome::Seeded {
                habitats,
                animals,
                conservation_efforts,
            } => info!(habitats, animals, conservation_efforts, "Reference data seeded"),
            SeedOutcome::Skipped { existing_animals } => {
                info!(existing_animals, "Reference data already present")
            },
        }
    }

    api::serve(config, pool).await
}
