use core_config::database::DatabaseConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::{info, log::LevelFilter, warn};

const CONNECT_ATTEMPTS: u32 = 5;
const INITIAL_BACKOFF: Duration = Duration::from_millis(200);
const MAX_BACKOFF: Duration = Duration::from_secs(5);

fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug); // SeaORM requires log::LevelFilter
    opt
}

/// Connect to PostgreSQL, retrying with exponential backoff so the service
/// can start alongside its database.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let options = connect_options(config);
    let mut delay = INITIAL_BACKOFF;
    let mut attempt = 1;

    loop {
        match Database::connect(options.clone()).await {
            Ok(db) => {
                info!(attempt, "Connected to PostgreSQL");
                return Ok(db);
            }
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                warn!(attempt, ?delay, "PostgreSQL connection failed: {}", e);
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(MAX_BACKOFF);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Apply pending migrations when `RUN_MIGRATIONS` is enabled.
pub async fn migrate(db: &DatabaseConnection, config: &DatabaseConfig) -> Result<(), DbErr> {
    if !config.run_migrations {
        info!("Skipping migrations (RUN_MIGRATIONS=false)");
        return Ok(());
    }

    Migrator::up(db, None).await?;
    info!("Database migrations applied");
    Ok(())
}
