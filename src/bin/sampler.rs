use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use battery_monitor::{config::Config, db, sampler::SamplerService, upower::UpowerClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env (ignore error if file absent — env vars may be set externally)
    let _ = dotenvy::dotenv();

    // Initialise tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Load config
    let config = Config::from_env()?;

    // Open the shared database file and run migrations
    let pool = db::connect(&config.database_file()).await?;
    db::run_migrations(&pool).await?;
    info!(db = %config.database_file().display(), "Database ready");

    let sampler = SamplerService::new(pool, UpowerClient::new());
    sampler.run_once().await?;

    Ok(())
}
