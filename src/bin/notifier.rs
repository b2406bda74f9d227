use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use battery_monitor::{
    config::Config,
    db,
    notifier::{NotifierService, RunOutcome, NO_READINGS_EXIT_CODE},
    sms::SmsClient,
};

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

    let sms = SmsClient::new(&config);
    let notifier = NotifierService::new(pool, sms, config.recipients);

    match notifier.run_once().await? {
        RunOutcome::NoReadings => {
            warn!("No battery readings recorded yet; nothing to report");
            std::process::exit(NO_READINGS_EXIT_CODE);
        }
        outcome => info!(?outcome, "Notifier run complete"),
    }

    Ok(())
}
