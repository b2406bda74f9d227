use sqlx::SqlitePool;
use tracing::info;

use crate::{db, error::MonitorError, upower::UpowerClient};

/// One-shot job: interrogate the battery through upower and append one row
/// to the `battery` table.
pub struct SamplerService {
    pool: SqlitePool,
    upower: UpowerClient,
}

impl SamplerService {
    pub fn new(pool: SqlitePool, upower: UpowerClient) -> Self {
        Self { pool, upower }
    }

    /// Take one reading and persist it. Either a complete row is stored or
    /// the run fails; there is no partial insert.
    pub async fn run_once(&self) -> Result<i64, MonitorError> {
        info!("Taking battery reading");

        let report = self.upower.battery_report().await?;
        info!(
            state = %report.state,
            time_remaining = %report.time_remaining,
            percentage = %report.percentage_remaining,
            "Battery interrogated"
        );

        let id = db::insert_reading(&self.pool, &report).await?;
        info!(id, "Reading persisted");
        Ok(id)
    }
}
