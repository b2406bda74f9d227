pub mod message;

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::{db, error::MonitorError, sms::SmsClient, trend};

/// How many recent readings the summary looks back over. Two hours of
/// history at the 20-minute sampling cadence.
pub const READING_WINDOW: i64 = 6;

/// Process exit status when the readings table is still empty.
pub const NO_READINGS_EXIT_CODE: i32 = 2;

/// Result text logged when a trend needs more history than exists.
pub const NO_DATA_RESULT: &str = "no data: fewer than two readings recorded";

/// How a notifier run ended. Only [`RunOutcome::NoReadings`] maps to a
/// non-zero exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A summary went out, or the send failed and the failure text was
    /// logged. One `sms` row exists either way.
    Sent,
    /// Exactly one reading exists; a no-data row was logged instead of
    /// sending.
    SkippedNoTrend,
    /// The `battery` table is empty. Nothing sent, nothing logged.
    NoReadings,
}

/// One-shot job: summarize recent depletion and send it by SMS, recording
/// the outcome in the `sms` table.
pub struct NotifierService {
    pool: SqlitePool,
    sms: SmsClient,
    recipients: Vec<String>,
}

impl NotifierService {
    pub fn new(pool: SqlitePool, sms: SmsClient, recipients: Vec<String>) -> Self {
        Self {
            pool,
            sms,
            recipients,
        }
    }

    pub async fn run_once(&self) -> Result<RunOutcome, MonitorError> {
        let readings = db::recent_readings(&self.pool, READING_WINDOW).await?;
        if readings.is_empty() {
            return Ok(RunOutcome::NoReadings);
        }

        let pairs = trend::depletion_pairs(&readings)?;
        if pairs.is_empty() {
            warn!("Only one reading recorded; logging a no-data entry instead of sending");
            db::insert_sms_log(&self.pool, NO_DATA_RESULT).await?;
            return Ok(RunOutcome::SkippedNoTrend);
        }

        let body = message::build_message(&pairs);
        info!(pairs = pairs.len(), bytes = body.len(), "Sending battery summary");

        // A failed send is logged, not propagated; the next scheduled run
        // simply tries again.
        let result_text = match self.sms.send(&body, &self.recipients).await {
            Ok(receipt) => receipt.to_string(),
            Err(e) => {
                warn!(error = %e, "SMS send failed");
                MonitorError::Notification(e).to_string()
            }
        };
        db::insert_sms_log(&self.pool, &result_text).await?;
        info!("Notification outcome recorded");

        Ok(RunOutcome::Sent)
    }
}
