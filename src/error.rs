use thiserror::Error;

use crate::{sms::SmsError, trend::TrendError, upower::AcquisitionError};

/// Top-level fault classes for the two jobs.
///
/// Acquisition, storage and trend faults abort the invocation that hits
/// them. Notification faults never do: the notifier renders them to text
/// and records them in the `sms` log, so `Notification` only surfaces
/// through that text.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("acquisition failed: {0}")]
    Acquisition(#[from] AcquisitionError),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("trend computation failed: {0}")]
    Trend(#[from] TrendError),

    #[error("notification failed: {0}")]
    Notification(#[from] SmsError),
}
