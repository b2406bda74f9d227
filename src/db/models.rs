use chrono::NaiveDateTime;
use sqlx::FromRow;

/// One battery observation, exactly as stored in the `battery` table.
///
/// Measurement columns keep the verbatim text upower reported (`"40.59 Wh"`,
/// `"5.8 hours"`, `"70%"`); nothing is normalized at rest. Rows are
/// append-only, so `id` order is chronological order.
#[derive(Debug, Clone, FromRow)]
pub struct Reading {
    pub id: i64,
    /// Assigned by SQLite at insert time (`CURRENT_TIMESTAMP`, UTC,
    /// second precision).
    pub curdate: NaiveDateTime,
    pub state: String,
    /// Watt-hours
    pub energy: String,
    pub energy_full: String,
    pub energy_full_design: String,
    /// Watts
    pub energy_rate: String,
    pub voltage: String,
    /// Unit-ambiguous: `"5.8 hours"`, `"34.2 minutes"` or `"100%"` when the
    /// battery is full. `trend::normalized_minutes` interprets it.
    pub time_remaining: String,
    /// `"NN%"` as reported.
    pub percentage_remaining: String,
    pub design_capacity: String,
}

/// One notification attempt, as stored in the `sms` table.
#[derive(Debug, Clone, FromRow)]
pub struct SmsLogEntry {
    pub curdate: NaiveDateTime,
    /// Gateway receipt rendered to text, or the send error if it failed.
    pub result: String,
}
