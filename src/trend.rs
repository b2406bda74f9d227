//! Depletion trends over consecutive battery readings.
//!
//! `time_remaining` is unit-ambiguous text, so everything is normalized to
//! whole minutes before deltas are taken. Deltas are newer minus older and
//! keep their sign; a draining battery shows negative losses.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::db::models::Reading;

/// Minutes assumed when `time_remaining` is percent-shaped. upower only
/// reports a percentage there when the battery is full, so the reading
/// carries no real estimate and a nine-hour charge is assumed. The parsed
/// number is discarded on purpose.
pub const FULL_CHARGE_MINUTES: i64 = 540;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrendError {
    #[error("unparseable time_remaining value: {0:?}")]
    UnparseableTime(String),

    #[error("unparseable percentage_remaining value: {0:?}")]
    UnparseablePercent(String),
}

/// Change between two consecutive readings, plus a snapshot of the newer
/// reading of the pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPair {
    pub curdate: NaiveDateTime,
    pub state: String,
    /// Reported text of the newer reading, not the normalized minutes.
    pub time_remaining: String,
    pub percentage_remaining: String,
    /// Change in normalized minutes remaining.
    pub lost_time: i64,
    /// Change in percentage remaining.
    pub lost_percent: f64,
}

impl TrendPair {
    pub fn between(newer: &Reading, older: &Reading) -> Result<Self, TrendError> {
        Ok(Self {
            curdate: newer.curdate,
            state: newer.state.clone(),
            time_remaining: newer.time_remaining.clone(),
            percentage_remaining: newer.percentage_remaining.clone(),
            lost_time: normalized_minutes(&newer.time_remaining)?
                - normalized_minutes(&older.time_remaining)?,
            lost_percent: normalized_percent(&newer.percentage_remaining)?
                - normalized_percent(&older.percentage_remaining)?,
        })
    }
}

/// One pair per pair of consecutive readings. Input is newest first, so the
/// output is too; n readings yield n-1 pairs.
pub fn depletion_pairs(readings: &[Reading]) -> Result<Vec<TrendPair>, TrendError> {
    readings
        .windows(2)
        .map(|pair| TrendPair::between(&pair[0], &pair[1]))
        .collect()
}

enum TimeUnit {
    Hours,
    Minutes,
    PercentImplied,
}

/// Normalize a reported `time_remaining` to whole minutes.
///
/// Unit markers are checked in the order `hours`, `minutes`, `%`: hours are
/// multiplied by 60, minutes pass through, and a percent-shaped value maps
/// to [`FULL_CHARGE_MINUTES`] regardless of the number in front of it (the
/// number must still parse). Text without any marker counts as minutes.
pub fn normalized_minutes(time_remaining: &str) -> Result<i64, TrendError> {
    let unit = if time_remaining.contains("hours") {
        TimeUnit::Hours
    } else if time_remaining.contains("minutes") {
        TimeUnit::Minutes
    } else if time_remaining.contains('%') {
        TimeUnit::PercentImplied
    } else {
        TimeUnit::Minutes
    };

    let value: f64 = time_remaining
        .replace("hours", "")
        .replace("minutes", "")
        .replace('%', "")
        .trim()
        .parse()
        .map_err(|_| TrendError::UnparseableTime(time_remaining.to_owned()))?;

    let minutes = match unit {
        TimeUnit::Hours => value * 60.0,
        TimeUnit::Minutes => value,
        TimeUnit::PercentImplied => return Ok(FULL_CHARGE_MINUTES),
    };
    Ok(minutes.round() as i64)
}

/// Strip the `%` marker and parse; no further transformation.
pub fn normalized_percent(percentage_remaining: &str) -> Result<f64, TrendError> {
    percentage_remaining
        .replace('%', "")
        .trim()
        .parse()
        .map_err(|_| TrendError::UnparseablePercent(percentage_remaining.to_owned()))
}
