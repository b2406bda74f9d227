pub mod models;

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::MonitorError;
use crate::upower::report::BatteryReport;

use self::models::Reading;

/// Open the shared database file, creating it on first use.
///
/// Each job opens its own pool, runs a single read or write pass and drops
/// it on exit; SQLite's own locking serializes jobs that overlap.
pub async fn connect(path: &Path) -> Result<SqlitePool, MonitorError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MonitorError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Append one reading; `curdate` is filled in by SQLite. Returns the new
/// row id.
pub async fn insert_reading(
    pool: &SqlitePool,
    report: &BatteryReport,
) -> Result<i64, MonitorError> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO battery
            (state, energy, energy_full, energy_full_design, energy_rate,
             voltage, time_remaining, percentage_remaining, design_capacity)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&report.state)
    .bind(&report.energy)
    .bind(&report.energy_full)
    .bind(&report.energy_full_design)
    .bind(&report.energy_rate)
    .bind(&report.voltage)
    .bind(&report.time_remaining)
    .bind(&report.percentage_remaining)
    .bind(&report.design_capacity)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// The most recent `limit` readings, newest first.
pub async fn recent_readings(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<Reading>, MonitorError> {
    let rows = sqlx::query_as::<_, Reading>(
        r#"
        SELECT id, curdate, state, energy, energy_full, energy_full_design,
               energy_rate, voltage, time_remaining, percentage_remaining,
               design_capacity
        FROM battery
        ORDER BY id DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Record the outcome of one notification attempt.
pub async fn insert_sms_log(pool: &SqlitePool, result: &str) -> Result<(), MonitorError> {
    sqlx::query("INSERT INTO sms (result) VALUES (?)")
        .bind(result)
        .execute(pool)
        .await?;
    Ok(())
}
