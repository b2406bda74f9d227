//! Laptop battery telemetry split across two cron-driven jobs: a sampler
//! that appends `upower` readings to a shared SQLite file, and a notifier
//! that texts depletion trends computed from the most recent readings.
//! The jobs never talk to each other; the database file is the only shared
//! state.

pub mod config;
pub mod db;
pub mod error;
pub mod notifier;
pub mod sampler;
pub mod sms;
pub mod trend;
pub mod upower;
