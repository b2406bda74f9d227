pub mod report;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use self::report::BatteryReport;

const UPOWER: &str = "upower";

/// Faults while interrogating the battery through `upower`.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("failed to run {command}: {source}")]
    Exec {
        command: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    CommandFailed {
        command: &'static str,
        status: std::process::ExitStatus,
    },

    #[error("upower lists no battery device")]
    NoBatteryDevice,

    #[error("missing {key:?} in upower report")]
    MissingField { key: &'static str },
}

/// Thin wrapper around the `upower` command-line utility.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpowerClient;

impl UpowerClient {
    pub fn new() -> Self {
        Self
    }

    /// Full parsed report for the first battery device upower lists.
    pub async fn battery_report(&self) -> Result<BatteryReport, AcquisitionError> {
        let listing = run_upower(&["-e"]).await?;
        let device = first_battery_line(&listing).ok_or(AcquisitionError::NoBatteryDevice)?;
        debug!(device = %device, "Battery device detected");

        let text = run_upower(&["-i", device]).await?;
        BatteryReport::parse(&text)
    }
}

async fn run_upower(args: &[&str]) -> Result<String, AcquisitionError> {
    let output = Command::new(UPOWER)
        .args(args)
        .output()
        .await
        .map_err(|source| AcquisitionError::Exec {
            command: UPOWER,
            source,
        })?;

    if !output.status.success() {
        return Err(AcquisitionError::CommandFailed {
            command: UPOWER,
            status: output.status,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// First line of a `upower -e` listing that names a battery device.
fn first_battery_line(listing: &str) -> Option<&str> {
    listing
        .lines()
        .map(str::trim)
        .find(|line| line.contains("BAT"))
}
