use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the shared SQLite database file lives in.
    pub db_path: PathBuf,
    /// Database filename inside `db_path`.
    pub db_file: String,
    pub sms_base_url: String,
    pub sms_api_key: String,
    pub sms_api_secret: String,
    /// Phone numbers the battery summary is sent to.
    /// Format: comma-separated, e.g. `"+15550001111,+15550002222"`.
    pub recipients: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            db_path: PathBuf::from(required("BATTERY_DB_PATH")?),
            db_file: optional("BATTERY_DB_FILE", "battery.db"),
            sms_base_url: required("SMS_BASE_URL")?,
            sms_api_key: required("SMS_API_KEY")?,
            sms_api_secret: required("SMS_API_SECRET")?,
            recipients: parse_recipients(&required("SMS_RECIPIENTS")?)
                .context("SMS_RECIPIENTS must list at least one phone number")?,
        })
    }

    /// Full path of the shared database file.
    pub fn database_file(&self) -> PathBuf {
        self.db_path.join(&self.db_file)
    }
}

/// Split a comma-separated recipient list, trimming each entry and dropping
/// empty ones. An empty result is an error so a misconfigured notifier fails
/// at startup rather than sending to nobody.
fn parse_recipients(raw: &str) -> Result<Vec<String>> {
    let recipients: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if recipients.is_empty() {
        return Err(anyhow::anyhow!("no recipients in {raw:?}"));
    }
    Ok(recipients)
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("missing required env var: {key}"))
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recipients_splits_and_trims() {
        let r = parse_recipients("+15550001111, +15550002222").unwrap();
        assert_eq!(r, vec!["+15550001111", "+15550002222"]);
    }

    #[test]
    fn parse_recipients_drops_empty_entries() {
        let r = parse_recipients("+15550001111,,").unwrap();
        assert_eq!(r, vec!["+15550001111"]);
    }

    #[test]
    fn parse_recipients_rejects_empty_list() {
        assert!(parse_recipients("").is_err());
        assert!(parse_recipients(" , ").is_err());
    }
}
