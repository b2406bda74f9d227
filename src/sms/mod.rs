pub mod models;

use std::collections::HashMap;

use hmac::{Hmac, Mac};
use reqwest::Client;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;

use self::models::{SendReceipt, SendSmsRequest, SendSmsResponse};

type HmacSha256 = Hmac<Sha256>;

const SEND_PATH: &str = "/v1/sms/send";

/// Faults while talking to the SMS gateway. Never fatal for a notifier run;
/// the caller records them in the `sms` log instead of propagating.
#[derive(Debug, Error)]
pub enum SmsError {
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("gateway payload malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid header name: {0}")]
    HeaderName(#[from] reqwest::header::InvalidHeaderName),

    #[error("invalid header value: {0}")]
    HeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("gateway rejected send: {0}")]
    Rejected(String),
}

/// Client for the SMS gateway's signed HTTP API.
#[derive(Debug, Clone)]
pub struct SmsClient {
    http: Client,
    base_url: String,
    api_key: String,
    api_secret: String,
}

impl SmsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.sms_base_url.clone(),
            api_key: config.sms_api_key.clone(),
            api_secret: config.sms_api_secret.clone(),
        }
    }

    /// Send `text` to every recipient in one gateway call and return the
    /// gateway's receipt.
    pub async fn send(&self, text: &str, recipients: &[String]) -> Result<SendReceipt, SmsError> {
        let url = format!("{}{}", self.base_url, SEND_PATH);
        debug!(url = %url, recipients = recipients.len(), "Sending SMS");

        let body = SendSmsRequest {
            to: recipients.to_vec(),
            text: text.to_owned(),
        };
        let body_bytes = serde_json::to_vec(&body)?;

        let headers = build_signed_headers(
            "POST",
            SEND_PATH,
            &body_bytes,
            &self.api_key,
            &self.api_secret,
        );

        let bytes = self
            .http
            .post(&url)
            .headers(to_header_map(headers)?)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        serde_json::from_slice::<SendSmsResponse>(&bytes)?.into_result()
    }
}

// ---------------------------------------------------------------------------
// Signing helpers
// ---------------------------------------------------------------------------

/// Deterministic signing inputs used by tests.
#[derive(Debug)]
pub(crate) struct SigningContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub body_bytes: &'a [u8],
    /// 13-digit Unix timestamp in milliseconds
    pub t: &'a str,
    pub nonce: &'a str,
}

/// Build the signed request headers the gateway requires.
///
/// `body_bytes` is the raw request body exactly as sent (empty slice for
/// body-less requests).
pub(crate) fn build_signed_headers(
    method: &str,
    path: &str,
    body_bytes: &[u8],
    api_key: &str,
    secret: &str,
) -> HashMap<String, String> {
    let t = chrono::Utc::now().timestamp_millis().to_string();
    let nonce = Uuid::new_v4().to_string();
    let ctx = SigningContext {
        method,
        path,
        body_bytes,
        t: &t,
        nonce: &nonce,
    };
    build_signed_headers_inner(api_key, secret, &ctx)
}

/// Inner implementation that accepts an explicit `SigningContext` so that
/// unit tests can inject deterministic timestamp and nonce values.
pub(crate) fn build_signed_headers_inner(
    api_key: &str,
    secret: &str,
    ctx: &SigningContext<'_>,
) -> HashMap<String, String> {
    let SigningContext { method, path, body_bytes, t, nonce } = ctx;
    // 1. SHA-256 of the request body (empty body → well-known hash).
    let content_sha256 = {
        let mut hasher = Sha256::new();
        hasher.update(body_bytes);
        hex::encode(hasher.finalize())
    };

    // 2. Build stringToSign.
    //    Format: HTTPMethod\nContent-SHA256\nHeaders\nPath
    //    We send no custom signature headers, so the Headers segment is empty.
    let string_to_sign = format!("{}\n{}\n\n{}", method, content_sha256, path);

    // 3. String to HMAC: api_key + t + nonce + stringToSign.
    let str_to_hmac = format!("{}{}{}{}", api_key, t, nonce, string_to_sign);

    // 4. HMAC-SHA256, uppercase hex.
    let sign = {
        let mut mac =
            HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
        mac.update(str_to_hmac.as_bytes());
        hex::encode(mac.finalize().into_bytes()).to_uppercase()
    };

    // 5. Assemble headers.
    let mut headers = HashMap::new();
    headers.insert("api-key".to_owned(), api_key.to_owned());
    headers.insert("t".to_owned(), t.to_string());
    headers.insert("nonce".to_owned(), nonce.to_string());
    headers.insert("sign-method".to_owned(), "HMAC-SHA256".to_owned());
    headers.insert("sign".to_owned(), sign);

    headers
}

/// Convert our string `HashMap` into a `reqwest::header::HeaderMap`.
fn to_header_map(map: HashMap<String, String>) -> Result<reqwest::header::HeaderMap, SmsError> {
    let mut header_map = reqwest::header::HeaderMap::new();
    for (k, v) in map {
        let name = reqwest::header::HeaderName::from_bytes(k.as_bytes())?;
        let value = reqwest::header::HeaderValue::from_str(&v)?;
        header_map.insert(name, value);
    }
    Ok(header_map)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
