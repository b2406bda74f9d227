use std::fmt;

use serde::{Deserialize, Serialize};

use super::SmsError;

// ---------------------------------------------------------------------------
// Response envelope
//
// The gateway wraps every send result in the same outer object:
//
// Success:
//   { "success": true, "request_id": "a1b2c3", "accepted": 2 }
//
// Failure (HTTP status can still be 200):
//   { "success": false, "error": "unknown recipient" }
//
// `request_id` and `accepted` are absent on failure; `error` is absent on
// success.
// ---------------------------------------------------------------------------

/// Request body for `POST /v1/sms/send`.
#[derive(Debug, Serialize)]
pub struct SendSmsRequest {
    pub to: Vec<String>,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SendSmsResponse {
    /// `true` when the gateway queued the message; `false` on API-level
    /// failure.
    pub success: bool,

    /// Gateway-side trace ID, present on success.
    pub request_id: Option<String>,

    /// How many recipients the message was queued for, present on success.
    pub accepted: Option<u32>,

    /// Human-readable reason, present on failure.
    pub error: Option<String>,
}

impl SendSmsResponse {
    /// Map API-level failures (`success: false`) to [`SmsError::Rejected`].
    pub fn into_result(self) -> Result<SendReceipt, SmsError> {
        if self.success {
            Ok(SendReceipt {
                request_id: self.request_id.unwrap_or_default(),
                accepted: self.accepted.unwrap_or(0),
            })
        } else {
            Err(SmsError::Rejected(
                self.error.unwrap_or_else(|| "no error detail".to_owned()),
            ))
        }
    }
}

/// Outcome of an accepted send. Its `Display` rendering is what lands in
/// the `sms` log table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub request_id: String,
    pub accepted: u32,
}

impl fmt::Display for SendReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "request {}: accepted for {} recipient(s)",
            self.request_id, self.accepted
        )
    }
}
