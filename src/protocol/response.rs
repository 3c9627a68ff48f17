//! Response definitions
//!
//! The single-line JSON object sent back for every command.

use serde::Serialize;

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Ok,
    Error,
}

/// A response to send to the client.
///
/// Serializes to one JSON object; `result` and `mesg` are omitted when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// Outcome of the command
    pub status: Status,

    /// Returned value (GET hit or miss text, DEL boolean outcome)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    /// Human-readable detail, present on errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesg: Option<String>,
}

impl Response {
    /// A bare OK response
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            result: None,
            mesg: None,
        }
    }

    /// An OK response carrying a result value
    pub fn ok_result(result: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            result: Some(result.into()),
            mesg: None,
        }
    }

    /// An OK response carrying an informational message
    pub fn ok_mesg(mesg: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            result: None,
            mesg: Some(mesg.into()),
        }
    }

    /// An error response with a message
    pub fn error(mesg: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            result: None,
            mesg: Some(mesg.into()),
        }
    }

    /// Encode as a single JSON line (without the trailing newline)
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"status":"Error","mesg":"response serialization failed"}"#.to_string()
        })
    }
}
