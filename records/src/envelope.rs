//! The `{success, message?, error?, user?}` reply convention.
//!
//! Auth and mutation functions answer with an envelope; list/stat functions
//! answer with a plain value, but report failure with the same
//! `{success: false, message}` shape. [`reject_failed_reply`] is the single
//! rule every transport and the typed adapter apply: a reply carrying
//! `error`, or `success: false`, becomes a [`RemoteError::Backend`] instead
//! of a value. The connectivity probe is the exception for `success`.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RemoteError;
use crate::model::AuthUser;
use crate::operation::Operation;

/// Message used when the backend reports failure without saying why.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Permintaan ditolak oleh server.";

/// Reply envelope of auth and mutation operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

impl Envelope {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ok_with_message(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_owned()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ok_with_user(user: AuthUser) -> Self {
        Self {
            success: true,
            user: Some(user),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_owned()),
            ..Self::default()
        }
    }
}

/// Reply of the connectivity probe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub source: Option<String>,
}

/// Apply the reply rule for `operation`.
///
/// Every reply carrying a non-null `error` rejects. `success: false` rejects
/// unless the operation reports it as data (the connectivity probe).
///
/// # Errors
///
/// Returns [`RemoteError::Backend`] for rejected replies.
pub fn reject_failed_reply(operation: Operation, value: Value) -> Result<Value, RemoteError> {
    if operation.reports_status_as_data() {
        reject_error_field(value)
    } else {
        reject_failed_envelope(value)
    }
}

/// Turn an error-bearing or `success: false` reply into a rejection.
///
/// Plain values (arrays, strings, objects without those keys) pass through.
///
/// # Errors
///
/// Returns [`RemoteError::Backend`] with the backend-supplied text, or
/// [`DEFAULT_FAILURE_MESSAGE`] when none was given.
pub fn reject_failed_envelope(value: Value) -> Result<Value, RemoteError> {
    reject_failed_envelope_or(value, DEFAULT_FAILURE_MESSAGE)
}

/// Same as [`reject_failed_envelope`] with a caller-chosen fallback message
/// for `success: false` replies that carry none.
///
/// # Errors
///
/// Returns [`RemoteError::Backend`] for error-bearing or unsuccessful replies.
pub fn reject_failed_envelope_or(value: Value, fallback: &str) -> Result<Value, RemoteError> {
    let value = reject_error_field(value)?;
    let Value::Object(map) = &value else {
        return Ok(value);
    };

    if map.get("success") == Some(&Value::Bool(false)) {
        let message = map
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback);
        return Err(RemoteError::Backend(message.to_owned()));
    }

    Ok(value)
}

fn reject_error_field(value: Value) -> Result<Value, RemoteError> {
    if let Value::Object(map) = &value
        && let Some(error) = map.get("error")
        && !matches!(error, Value::Null | Value::Bool(false))
    {
        return Err(RemoteError::Backend(error_text(error)));
    }
    Ok(value)
}

fn error_text(error: &Value) -> String {
    match error {
        Value::String(text) if !text.trim().is_empty() => text.clone(),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| DEFAULT_FAILURE_MESSAGE.to_owned(), str::to_owned),
        Value::String(_) | Value::Bool(_) => DEFAULT_FAILURE_MESSAGE.to_owned(),
        other => other.to_string(),
    }
}
