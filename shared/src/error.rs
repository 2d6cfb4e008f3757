//! Error body returned by the booking service
//!
//! Non-2xx responses carry `{ "detail": ... }`. `detail` is normally a
//! string, but request validation failures produce a structured value, so it
//! is kept as raw JSON and only surfaced when it is a string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Value::String(detail.into()),
        }
    }

    /// Human-readable detail, if the service provided one
    pub fn message(&self) -> Option<&str> {
        self.detail.as_str().filter(|s| !s.trim().is_empty())
    }
}
