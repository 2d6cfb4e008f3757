//! API Response types

use serde::{Deserialize, Serialize};

/// Health check response (GET /api/health)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthResponse {
    pub fn healthy(message: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            message: message.into(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
