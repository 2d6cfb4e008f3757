//! Mock service configuration, read from the environment

pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_LOG_FILTER: &str = "booking_mock=info,tower_http=info";

pub struct Config {
    /// Listen port (BOOKING_MOCK_PORT)
    pub port: u16,
    /// tracing filter directive (RUST_LOG)
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("BOOKING_MOCK_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            log_filter: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
