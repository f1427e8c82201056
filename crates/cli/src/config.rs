//! Client configuration loaded from environment variables.

use std::time::Duration;

use scriba_client::poller::PollConfig;

/// CLI configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the transcription service.
    pub api_url: String,
    /// Polling parameters.
    pub poll: PollConfig,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `SCRIBA_API_URL`           | `http://127.0.0.1:8000` |
    /// | `SCRIBA_POLL_INTERVAL_MS`  | `1000`                  |
    /// | `SCRIBA_POLL_TIMEOUT_SECS` | `3600`                  |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("SCRIBA_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".into());

        let interval_ms: u64 = std::env::var("SCRIBA_POLL_INTERVAL_MS")
            .unwrap_or_else(|_| "1000".into())
            .parse()
            .expect("SCRIBA_POLL_INTERVAL_MS must be a valid u64");

        let timeout_secs: u64 = std::env::var("SCRIBA_POLL_TIMEOUT_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("SCRIBA_POLL_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            poll: PollConfig {
                interval: Duration::from_millis(interval_ms),
                deadline: Duration::from_secs(timeout_secs),
                ..PollConfig::default()
            },
        }
    }
}
