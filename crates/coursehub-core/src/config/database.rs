//! Catalog database settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Postgres pool for the video catalog and notification tables.
///
/// The API runs short single-statement queries (a COUNT plus one page per
/// listing, two COUNTs per badge refresh), so a small pool is enough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` connection URL. Logged with the password masked.
    pub url: String,
    /// Upper bound on open connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connections kept warm while idle.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait for a free connection before a request fails.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Seconds before an unused connection is dropped.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// Acquire timeout as a [`Duration`].
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Idle timeout as a [`Duration`]; zero keeps idle connections open.
    pub fn idle_timeout(&self) -> Option<Duration> {
        (self.idle_timeout_seconds > 0).then(|| Duration::from_secs(self.idle_timeout_seconds))
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}
