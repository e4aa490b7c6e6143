//! Configuration Module
//!
//! Handles loading and managing playground configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::memo::PolicyKind;
use crate::queue::ScanMode;

/// Playground configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of results the memo table keeps
    pub memo_max_size: usize,
    /// Eviction policy of the memo table
    pub eviction_policy: PolicyKind,
    /// Staleness limit in milliseconds for the TIME policy
    pub max_age_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background purge interval in seconds
    pub cleanup_interval: u64,
    /// Cache the highest-priority index in the queue
    pub track_highest: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMO_MAX_SIZE` - Memo table capacity (default: 128)
    /// - `EVICTION_POLICY` - `lru`, `lfu`, `time` or `custom` (default: lru)
    /// - `MAX_AGE_MS` - TIME policy staleness limit (default: 60000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Purge frequency in seconds (default: 1)
    /// - `TRACK_HIGHEST` - Queue highest-index tracking (default: false)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            memo_max_size: env_or("MEMO_MAX_SIZE", defaults.memo_max_size),
            eviction_policy: env_or("EVICTION_POLICY", defaults.eviction_policy),
            max_age_ms: env_or("MAX_AGE_MS", defaults.max_age_ms),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
            track_highest: env_or("TRACK_HIGHEST", defaults.track_highest),
        }
    }

    pub fn max_age(&self) -> Duration {
        Duration::from_millis(self.max_age_ms)
    }

    pub fn scan_mode(&self) -> ScanMode {
        if self.track_highest {
            ScanMode::TrackHighest
        } else {
            ScanMode::Linear
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memo_max_size: 128,
            eviction_policy: PolicyKind::Lru,
            max_age_ms: 60_000,
            server_port: 3000,
            cleanup_interval: 1,
            track_highest: false,
        }
    }
}
