//! Configuration Module
//!
//! Handles loading server and cache configuration from environment
//! variables. TTL durations live here rather than at call sites; the
//! per-resource values are deployment configuration, not product
//! constants.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP port for the ops/debug API
    pub server_port: u16,
    /// Background sweep interval in seconds
    pub cleanup_interval_secs: u64,
    /// Per-resource-class TTLs
    pub ttl: TtlConfig,
}

/// Freshness windows for each cached resource class, in milliseconds.
#[derive(Debug, Clone)]
pub struct TtlConfig {
    /// Thread replies
    pub replies_ms: u64,
    /// Account mentions
    pub mentions_ms: u64,
    /// Thread insights
    pub insights_ms: u64,
    /// Thread detail view
    pub thread_detail_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL_SECS` - sweep frequency in seconds (default: 1800)
    /// - `REPLIES_TTL_MS` - thread replies TTL (default: 60000)
    /// - `MENTIONS_TTL_MS` - mentions TTL (default: 120000)
    /// - `INSIGHTS_TTL_MS` - insights TTL (default: 600000)
    /// - `THREAD_DETAIL_TTL_MS` - thread detail TTL (default: 300000)
    pub fn from_env() -> Self {
        Self {
            server_port: env_or("SERVER_PORT", 3000),
            cleanup_interval_secs: env_or("CLEANUP_INTERVAL_SECS", 1800),
            ttl: TtlConfig {
                replies_ms: env_or("REPLIES_TTL_MS", 60_000),
                mentions_ms: env_or("MENTIONS_TTL_MS", 120_000),
                insights_ms: env_or("INSIGHTS_TTL_MS", 600_000),
                thread_detail_ms: env_or("THREAD_DETAIL_TTL_MS", 300_000),
            },
        }
    }

    /// Sweep interval as a duration.
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}

impl TtlConfig {
    pub fn replies(&self) -> Duration {
        Duration::from_millis(self.replies_ms)
    }

    pub fn mentions(&self) -> Duration {
        Duration::from_millis(self.mentions_ms)
    }

    pub fn insights(&self) -> Duration {
        Duration::from_millis(self.insights_ms)
    }

    pub fn thread_detail(&self) -> Duration {
        Duration::from_millis(self.thread_detail_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cleanup_interval_secs: 1800,
            ttl: TtlConfig {
                replies_ms: 60_000,
                mentions_ms: 120_000,
                insights_ms: 600_000,
                thread_detail_ms: 300_000,
            },
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
