//! Response DTOs for the ops API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the manual sweep endpoint (POST /cache/cleanup)
#[derive(Debug, Clone, Serialize)]
pub struct CleanupResponse {
    /// Number of entries remaining after the sweep
    pub size: usize,
    /// Human-readable summary of the sweep
    pub message: String,
}

impl CleanupResponse {
    /// Creates a new CleanupResponse from sweep results
    pub fn new(removed: usize, size: usize) -> Self {
        Self {
            size,
            message: format!("Removed {} expired entries", removed),
        }
    }
}

/// Response body for the status endpoint (GET /cache/status)
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Current number of entries, including not-yet-swept expired ones
    pub size: usize,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl StatusResponse {
    /// Creates a new StatusResponse with the current timestamp
    pub fn new(size: usize) -> Self {
        Self {
            size,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed because their TTL elapsed
    pub expired_removals: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, expired_removals: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            expired_removals,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the single-key delete endpoint (DELETE /cache/key/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for the thread invalidation endpoint (DELETE /cache/threads/:id)
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Success message
    pub message: String,
    /// The thread whose cached facets were dropped
    pub thread_id: String,
}

impl InvalidateResponse {
    /// Creates a new InvalidateResponse
    pub fn new(thread_id: impl Into<String>) -> Self {
        let thread_id = thread_id.into();
        Self {
            message: format!("Invalidated cached entries for thread '{}'", thread_id),
            thread_id,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
