//! Social Cache - An in-memory TTL cache for social content services
//!
//! Provides freshness-window caching over async data producers, with a
//! background sweep task and an ops HTTP surface for inspection and
//! invalidation.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::{cached_call, CacheStore, SharedStore};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
