//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the process.
//!
//! # Tasks
//! - TTL sweep: removes expired cache entries at a configured interval,
//!   with one eager pass at startup

mod cleanup;

pub use cleanup::spawn_cleanup_task;
