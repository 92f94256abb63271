//! Models Module
//!
//! Response DTOs for the ops API.

mod responses;

pub use responses::{
    CleanupResponse, DeleteResponse, HealthResponse, InvalidateResponse, StatsResponse,
    StatusResponse,
};
