//! API Module
//!
//! The ops HTTP surface: handlers, application state, and router.

mod handlers;
mod routes;

pub use handlers::AppState;
pub use routes::create_router;
