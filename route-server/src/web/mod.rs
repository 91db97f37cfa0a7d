//! Web layer for the route aggregation service.
//!
//! Provides the waypoint routing endpoint and health check.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
