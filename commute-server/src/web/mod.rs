//! Web layer for the commute recommendation engine.
//!
//! Provides a health check and the recommendation endpoint.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
