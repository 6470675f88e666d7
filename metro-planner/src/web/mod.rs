//! Web layer for the metro route planner.
//!
//! Provides HTTP endpoints for registering stations and connections and
//! for querying routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
