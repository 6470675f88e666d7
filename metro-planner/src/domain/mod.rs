//! Domain types for the metro route planner.
//!
//! Stations, lines and routes, plus the error type shared by the network
//! and the planner.

mod error;
mod route;
mod station;

pub use error::NetworkError;
pub use route::{ROUTE_SEPARATOR, Route};
pub use station::{Line, Station, StationId};
