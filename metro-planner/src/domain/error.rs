//! Network error types.
//!
//! These are input-validation failures raised at the call that violates
//! the contract. None of them leave the network partially modified.

use super::StationId;
use crate::network::MAX_CONNECTION_MINUTES;

/// Errors from building or querying a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The station id was never registered
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// A station with this id is already registered
    #[error("station {0} is already registered")]
    DuplicateStation(StationId),

    /// Connection weights must be a positive number of minutes, bounded so
    /// any path total fits in a `u64`
    #[error(
        "invalid travel time between {from} and {to}: {minutes} minutes (must be between 1 and {max})",
        max = MAX_CONNECTION_MINUTES
    )]
    InvalidWeight {
        from: StationId,
        to: StationId,
        minutes: i64,
    },

    /// A station cannot be connected to itself
    #[error("station {0} cannot be connected to itself")]
    InvalidConnection(StationId),
}
