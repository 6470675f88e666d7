//! Connection graph.
//!
//! Undirected, weighted adjacency between registered stations. Rides
//! between consecutive stops and transfers between lines are both plain
//! connections; a transfer costs whatever time it was registered with.

use std::collections::HashMap;

use crate::domain::{NetworkError, StationId};

/// Largest accepted travel time for one connection.
///
/// A simple path has fewer than `u32::MAX` connections in practice, so the
/// total of any path stays within `u64`.
pub const MAX_CONNECTION_MINUTES: i64 = u32::MAX as i64;

/// One direction of a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Station reached by taking this connection.
    pub to: StationId,
    /// Travel time in minutes, between 1 and `MAX_CONNECTION_MINUTES`.
    pub minutes: u64,
}

/// What `add_connection` did to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionChange {
    /// A new connection was created.
    Added,
    /// The stations were already connected; their travel time was replaced.
    Replaced { previous_minutes: u64 },
}

/// Adjacency from each station to its neighbours.
///
/// Connections are symmetric: every entry A→B has a matching B→A with the
/// same weight. Neighbour lists keep insertion order, which fixes the
/// expansion order of the planner searches.
#[derive(Debug, Clone, Default)]
pub struct ConnectionGraph {
    adjacency: HashMap<StationId, Vec<Connection>>,
    connections: usize,
}

impl ConnectionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with no connections. Re-adding a known station is a no-op.
    pub fn add_station(&mut self, id: StationId) {
        self.adjacency.entry(id).or_default();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Connect two stations in both directions.
    ///
    /// A second connection between an already-connected pair replaces the
    /// travel time in both directions and keeps the original neighbour
    /// order. All checks run before the graph is touched, so a failed call
    /// leaves it unchanged.
    pub fn add_connection(
        &mut self,
        a: &str,
        b: &str,
        minutes: i64,
    ) -> Result<ConnectionChange, NetworkError> {
        let a_id = self.resolve(a)?.clone();
        let b_id = self.resolve(b)?.clone();

        if a_id == b_id {
            return Err(NetworkError::InvalidConnection(a_id));
        }
        if !(1..=MAX_CONNECTION_MINUTES).contains(&minutes) {
            return Err(NetworkError::InvalidWeight {
                from: a_id,
                to: b_id,
                minutes,
            });
        }
        let minutes = minutes as u64;

        let previous = self.upsert(&a_id, &b_id, minutes);
        let mirrored = self.upsert(&b_id, &a_id, minutes);
        debug_assert_eq!(previous, mirrored, "connections must stay symmetric");

        match previous {
            Some(previous_minutes) => Ok(ConnectionChange::Replaced { previous_minutes }),
            None => {
                self.connections += 1;
                Ok(ConnectionChange::Added)
            }
        }
    }

    /// Neighbours of a station, in the order their connections were added.
    pub fn neighbors(&self, id: &str) -> Result<&[Connection], NetworkError> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| NetworkError::UnknownStation(StationId::new(id)))
    }

    /// Travel time of the direct connection between two stations, if any.
    pub fn connection_minutes(&self, a: &str, b: &str) -> Option<u64> {
        self.adjacency
            .get(a)?
            .iter()
            .find(|c| c.to.as_str() == b)
            .map(|c| c.minutes)
    }

    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected connections (A↔B counts once).
    pub fn connection_count(&self) -> usize {
        self.connections
    }

    /// Resolves an id to the key stored in the graph.
    pub fn resolve(&self, id: &str) -> Result<&StationId, NetworkError> {
        self.adjacency
            .get_key_value(id)
            .map(|(key, _)| key)
            .ok_or_else(|| NetworkError::UnknownStation(StationId::new(id)))
    }

    /// Inserts or overwrites the `from → to` entry, returning the old weight.
    fn upsert(&mut self, from: &StationId, to: &StationId, minutes: u64) -> Option<u64> {
        let neighbors = self.adjacency.entry(from.clone()).or_default();
        match neighbors.iter_mut().find(|c| &c.to == to) {
            Some(existing) => Some(std::mem::replace(&mut existing.minutes, minutes)),
            None => {
                neighbors.push(Connection {
                    to: to.clone(),
                    minutes,
                });
                None
            }
        }
    }
}
