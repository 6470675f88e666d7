//! The metro network.
//!
//! [`Network`] owns the station registry and the connection graph, checks
//! every registration, and answers the two route queries by running the
//! planner searches and resolving the resulting ids back to stations.

mod graph;
mod registry;

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Line, NetworkError, Route, Station, StationId};
use crate::planner::{self, Heuristic, PathIds, ZeroHeuristic};

pub use graph::{Connection, ConnectionChange, ConnectionGraph, MAX_CONNECTION_MINUTES};
pub use registry::StationRegistry;

/// A multi-line transit network.
///
/// Stations and connections are added up front; queries borrow the network
/// immutably and keep no state between calls, so a shared `&Network` can
/// serve concurrent queries.
///
/// # Examples
///
/// ```
/// use metro_planner::network::Network;
///
/// let mut network = Network::new();
/// network.add_station("A1", "Alpha", "LineRed").unwrap();
/// network.add_station("A2", "Hub", "LineRed").unwrap();
/// network.add_connection("A1", "A2", 3).unwrap();
///
/// let route = network.find_fastest_route("A1", "A2").unwrap().unwrap();
/// assert_eq!(route.to_string(), "Alpha -> Hub");
/// assert_eq!(route.total_minutes(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Network {
    registry: StationRegistry,
    graph: ConnectionGraph,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station.
    ///
    /// # Errors
    ///
    /// [`NetworkError::DuplicateStation`] if the id is already registered.
    pub fn add_station(
        &mut self,
        id: impl Into<StationId>,
        name: impl Into<String>,
        line: impl Into<Line>,
    ) -> Result<Arc<Station>, NetworkError> {
        let station = self.registry.insert(Station::new(id, name, line))?;
        self.graph.add_station(station.id().clone());

        debug!(
            id = %station.id(),
            name = station.name(),
            line = %station.line(),
            "station registered"
        );
        Ok(station)
    }

    /// Connect two stations in both directions with a travel time in minutes.
    ///
    /// Connecting an already-connected pair replaces the travel time.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::UnknownStation`] if either station is not registered
    /// - [`NetworkError::InvalidConnection`] if both ids are the same
    /// - [`NetworkError::InvalidWeight`] if `minutes` is zero or negative
    ///
    /// The network is unchanged when an error is returned.
    pub fn add_connection(&mut self, a: &str, b: &str, minutes: i64) -> Result<(), NetworkError> {
        match self.graph.add_connection(a, b, minutes)? {
            ConnectionChange::Added => {
                debug!(a, b, minutes, "connection added");
            }
            ConnectionChange::Replaced { previous_minutes } => {
                debug!(a, b, minutes, previous_minutes, "connection time replaced");
            }
        }
        Ok(())
    }

    /// Route with the fewest connections between two stations.
    ///
    /// Every connection, ride or transfer, counts as one hop; see
    /// [`planner::find_least_hops`]. Returns `Ok(None)` if the stations are
    /// not connected.
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnknownStation`] if either station is not registered.
    pub fn find_least_transfers(&self, from: &str, to: &str) -> Result<Option<Route>, NetworkError> {
        self.check_endpoints(from, to)?;
        planner::find_least_hops(&self.graph, from, to)?
            .map(|path| self.to_route(path))
            .transpose()
    }

    /// Route with the least total travel time between two stations.
    ///
    /// Returns `Ok(None)` if the stations are not connected.
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnknownStation`] if either station is not registered.
    pub fn find_fastest_route(&self, from: &str, to: &str) -> Result<Option<Route>, NetworkError> {
        self.find_fastest_route_with(from, to, &ZeroHeuristic)
    }

    /// Like [`Network::find_fastest_route`], guided by a heuristic (A*).
    pub fn find_fastest_route_with<H: Heuristic>(
        &self,
        from: &str,
        to: &str,
        heuristic: &H,
    ) -> Result<Option<Route>, NetworkError> {
        self.check_endpoints(from, to)?;
        planner::find_cheapest_path(&self.graph, from, to, heuristic)?
            .map(|path| self.to_route(path))
            .transpose()
    }

    /// Look up a station by id.
    pub fn station(&self, id: &str) -> Option<&Arc<Station>> {
        self.registry.get(id)
    }

    /// All stations in registration order.
    pub fn stations(&self) -> impl Iterator<Item = &Arc<Station>> {
        self.registry.iter()
    }

    /// Lines in name order, each with its stations in registration order.
    pub fn lines(&self) -> impl Iterator<Item = (&Line, &[Arc<Station>])> {
        self.registry.lines()
    }

    pub fn stations_on_line(&self, line: &str) -> &[Arc<Station>] {
        self.registry.stations_on_line(line)
    }

    /// Direct connections from a station, in the order they were added.
    pub fn neighbors(&self, id: &str) -> Result<&[Connection], NetworkError> {
        self.graph.neighbors(id)
    }

    /// Travel time of the direct connection between two stations, if any.
    pub fn connection_minutes(&self, a: &str, b: &str) -> Option<u64> {
        self.graph.connection_minutes(a, b)
    }

    pub fn station_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.graph.connection_count()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Source is reported before destination when both are unknown.
    fn check_endpoints(&self, from: &str, to: &str) -> Result<(), NetworkError> {
        self.registry.require(from)?;
        self.registry.require(to)?;
        Ok(())
    }

    fn to_route(&self, path: PathIds) -> Result<Route, NetworkError> {
        let stations = path
            .stations
            .iter()
            .map(|id| self.registry.require(id.as_str()).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Route::new(stations, path.total_minutes))
    }
}
