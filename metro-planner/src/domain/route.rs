//! Route results.
//!
//! A `Route` is the answer to a planner query: the stations visited from
//! origin to destination (both inclusive) and the travel time along the
//! connections between them.

use std::fmt;
use std::sync::Arc;

use super::Station;

/// Separator used when printing a route.
pub const ROUTE_SEPARATOR: &str = " -> ";

/// An ordered path through the network.
///
/// # Invariants
///
/// - At least one station (a route from a station to itself has exactly one)
/// - Consecutive stations are directly connected in the network the route
///   came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<Arc<Station>>,
    total_minutes: u64,
}

impl Route {
    /// Constructs a route from stations already known to form a path.
    pub(crate) fn new(stations: Vec<Arc<Station>>, total_minutes: u64) -> Self {
        debug_assert!(!stations.is_empty(), "a route has at least one station");
        Self {
            stations,
            total_minutes,
        }
    }

    /// Stations in travel order.
    pub fn stations(&self) -> &[Arc<Station>] {
        &self.stations
    }

    pub fn origin(&self) -> &Station {
        &self.stations[0]
    }

    pub fn destination(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// Number of connections traversed.
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }

    /// Number of times consecutive stations are on different lines.
    ///
    /// This can be lower than the hop count would suggest: a hop-minimal
    /// route is not necessarily the one with the fewest line changes.
    pub fn line_changes(&self) -> usize {
        self.stations
            .windows(2)
            .filter(|pair| pair[0].line() != pair[1].line())
            .count()
    }

    /// Sum of connection times along the route, in minutes.
    pub fn total_minutes(&self) -> u64 {
        self.total_minutes
    }

    /// Display names in travel order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stations.iter().map(|s| s.name())
    }

    /// Renders the route followed by its total time, e.g.
    /// `Omega -> Hub -> Hub -> Downtown (11 minutes)`.
    pub fn describe_with_time(&self) -> String {
        format!("{} ({} minutes)", self, self.total_minutes)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, name) in self.names().enumerate() {
            if idx > 0 {
                f.write_str(ROUTE_SEPARATOR)?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, name: &str, line: &str) -> Arc<Station> {
        Arc::new(Station::new(id, name, line))
    }

    fn hub_route() -> Route {
        Route::new(
            vec![
                station("A3", "Omega", "LineRed"),
                station("A2", "Hub", "LineRed"),
                station("B1", "Hub", "LineBlue"),
                station("B2", "Downtown", "LineBlue"),
            ],
            11,
        )
    }

    #[test]
    fn display_joins_names() {
        assert_eq!(hub_route().to_string(), "Omega -> Hub -> Hub -> Downtown");
    }

    #[test]
    fn describe_with_time_appends_minutes() {
        assert_eq!(
            hub_route().describe_with_time(),
            "Omega -> Hub -> Hub -> Downtown (11 minutes)"
        );
    }

    #[test]
    fn endpoints_and_counts() {
        let route = hub_route();
        assert_eq!(route.origin().id().as_str(), "A3");
        assert_eq!(route.destination().id().as_str(), "B2");
        assert_eq!(route.hops(), 3);
        assert_eq!(route.line_changes(), 1);
        assert_eq!(route.total_minutes(), 11);
    }

    #[test]
    fn single_station_route() {
        let route = Route::new(vec![station("A1", "Alpha", "LineRed")], 0);
        assert_eq!(route.hops(), 0);
        assert_eq!(route.line_changes(), 0);
        assert_eq!(route.origin(), route.destination());
        assert_eq!(route.to_string(), "Alpha");
    }
}
