//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, Route, Station};

/// Query string of both route endpoints.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin station id
    pub from: String,

    /// Destination station id
    pub to: String,
}

/// A station in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub line: String,
}

impl From<&Station> for StationResult {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id().to_string(),
            name: station.name().to_string(),
            line: station.line().to_string(),
        }
    }
}

/// Response listing stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// A line and the stations on it.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub line: String,
    pub stations: Vec<StationResult>,
}

impl LineResult {
    pub fn new<S: AsRef<Station>>(line: &Line, stations: &[S]) -> Self {
        Self {
            line: line.to_string(),
            stations: stations
                .iter()
                .map(|s| StationResult::from(s.as_ref()))
                .collect(),
        }
    }
}

/// Response listing lines.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Request to register a station.
#[derive(Debug, Deserialize)]
pub struct AddStationRequest {
    pub id: String,
    pub name: String,
    pub line: String,
}

/// Request to connect two stations.
#[derive(Debug, Deserialize)]
pub struct AddConnectionRequest {
    pub from: String,
    pub to: String,

    /// Travel time in minutes, from 1 to `MAX_CONNECTION_MINUTES`
    pub minutes: i64,
}

/// A registered connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionResult {
    pub from: String,
    pub to: String,
    pub minutes: u64,
}

impl ConnectionResult {
    pub fn new(from: &str, to: &str, minutes: u64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            minutes,
        }
    }
}

/// A route in responses.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Stations from origin to destination
    pub stations: Vec<StationResult>,

    /// Station names joined with " -> "
    pub summary: String,

    /// Connections taken
    pub hops: usize,

    /// Times the route moves between lines
    pub line_changes: usize,

    /// Sum of connection times
    pub total_minutes: u64,
}

impl From<&Route> for RouteResult {
    fn from(route: &Route) -> Self {
        Self {
            stations: route
                .stations()
                .iter()
                .map(|s| StationResult::from(s.as_ref()))
                .collect(),
            summary: route.to_string(),
            hops: route.hops(),
            line_changes: route.line_changes(),
            total_minutes: route.total_minutes(),
        }
    }
}

/// Response of the route endpoints.
///
/// `route` is `null` when the stations are not connected.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub from: String,
    pub to: String,
    pub route: Option<RouteResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn route_result_from_route() {
        let mut network = crate::network::Network::new();
        network.add_station("A1", "Alpha", "LineRed").unwrap();
        network.add_station("A2", "Hub", "LineRed").unwrap();
        network.add_station("B1", "Hub", "LineBlue").unwrap();
        network.add_connection("A1", "A2", 3).unwrap();
        network.add_connection("A2", "B1", 2).unwrap();
        let route = network.find_fastest_route("A1", "B1").unwrap().unwrap();

        let result = RouteResult::from(&route);
        assert_eq!(result.summary, "Alpha -> Hub -> Hub");
        assert_eq!(result.hops, 2);
        assert_eq!(result.line_changes, 1);
        assert_eq!(result.total_minutes, 5);
        assert_eq!(result.stations[2].line, "LineBlue");
    }

    #[test]
    fn route_response_serializes_missing_route_as_null() {
        let response = RouteResponse {
            from: "A1".to_string(),
            to: "C1".to_string(),
            route: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"from": "A1", "to": "C1", "route": null})
        );
    }

    #[test]
    fn line_result_lists_stations() {
        let stations = vec![
            Arc::new(Station::new("K1", "Kizilay", "Red Line")),
            Arc::new(Station::new("K2", "Ulus", "Red Line")),
        ];
        let result = LineResult::new(&Line::from("Red Line"), &stations);
        assert_eq!(result.line, "Red Line");
        assert_eq!(result.stations.len(), 2);
        assert_eq!(result.stations[1].name, "Ulus");
    }
}
