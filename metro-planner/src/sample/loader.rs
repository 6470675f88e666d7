//! JSON network descriptions.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::NetworkError;
use crate::network::Network;

/// Errors from loading a network description.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid network description
    #[error("invalid network JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The description is well-formed but breaks a network rule
    #[error("invalid network: {0}")]
    Network(#[from] NetworkError),
}

/// A station entry in a network description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationDescription {
    pub id: String,
    pub name: String,
    pub line: String,
}

/// A connection entry in a network description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescription {
    pub from: String,
    pub to: String,
    pub minutes: i64,
}

/// Serialized form of a network: stations first, then connections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescription {
    pub stations: Vec<StationDescription>,
    #[serde(default)]
    pub connections: Vec<ConnectionDescription>,
}

impl NetworkDescription {
    /// Parse a description from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a network, applying every registration rule.
    ///
    /// Stops at the first invalid entry.
    pub fn build(&self) -> Result<Network, NetworkError> {
        let mut network = Network::new();
        for station in &self.stations {
            network.add_station(station.id.as_str(), station.name.as_str(), station.line.as_str())?;
        }
        for connection in &self.connections {
            network.add_connection(&connection.from, &connection.to, connection.minutes)?;
        }
        Ok(network)
    }

    /// Describe an existing network.
    pub fn from_network(network: &Network) -> Self {
        let stations = network
            .stations()
            .map(|s| StationDescription {
                id: s.id().to_string(),
                name: s.name().to_string(),
                line: s.line().to_string(),
            })
            .collect();

        // Each undirected connection is listed once, from the station that
        // was registered first.
        let mut connections = Vec::new();
        let order: std::collections::HashMap<&str, usize> = network
            .stations()
            .enumerate()
            .map(|(idx, s)| (s.id().as_str(), idx))
            .collect();
        for station in network.stations() {
            let from = station.id().as_str();
            let Ok(neighbors) = network.neighbors(from) else {
                continue;
            };
            for connection in neighbors {
                if order[from] < order[connection.to.as_str()] {
                    connections.push(ConnectionDescription {
                        from: from.to_string(),
                        to: connection.to.to_string(),
                        minutes: connection.minutes as i64,
                    });
                }
            }
        }

        Self {
            stations,
            connections,
        }
    }
}

/// Read and build a network from a JSON description file.
pub fn load_network(path: impl AsRef<Path>) -> Result<Network, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let network = NetworkDescription::from_json(&contents)?.build()?;

    info!(
        path = %path.display(),
        stations = network.station_count(),
        connections = network.connection_count(),
        "loaded network"
    );
    Ok(network)
}
