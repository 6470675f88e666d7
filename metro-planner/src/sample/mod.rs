//! Sample network data and network description files.
//!
//! The built-in sample is a three-line network with transfers at Kizilay,
//! Demetevler and Gar. Other networks can be described in JSON and loaded
//! with [`load_network`].

mod loader;

pub use loader::{ConnectionDescription, LoadError, NetworkDescription, StationDescription, load_network};

use crate::domain::NetworkError;
use crate::network::Network;

/// A named query against the sample network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub title: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

/// Journeys worth showing on the sample network: one with a transfer, one
/// along a single line, one with several transfers.
pub const ANKARA_SCENARIOS: [Scenario; 3] = [
    Scenario {
        title: "From ASTI to OSB",
        from: "M1",
        to: "K4",
    },
    Scenario {
        title: "From Batikent to Kecioren",
        from: "T1",
        to: "T4",
    },
    Scenario {
        title: "From Kecioren to ASTI",
        from: "T4",
        to: "M1",
    },
];

/// Build the three-line sample network.
pub fn ankara_network() -> Result<Network, NetworkError> {
    let mut network = Network::new();

    // Red Line
    network.add_station("K1", "Kizilay", "Red Line")?;
    network.add_station("K2", "Ulus", "Red Line")?;
    network.add_station("K3", "Demetevler", "Red Line")?;
    network.add_station("K4", "OSB", "Red Line")?;

    // Blue Line
    network.add_station("M1", "ASTI", "Blue Line")?;
    network.add_station("M2", "Kizilay", "Blue Line")?;
    network.add_station("M3", "Sihhiye", "Blue Line")?;
    network.add_station("M4", "Gar", "Blue Line")?;

    // Orange Line
    network.add_station("T1", "Batıkent", "Orange Line")?;
    network.add_station("T2", "Demetevler", "Orange Line")?;
    network.add_station("T3", "Gar", "Orange Line")?;
    network.add_station("T4", "Kecioren", "Orange Line")?;

    network.add_connection("K1", "K2", 4)?;
    network.add_connection("K2", "K3", 6)?;
    network.add_connection("K3", "K4", 8)?;

    network.add_connection("M1", "M2", 5)?;
    network.add_connection("M2", "M3", 3)?;
    network.add_connection("M3", "M4", 4)?;

    network.add_connection("T1", "T2", 7)?;
    network.add_connection("T2", "T3", 9)?;
    network.add_connection("T3", "T4", 5)?;

    // Transfers
    network.add_connection("K1", "M2", 2)?; // Kizilay
    network.add_connection("K3", "T2", 3)?; // Demetevler
    network.add_connection("M4", "T3", 2)?; // Gar

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ankara_network_shape() {
        let network = ankara_network().unwrap();
        assert_eq!(network.station_count(), 12);
        assert_eq!(network.connection_count(), 12);

        let lines: Vec<&str> = network.lines().map(|(line, _)| line.as_str()).collect();
        assert_eq!(lines, vec!["Blue Line", "Orange Line", "Red Line"]);
        assert_eq!(network.stations_on_line("Red Line").len(), 4);
    }

    #[test]
    fn transfer_stations_share_names() {
        let network = ankara_network().unwrap();
        for (a, b) in [("K1", "M2"), ("K3", "T2"), ("M4", "T3")] {
            let a = network.station(a).unwrap();
            let b = network.station(b).unwrap();
            assert_eq!(a.name(), b.name());
            assert_ne!(a.line(), b.line());
        }
    }

    #[test]
    fn every_scenario_has_a_route() {
        let network = ankara_network().unwrap();
        for scenario in ANKARA_SCENARIOS {
            assert!(
                network
                    .find_least_transfers(scenario.from, scenario.to)
                    .unwrap()
                    .is_some(),
                "{}",
                scenario.title
            );
            assert!(
                network
                    .find_fastest_route(scenario.from, scenario.to)
                    .unwrap()
                    .is_some(),
                "{}",
                scenario.title
            );
        }
    }
}
