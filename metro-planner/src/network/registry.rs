//! Station registry.
//!
//! Stores stations by identifier, in registration order, together with a
//! per-line index for presentation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::domain::{Line, NetworkError, Station, StationId};

/// The set of stations in a network.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    /// Stations in registration order.
    stations: Vec<Arc<Station>>,
    /// Position of each station in `stations`.
    index: HashMap<StationId, usize>,
    /// Stations grouped by line, each group in registration order.
    lines: BTreeMap<Line, Vec<Arc<Station>>>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station.
    ///
    /// Fails with [`NetworkError::DuplicateStation`] if the id is taken; the
    /// registry is unchanged in that case.
    pub fn insert(&mut self, station: Station) -> Result<Arc<Station>, NetworkError> {
        if self.index.contains_key(station.id()) {
            return Err(NetworkError::DuplicateStation(station.id().clone()));
        }

        let station = Arc::new(station);
        self.index.insert(station.id().clone(), self.stations.len());
        self.stations.push(Arc::clone(&station));
        self.lines
            .entry(station.line().clone())
            .or_default()
            .push(Arc::clone(&station));

        Ok(station)
    }

    /// Look up a station by id.
    pub fn get(&self, id: &str) -> Option<&Arc<Station>> {
        self.index.get(id).map(|&idx| &self.stations[idx])
    }

    /// Look up a station by id, failing if it was never registered.
    pub fn require(&self, id: &str) -> Result<&Arc<Station>, NetworkError> {
        self.get(id)
            .ok_or_else(|| NetworkError::UnknownStation(StationId::new(id)))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All stations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Station>> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Lines in name order, each with its stations in registration order.
    pub fn lines(&self) -> impl Iterator<Item = (&Line, &[Arc<Station>])> {
        self.lines
            .iter()
            .map(|(line, stations)| (line, stations.as_slice()))
    }

    /// Stations on a line; empty if no station uses that line.
    pub fn stations_on_line(&self, line: &str) -> &[Arc<Station>] {
        self.lines.get(line).map(Vec::as_slice).unwrap_or_default()
    }
}
