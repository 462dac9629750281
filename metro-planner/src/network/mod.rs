//! The station graph.
//!
//! Stations are joined by connections labelled with a line name. Every
//! connect request stores a mirrored pair of connections, so the graph is
//! undirected even though each record points one way.

mod builder;
mod error;

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{LineName, StationName};

pub use builder::NetworkBuilder;
pub use error::NetworkError;

/// One direction of a connection between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    target: StationName,
    target_slot: usize,
    line: LineName,
}

impl Connection {
    /// The station this connection leads to.
    pub fn target(&self) -> &StationName {
        &self.target
    }

    /// The line this connection runs on.
    pub fn line(&self) -> &LineName {
        &self.line
    }

    /// Slot of the target station within its network.
    pub(crate) fn target_slot(&self) -> usize {
        self.target_slot
    }
}

/// A station and its outgoing connections.
#[derive(Debug, Clone)]
pub struct Station {
    name: StationName,
    /// In insertion order, which is also search order.
    connections: Vec<Connection>,
    visited: bool,
}

impl Station {
    fn new(name: StationName) -> Self {
        Self {
            name,
            connections: Vec::new(),
            visited: false,
        }
    }

    /// The station's name.
    pub fn name(&self) -> &StationName {
        &self.name
    }

    /// The station's connections, in the order they were created.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Whether a search in progress has already passed through here.
    pub fn is_visited(&self) -> bool {
        self.visited
    }
}

/// A metro network: stations keyed by name, in creation order.
///
/// # Examples
///
/// ```
/// use metro_planner::network::Network;
///
/// let mut network = Network::new();
/// network.add_station("Owings").unwrap();
/// network.add_station("Mills").unwrap();
/// network.connect("Owings", "Mills", "Green").unwrap();
///
/// let next: Vec<_> = network
///     .neighbors("Mills")
///     .unwrap()
///     .iter()
///     .map(|c| (c.target().as_str(), c.line().as_str()))
///     .collect();
/// assert_eq!(next, vec![("Owings", "Green")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    slots: HashMap<StationName, usize>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with no connections.
    pub fn add_station(&mut self, name: &str) -> Result<(), NetworkError> {
        let name = StationName::parse(name)?;
        if self.slots.contains_key(&name) {
            return Err(NetworkError::DuplicateStation(name));
        }

        debug!(station = %name, "Adding station");
        self.slots.insert(name.clone(), self.stations.len());
        self.stations.push(Station::new(name));
        Ok(())
    }

    /// Connect two stations on a line.
    ///
    /// Stores `(b, line)` on `a` and then `(a, line)` on `b`. Connecting the
    /// same pair twice creates a parallel connection rather than merging.
    pub fn connect(&mut self, a: &str, b: &str, line: &str) -> Result<(), NetworkError> {
        let a_slot = self.require_slot(a)?;
        let b_slot = self.require_slot(b)?;
        let line = LineName::parse(line)?;

        let a_name = self.stations[a_slot].name.clone();
        let b_name = self.stations[b_slot].name.clone();

        debug!(from = %a_name, to = %b_name, line = %line, "Connecting stations");

        self.stations[a_slot].connections.push(Connection {
            target: b_name,
            target_slot: b_slot,
            line: line.clone(),
        });
        self.stations[b_slot].connections.push(Connection {
            target: a_name,
            target_slot: a_slot,
            line,
        });
        Ok(())
    }

    /// Check whether a station exists.
    pub fn has_station(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Get a station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.slots.get(name).map(|&slot| &self.stations[slot])
    }

    /// All stations, in creation order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the network has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// The connections leaving a station, in insertion order.
    pub fn neighbors(&self, name: &str) -> Result<&[Connection], NetworkError> {
        let slot = self.require_slot(name)?;
        Ok(&self.stations[slot].connections)
    }

    /// Clear every station's visited marker.
    pub fn reset_visited(&mut self) {
        for station in &mut self.stations {
            station.visited = false;
        }
    }

    /// Whether the named station's visited marker is set.
    ///
    /// Unknown stations are reported as not visited.
    pub fn is_visited(&self, name: &str) -> bool {
        self.station(name).is_some_and(Station::is_visited)
    }

    pub(crate) fn slot(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    pub(crate) fn require_slot(&self, name: &str) -> Result<usize, NetworkError> {
        self.slot(name)
            .ok_or_else(|| NetworkError::UnknownStation(name.to_string()))
    }

    pub(crate) fn station_at(&self, slot: usize) -> &Station {
        &self.stations[slot]
    }

    pub(crate) fn visited_at(&self, slot: usize) -> bool {
        self.stations[slot].visited
    }

    pub(crate) fn mark_visited(&mut self, slot: usize) {
        self.stations[slot].visited = true;
    }
}
