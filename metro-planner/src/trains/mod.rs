//! Trains placed on the network.
//!
//! A train is a label with a line and a current station. Trains play no
//! part in trip planning; the registry only checks that a train starts at
//! a station that exists.

mod error;

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{LineName, StationName, TrainId};
use crate::network::Network;

pub use error::TrainError;

/// A train with its line and current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    /// The train's identifier.
    pub id: TrainId,
    /// The line the train runs on.
    pub line: LineName,
    /// The station the train is at.
    pub position: StationName,
}

/// Registered trains, in creation order.
#[derive(Debug, Clone, Default)]
pub struct TrainRegistry {
    trains: Vec<Train>,
    by_id: HashMap<TrainId, usize>,
}

impl TrainRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a train at a station of `network`.
    ///
    /// The station is checked before the id, so a train naming an unknown
    /// station is rejected as such even if its id is taken.
    pub fn create(
        &mut self,
        network: &Network,
        id: &str,
        line: &str,
        station: &str,
    ) -> Result<(), TrainError> {
        let position = network
            .station(station)
            .map(|s| s.name().clone())
            .ok_or_else(|| TrainError::UnknownStation(station.to_string()))?;

        let id = TrainId::parse(id)?;
        if self.by_id.contains_key(&id) {
            return Err(TrainError::DuplicateTrain(id));
        }
        let line = LineName::parse(line)?;

        debug!(train = %id, line = %line, station = %position, "Creating train");
        self.by_id.insert(id.clone(), self.trains.len());
        self.trains.push(Train { id, line, position });
        Ok(())
    }

    /// Get a train by id.
    pub fn get(&self, id: &str) -> Option<&Train> {
        self.by_id.get(id).map(|&idx| &self.trains[idx])
    }

    /// All trains, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Train> {
        self.trains.iter()
    }

    /// Returns the number of trains.
    pub fn len(&self) -> usize {
        self.trains.len()
    }

    /// Returns true if no trains are registered.
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }
}
