//! Execution of parsed commands.

use tracing::info;

use crate::network::Network;
use crate::planner::TripPlanner;
use crate::trains::TrainRegistry;

use super::Command;
use super::display;

/// The state a shell operates on: a network and the trains placed on it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    network: Network,
    trains: TrainRegistry,
}

impl Session {
    /// Create a session with an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session over an existing network.
    pub fn with_network(network: Network) -> Self {
        Self {
            network,
            trains: TrainRegistry::new(),
        }
    }

    /// The session's network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The session's trains.
    pub fn trains(&self) -> &TrainRegistry {
        &self.trains
    }

    /// Run a command and return the lines to print.
    pub fn execute(&mut self, command: &Command) -> Vec<String> {
        match command {
            Command::CreateStation { name } => match self.network.add_station(name) {
                Ok(()) => Vec::new(),
                Err(e) => {
                    info!(error = %e, "Station not created");
                    vec![display::create_station_error(&e)]
                }
            },
            Command::ConnectStations { a, b, line } => match self.network.connect(a, b, line) {
                Ok(()) => Vec::new(),
                Err(e) => {
                    info!(error = %e, "Stations not connected");
                    vec![display::connect_error(&e)]
                }
            },
            Command::PlanTrip { start, dest } => {
                match TripPlanner::new(&mut self.network).plan(start, dest) {
                    Ok(route) if route.is_empty() => vec![display::no_route(start, dest)],
                    Ok(route) => vec![route.render()],
                    Err(e) => {
                        info!(error = %e, "Trip not planned");
                        vec![display::plan_error(&e)]
                    }
                }
            }
            Command::CreateTrain { id, line, station } => {
                match self.trains.create(&self.network, id, line, station) {
                    Ok(()) => Vec::new(),
                    Err(e) => {
                        info!(error = %e, "Train not created");
                        vec![display::create_train_error(&e)]
                    }
                }
            }
            Command::DisplayStations => display::station_listing(self.network.stations()),
            Command::DisplayTrains => display::train_listing(self.trains.iter()),
            Command::StationInfo { name } => match self.network.station(name) {
                Some(station) => display::station_info(station),
                None => vec![format!("Unable to find station: {name}")],
            },
            Command::TrainInfo { id } => match self.trains.get(id) {
                Some(train) => display::train_info(train),
                None => vec![format!("Unable to find train: {id}")],
            },
            Command::Exit => Vec::new(),
        }
    }
}
