//! Text for listings and command feedback.

use crate::network::{NetworkError, Station};
use crate::trains::{Train, TrainError};

use super::CommandError;

/// One line per station, in creation order.
pub fn station_listing<'a>(stations: impl Iterator<Item = &'a Station>) -> Vec<String> {
    stations.map(|s| format!("       {}", s.name())).collect()
}

/// A station's connections, in stored order.
pub fn station_info(station: &Station) -> Vec<String> {
    let mut lines = vec![format!("*** Information for Station {} ***", station.name())];
    lines.extend(
        station
            .connections()
            .iter()
            .map(|c| format!("    {} Line - Next Station: {}", c.line(), c.target())),
    );
    lines
}

/// Every train with its line and position.
pub fn train_listing<'a>(trains: impl Iterator<Item = &'a Train>) -> Vec<String> {
    trains
        .flat_map(|t| {
            [
                format!("*** Information for Train {} ***", t.id),
                format!("      line: {}", t.line),
                format!("      Current Position: {}", t.position),
            ]
        })
        .collect()
}

/// A single train's line and position.
pub fn train_info(train: &Train) -> Vec<String> {
    vec![
        format!("*** Information for Train {} ***", train.id),
        format!("    Line: {}", train.line),
        format!("    Current Position: {}", train.position),
    ]
}

/// Feedback for a rejected `create station`.
pub fn create_station_error(err: &NetworkError) -> String {
    match err {
        NetworkError::DuplicateStation(name) => {
            format!("Station with the name {name} already exists.")
        }
        NetworkError::UnknownStation(_) | NetworkError::InvalidName(_) => err.to_string(),
    }
}

/// Feedback for a rejected `connect stations`.
pub fn connect_error(err: &NetworkError) -> String {
    match err {
        NetworkError::UnknownStation(name) => {
            format!("    {name} is not in the list of stations.")
        }
        NetworkError::DuplicateStation(_) | NetworkError::InvalidName(_) => {
            format!("    {err}")
        }
    }
}

/// Feedback for a rejected `plan trip`.
pub fn plan_error(err: &NetworkError) -> String {
    match err {
        NetworkError::UnknownStation(name) => format!("{name} is not in the list of stations."),
        NetworkError::DuplicateStation(_) | NetworkError::InvalidName(_) => err.to_string(),
    }
}

/// Feedback for a `plan trip` with no path.
pub fn no_route(start: &str, dest: &str) -> String {
    format!("No route from {start} to {dest}.")
}

/// Feedback for a rejected `create train`.
pub fn create_train_error(err: &TrainError) -> String {
    match err {
        TrainError::UnknownStation(name) => format!("    {name} isn't a station"),
        TrainError::DuplicateTrain(id) => format!("    Train with the id {id} already exists."),
        TrainError::InvalidName(_) => format!("    {err}"),
    }
}

/// Feedback for a line that is not a valid command.
pub fn command_error(err: &CommandError) -> String {
    match err {
        CommandError::InvalidFormat { .. } => "invalid format".to_string(),
        CommandError::Unknown(line) => format!("Unknown command {line}"),
    }
}
