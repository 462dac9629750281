//! Parsing of shell commands.
//!
//! Each input line is split on whitespace and matched against a fixed set
//! of command words. Arguments are passed on as raw tokens; the network
//! and train registry validate them.

use std::str::FromStr;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create station NAME`
    CreateStation { name: String },
    /// `connect stations A B LINE`
    ConnectStations { a: String, b: String, line: String },
    /// `plan trip START DEST`
    PlanTrip { start: String, dest: String },
    /// `create train ID LINE STATION`
    CreateTrain {
        id: String,
        line: String,
        station: String,
    },
    /// `display stations`
    DisplayStations,
    /// `display trains`
    DisplayTrains,
    /// `get station info NAME`
    StationInfo { name: String },
    /// `get train info ID`
    TrainInfo { id: String },
    /// `exit`
    Exit,
}

/// Error from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// A known command with the wrong number of arguments
    #[error("invalid format for {command}: expected {expected} argument(s)")]
    InvalidFormat {
        command: &'static str,
        expected: usize,
    },

    /// Not a known command
    #[error("unknown command {0:?}")]
    Unknown(String),
}

fn args<const N: usize>(
    command: &'static str,
    rest: &[&str],
) -> Result<[String; N], CommandError> {
    let invalid = || CommandError::InvalidFormat {
        command,
        expected: N,
    };
    let array: [&str; N] = rest.try_into().map_err(|_| invalid())?;
    Ok(array.map(|s| s.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let command = match tokens.as_slice() {
            ["exit"] => Command::Exit,
            ["create", "station", rest @ ..] => {
                let [name] = args::<1>("create station", rest)?;
                Command::CreateStation { name }
            }
            ["connect", "stations", rest @ ..] => {
                let [a, b, line] = args::<3>("connect stations", rest)?;
                Command::ConnectStations { a, b, line }
            }
            ["plan", "trip", rest @ ..] => {
                let [start, dest] = args::<2>("plan trip", rest)?;
                Command::PlanTrip { start, dest }
            }
            ["create", "train", rest @ ..] => {
                let [id, line, station] = args::<3>("create train", rest)?;
                Command::CreateTrain { id, line, station }
            }
            ["display", "stations"] => Command::DisplayStations,
            ["display", "trains"] => Command::DisplayTrains,
            ["get", "station", "info", rest @ ..] => {
                let [name] = args::<1>("get station info", rest)?;
                Command::StationInfo { name }
            }
            ["get", "train", "info", rest @ ..] => {
                let [id] = args::<1>("get train info", rest)?;
                Command::TrainInfo { id }
            }
            _ => return Err(CommandError::Unknown(line.to_string())),
        };

        Ok(command)
    }
}
