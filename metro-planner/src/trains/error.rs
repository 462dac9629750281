//! Train registry error types.

use crate::domain::{InvalidName, TrainId};

/// Errors from registering trains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrainError {
    /// A train with this id is already registered
    #[error("train {0} already exists")]
    DuplicateTrain(TrainId),

    /// The train's starting station is not in the network
    #[error("unknown station {0}")]
    UnknownStation(String),

    /// The train id or line label is malformed
    #[error(transparent)]
    InvalidName(#[from] InvalidName),
}
