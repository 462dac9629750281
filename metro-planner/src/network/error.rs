//! Network error types.

use crate::domain::{InvalidName, StationName};

/// Errors from network mutation and lookup.
///
/// A failed operation never leaves the network partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A station with this name already exists
    #[error("station {0} already exists")]
    DuplicateStation(StationName),

    /// The named station is not part of the network
    #[error("unknown station {0}")]
    UnknownStation(String),

    /// A station or line name is malformed
    #[error(transparent)]
    InvalidName(#[from] InvalidName),
}
