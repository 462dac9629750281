//! Station name type.

use std::borrow::Borrow;
use std::fmt;

use super::name::{InvalidName, validate};

/// The unique name of a station in a metro network.
///
/// Any `StationName` is non-empty and free of whitespace.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationName;
///
/// let penn = StationName::parse("Penn").unwrap();
/// assert_eq!(penn.as_str(), "Penn");
///
/// // Names are single tokens
/// assert!(StationName::parse("Penn Station").is_err());
/// assert!(StationName::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name.
    pub fn parse(s: &str) -> Result<Self, InvalidName> {
        validate("station", s)?;
        Ok(StationName(s.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
