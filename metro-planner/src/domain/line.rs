//! Line label type.

use std::fmt;

use super::name::{InvalidName, validate};

/// The label of a metro line, attached to connections.
///
/// A line is not an entity of its own: it is a tag shared by every
/// connection that runs on it, used to detect transfers.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineName(String);

impl LineName {
    /// Parse a line label.
    pub fn parse(s: &str) -> Result<Self, InvalidName> {
        validate("line", s)?;
        Ok(LineName(s.to_string()))
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineName({})", self.0)
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
