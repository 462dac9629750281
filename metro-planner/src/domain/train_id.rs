//! Train identifier type.

use std::borrow::Borrow;
use std::fmt;

use super::name::{InvalidName, validate};

/// The identifier of a train tracked by the shell.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TrainId(String);

impl TrainId {
    /// Parse a train identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidName> {
        validate("train", s)?;
        Ok(TrainId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TrainId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.0)
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let id = TrainId::parse("T100").unwrap();
        assert_eq!(id.to_string(), "T100");
        assert!(TrainId::parse("").is_err());
    }
}
