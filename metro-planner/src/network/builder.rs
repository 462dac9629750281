//! Fluent construction of networks.

use super::{Network, NetworkError};

/// Builder for creating networks.
///
/// Requests are applied in order; the first failure is kept and reported
/// by [`NetworkBuilder::build`], later requests are ignored.
///
/// # Example
///
/// ```
/// use metro_planner::network::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .stations(["S1", "S2", "S3"])
///     .connect("S1", "S2", "Red")
///     .connect("S2", "S3", "Blue")
///     .build()
///     .unwrap();
///
/// assert_eq!(network.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
    error: Option<NetworkError>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(mut self, name: &str) -> Self {
        if self.error.is_none() {
            self.error = self.inner.add_station(name).err();
        }
        self
    }

    /// Add several stations, in order.
    pub fn stations<'a>(self, names: impl IntoIterator<Item = &'a str>) -> Self {
        names.into_iter().fold(self, |builder, name| builder.station(name))
    }

    /// Connect two stations on a line.
    pub fn connect(mut self, a: &str, b: &str, line: &str) -> Self {
        if self.error.is_none() {
            self.error = self.inner.connect(a, b, line).err();
        }
        self
    }

    /// Build the network, or return the first error encountered.
    pub fn build(self) -> Result<Network, NetworkError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.inner),
        }
    }
}
