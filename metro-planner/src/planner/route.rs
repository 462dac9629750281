//! Planned routes and their rendering.

use std::fmt;

use crate::domain::{LineName, StationName};

/// One station on a route, with the line taken to arrive there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The station reached.
    pub station: StationName,
    /// The line ridden to reach it; `None` for the origin.
    pub line: Option<LineName>,
}

/// The result of a trip-planning query.
///
/// An empty route means no path exists between the requested stations.
/// Otherwise the first step is the origin and the last is the destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    steps: Vec<Step>,
}

impl Route {
    /// A route representing "no path found".
    pub fn not_found() -> Self {
        Self::default()
    }

    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Returns true if no path was found.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps of the route, origin first.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The stations of the route, origin first.
    pub fn stations(&self) -> impl Iterator<Item = &StationName> {
        self.steps.iter().map(|step| &step.station)
    }

    /// The lines ridden, in travel order, with consecutive repeats collapsed.
    ///
    /// A line left and later rejoined appears twice.
    pub fn lines(&self) -> Vec<&LineName> {
        let mut lines: Vec<&LineName> = Vec::new();
        for line in self.steps.iter().filter_map(|step| step.line.as_ref()) {
            if lines.last() != Some(&line) {
                lines.push(line);
            }
        }
        lines
    }

    /// Number of times the route changes line.
    pub fn transfer_count(&self) -> usize {
        self.lines().len().saturating_sub(1)
    }

    /// Render the route as ride and transfer instructions.
    ///
    /// ```
    /// use metro_planner::network::NetworkBuilder;
    /// use metro_planner::planner::TripPlanner;
    ///
    /// let mut network = NetworkBuilder::new()
    ///     .stations(["S1", "S2", "S3"])
    ///     .connect("S1", "S2", "Red")
    ///     .connect("S2", "S3", "Blue")
    ///     .build()
    ///     .unwrap();
    ///
    /// let route = TripPlanner::new(&mut network).plan("S1", "S3").unwrap();
    /// assert_eq!(
    ///     route.render(),
    ///     "start on the Red line --> S2 --> transfer from Red line to Blue line --> S3"
    /// );
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((origin, rest)) = self.steps.split_first() else {
            return Ok(());
        };

        if rest.is_empty() {
            return write!(f, "{}", origin.station);
        }

        let mut active: Option<&LineName> = None;
        for step in rest {
            let Some(line) = step.line.as_ref() else {
                continue;
            };
            match active {
                None => write!(f, "start on the {line} line")?,
                Some(prev) if prev != line => {
                    write!(f, " --> transfer from {prev} line to {line} line")?
                }
                Some(_) => {}
            }
            active = Some(line);
            write!(f, " --> {}", step.station)?;
        }

        Ok(())
    }
}
