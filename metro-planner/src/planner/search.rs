//! Depth-first trip search.
//!
//! Finds the first path discovered by a depth-first walk that tries each
//! station's connections in insertion order. This is not a shortest-path
//! search: once a branch reaches the destination, that branch is the answer.

use tracing::{debug, trace};

use crate::domain::LineName;
use crate::network::{Network, NetworkError};

use super::route::{Route, Step};

/// A station on the current search path.
#[derive(Debug)]
struct Frame {
    slot: usize,
    /// Index of the next connection to try.
    next: usize,
    /// Line ridden to reach this station.
    arrived_on: Option<LineName>,
}

/// Trip planner over a borrowed network.
///
/// The planner holds the network exclusively for its lifetime, since a
/// search writes the stations' visited markers.
pub struct TripPlanner<'a> {
    network: &'a mut Network,
}

impl<'a> TripPlanner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a mut Network) -> Self {
        Self { network }
    }

    /// Plan a trip from `start` to `dest`.
    ///
    /// Returns an empty [`Route`] when the stations exist but are not
    /// connected. Unknown stations are rejected before any marker is
    /// touched. Every marker is clear when this returns.
    pub fn plan(&mut self, start: &str, dest: &str) -> Result<Route, NetworkError> {
        let start_slot = self.network.require_slot(start)?;
        let dest_slot = self.network.require_slot(dest)?;

        self.network.reset_visited();
        let (route, explored) = self.search(start_slot, dest_slot);
        self.network.reset_visited();

        debug!(
            start,
            dest,
            explored,
            found = !route.is_empty(),
            transfers = route.transfer_count(),
            "Trip search complete"
        );

        Ok(route)
    }

    fn search(&mut self, start: usize, dest: usize) -> (Route, usize) {
        if start == dest {
            let origin = self.network.station_at(start).name().clone();
            let step = Step {
                station: origin,
                line: None,
            };
            return (Route::from_steps(vec![step]), 0);
        }

        self.network.mark_visited(start);
        let mut stack = vec![Frame {
            slot: start,
            next: 0,
            arrived_on: None,
        }];
        let mut explored = 1;

        while let Some(frame) = stack.last_mut() {
            let connections = self.network.station_at(frame.slot).connections();
            let Some(connection) = connections.get(frame.next) else {
                // Exhausted; the marker stays set so siblings don't retry it.
                stack.pop();
                continue;
            };
            frame.next += 1;

            let target = connection.target_slot();
            let line = connection.line().clone();

            if self.network.visited_at(target) {
                continue;
            }

            if target == dest {
                stack.push(Frame {
                    slot: target,
                    next: 0,
                    arrived_on: Some(line),
                });
                return (self.route_from(stack), explored);
            }

            trace!(
                station = %self.network.station_at(target).name(),
                line = %line,
                depth = stack.len(),
                "Descending"
            );

            self.network.mark_visited(target);
            stack.push(Frame {
                slot: target,
                next: 0,
                arrived_on: Some(line),
            });
            explored += 1;
        }

        (Route::not_found(), explored)
    }

    fn route_from(&self, stack: Vec<Frame>) -> Route {
        let steps = stack
            .into_iter()
            .map(|frame| Step {
                station: self.network.station_at(frame.slot).name().clone(),
                line: frame.arrived_on,
            })
            .collect();
        Route::from_steps(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkBuilder;

    fn names(route: &Route) -> Vec<&str> {
        route.stations().map(|s| s.as_str()).collect()
    }

    fn assert_markers_clear(network: &Network) {
        assert!(network.stations().all(|s| !s.is_visited()));
    }

    fn scenario() -> Network {
        NetworkBuilder::new()
            .stations(["S1", "S2", "S3", "S4"])
            .connect("S1", "S2", "Red")
            .connect("S2", "S3", "Blue")
            .build()
            .unwrap()
    }

    #[test]
    fn transfer_scenario() {
        let mut network = scenario();
        let route = TripPlanner::new(&mut network).plan("S1", "S3").unwrap();

        assert_eq!(names(&route), vec!["S1", "S2", "S3"]);
        assert_eq!(
            route.render(),
            "start on the Red line --> S2 --> transfer from Red line to Blue line --> S3"
        );
        assert_markers_clear(&network);
    }

    #[test]
    fn same_start_and_destination() {
        let mut network = scenario();
        let route = TripPlanner::new(&mut network).plan("S1", "S1").unwrap();

        assert_eq!(names(&route), vec!["S1"]);
        assert_eq!(route.render(), "S1");
        assert!(route.lines().is_empty());
    }

    #[test]
    fn disconnected_station_is_not_found() {
        let mut network = scenario();
        let route = TripPlanner::new(&mut network).plan("S1", "S4").unwrap();

        assert!(route.is_empty());
        assert_markers_clear(&network);
    }

    #[test]
    fn unknown_station_is_an_error() {
        let mut network = scenario();
        let mut planner = TripPlanner::new(&mut network);

        assert_eq!(
            planner.plan("S1", "ghost").unwrap_err(),
            NetworkError::UnknownStation("ghost".into())
        );
        assert_eq!(
            planner.plan("ghost", "S1").unwrap_err(),
            NetworkError::UnknownStation("ghost".into())
        );
    }

    #[test]
    fn unknown_station_leaves_markers_alone() {
        let mut network = scenario();
        let slot = network.slot("S2").unwrap();
        network.mark_visited(slot);

        let result = TripPlanner::new(&mut network).plan("S1", "ghost");

        assert!(result.is_err());
        assert!(network.is_visited("S2"));
    }

    #[test]
    fn first_discovered_not_shortest() {
        // C is connected to A before B, so the longer branch through C wins.
        let mut network = NetworkBuilder::new()
            .stations(["A", "B", "C", "C2", "D"])
            .connect("A", "C", "Slow")
            .connect("A", "B", "Fast")
            .connect("C", "C2", "Slow")
            .connect("C2", "D", "Slow")
            .connect("B", "D", "Fast")
            .build()
            .unwrap();

        let route = TripPlanner::new(&mut network).plan("A", "D").unwrap();
        assert_eq!(names(&route), vec!["A", "C", "C2", "D"]);
    }

    #[test]
    fn insertion_order_decides_between_equal_branches() {
        let mut network = NetworkBuilder::new()
            .stations(["A", "B", "C", "D"])
            .connect("A", "B", "Red")
            .connect("A", "C", "Blue")
            .connect("B", "D", "Red")
            .connect("C", "D", "Blue")
            .build()
            .unwrap();
        let route = TripPlanner::new(&mut network).plan("A", "D").unwrap();
        assert_eq!(names(&route), vec!["A", "B", "D"]);

        let mut network = NetworkBuilder::new()
            .stations(["A", "B", "C", "D"])
            .connect("A", "C", "Blue")
            .connect("A", "B", "Red")
            .connect("B", "D", "Red")
            .connect("C", "D", "Blue")
            .build()
            .unwrap();
        let route = TripPlanner::new(&mut network).plan("A", "D").unwrap();
        assert_eq!(names(&route), vec!["A", "C", "D"]);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let mut network = NetworkBuilder::new()
            .stations(["A", "Dead1", "Dead2", "B", "Z"])
            .connect("A", "Dead1", "Spur")
            .connect("Dead1", "Dead2", "Spur")
            .connect("A", "B", "Main")
            .connect("B", "Z", "Main")
            .build()
            .unwrap();

        let route = TripPlanner::new(&mut network).plan("A", "Z").unwrap();
        assert_eq!(names(&route), vec!["A", "B", "Z"]);
        assert_eq!(route.render(), "start on the Main line --> B --> Z");
    }

    #[test]
    fn cycles_terminate() {
        let mut network = NetworkBuilder::new()
            .stations(["A", "B", "C", "Island"])
            .connect("A", "B", "Ring")
            .connect("B", "C", "Ring")
            .connect("C", "A", "Ring")
            .build()
            .unwrap();

        let route = TripPlanner::new(&mut network).plan("A", "Island").unwrap();
        assert!(route.is_empty());
        assert_markers_clear(&network);
    }

    #[test]
    fn parallel_connections_use_first_line() {
        let mut network = NetworkBuilder::new()
            .stations(["A", "B"])
            .connect("A", "B", "Red")
            .connect("A", "B", "Blue")
            .build()
            .unwrap();

        let route = TripPlanner::new(&mut network).plan("A", "B").unwrap();
        assert_eq!(route.render(), "start on the Red line --> B");
    }

    #[test]
    fn rejoining_a_line_is_reported() {
        let mut network = NetworkBuilder::new()
            .stations(["A", "B", "C", "D"])
            .connect("A", "B", "Red")
            .connect("B", "C", "Blue")
            .connect("C", "D", "Red")
            .build()
            .unwrap();

        let route = TripPlanner::new(&mut network).plan("A", "D").unwrap();
        let lines: Vec<_> = route.lines().iter().map(|l| l.as_str()).collect();
        assert_eq!(lines, vec!["Red", "Blue", "Red"]);
        assert_eq!(route.transfer_count(), 2);
    }

    #[test]
    fn repeated_plans_are_identical() {
        let mut network = scenario();
        let mut planner = TripPlanner::new(&mut network);

        let first = planner.plan("S3", "S1").unwrap();
        let second = planner.plan("S3", "S1").unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.render(),
            "start on the Blue line --> S2 --> transfer from Blue line to Red line --> S1"
        );
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let names: Vec<String> = (0..50_000).map(|i| format!("N{i}")).collect();
        let mut builder = NetworkBuilder::new().stations(names.iter().map(String::as_str));
        for pair in names.windows(2) {
            builder = builder.connect(&pair[0], &pair[1], "Long");
        }
        let mut network = builder.build().unwrap();

        let route = TripPlanner::new(&mut network).plan("N0", "N49999").unwrap();
        assert_eq!(route.steps().len(), 50_000);
        assert_eq!(route.transfer_count(), 0);
    }
}
