//! Trip planner.
//!
//! Answers "how do I get from station A to station B" over a [`Network`],
//! and turns the path it finds into ride and transfer instructions.
//!
//! [`Network`]: crate::network::Network

mod route;
mod search;

pub use route::{Route, Step};
pub use search::TripPlanner;
