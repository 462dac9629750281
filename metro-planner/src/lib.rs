//! Metro trip planner.
//!
//! Models a transit network of stations joined by named lines and answers
//! "how do I get from station A to station B", including where to change
//! lines.

pub mod domain;
pub mod network;
pub mod planner;
pub mod shell;
pub mod trains;
