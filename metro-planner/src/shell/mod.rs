//! Command shell for the metro system.
//!
//! A thin adapter that turns text commands into calls on the network, the
//! trip planner and the train registry, and formats what they return.

mod command;
mod config;
mod display;
mod repl;
mod session;

pub use command::{Command, CommandError};
pub use config::ShellConfig;
pub use repl::Shell;
pub use session::Session;
