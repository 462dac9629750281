//! Domain types for the metro trip planner.
//!
//! Names arrive as raw command tokens; these types validate them once at
//! construction so the rest of the crate can trust them.

mod line;
mod name;
mod station;
mod train_id;

pub use line::LineName;
pub use name::InvalidName;
pub use station::StationName;
pub use train_id::TrainId;
