pub mod menu;
pub mod roster;

pub use crate::domain::model::{SessionSummary, Student};
pub use crate::domain::ports::RosterStore;
pub use crate::utils::error::Result;
