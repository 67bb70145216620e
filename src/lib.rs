pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::{menu::MenuSession, roster::InMemoryRoster};
pub use crate::domain::model::{SessionSummary, Student};
pub use crate::domain::ports::RosterStore;
pub use crate::utils::error::{Result, RosterError};
