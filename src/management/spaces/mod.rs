//! Space resource module

mod api;
mod commands;
mod models;

pub use commands::run_list_spaces_command;
pub use models::{SleepModeConfig, SleepModeStatus, Space, SpaceEntry, SpaceList, SpaceStatus};
