//! Management API client module
//!
//! Resolves the stored client configuration into an authenticated client
//! and exposes the typed API calls built on top of it.

mod client;
mod config;
pub mod spaces;
pub mod users;

pub use client::ManagementClient;
pub use config::{AuthInfo, ClientConfig};
pub use spaces::{
    run_list_spaces_command, SleepModeConfig, SleepModeStatus, Space, SpaceEntry, SpaceList,
    SpaceStatus,
};
pub use users::run_get_user_command;
