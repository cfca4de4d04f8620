//! User resource module

mod commands;

pub use commands::run_get_user_command;
