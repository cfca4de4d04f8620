//! Get command resource definitions

use clap::Subcommand;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Show the user the client is logged in as
    User,
}
