//! spacectl - List and inspect tenant spaces on a management control plane
//!
//! A CLI client for a multi-tenant cluster-management control plane. It
//! resolves a stored credential into an authenticated API client, lists the
//! spaces visible to that identity and renders them as a table.
//!
//! # Example
//!
//! ```bash
//! # List the spaces you have access to
//! spacectl list spaces
//!
//! # CSV output without headers, for scripting
//! spacectl list spaces -o csv --no-header
//!
//! # Show the identity the client is logged in as
//! spacectl get user
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, GetResource, ListResource, OutputFormat, SpacesArgs};
pub use error::{CliError, Result};
pub use management::{
    run_get_user_command, run_list_spaces_command, AuthInfo, ClientConfig, ManagementClient,
    Space, SpaceEntry, SpaceList,
};
pub use output::{output_spaces, SpaceRow};
