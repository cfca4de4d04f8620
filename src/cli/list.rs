//! List command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'list' command
#[derive(Subcommand, Debug)]
pub enum ListResource {
    /// List the spaces you have access to
    #[command(visible_alias = "space")]
    Spaces(SpacesArgs),
}

/// Arguments for 'list spaces'
#[derive(Parser, Debug)]
pub struct SpacesArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
