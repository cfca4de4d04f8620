//! CLI argument parsing

mod common;
mod get;
mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use get::GetResource;
pub use list::{ListResource, SpacesArgs};

/// spacectl CLI
#[derive(Parser, Debug)]
#[command(name = "spacectl")]
#[command(version)]
#[command(about = "List and inspect tenant spaces on a management control plane", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the client config file (default: ~/.spacectl/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Suppress table and CSV headers
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    /// Batch mode - disables the progress spinner
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List resources you have access to
    List {
        #[command(subcommand)]
        resource: ListResource,
    },

    /// Get client configuration
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["spacectl", "list", "spaces"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(cli.config.is_none());
        assert!(!cli.no_header);
        assert!(!cli.batch);
    }

    #[test]
    fn test_cli_list_spaces_alias() {
        let cli = Cli::parse_from(["spacectl", "list", "space"]);
        match cli.command {
            Command::List {
                resource: ListResource::Spaces(_),
            } => {}
            _ => panic!("Expected list spaces command"),
        }
    }

    #[test]
    fn test_cli_config_flag_is_global() {
        let cli = Cli::parse_from(["spacectl", "list", "spaces", "--config", "/tmp/cfg.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/cfg.json")));
    }

    #[test]
    fn test_cli_output_format_flag() {
        let cli = Cli::parse_from(["spacectl", "list", "spaces", "-o", "json"]);
        let Command::List {
            resource: ListResource::Spaces(args),
        } = cli.command
        else {
            panic!("Expected list spaces command");
        };
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_get_user() {
        let cli = Cli::parse_from(["spacectl", "get", "user", "--no-header"]);
        assert!(cli.no_header);
        match cli.command {
            Command::Get {
                resource: GetResource::User,
            } => {}
            _ => panic!("Expected get user command"),
        }
    }

    #[test]
    fn test_cli_batch_and_log_level() {
        let cli = Cli::parse_from(["spacectl", "-l", "debug", "-b", "list", "spaces"]);
        assert_eq!(cli.log_level, "debug");
        assert!(cli.batch);
    }
}
