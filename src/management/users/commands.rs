//! User command handlers

use comfy_table::{presets::NOTHING, Table};

use crate::cli::Cli;
use crate::error::Result;
use crate::management::ClientConfig;

/// Run the 'get user' command: print the identity and endpoint the client
/// is logged in with. Reads only the local config; no network call.
pub fn run_get_user_command(cli: &Cli) -> Result<()> {
    let config = ClientConfig::load(cli.config.as_deref())?;
    let auth_info = config.auth_info()?;

    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !cli.no_header {
        table.set_header(vec!["User", "Endpoint"]);
    }
    table.add_row(vec![auth_info.name.as_str(), config.host.as_str()]);

    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::Parser;

    #[test]
    fn test_get_user_missing_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("missing.json");
        let path = config_path.display().to_string();
        let cli = Cli::parse_from(["spacectl", "get", "user", "--config", path.as_str()]);

        let err = run_get_user_command(&cli).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_get_user_prints_identity() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(
            &config_path,
            r#"{"host": "https://mgmt.example.com", "accessKey": "abcd", "user": "alice"}"#,
        )
        .unwrap();

        let path = config_path.display().to_string();
        let cli = Cli::parse_from(["spacectl", "get", "user", "--config", path.as_str()]);

        assert!(run_get_user_command(&cli).is_ok());
    }
}
