//! Client configuration resolution

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::config::client as client_config;
use crate::error::{CliError, Result};

/// Stored client configuration for the management API
#[derive(Deserialize, Debug, Clone)]
pub struct ClientConfig {
    /// Management API endpoint, including the scheme
    #[serde(default)]
    pub host: String,

    /// Access key used as the bearer credential
    #[serde(rename = "accessKey", default)]
    pub access_key: String,

    /// Name of the user the access key was issued to
    #[serde(default)]
    pub user: Option<String>,
}

/// The authenticated caller, resolved once per invocation
#[derive(Debug, Clone)]
pub struct AuthInfo {
    /// Display name of the authenticated user
    pub name: String,
}

impl ClientConfig {
    /// Load the client configuration from `path`, falling back to the
    /// default location (~/.spacectl/config.json).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path(),
        };

        debug!("Loading client config from: {}", config_path.display());

        let content = fs::read_to_string(&config_path).map_err(|e| {
            CliError::Config(format!(
                "Failed to read client config {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: ClientConfig = serde_json::from_str(&content).map_err(|e| {
            CliError::Config(format!(
                "Failed to parse client config {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate(&config_path)?;
        Ok(config)
    }

    /// Resolve the identity stored alongside the credential
    pub fn auth_info(&self) -> Result<AuthInfo> {
        match self.user.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(AuthInfo {
                name: name.to_string(),
            }),
            _ => Err(CliError::Config(
                "auth info: config carries no authenticated user".to_string(),
            )),
        }
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(CliError::Config(format!(
                "No management endpoint in {}",
                path.display()
            )));
        }
        if self.access_key.trim().is_empty() {
            return Err(CliError::Config(format!(
                "No access key in {}",
                path.display()
            )));
        }
        Ok(())
    }

    /// Default client config file path (~/.spacectl/config.json)
    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(client_config::DIR_NAME)
            .join(client_config::FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
                "host": "https://mgmt.example.com",
                "accessKey": "abcd1234",
                "user": "alice"
            }"#,
        );

        let config = ClientConfig::load(Some(&path)).unwrap();
        assert_eq!(config.host, "https://mgmt.example.com");
        assert_eq!(config.access_key, "abcd1234");
        assert_eq!(config.user, Some("alice".to_string()));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.json");

        let err = ClientConfig::load(Some(&path)).unwrap_err();
        match err {
            CliError::Config(msg) => assert!(msg.contains("Failed to read")),
            _ => panic!("Expected CliError::Config"),
        }
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{not valid json");

        let err = ClientConfig::load(Some(&path)).unwrap_err();
        match err {
            CliError::Config(msg) => assert!(msg.contains("Failed to parse")),
            _ => panic!("Expected CliError::Config"),
        }
    }

    #[test]
    fn test_load_missing_access_key() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"host": "https://mgmt.example.com", "user": "alice"}"#,
        );

        let err = ClientConfig::load(Some(&path)).unwrap_err();
        match err {
            CliError::Config(msg) => assert!(msg.contains("No access key")),
            _ => panic!("Expected CliError::Config"),
        }
    }

    #[test]
    fn test_load_missing_host() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"accessKey": "abcd1234", "user": "alice"}"#);

        let err = ClientConfig::load(Some(&path)).unwrap_err();
        match err {
            CliError::Config(msg) => assert!(msg.contains("No management endpoint")),
            _ => panic!("Expected CliError::Config"),
        }
    }

    #[test]
    fn test_auth_info_resolves_user() {
        let config = ClientConfig {
            host: "https://mgmt.example.com".to_string(),
            access_key: "abcd1234".to_string(),
            user: Some("alice".to_string()),
        };
        assert_eq!(config.auth_info().unwrap().name, "alice");
    }

    #[test]
    fn test_auth_info_missing_user() {
        let config = ClientConfig {
            host: "https://mgmt.example.com".to_string(),
            access_key: "abcd1234".to_string(),
            user: None,
        };
        let err = config.auth_info().unwrap_err();
        match err {
            CliError::Config(msg) => assert!(msg.starts_with("auth info")),
            _ => panic!("Expected CliError::Config"),
        }
    }

    #[test]
    fn test_auth_info_blank_user() {
        let config = ClientConfig {
            host: "https://mgmt.example.com".to_string(),
            access_key: "abcd1234".to_string(),
            user: Some("   ".to_string()),
        };
        assert!(config.auth_info().is_err());
    }
}
