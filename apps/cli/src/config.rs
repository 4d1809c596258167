use std::{env, fmt, fs, io, path, time::Duration};

use pingtower_checks::ChecksClient;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read config: {0}")]
    ReadFailed(#[source] io::Error),
    #[error("Failed to write config: {0}")]
    WriteFailed(#[source] io::Error),
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[from] toml::ser::Error),
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("No config directory available, set XDG_CONFIG_HOME or HOME")]
    ConfigPathUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api: Api,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Api {
    /// Root of the checks API, without the `/api/v1` prefix
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

/// Config files are always TOML, whatever extension was given
fn with_toml_extension(path: &path::Path) -> path::PathBuf {
    match path.extension() {
        Some(ext) if ext == "toml" => path.to_path_buf(),
        _ => path.with_extension("toml"),
    }
}

/// `$XDG_CONFIG_HOME/pingtower/config.toml`, or under `~/.config`
fn default_config_path() -> Result<path::PathBuf, Error> {
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(path::PathBuf::from)
        .or_else(|| env::home_dir().map(|home| home.join(".config")))
        .ok_or(Error::ConfigPathUnavailable)?;

    Ok(config_home.join("pingtower").join("config.toml"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Api {
                base_url: "http://localhost:3000".into(),
                token: None,
                timeout_secs: default_timeout_secs(),
            },
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the token itself
        let token = if self.api.token.is_some() { "set" } else { "not set" };

        writeln!(f, "Current Configuration:")?;
        writeln!(f, "  Checks API")?;
        writeln!(f, "    Base URL: {}", self.api.base_url)?;
        writeln!(f, "    Token: {token}")?;
        writeln!(f, "    Timeout (s): {}", self.api.timeout_secs)
    }
}

impl Config {
    /// Generate Config structure from file
    ///
    /// Creates a default config in ~/.config/pingtower/config.toml
    ///  or the specified path, with the name config.toml if one does not exist
    pub fn from_config(optional_path: Option<impl AsRef<path::Path>>) -> Result<Self, Error> {
        let config_path: path::PathBuf = if let Some(path) = optional_path {
            with_toml_extension(path.as_ref())
        } else {
            default_config_path()?
        };

        if config_path.exists() {
            let raw_string = fs::read_to_string(&config_path).map_err(Error::ReadFailed)?;
            Ok(toml::from_str(raw_string.as_str())?)
        } else {
            tracing::info!("Writing default config to {}", config_path.display());
            let config = Self::default();
            config.write_config(&config_path)?;
            Ok(config)
        }
    }

    /// Serialize and write a config to a file
    pub fn write_config(&self, path: &path::Path) -> Result<(), Error> {
        let config_str: String = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(Error::WriteFailed)?;
        }

        fs::write(path, config_str).map_err(Error::WriteFailed)
    }

    /// Client for the configured checks API
    pub fn client(&self) -> anyhow::Result<ChecksClient> {
        let base_url = Url::parse(&self.api.base_url).map_err(Error::InvalidBaseUrl)?;
        let client = ChecksClient::new(base_url, Duration::from_secs(self.api.timeout_secs))?;

        Ok(match &self.api.token {
            Some(token) => client.with_token(token),
            None => client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/config");

        let config = Config::from_config(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("nested/config.toml").exists());
    }

    #[test]
    fn test_existing_config_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[api]\nbase_url = \"https://pingtower.example.com\"\ntoken = \"secret\"\n",
        )
        .unwrap();

        let config = Config::from_config(Some(&path)).unwrap();
        assert_eq!(config.api.base_url, "https://pingtower.example.com");
        assert_eq!(config.api.token.as_deref(), Some("secret"));
        assert_eq!(config.api.timeout_secs, 10);
        assert!(config.client().is_ok());
    }

    #[test]
    fn test_broken_config_reports_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\n").unwrap();

        assert!(matches!(Config::from_config(Some(&path)), Err(Error::ParseFailed(_))));
    }

    #[test]
    fn test_display_hides_token() {
        let mut config = Config::default();
        config.api.token = Some("secret".into());

        let rendered = config.to_string();
        assert!(rendered.contains("Token: set"));
        assert!(!rendered.contains("secret"));
    }
}
