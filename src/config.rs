//! Endpoint configuration - explicit struct handed to the network layer
//!
//! Values come from `~/.reachout/config.yaml` when present, with the
//! `REACHOUT_API_URL` / `REACHOUT_API_KEY` environment variables taking
//! precedence over the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR, CONFIG_FILE, ENV_API_KEY, ENV_API_URL};

/// Resolved contact endpoint configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
}

/// On-disk shape; both keys optional so the file can hold either one
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    api_key: Option<String>,
}

impl Config {
    /// Load configuration from the default file location and environment
    pub fn load() -> Result<Self> {
        let path = default_config_path();
        Self::resolve(
            path.as_deref(),
            std::env::var(ENV_API_URL).ok(),
            std::env::var(ENV_API_KEY).ok(),
        )
    }

    /// Merge file and environment sources; environment wins
    fn resolve(
        file: Option<&Path>,
        env_url: Option<String>,
        env_key: Option<String>,
    ) -> Result<Self> {
        let file_cfg = match file {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                serde_yaml::from_str::<ConfigFile>(&content)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            _ => ConfigFile::default(),
        };

        let api_url = env_url.or(file_cfg.api_url).with_context(|| {
            format!(
                "contact endpoint URL not configured; set {} or add api_url to ~/{}/{}",
                ENV_API_URL, CONFIG_DIR, CONFIG_FILE
            )
        })?;
        let api_key = env_key.or(file_cfg.api_key).with_context(|| {
            format!(
                "contact endpoint API key not configured; set {} or add api_key to ~/{}/{}",
                ENV_API_KEY, CONFIG_DIR, CONFIG_FILE
            )
        })?;

        Ok(Config { api_url, api_key })
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_only() {
        let config = Config::resolve(
            None,
            Some("https://api.example.com/contact".into()),
            Some("secret".into()),
        )
        .unwrap();
        assert_eq!(config.api_url, "https://api.example.com/contact");
        assert_eq!(config.api_key, "secret");
    }

    #[test]
    fn test_file_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "api_url: https://api.example.com/contact\napi_key: from-file\n",
        )
        .unwrap();

        let config = Config::resolve(Some(&path), None, None).unwrap();
        assert_eq!(config.api_url, "https://api.example.com/contact");
        assert_eq!(config.api_key, "from-file");
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "api_url: https://file.example.com\napi_key: from-file\n",
        )
        .unwrap();

        let config =
            Config::resolve(Some(&path), Some("https://env.example.com".into()), None).unwrap();
        assert_eq!(config.api_url, "https://env.example.com");
        assert_eq!(config.api_key, "from-file");
    }

    #[test]
    fn test_missing_key_errors() {
        let err = Config::resolve(None, Some("https://env.example.com".into()), None)
            .unwrap_err()
            .to_string();
        assert!(err.contains(ENV_API_KEY));
    }

    #[test]
    fn test_missing_url_errors() {
        let err = Config::resolve(None, None, Some("secret".into()))
            .unwrap_err()
            .to_string();
        assert!(err.contains(ENV_API_URL));
    }

    #[test]
    fn test_absent_file_falls_back_to_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let config = Config::resolve(
            Some(&path),
            Some("https://env.example.com".into()),
            Some("secret".into()),
        )
        .unwrap();
        assert_eq!(config.api_url, "https://env.example.com");
    }
}
