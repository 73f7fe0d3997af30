//! The `zeus.toml` configuration file.
//!
//! ```toml
//! [directory]
//! path = "publications.json"
//!
//! [[api_keys]]
//! name = "hgv-portal"
//! sha256 = "<hex digest from `zeus hash-key`>"
//! permissions = { publications = ["read"] }
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};
use zeus_core::{ApiKeyRecord, ApiKeyRegistry};

/// Directory export used when neither flag, environment nor config names one.
pub const DEFAULT_DIRECTORY: &str = "publications.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub directory: DirectorySection,
    #[serde(default)]
    pub api_keys: Vec<ApiKeyRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorySection {
    pub path: Option<PathBuf>,
}

impl Config {
    /// Reads the config at `path`. A missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };
        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(
            path = %path.display(),
            api_keys = config.api_keys.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// The directory export to read: `explicit` (flag or environment) first,
    /// then the config file, then [`DEFAULT_DIRECTORY`].
    ///
    /// A relative path in the config file is taken relative to `config_dir`.
    pub fn directory_path(&self, explicit: Option<&Path>, config_dir: &Path) -> PathBuf {
        match (explicit, &self.directory.path) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(path)) if path.is_relative() => config_dir.join(path),
            (None, Some(path)) => path.clone(),
            (None, None) => PathBuf::from(DEFAULT_DIRECTORY),
        }
    }

    pub fn api_key_registry(&self) -> ApiKeyRegistry {
        ApiKeyRegistry::new(self.api_keys.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_directory() {
        let config: Config = toml::from_str(
            r#"
            [directory]
            path = "data/publications.csv"

            [[api_keys]]
            name = "portal"
            sha256 = "abc"
            permissions = { publications = ["read"] }

            [[api_keys]]
            name = "retired"
            sha256 = "def"
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(config.api_keys.len(), 2);
        assert!(config.api_keys[0].enabled);
        assert!(!config.api_keys[1].enabled);
        assert!(config.api_keys[1].permissions.is_empty());
        assert_eq!(
            config.directory_path(None, Path::new("/etc/zeus")),
            PathBuf::from("/etc/zeus/data/publications.csv")
        );
    }

    #[test]
    fn directory_precedence() {
        let empty = Config::default();
        assert_eq!(
            empty.directory_path(None, Path::new("")),
            PathBuf::from(DEFAULT_DIRECTORY)
        );
        let configured: Config = toml::from_str("[directory]\npath = \"/srv/p.json\"").unwrap();
        assert_eq!(
            configured.directory_path(None, Path::new("/etc")),
            PathBuf::from("/srv/p.json")
        );
        assert_eq!(
            configured.directory_path(Some(Path::new("flag.csv")), Path::new("/etc")),
            PathBuf::from("flag.csv")
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("[directory]\nfile = \"x\"").is_err());
    }
}
