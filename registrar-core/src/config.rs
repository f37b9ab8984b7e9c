//! Global registrar configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{RegistrarError, RegistrarResult};
use crate::notify::{DEFAULT_DISPLAY_MS, DEFAULT_EXIT_MS, NoticeTiming};
use crate::page::PageKind;

static DEFAULT_DATA_DIR: &str = "~/.local/share/registrar";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_display_ms() -> u64 {
    DEFAULT_DISPLAY_MS
}

fn default_exit_ms() -> u64 {
    DEFAULT_EXIT_MS
}

/// Configuration at ~/.config/registrar/config.toml
///
/// Any key can be overridden with a `REGISTRAR_` environment variable,
/// e.g. `REGISTRAR_DATA_DIR`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RegistrarConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Refuse writes once the store holds this many bytes.
    #[serde(default)]
    pub quota_bytes: Option<usize>,

    #[serde(default = "default_display_ms")]
    pub notice_display_ms: u64,

    #[serde(default = "default_exit_ms")]
    pub notice_exit_ms: u64,

    /// Page rendered when none is named on the command line.
    #[serde(default)]
    pub default_page: Option<PageKind>,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        RegistrarConfig {
            data_dir: default_data_dir(),
            quota_bytes: None,
            notice_display_ms: DEFAULT_DISPLAY_MS,
            notice_exit_ms: DEFAULT_EXIT_MS,
            default_page: None,
        }
    }
}

impl RegistrarConfig {
    pub fn config_path() -> RegistrarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RegistrarError::Config("Could not determine config directory".into()))?
            .join("registrar");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, writing a commented-out default first if there
    /// is none yet.
    pub fn load() -> RegistrarResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> RegistrarResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("REGISTRAR"))
            .build()
            .map_err(|e| RegistrarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RegistrarError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RegistrarResult<()> {
        let contents = format!(
            "\
# registrar configuration

# Where the record store lives:
# data_dir = \"{}\"

# Refuse writes once the store reaches this size (bytes):
# quota_bytes = 5242880

# How long notices stay on screen, and how long they take to leave (ms):
# notice_display_ms = {}
# notice_exit_ms = {}

# Page rendered by `registrar page` when none is given
# (events, contacts, locations or data):
# default_page = \"data\"
",
            DEFAULT_DATA_DIR, DEFAULT_DISPLAY_MS, DEFAULT_EXIT_MS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RegistrarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RegistrarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn notice_timing(&self) -> NoticeTiming {
        NoticeTiming::from_millis(self.notice_display_ms, self.notice_exit_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commented_default_config_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registrar/config.toml");

        RegistrarConfig::create_default_config(&path).unwrap();
        let config = RegistrarConfig::load_from(&path).unwrap();

        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.notice_timing(), NoticeTiming::default());
        assert_eq!(config.default_page, None);
    }

    #[test]
    fn test_config_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/registrar-data\"\nquota_bytes = 1024\nnotice_display_ms = 1000\ndefault_page = \"contacts\"\n",
        )
        .unwrap();

        let config = RegistrarConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/registrar-data"));
        assert_eq!(config.quota_bytes, Some(1024));
        assert_eq!(config.notice_timing(), NoticeTiming::from_millis(1000, DEFAULT_EXIT_MS));
        assert_eq!(config.default_page, Some(PageKind::Contacts));
    }
}
