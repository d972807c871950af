//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `hassgen.toml` in the working directory unless `--config`
//! names another file. Every field has a default so the file is optional.
//! Environment variables take precedence over file values, and command-line
//! flags over both.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "hassgen.toml";

/// Name of the naming report, written next to the inventory.
const REPORT_FILE_NAME: &str = "naming-violations.json";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output locations.
    pub paths: PathsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where inputs are read from and outputs are written to.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Inventory snapshot (JSON).
    pub inventory: PathBuf,
    /// Per-area override file (TOML), created on first `reference` run.
    pub overrides: PathBuf,
    /// Root for packages and the entity reference.
    pub output_dir: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path`, or from `hassgen.toml` if present,
    /// then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly requested file is missing, or if
    /// the file exists but is malformed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_required_file(path)?,
            None => Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?,
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn from_required_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Self::from_file(path)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("HASSGEN_INVENTORY") {
            self.paths.inventory = val.into();
        }
        if let Some(val) = lookup("HASSGEN_OVERRIDES") {
            self.paths.overrides = val.into();
        }
        if let Some(val) = lookup("HASSGEN_OUTPUT_DIR") {
            self.paths.output_dir = val.into();
        }
        if let Some(val) = lookup("HASSGEN_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    /// Reject configurations that would write to or read from nowhere.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first empty path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("inventory", &self.paths.inventory),
            ("overrides", &self.paths.overrides),
            ("output_dir", &self.paths.output_dir),
        ];
        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!("{name} path must not be empty")));
            }
        }
        Ok(())
    }

    /// The naming report sits in the same directory as the inventory.
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.paths
            .inventory
            .parent()
            .map_or_else(|| PathBuf::from(REPORT_FILE_NAME), |dir| dir.join(REPORT_FILE_NAME))
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            inventory: PathBuf::from("output/hass-data.json"),
            overrides: PathBuf::from("hassgen-overrides.toml"),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hassgen=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// `--config` named a file that does not exist.
    #[error("config file not found at {}", .0.display())]
    NotFound(PathBuf),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
