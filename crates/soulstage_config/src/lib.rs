//! TOML configuration for the `soulstage` front end.
//!
//! Every key is optional:
//!
//! ```toml
//! [output]
//! format = "json"        # "text" (default) or "json"
//!
//! [logging]
//! filter = "soulstage=debug"
//!
//! [input]
//! earliest_date = "1911-01-01"
//! ```
//!
//! Numerological policy (thresholds, tiers) is fixed in `soulstage_core` and
//! is not configurable.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use soulstage_core::{DateBounds, EARLIEST_BIRTH_DATE};
use soulstage_lunar::FIRST_SUPPORTED_SOLAR;
use thiserror::Error;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "soulstage.toml";

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "soulstage=info";

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Result rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Earliest accepted birth date.
    pub earliest_date: NaiveDate,
}

impl Default for InputConfig {
    fn default() -> Self {
        let (y, m, d) = EARLIEST_BIRTH_DATE;
        Self {
            earliest_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
        }
    }
}

fn first_convertible() -> NaiveDate {
    let (y, m, d) = FIRST_SUPPORTED_SOLAR;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SoulstageConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub input: InputConfig,
}

impl SoulstageConfig {
    /// Parse and validate TOML text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] from `dir` if it
    /// exists, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.filter must not be empty"));
        }
        if self.input.earliest_date < first_convertible() {
            return Err(ConfigError::Invalid(
                "input.earliest_date must not precede 1900-01-31",
            ));
        }
        Ok(())
    }

    /// Accepted birth dates, from the configured earliest date up to `today`.
    pub fn date_bounds(&self, today: NaiveDate) -> DateBounds {
        DateBounds::new(self.input.earliest_date, today)
    }
}
