//! Configuration loading for welfare.
//!
//! ```toml
//! [logging]
//! filter = "welfare_core=debug"
//!
//! [simulation]
//! seed = 7
//! draws = 1000
//! ```
//!
//! Raw TOML structs keep `Option` fields and stay private to this crate. They
//! are resolved into [`Settings`] at the parse boundary, so holders of a
//! `Settings` never re-check defaults or bounds.

use std::env;
use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use toml::de;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "WELFARE_CONFIG";

const DEFAULT_DRAWS: NonZeroUsize = NonZeroUsize::new(1000).expect("1000 is non-zero");
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse { path: PathBuf, source: de::Error },
    #[error("simulation.draws must be at least 1")]
    InvalidDraws,
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::InvalidDraws => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    logging: Option<RawLogging>,
    simulation: Option<RawSimulation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLogging {
    filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSimulation {
    seed: Option<u64>,
    draws: Option<usize>,
}

/// How lottery simulations are run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSettings {
    /// Fixed seed for reproducible draws; `None` uses the thread-local generator.
    pub seed: Option<u64>,
    pub draws: NonZeroUsize,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: None,
            draws: DEFAULT_DRAWS,
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub simulation: SimulationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_FILTER.to_string(),
            simulation: SimulationSettings::default(),
        }
    }
}

impl TryFrom<RawConfig> for Settings {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let log_filter = raw
            .logging
            .and_then(|l| l.filter)
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let raw_sim = raw.simulation.unwrap_or_default();
        let draws = match raw_sim.draws {
            Some(n) => NonZeroUsize::new(n).ok_or(ConfigError::InvalidDraws)?,
            None => DEFAULT_DRAWS,
        };

        Ok(Self {
            log_filter,
            simulation: SimulationSettings {
                seed: raw_sim.seed,
                draws,
            },
        })
    }
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::try_from(raw)
    }

    /// Load settings from the default location.
    ///
    /// A missing file is not an error: defaults are returned.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        Self::from_toml(&content, path).inspect_err(|err| {
            tracing::warn!("Failed to load config at {:?}: {}", path, err);
        })
    }
}

/// `$WELFARE_CONFIG` if set, else `~/.welfare/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".welfare").join("config.toml"))
}
