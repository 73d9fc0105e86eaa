//! Configuration loading for Axiom.
//!
//! Reads an optional TOML file and resolves it into validated
//! [`EngineSettings`]. Raw deserialization structs (all-`Option` fields)
//! stay private here; the resolved type is the only thing other crates see.
//!
//! Lookup order for the file path:
//! 1. `AXIOM_CONFIG_PATH` environment variable
//! 2. `~/.axiom/config.toml`
//!
//! A missing file is not an error: it resolves to the defaults
//! (precision 8, verbose on).

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

use axiom_types::{EngineSettings, Precision, PrecisionError};

const CONFIG_ENV: &str = "AXIOM_CONFIG_PATH";
const CONFIG_DIR: &str = ".axiom";
const CONFIG_FILE: &str = "config.toml";

// bool::default() is false, so only true needs a default fn
const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    engine: Option<RawEngine>,
}

#[derive(Debug, Deserialize)]
struct RawEngine {
    precision: Option<u32>,
    #[serde(default = "default_true")]
    verbose: bool,
}

impl Default for RawEngine {
    fn default() -> Self {
        Self {
            precision: None,
            verbose: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid precision in config file {path}: {source}")]
    Precision {
        path: PathBuf,
        #[source]
        source: PrecisionError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Precision { path, .. } => path,
        }
    }
}

/// The config file path that `load` will consult, if one can be determined.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load settings from the default location.
///
/// No determinable path or no file at the path both resolve to defaults.
pub fn load() -> Result<EngineSettings, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_from(&path),
        Some(path) => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(EngineSettings::default())
        }
        None => Ok(EngineSettings::default()),
    }
}

/// Load and resolve settings from a specific file.
pub fn load_from(path: &Path) -> Result<EngineSettings, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: RawConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    resolve(raw, path)
}

fn resolve(raw: RawConfig, path: &Path) -> Result<EngineSettings, ConfigError> {
    let engine = raw.engine.unwrap_or_default();
    let precision = match engine.precision {
        Some(digits) => Precision::new(digits).map_err(|source| ConfigError::Precision {
            path: path.to_path_buf(),
            source,
        })?,
        None => Precision::default(),
    };
    Ok(EngineSettings::new(precision, engine.verbose))
}
