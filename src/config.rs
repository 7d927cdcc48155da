// src/config.rs
//! `linkrank.toml` loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};
use crate::input::InputConfig;
use crate::rank::RankConfig;

pub const CONFIG_FILE: &str = "linkrank.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `explicit` if given, otherwise `linkrank.toml` from the current
    /// directory when present, otherwise the defaults.
    ///
    /// # Errors
    /// Fails if an explicit path is unreadable or any file found does not parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let local = PathBuf::from(CONFIG_FILE);
                if local.is_file() {
                    Self::from_file(&local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// # Errors
    /// Fails on I/O errors, TOML syntax errors or invalid rank parameters.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| RankError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse_toml(&content).map_err(|message| RankError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates a config document.
    ///
    /// # Errors
    /// Returns a human-readable message describing the problem.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        config.rank.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }

    /// Saves the config as TOML.
    ///
    /// # Errors
    /// Returns error if serialization or the file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| RankError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, content).map_err(|source| RankError::Io {
            source,
            path: path.to_path_buf(),
        })
    }
}
