//! Scouting configuration.
//!
//! Loaded from YAML; every field has a default so an empty file is valid.
//! Environment variables override the file:
//! 1) `SCOUT_DATA_PATH` (canonical) or `TDE_DATA_PATH` (alias) for the export
//! 2) `SCOUT_CLUBS_PATH` for the club directory

use crate::data::clubs::ClubDirectory;
use crate::error::{Result, ScoutError};
use crate::query::{FilterSet, Predicate};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical env var for overriding the export path.
pub const DATA_PATH_ENV: &str = "SCOUT_DATA_PATH";

/// Alias kept for older deployment scripts.
pub const DATA_PATH_ENV_ALIAS: &str = "TDE_DATA_PATH";

pub const CLUBS_PATH_ENV: &str = "SCOUT_CLUBS_PATH";

/// Default relative path used when no override is set.
pub const DEFAULT_DATA_REL_PATH: &str = "data/all_plrs.txt";

/// What a refresh does when the source cannot be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Keep serving the last successfully parsed records (logged as a warning).
    #[default]
    ServeLastKnownGood,
    /// Return the error to the caller.
    Fail,
}

/// Inclusive age window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeWindow {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub data_path: PathBuf,
    /// `None` uses the embedded directory.
    pub clubs_path: Option<PathBuf>,
    pub stale_policy: StalePolicy,
    /// Outer limits of the age control.
    pub age_limits: AgeWindow,
    /// Age window applied before the user touches the filters.
    pub default_age: AgeWindow,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_REL_PATH),
            clubs_path: None,
            stale_policy: StalePolicy::default(),
            age_limits: AgeWindow { min: 15, max: 40 },
            default_age: AgeWindow { min: 18, max: 30 },
        }
    }
}

impl ScoutConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml rejects a fully empty document for structs
        let config: ScoutConfig = if yaml.trim().is_empty() {
            ScoutConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).map_err(|e| {
            ScoutError::Config(format!("failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Defaults plus process environment overrides.
    pub fn from_env() -> Result<Self> {
        let mut config = ScoutConfig::default();
        config.apply_env(|name| env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `lookup` (normally `std::env::var`). Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        for name in [DATA_PATH_ENV, DATA_PATH_ENV_ALIAS] {
            if let Some(path) = non_blank(name) {
                self.data_path = PathBuf::from(path);
                break;
            }
        }
        if let Some(path) = non_blank(CLUBS_PATH_ENV) {
            self.clubs_path = Some(PathBuf::from(path));
        }
    }

    pub fn validate(&self) -> Result<()> {
        let limits = self.age_limits;
        let default = self.default_age;
        if limits.min > limits.max {
            return Err(ScoutError::Config(format!(
                "age_limits min {} exceeds max {}",
                limits.min, limits.max
            )));
        }
        if default.min > default.max || default.min < limits.min || default.max > limits.max {
            return Err(ScoutError::Config(format!(
                "default_age {}-{} must sit inside age_limits {}-{}",
                default.min, default.max, limits.min, limits.max
            )));
        }
        if self.data_path.as_os_str().is_empty() {
            return Err(ScoutError::Config("data_path must not be empty".to_string()));
        }
        Ok(())
    }

    /// Club directory from `clubs_path`, or the embedded default.
    pub fn clubs(&self) -> Result<ClubDirectory> {
        match &self.clubs_path {
            Some(path) => ClubDirectory::from_path(path),
            None => ClubDirectory::embedded(),
        }
    }

    /// Filters a fresh session starts with.
    pub fn default_filters(&self) -> FilterSet {
        FilterSet::new().with(Predicate::age_range(self.default_age.min, self.default_age.max))
    }
}
