//! # Facility Configuration
//!
//! Capacities come from an optional YAML file and are then overridden per
//! size class by command-line flags:
//!
//! ```yaml
//! small: 20
//! medium: 50
//! large: 5
//! ```
//!
//! Missing classes default to zero lots. Unknown keys are rejected so a
//! typo does not silently produce an empty pool. Values are read as signed
//! integers and validated when the facility is built, so a negative count
//! is reported against the size class it belongs to.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use lotkeep_facility::{FacilityCapacities, FacilityError};

/// Flags that locate and override the facility configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct FacilityArgs {
    /// YAML file with `small`, `medium` and `large` lot counts.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of small lots (overrides the config file).
    #[arg(long, allow_negative_numbers = true)]
    pub small: Option<i64>,

    /// Number of medium lots (overrides the config file).
    #[arg(long, allow_negative_numbers = true)]
    pub medium: Option<i64>,

    /// Number of large lots (overrides the config file).
    #[arg(long, allow_negative_numbers = true)]
    pub large: Option<i64>,
}

/// Raw, not yet validated lot counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacilityConfig {
    /// Small lots.
    pub small: i64,
    /// Medium lots.
    pub medium: i64,
    /// Large lots.
    pub large: i64,
}

/// Failure to load a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {path}: {source}")]
    Read {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid facility configuration.
    #[error("invalid config {path}: {source}")]
    Parse {
        /// The file that was parsed.
        path: PathBuf,
        /// The YAML failure.
        #[source]
        source: serde_yaml::Error,
    },
}

impl FacilityConfig {
    /// Read a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace each count that has an override.
    pub fn with_overrides(
        self,
        small: Option<i64>,
        medium: Option<i64>,
        large: Option<i64>,
    ) -> Self {
        Self {
            small: small.unwrap_or(self.small),
            medium: medium.unwrap_or(self.medium),
            large: large.unwrap_or(self.large),
        }
    }

    /// Validate the counts.
    ///
    /// # Errors
    ///
    /// Returns [`FacilityError::Capacity`] for the first out-of-range count.
    pub fn capacities(&self) -> Result<FacilityCapacities, FacilityError> {
        FacilityCapacities::new(self.small, self.medium, self.large)
    }
}

impl FacilityArgs {
    /// Resolve the file (if any) and flag overrides into validated capacities.
    pub fn resolve(&self) -> anyhow::Result<FacilityCapacities> {
        let base = match &self.config {
            Some(path) => FacilityConfig::load(path)?,
            None => FacilityConfig::default(),
        };
        let config = base.with_overrides(self.small, self.medium, self.large);
        tracing::debug!(?config, "resolved facility configuration");
        Ok(config.capacities()?)
    }
}
