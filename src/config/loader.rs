//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a simulation
//! model from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::models::{EmployeeRecord, PerformanceTier};

use super::types::{
    HiringConfig, HiringParams, ModelConfig, ModelMetadata, OrganizationParams, SimConfig,
    SimulationParams, TierProfile, TierProfiles,
};

/// Loads and provides access to a simulation model.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── model.yaml   # Metadata, period loop parameters, initial organization
/// ├── tiers.yaml   # Churn, transition and output profile per tier
/// └── hiring.yaml  # Firm hiring scalar, growth, team depth and size
/// ```
///
/// # Example
///
/// ```no_run
/// use hiring_sim::config::ConfigLoader;
/// use hiring_sim::models::PerformanceTier;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let profile = loader.profile(PerformanceTier::Top)?;
/// println!("Top churn: {}", profile.p_churn);
/// # Ok::<(), hiring_sim::error::SimError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SimConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or
    /// holds values that fail validation.
    pub fn load<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let path = path.as_ref();

        let model = Self::load_yaml::<ModelConfig>(&path.join("model.yaml"))?;
        let tiers = Self::load_yaml::<TierProfiles>(&path.join("tiers.yaml"))?;
        let hiring = Self::load_yaml::<HiringConfig>(&path.join("hiring.yaml"))?;

        let config = SimConfig::new(model, tiers, hiring.hiring)?;
        debug!(
            path = %path.display(),
            model = %config.metadata().name,
            "Loaded simulation config"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> SimResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SimError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| SimError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Returns the model metadata.
    pub fn metadata(&self) -> &ModelMetadata {
        self.config.metadata()
    }

    /// Returns the default period loop parameters.
    pub fn simulation(&self) -> &SimulationParams {
        self.config.simulation()
    }

    /// Returns the default initial organization.
    pub fn organization(&self) -> &OrganizationParams {
        self.config.organization()
    }

    /// Returns the per-tier profiles.
    pub fn tiers(&self) -> &TierProfiles {
        self.config.tiers()
    }

    /// Returns the hiring parameters.
    pub fn hiring(&self) -> &HiringParams {
        self.config.hiring()
    }

    /// Gets the profile for a tier.
    pub fn profile(&self, tier: PerformanceTier) -> SimResult<&TierProfile> {
        self.config.tiers().profile(tier)
    }

    /// Builds the employee record for a new member of `tier`.
    pub fn record_for(&self, tier: PerformanceTier) -> SimResult<EmployeeRecord> {
        self.config.tiers().record_for(tier)
    }
}
