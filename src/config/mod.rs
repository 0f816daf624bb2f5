//! Configuration loading and management for the hiring simulation.
//!
//! This module loads a simulation model from YAML files: tier profiles,
//! hiring parameters and the initial organization.
//!
//! # Example
//!
//! ```no_run
//! use hiring_sim::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded model: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HiringConfig, HiringDistribution, HiringParams, ModelConfig, ModelMetadata,
    OrganizationParams, SimConfig, SimulationParams, TierProfile, TierProfiles,
};

#[cfg(test)]
pub(crate) use types::tests::{sample_config, sample_profiles};
