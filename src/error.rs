//! Error types for the hiring simulation.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every validation and configuration failure the crate can report.

use thiserror::Error;

use crate::models::PerformanceTier;

/// The main error type for the hiring simulation.
///
/// Validating constructors, config loading and the simulation engine all
/// return this error type.
///
/// # Example
///
/// ```
/// use hiring_sim::error::SimError;
///
/// let error = SimError::ConfigNotFound {
///     path: "/missing/model.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/model.yaml");
/// ```
#[derive(Debug, Error)]
pub enum SimError {
    /// A probability was outside `[0, 1]` or not a finite number.
    #[error("Invalid probability for '{field}': {value} is not in [0, 1]")]
    InvalidProbability {
        /// The field holding the probability.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// The tier transition probabilities do not form a distribution.
    #[error("Invalid probability distribution: p_top + p_ave + p_bad = {sum}, expected 1")]
    InvalidProbabilityDistribution {
        /// The actual sum of the three tier probabilities.
        sum: f64,
    },

    /// A headcount or team count violated a structural rule.
    #[error("Invalid count '{field}': {message}")]
    InvalidCount {
        /// The count field that was invalid.
        field: String,
        /// A description of the violated rule.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No profile was configured for a performance tier.
    #[error("Tier profile missing: {tier}")]
    TierProfileMissing {
        /// The tier without a profile.
        tier: PerformanceTier,
    },

    /// A simulation parameter was out of range.
    #[error("Invalid parameter '{field}': {message}")]
    InvalidParameter {
        /// The parameter name.
        field: String,
        /// A description of the allowed range.
        message: String,
    },
}

/// A type alias for Results that return SimError.
pub type SimResult<T> = Result<T, SimError>;
