//! Configuration types for the hiring simulation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::simulation::MAX_SEATS;
use crate::models::{
    EmployeeRecord, PerformanceTier, TeamRecord, check_distribution, check_probability,
};

/// Metadata about the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// The human-readable name of the model.
    pub name: String,
    /// The version or calibration date of the model.
    pub version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Period loop parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Maximum number of periods to simulate.
    pub periods: u32,
    /// Periods making up one year, used to report elapsed years.
    pub periods_per_year: u32,
    /// Number of independent replicates.
    pub runs: u32,
    /// Base seed for the random source.
    pub seed: u64,
    /// Stop a run once headcount reaches this many people.
    #[serde(default)]
    pub target_headcount: Option<u32>,
}

/// Shape of the organization at period 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationParams {
    /// Initial headcount, spread as evenly as possible over the teams.
    pub n_employees: u32,
    /// Initial number of teams.
    pub n_teams: u32,
    /// Tier every initial employee starts in.
    pub initial_tier: PerformanceTier,
}

impl OrganizationParams {
    /// The initial organization as a team record.
    pub fn team_record(&self) -> TeamRecord {
        TeamRecord::new(self.n_employees, self.n_teams)
    }
}

/// model.yaml file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model metadata.
    pub model: ModelMetadata,
    /// Period loop parameters.
    pub simulation: SimulationParams,
    /// Initial organization.
    pub organization: OrganizationParams,
}

/// Churn, transition and output parameters shared by every employee of a tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierProfile {
    /// Per-period churn probability.
    pub p_churn: f64,
    /// Probability of moving to (or hiring into) tier `top`.
    pub p_top: f64,
    /// Probability of moving to (or hiring into) tier `average`.
    pub p_ave: f64,
    /// Probability of moving to (or hiring into) tier `bad`.
    pub p_bad: f64,
    /// Output one employee of this tier produces per period.
    pub output: f64,
}

impl TierProfile {
    /// Builds the employee record for an employee of `tier` with this profile.
    pub fn record(&self, tier: PerformanceTier) -> EmployeeRecord {
        EmployeeRecord::new(tier, self.p_churn, self.p_top, self.p_ave, self.p_bad)
    }

    fn validate(&self, tier: PerformanceTier) -> SimResult<()> {
        self.record(tier).validate()?;
        if !self.output.is_finite() {
            return Err(SimError::InvalidParameter {
                field: format!("tiers.{}.output", tier),
                message: "must be a finite number".to_string(),
            });
        }
        Ok(())
    }
}

/// Per-tier profiles, keyed by tier (tiers.yaml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierProfiles {
    /// Map of tier to its profile.
    pub tiers: HashMap<PerformanceTier, TierProfile>,
}

impl TierProfiles {
    /// Creates profiles from one profile per tier.
    pub fn new(top: TierProfile, average: TierProfile, bad: TierProfile) -> Self {
        let tiers = HashMap::from([
            (PerformanceTier::Top, top),
            (PerformanceTier::Average, average),
            (PerformanceTier::Bad, bad),
        ]);
        Self { tiers }
    }

    /// Gets the profile for a tier.
    pub fn profile(&self, tier: PerformanceTier) -> SimResult<&TierProfile> {
        self.tiers
            .get(&tier)
            .ok_or(SimError::TierProfileMissing { tier })
    }

    /// Builds the employee record a member of `tier` carries.
    ///
    /// # Examples
    ///
    /// ```
    /// use hiring_sim::config::{TierProfile, TierProfiles};
    /// use hiring_sim::models::PerformanceTier;
    ///
    /// let profile = TierProfile { p_churn: 0.1, p_top: 0.2, p_ave: 0.6, p_bad: 0.2, output: 1.0 };
    /// let profiles = TierProfiles::new(profile, profile, profile);
    /// let record = profiles.record_for(PerformanceTier::Bad).unwrap();
    /// assert_eq!(record.performance(), PerformanceTier::Bad);
    /// assert_eq!(record.p_ave(), 0.6);
    /// ```
    pub fn record_for(&self, tier: PerformanceTier) -> SimResult<EmployeeRecord> {
        Ok(self.profile(tier)?.record(tier))
    }

    /// Output produced per period by an employee of `tier`.
    pub fn output(&self, tier: PerformanceTier) -> SimResult<f64> {
        Ok(self.profile(tier)?.output)
    }

    fn validate(&self) -> SimResult<()> {
        for tier in PerformanceTier::ALL {
            self.profile(tier)?.validate(tier)?;
        }
        Ok(())
    }
}

/// A tier distribution for hires made without a hiring manager.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HiringDistribution {
    /// Probability a hire is `top`.
    pub p_top: f64,
    /// Probability a hire is `average`.
    pub p_ave: f64,
    /// Probability a hire is `bad`.
    pub p_bad: f64,
}

/// Hiring, growth and team-shape parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HiringParams {
    /// Firm-wide hiring quality scalar; `1.0` is neutral, larger favors `top` hires.
    pub firm_scalar: f64,
    /// Per-seat probability of spawning a new seat each period.
    pub growth_rate: f64,
    /// Hires one manager can make per period.
    pub max_hires_per_manager: u32,
    /// Teams larger than this split in two.
    pub max_team_size: u32,
    /// Tier distribution for hires into a team with no members.
    pub default_hire: HiringDistribution,
}

/// hiring.yaml file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HiringConfig {
    /// Hiring parameters.
    pub hiring: HiringParams,
}

/// The complete simulation configuration.
///
/// Aggregates the contents of the YAML files in a model directory.
#[derive(Debug, Clone)]
pub struct SimConfig {
    model: ModelConfig,
    tiers: TierProfiles,
    hiring: HiringParams,
}

impl SimConfig {
    /// Creates a configuration from its parts and validates it.
    pub fn new(model: ModelConfig, tiers: TierProfiles, hiring: HiringParams) -> SimResult<Self> {
        let config = Self {
            model,
            tiers,
            hiring,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every parameter range and probability invariant.
    pub fn validate(&self) -> SimResult<()> {
        self.tiers.validate()?;

        let hiring = &self.hiring;
        if !(hiring.firm_scalar.is_finite() && hiring.firm_scalar > 0.0) {
            return Err(invalid_parameter("firm_scalar", "must be a positive number"));
        }
        check_probability("growth_rate", hiring.growth_rate)?;
        if hiring.max_hires_per_manager == 0 {
            return Err(invalid_count("max_hires_per_manager", "must be at least 1"));
        }
        if hiring.max_team_size == 0 {
            return Err(invalid_count("max_team_size", "must be at least 1"));
        }
        let default_hire = &hiring.default_hire;
        check_distribution(default_hire.p_top, default_hire.p_ave, default_hire.p_bad)?;

        let simulation = &self.model.simulation;
        if simulation.runs == 0 {
            return Err(invalid_parameter("runs", "must be at least 1"));
        }
        if simulation.periods_per_year == 0 {
            return Err(invalid_parameter("periods_per_year", "must be at least 1"));
        }

        let organization = &self.model.organization;
        let seat_limit = format!("must not exceed {}", MAX_SEATS);
        if organization.n_employees > MAX_SEATS {
            return Err(invalid_count("n_employees", &seat_limit));
        }
        if organization.n_teams > MAX_SEATS {
            return Err(invalid_count("n_teams", &seat_limit));
        }
        if simulation
            .target_headcount
            .is_some_and(|target| target > MAX_SEATS)
        {
            return Err(invalid_parameter("target_headcount", &seat_limit));
        }
        if simulation
            .target_headcount
            .is_some_and(|target| target < organization.n_employees)
        {
            return Err(invalid_parameter(
                "target_headcount",
                "must not be below the initial headcount",
            ));
        }

        organization.team_record().validate()
    }

    /// Returns the model metadata.
    pub fn metadata(&self) -> &ModelMetadata {
        &self.model.model
    }

    /// Returns the period loop parameters.
    pub fn simulation(&self) -> &SimulationParams {
        &self.model.simulation
    }

    /// Returns the initial organization.
    pub fn organization(&self) -> &OrganizationParams {
        &self.model.organization
    }

    /// Returns the per-tier profiles.
    pub fn tiers(&self) -> &TierProfiles {
        &self.tiers
    }

    /// Returns the hiring parameters.
    pub fn hiring(&self) -> &HiringParams {
        &self.hiring
    }

    /// Splits the configuration into its parts so overrides can be applied.
    pub(crate) fn into_parts(self) -> (ModelConfig, TierProfiles, HiringParams) {
        (self.model, self.tiers, self.hiring)
    }
}

fn invalid_parameter(field: &str, message: &str) -> SimError {
    SimError::InvalidParameter {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn invalid_count(field: &str, message: &str) -> SimError {
    SimError::InvalidCount {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Profiles matching the default model directory.
    pub(crate) fn sample_profiles() -> TierProfiles {
        TierProfiles::new(
            TierProfile { p_churn: 0.05, p_top: 0.8, p_ave: 0.2, p_bad: 0.0, output: 1.5 },
            TierProfile { p_churn: 0.1, p_top: 0.2, p_ave: 0.6, p_bad: 0.2, output: 1.0 },
            TierProfile { p_churn: 0.2, p_top: 0.0, p_ave: 0.3, p_bad: 0.7, output: 0.4 },
        )
    }

    pub(crate) fn sample_config() -> SimConfig {
        let model = ModelConfig {
            model: ModelMetadata {
                name: "Test model".to_string(),
                version: "test".to_string(),
                description: None,
            },
            simulation: SimulationParams {
                periods: 12,
                periods_per_year: 4,
                runs: 2,
                seed: 7,
                target_headcount: None,
            },
            organization: OrganizationParams {
                n_employees: 5,
                n_teams: 1,
                initial_tier: PerformanceTier::Average,
            },
        };
        let hiring = HiringParams {
            firm_scalar: 1.0,
            growth_rate: 0.05,
            max_hires_per_manager: 2,
            max_team_size: 8,
            default_hire: HiringDistribution { p_top: 0.2, p_ave: 0.6, p_bad: 0.2 },
        };
        SimConfig::new(model, sample_profiles(), hiring).unwrap()
    }

    #[test]
    fn test_sample_config_is_valid() {
        let config = sample_config();
        assert_eq!(config.organization().n_employees, 5);
        assert_eq!(config.hiring().max_team_size, 8);
    }

    #[test]
    fn test_missing_tier_profile_is_rejected() {
        let (model, mut tiers, hiring) = sample_config().into_parts();
        tiers.tiers.remove(&PerformanceTier::Bad);

        match SimConfig::new(model, tiers, hiring) {
            Err(SimError::TierProfileMissing { tier }) => assert_eq!(tier, PerformanceTier::Bad),
            other => panic!("Expected TierProfileMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_tier_distribution_is_rejected() {
        let (model, mut tiers, hiring) = sample_config().into_parts();
        if let Some(top) = tiers.tiers.get_mut(&PerformanceTier::Top) {
            top.p_ave = 0.5;
        }

        let result = SimConfig::new(model, tiers, hiring);
        assert!(matches!(
            result,
            Err(SimError::InvalidProbabilityDistribution { .. })
        ));
    }

    #[test]
    fn test_non_positive_firm_scalar_is_rejected() {
        let (model, tiers, mut hiring) = sample_config().into_parts();
        hiring.firm_scalar = 0.0;

        match SimConfig::new(model, tiers, hiring) {
            Err(SimError::InvalidParameter { field, .. }) => assert_eq!(field, "firm_scalar"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_team_size_is_rejected() {
        let (model, tiers, mut hiring) = sample_config().into_parts();
        hiring.max_team_size = 0;

        match SimConfig::new(model, tiers, hiring) {
            Err(SimError::InvalidCount { field, .. }) => assert_eq!(field, "max_team_size"),
            other => panic!("Expected InvalidCount, got {:?}", other),
        }
    }

    #[test]
    fn test_organization_without_teams_is_rejected() {
        let (mut model, tiers, hiring) = sample_config().into_parts();
        model.organization.n_teams = 0;

        assert!(matches!(
            SimConfig::new(model, tiers, hiring),
            Err(SimError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_zero_runs_is_rejected() {
        let (mut model, tiers, hiring) = sample_config().into_parts();
        model.simulation.runs = 0;

        match SimConfig::new(model, tiers, hiring) {
            Err(SimError::InvalidParameter { field, .. }) => assert_eq!(field, "runs"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_target_below_initial_headcount_is_rejected() {
        let (mut model, tiers, hiring) = sample_config().into_parts();
        model.simulation.target_headcount = Some(3);

        match SimConfig::new(model, tiers, hiring) {
            Err(SimError::InvalidParameter { field, .. }) => assert_eq!(field, "target_headcount"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_headcount_above_seat_limit_is_rejected() {
        let (mut model, tiers, hiring) = sample_config().into_parts();
        model.organization.n_employees = MAX_SEATS + 500_000;

        match SimConfig::new(model, tiers, hiring) {
            Err(SimError::InvalidCount { field, .. }) => assert_eq!(field, "n_employees"),
            other => panic!("Expected InvalidCount, got {:?}", other),
        }
    }

    #[test]
    fn test_team_count_above_seat_limit_is_rejected() {
        let (mut model, tiers, hiring) = sample_config().into_parts();
        model.organization.n_employees = 0;
        model.organization.n_teams = u32::MAX;

        match SimConfig::new(model, tiers, hiring) {
            Err(SimError::InvalidCount { field, .. }) => assert_eq!(field, "n_teams"),
            other => panic!("Expected InvalidCount, got {:?}", other),
        }
    }

    #[test]
    fn test_target_above_seat_limit_is_rejected() {
        let (mut model, tiers, hiring) = sample_config().into_parts();
        model.simulation.target_headcount = Some(MAX_SEATS + 1);

        match SimConfig::new(model, tiers, hiring) {
            Err(SimError::InvalidParameter { field, .. }) => assert_eq!(field, "target_headcount"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_seat_limit_itself_is_accepted() {
        let (mut model, tiers, hiring) = sample_config().into_parts();
        model.simulation.target_headcount = Some(MAX_SEATS);
        assert!(SimConfig::new(model, tiers, hiring).is_ok());
    }

    #[test]
    fn test_tier_profiles_deserialize_from_yaml() {
        let yaml = r#"
tiers:
  top: { p_churn: 0.05, p_top: 0.8, p_ave: 0.2, p_bad: 0.0, output: 1.5 }
  ave: { p_churn: 0.1, p_top: 0.2, p_ave: 0.6, p_bad: 0.2, output: 1.0 }
  bad: { p_churn: 0.2, p_top: 0.0, p_ave: 0.3, p_bad: 0.7, output: 0.4 }
"#;
        let profiles: TierProfiles = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(profiles.output(PerformanceTier::Average).unwrap(), 1.0);
        assert_eq!(
            profiles.record_for(PerformanceTier::Top).unwrap().p_top(),
            0.8
        );
    }
}
