//! Request types for the hiring simulation API.
//!
//! This module defines the JSON request structures for the `/simulate` and
//! `/transition` endpoints.

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::models::{EmployeeRecord, PerformanceTier};

/// Largest number of replicates one request may ask for.
pub const MAX_RUNS: u32 = 1_000;

/// Largest number of periods one request may ask for.
pub const MAX_PERIODS: u32 = 10_000;

/// Request body for the `/simulate` endpoint.
///
/// Every field is optional; absent fields keep the loaded model's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Base seed for the random source.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Number of periods to simulate.
    #[serde(default)]
    pub periods: Option<u32>,
    /// Number of replicates.
    #[serde(default)]
    pub runs: Option<u32>,
    /// Stop a run once headcount reaches this many people.
    #[serde(default)]
    pub target_headcount: Option<u32>,
    /// Initial organization.
    #[serde(default)]
    pub organization: Option<OrganizationRequest>,
    /// Firm-wide hiring quality scalar.
    #[serde(default)]
    pub hiring_scalar: Option<f64>,
    /// Per-seat growth probability.
    #[serde(default)]
    pub growth_rate: Option<f64>,
}

/// Initial organization in a simulation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationRequest {
    /// Initial headcount.
    pub n_employees: u32,
    /// Initial number of teams.
    pub n_teams: u32,
    /// Tier every initial employee starts in; defaults to the model's.
    #[serde(default)]
    pub initial_tier: Option<PerformanceTier>,
}

impl SimulationRequest {
    /// Applies the overrides to `base`, returning a validated configuration.
    pub fn apply(self, base: &SimConfig) -> SimResult<SimConfig> {
        if self.runs.is_some_and(|runs| runs > MAX_RUNS) {
            return Err(SimError::InvalidParameter {
                field: "runs".to_string(),
                message: format!("must not exceed {}", MAX_RUNS),
            });
        }
        if self.periods.is_some_and(|periods| periods > MAX_PERIODS) {
            return Err(SimError::InvalidParameter {
                field: "periods".to_string(),
                message: format!("must not exceed {}", MAX_PERIODS),
            });
        }

        let (mut model, tiers, mut hiring) = base.clone().into_parts();
        let simulation = &mut model.simulation;

        if let Some(seed) = self.seed {
            simulation.seed = seed;
        }
        if let Some(periods) = self.periods {
            simulation.periods = periods;
        }
        if let Some(runs) = self.runs {
            simulation.runs = runs;
        }
        if self.target_headcount.is_some() {
            simulation.target_headcount = self.target_headcount;
        }
        if let Some(organization) = self.organization {
            model.organization.n_employees = organization.n_employees;
            model.organization.n_teams = organization.n_teams;
            if let Some(tier) = organization.initial_tier {
                model.organization.initial_tier = tier;
            }
        }
        if let Some(scalar) = self.hiring_scalar {
            hiring.firm_scalar = scalar;
        }
        if let Some(growth_rate) = self.growth_rate {
            hiring.growth_rate = growth_rate;
        }

        SimConfig::new(model, tiers, hiring)
    }
}

/// Request body for the `/transition` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// The employee to advance one period.
    pub employee: EmployeeRecord,
    /// Seed for the random source; defaults to the model's seed.
    #[serde(default)]
    pub seed: Option<u64>,
}
