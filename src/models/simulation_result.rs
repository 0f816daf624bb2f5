//! Simulation result models.
//!
//! This module contains the [`SimulationResult`] type and the structures it
//! aggregates: per-period snapshots, per-run summaries and cross-run averages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeRecord, TeamRecord};

/// The outcome of advancing one employee by one period.
///
/// # Example
///
/// ```
/// use hiring_sim::models::Transition;
///
/// let json = serde_json::to_string(&Transition::Vacancy).unwrap();
/// assert_eq!(json, r#"{"outcome":"vacancy"}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Transition {
    /// The employee churned and left an open seat.
    Vacancy,
    /// The employee stayed, possibly in a different tier.
    Retained {
        /// The employee's record for the next period.
        employee: EmployeeRecord,
    },
}

impl Transition {
    /// Returns true if the employee churned.
    pub fn is_vacancy(&self) -> bool {
        matches!(self, Transition::Vacancy)
    }

    /// Returns the retained employee, if any.
    pub fn employee(&self) -> Option<&EmployeeRecord> {
        match self {
            Transition::Vacancy => None,
            Transition::Retained { employee } => Some(employee),
        }
    }
}

/// State of the organization at the end of one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSnapshot {
    /// Period number; `0` is the initial organization.
    pub period: u32,
    /// Employees in seats at the end of the period.
    pub headcount: u32,
    /// Number of teams at the end of the period.
    pub n_teams: u32,
    /// Employees in tier `top`.
    pub top: u32,
    /// Employees in tier `average`.
    pub average: u32,
    /// Employees in tier `bad`.
    pub bad: u32,
    /// Employees who churned during the period.
    pub churned: u32,
    /// Employees hired during the period.
    pub hired: u32,
    /// Seats still open after hiring.
    pub open_seats: u32,
    /// Sum of per-tier output across all employees.
    pub total_output: f64,
    /// `total_output / headcount`, or `0.0` for an empty organization.
    pub average_quality: f64,
}

impl PeriodSnapshot {
    /// The organization-wide team record for this period.
    pub fn team_record(&self) -> TeamRecord {
        TeamRecord::new(self.headcount, self.n_teams)
    }
}

/// The outcome of one simulation replicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Replicate index, starting at 0.
    pub run: u32,
    /// Seed the replicate was driven by.
    pub seed: u64,
    /// Number of periods actually simulated.
    pub periods_simulated: u32,
    /// Whether the run stopped early on reaching the target headcount.
    pub reached_target: bool,
    /// Snapshot at the last simulated period.
    pub final_snapshot: PeriodSnapshot,
}

/// Mean metrics for one period across the runs that reached it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAverage {
    /// Period number.
    pub period: u32,
    /// Number of runs contributing to the mean.
    pub runs: u32,
    /// Mean headcount.
    pub mean_headcount: f64,
    /// Mean of the per-run average quality.
    pub mean_average_quality: f64,
    /// Mean total output.
    pub mean_total_output: f64,
}

/// Cross-run aggregation of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Simulated time span in years of the longest run.
    pub years: f64,
    /// One summary per replicate.
    pub runs: Vec<RunSummary>,
    /// Per-period means across replicates.
    pub averages: Vec<PeriodAverage>,
}

/// The complete result of a simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Unique identifier for this simulation.
    pub simulation_id: Uuid,
    /// When the simulation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that ran the simulation.
    pub engine_version: String,
    /// Base seed; replicate `i` uses `seed + i`.
    pub seed: u64,
    /// Number of replicates simulated.
    pub runs: u32,
    /// Full period-by-period trajectory of the first replicate.
    pub periods: Vec<PeriodSnapshot>,
    /// Aggregation over all replicates.
    pub summary: SimulationSummary,
    /// Wall-clock duration of the simulation in microseconds.
    pub duration_us: u64,
}
