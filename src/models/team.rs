//! Team record.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Immutable snapshot of a team's headcount and number of sub-teams.
///
/// Counts are unsigned, so non-negativity holds by construction.
///
/// # Examples
///
/// ```
/// use hiring_sim::models::TeamRecord;
///
/// let team = TeamRecord::new(5, 1);
/// assert_eq!(team.n_employees(), 5);
/// assert_eq!(team.n_teams(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamRecord {
    n_employees: u32,
    n_teams: u32,
}

impl TeamRecord {
    /// Creates a record without validation.
    pub fn new(n_employees: u32, n_teams: u32) -> Self {
        Self {
            n_employees,
            n_teams,
        }
    }

    /// Creates a record, rejecting headcount with no team to hold it.
    pub fn try_new(n_employees: u32, n_teams: u32) -> SimResult<Self> {
        let record = Self::new(n_employees, n_teams);
        record.validate()?;
        Ok(record)
    }

    /// Checks the structural invariants of this record.
    pub fn validate(&self) -> SimResult<()> {
        if self.n_employees > 0 && self.n_teams == 0 {
            return Err(SimError::InvalidCount {
                field: "n_teams".to_string(),
                message: format!(
                    "{} employees require at least one team",
                    self.n_employees
                ),
            });
        }
        Ok(())
    }

    /// Current headcount.
    pub fn n_employees(&self) -> u32 {
        self.n_employees
    }

    /// Number of constituent sub-teams.
    pub fn n_teams(&self) -> u32 {
        self.n_teams
    }

    /// Mean headcount per team, or `0.0` when there are no teams.
    pub fn average_team_size(&self) -> f64 {
        if self.n_teams == 0 {
            0.0
        } else {
            f64::from(self.n_employees) / f64::from(self.n_teams)
        }
    }
}
