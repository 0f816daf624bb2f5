//! Organization state and the per-period step.
//!
//! An organization is a list of teams; each team holds its members' records
//! and a count of open seats waiting to be filled.

use tracing::debug;

use crate::config::{OrganizationParams, SimConfig, TierProfiles};
use crate::error::SimResult;
use crate::models::{EmployeeRecord, PerformanceTier, PeriodSnapshot, TeamRecord, Transition};

use super::hiring::{hire_from_manager, hire_without_manager};
use super::rng::Rng;
use super::transition::transition;

/// Upper bound on total seats in one organization, open or filled.
pub const MAX_SEATS: u32 = 1_000_000;

/// One team: its current members and the seats it is trying to fill.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Team {
    members: Vec<EmployeeRecord>,
    open_seats: u32,
}

impl Team {
    /// Creates a team with the given members and no open seats.
    pub fn new(members: Vec<EmployeeRecord>) -> Self {
        Self {
            members,
            open_seats: 0,
        }
    }

    /// Current members.
    pub fn members(&self) -> &[EmployeeRecord] {
        &self.members
    }

    /// Seats waiting for a hire.
    pub fn open_seats(&self) -> u32 {
        self.open_seats
    }

    /// Filled plus open seats.
    pub fn seats(&self) -> u32 {
        self.members.len() as u32 + self.open_seats
    }
}

/// Mutable simulation state for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Organization {
    teams: Vec<Team>,
}

impl Organization {
    /// Builds the period-0 organization.
    ///
    /// Employees are spread over the teams as evenly as possible, earlier
    /// teams taking the remainder, and all start in `initial_tier`.
    pub fn new(params: &OrganizationParams, profiles: &TierProfiles) -> SimResult<Self> {
        let record = profiles.record_for(params.initial_tier)?;
        let n_teams = params.n_teams;
        if n_teams == 0 {
            return Ok(Self::default());
        }

        let base = params.n_employees / n_teams;
        let extra = params.n_employees % n_teams;
        let teams = (0..n_teams)
            .map(|i| {
                let size = base + u32::from(i < extra);
                Team::new(vec![record; size as usize])
            })
            .collect();

        Ok(Self { teams })
    }

    /// Creates an organization from explicit teams.
    pub fn from_teams(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    /// The organization's teams.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Employees currently in seats.
    pub fn headcount(&self) -> u32 {
        self.teams.iter().map(|t| t.members.len() as u32).sum()
    }

    /// Seats waiting for a hire across all teams.
    pub fn open_seats(&self) -> u32 {
        self.teams.iter().map(|t| t.open_seats).sum()
    }

    /// Organization-wide headcount and team count.
    pub fn team_record(&self) -> TeamRecord {
        TeamRecord::new(self.headcount(), self.teams.len() as u32)
    }

    fn members(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.teams.iter().flat_map(|t| t.members.iter())
    }

    /// Number of employees in `tier`.
    pub fn count_tier(&self, tier: PerformanceTier) -> u32 {
        self.members().filter(|m| m.performance() == tier).count() as u32
    }

    /// Sum of per-tier output over every employee.
    pub fn total_output(&self, profiles: &TierProfiles) -> SimResult<f64> {
        self.members()
            .map(|m| profiles.output(m.performance()))
            .sum()
    }

    /// Captures the current state as a snapshot.
    pub fn snapshot(
        &self,
        period: u32,
        churned: u32,
        hired: u32,
        profiles: &TierProfiles,
    ) -> SimResult<PeriodSnapshot> {
        let headcount = self.headcount();
        let total_output = self.total_output(profiles)?;
        let average_quality = if headcount == 0 {
            0.0
        } else {
            total_output / f64::from(headcount)
        };

        Ok(PeriodSnapshot {
            period,
            headcount,
            n_teams: self.teams.len() as u32,
            top: self.count_tier(PerformanceTier::Top),
            average: self.count_tier(PerformanceTier::Average),
            bad: self.count_tier(PerformanceTier::Bad),
            churned,
            hired,
            open_seats: self.open_seats(),
            total_output,
            average_quality,
        })
    }

    /// Advances the organization by one period.
    ///
    /// Runs churn and tier transitions, seat growth, hiring and team splits,
    /// in that order, and returns the resulting snapshot.
    pub fn step(&mut self, period: u32, rng: &mut Rng, config: &SimConfig) -> SimResult<PeriodSnapshot> {
        let profiles = config.tiers();

        let churned = self.advance_members(rng, profiles)?;
        let grown = self.grow(rng, config);
        let hired = self.hire(rng, config)?;
        self.split_teams(config.hiring().max_team_size);

        debug!(
            period,
            churned,
            grown,
            hired,
            headcount = self.headcount(),
            teams = self.teams.len(),
            "Period stepped"
        );

        self.snapshot(period, churned, hired, profiles)
    }

    /// Applies one transition to every member; churned members free a seat.
    fn advance_members(&mut self, rng: &mut Rng, profiles: &TierProfiles) -> SimResult<u32> {
        let mut churned = 0;
        for team in &mut self.teams {
            let mut retained = Vec::with_capacity(team.members.len());
            for member in &team.members {
                match transition(member, rng, profiles)? {
                    Transition::Vacancy => {
                        churned += 1;
                        team.open_seats += 1;
                    }
                    Transition::Retained { employee } => retained.push(employee),
                }
            }
            team.members = retained;
        }
        Ok(churned)
    }

    /// Each existing seat spawns a new open seat with probability `growth_rate`,
    /// never taking total seats past the target headcount or [`MAX_SEATS`].
    fn grow(&mut self, rng: &mut Rng, config: &SimConfig) -> u32 {
        let growth_rate = config.hiring().growth_rate;
        let limit = config
            .simulation()
            .target_headcount
            .map_or(MAX_SEATS, |t| t.min(MAX_SEATS));
        let mut total_seats: u32 = self.teams.iter().map(Team::seats).sum();
        let mut grown = 0;

        for team in &mut self.teams {
            for _ in 0..team.seats() {
                if total_seats >= limit {
                    return grown;
                }
                if rng.chance(growth_rate) {
                    team.open_seats += 1;
                    total_seats += 1;
                    grown += 1;
                }
            }
        }
        grown
    }

    /// Fills open seats. Each member present at the start of hiring can make
    /// at most `max_hires_per_manager` hires; an empty team gets one hire from
    /// the default distribution. Unfilled seats carry over.
    fn hire(&mut self, rng: &mut Rng, config: &SimConfig) -> SimResult<u32> {
        let hiring = config.hiring();
        let profiles = config.tiers();
        let mut hired = 0;

        for team in &mut self.teams {
            if team.open_seats == 0 {
                continue;
            }

            let managers = team.members.len();
            let mut new_hires = Vec::new();

            if managers == 0 {
                let tier = hire_without_manager(&hiring.default_hire, hiring.firm_scalar, rng);
                new_hires.push(profiles.record_for(tier)?);
            } else {
                let capacity = (managers as u32).saturating_mul(hiring.max_hires_per_manager);
                let to_fill = team.open_seats.min(capacity);
                let mut hires_made = vec![0u32; managers];

                for _ in 0..to_fill {
                    let available: Vec<usize> = (0..managers)
                        .filter(|&i| hires_made[i] < hiring.max_hires_per_manager)
                        .collect();
                    let manager = available[rng.below(available.len())];
                    hires_made[manager] += 1;

                    let tier = hire_from_manager(&team.members[manager], hiring.firm_scalar, rng);
                    new_hires.push(profiles.record_for(tier)?);
                }
            }

            let filled = new_hires.len() as u32;
            team.open_seats -= filled;
            team.members.extend(new_hires);
            hired += filled;
        }

        Ok(hired)
    }

    /// Splits every team larger than `max_team_size` into halves until all fit.
    fn split_teams(&mut self, max_team_size: u32) {
        let teams = std::mem::take(&mut self.teams);
        for team in teams {
            split_into(team, max_team_size as usize, &mut self.teams);
        }
    }
}

/// Pushes `team` onto `out`, halving it first while it is oversized.
/// The larger half keeps the team's place; open seats are shared evenly.
fn split_into(mut team: Team, max_team_size: usize, out: &mut Vec<Team>) {
    if team.members.len() <= max_team_size {
        out.push(team);
        return;
    }

    let moved = team.members.len() / 2;
    let moved_members = team.members.split_off(team.members.len() - moved);
    let moved_seats = team.open_seats / 2;
    team.open_seats -= moved_seats;

    split_into(team, max_team_size, out);
    split_into(
        Team {
            members: moved_members,
            open_seats: moved_seats,
        },
        max_team_size,
        out,
    );
}
