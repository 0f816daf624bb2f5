//! Simulation logic for organizational hiring dynamics.
//!
//! This module contains the seeded random source, the per-employee Markov
//! transition, manager-driven hiring skewed by the firm hiring scalar, the
//! per-period organization step (churn, growth, hiring, team splits) and the
//! multi-run driver that aggregates quality and output over time.

mod engine;
mod hiring;
mod organization;
mod rng;
mod transition;

pub use engine::{average_periods, run_simulation, simulate_run};
pub use hiring::{hire_from_manager, hire_weights, hire_without_manager};
pub use organization::{MAX_SEATS, Organization, Team};
pub use rng::Rng;
pub use transition::transition;
