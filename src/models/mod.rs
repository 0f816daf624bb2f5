//! Core data models for the hiring simulation.
//!
//! This module contains the employee and team records and the result types
//! produced by the simulation engine.

mod employee;
mod simulation_result;
mod team;

pub use employee::{DISTRIBUTION_TOLERANCE, EmployeeRecord, PerformanceTier};
pub(crate) use employee::{check_distribution, check_probability};
pub use simulation_result::{
    PeriodAverage, PeriodSnapshot, RunSummary, SimulationResult, SimulationSummary, Transition,
};
pub use team::TeamRecord;
