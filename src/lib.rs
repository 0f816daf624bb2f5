//! Organizational hiring simulation.
//!
//! This crate models employees as performance-tier Markov chains with churn,
//! and simulates how a firm's quality and output evolve as teams churn, grow,
//! hire and split.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod simulation;
