//! Multi-run simulation driver.
//!
//! Runs `runs` independent replicates of the period loop and aggregates them
//! into a [`SimulationResult`].

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::models::{PeriodAverage, PeriodSnapshot, RunSummary, SimulationResult, SimulationSummary};

use super::organization::Organization;
use super::rng::Rng;

/// Simulates one replicate and returns its trajectory, period 0 first.
///
/// The run stops after `periods` periods, or as soon as headcount reaches
/// the configured target headcount.
///
/// # Examples
///
/// ```no_run
/// use hiring_sim::config::ConfigLoader;
/// use hiring_sim::simulation::simulate_run;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let trajectory = simulate_run(loader.config(), 42)?;
/// println!("Final headcount: {}", trajectory.last().unwrap().headcount);
/// # Ok::<(), hiring_sim::error::SimError>(())
/// ```
pub fn simulate_run(config: &SimConfig, seed: u64) -> SimResult<Vec<PeriodSnapshot>> {
    let params = config.simulation();
    let target = params.target_headcount;
    let mut rng = Rng::new(seed);
    let mut organization = Organization::new(config.organization(), config.tiers())?;

    let initial = organization.snapshot(0, 0, 0, config.tiers())?;
    let mut done = reached(target, &initial);
    let mut trajectory = vec![initial];

    let mut period = 1;
    while !done && period <= params.periods {
        let snapshot = organization.step(period, &mut rng, config)?;
        done = reached(target, &snapshot);
        trajectory.push(snapshot);
        period += 1;
    }

    Ok(trajectory)
}

/// Runs every replicate and aggregates the results.
///
/// Replicate `i` is seeded with `seed + i` (wrapping), so a given config
/// always yields the same trajectories.
pub fn run_simulation(config: &SimConfig) -> SimResult<SimulationResult> {
    let start_time = Instant::now();
    let simulation_id = Uuid::new_v4();
    let params = config.simulation();

    info!(
        simulation_id = %simulation_id,
        runs = params.runs,
        periods = params.periods,
        seed = params.seed,
        "Starting simulation"
    );

    let mut trajectories = Vec::with_capacity(params.runs as usize);
    let mut run_summaries = Vec::with_capacity(params.runs as usize);
    for run in 0..params.runs {
        let seed = params.seed.wrapping_add(u64::from(run));
        let trajectory = simulate_run(config, seed)?;
        if let Some(summary) = summarize_run(run, seed, &trajectory, params.target_headcount) {
            debug!(
                simulation_id = %simulation_id,
                run,
                headcount = summary.final_snapshot.headcount,
                average_quality = summary.final_snapshot.average_quality,
                "Run finished"
            );
            run_summaries.push(summary);
        }
        trajectories.push(trajectory);
    }

    let averages = average_periods(&trajectories);
    let longest = run_summaries
        .iter()
        .map(|r| r.periods_simulated)
        .max()
        .unwrap_or(0);
    let years = f64::from(longest) / f64::from(params.periods_per_year);
    let periods = trajectories.into_iter().next().unwrap_or_default();

    let duration_us = start_time.elapsed().as_micros() as u64;
    info!(
        simulation_id = %simulation_id,
        years,
        duration_us,
        "Simulation completed"
    );

    Ok(SimulationResult {
        simulation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        seed: params.seed,
        runs: params.runs,
        periods,
        summary: SimulationSummary {
            years,
            runs: run_summaries,
            averages,
        },
        duration_us,
    })
}

fn reached(target: Option<u32>, snapshot: &PeriodSnapshot) -> bool {
    target.is_some_and(|t| snapshot.headcount >= t)
}

fn summarize_run(
    run: u32,
    seed: u64,
    trajectory: &[PeriodSnapshot],
    target: Option<u32>,
) -> Option<RunSummary> {
    let last = trajectory.last()?;
    Some(RunSummary {
        run,
        seed,
        periods_simulated: last.period,
        reached_target: reached(target, last),
        final_snapshot: last.clone(),
    })
}

/// Per-period means over the trajectories long enough to include each period.
pub fn average_periods(trajectories: &[Vec<PeriodSnapshot>]) -> Vec<PeriodAverage> {
    let longest = trajectories.iter().map(Vec::len).max().unwrap_or(0);

    (0..longest)
        .map(|index| {
            let snapshots: Vec<&PeriodSnapshot> =
                trajectories.iter().filter_map(|t| t.get(index)).collect();
            let n = snapshots.len() as f64;

            PeriodAverage {
                period: index as u32,
                runs: snapshots.len() as u32,
                mean_headcount: snapshots.iter().map(|s| f64::from(s.headcount)).sum::<f64>() / n,
                mean_average_quality: snapshots.iter().map(|s| s.average_quality).sum::<f64>() / n,
                mean_total_output: snapshots.iter().map(|s| s.total_output).sum::<f64>() / n,
            }
        })
        .collect()
}
