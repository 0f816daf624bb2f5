//! Hire quality sampling.
//!
//! A hire's tier follows the hiring manager's own tier distribution, skewed
//! by the firm-wide hiring scalar.

use crate::config::HiringDistribution;
use crate::models::{EmployeeRecord, PerformanceTier};

use super::rng::Rng;

/// Skews a tier distribution by the firm hiring scalar and renormalizes it.
///
/// Weights become `(p_top * s, p_ave, p_bad / s)`. A scalar of `1.0` returns
/// the distribution unchanged; larger values favor `top` hires and disfavor
/// `bad` ones.
///
/// # Examples
///
/// ```
/// use hiring_sim::models::PerformanceTier;
/// use hiring_sim::simulation::hire_weights;
///
/// let base = [
///     (PerformanceTier::Top, 0.2),
///     (PerformanceTier::Average, 0.6),
///     (PerformanceTier::Bad, 0.2),
/// ];
/// let skewed = hire_weights(base, 2.0);
/// assert!(skewed[0].1 > 0.2);
/// assert!(skewed[2].1 < 0.2);
/// ```
pub fn hire_weights(
    distribution: [(PerformanceTier, f64); 3],
    firm_scalar: f64,
) -> [(PerformanceTier, f64); 3] {
    let skewed = distribution.map(|(tier, p)| {
        let weight = match tier {
            PerformanceTier::Top => p * firm_scalar,
            PerformanceTier::Average => p,
            PerformanceTier::Bad => p / firm_scalar,
        };
        (tier, weight)
    });

    let total: f64 = skewed.iter().map(|(_, w)| w).sum();
    if total > 0.0 {
        skewed.map(|(tier, w)| (tier, w / total))
    } else {
        skewed
    }
}

/// Samples the tier of a hire made by `manager`.
pub fn hire_from_manager(manager: &EmployeeRecord, firm_scalar: f64, rng: &mut Rng) -> PerformanceTier {
    rng.pick_tier(&hire_weights(manager.transition_weights(), firm_scalar))
}

/// Samples the tier of a hire made into a team with no members.
pub fn hire_without_manager(
    distribution: &HiringDistribution,
    firm_scalar: f64,
    rng: &mut Rng,
) -> PerformanceTier {
    let base = [
        (PerformanceTier::Top, distribution.p_top),
        (PerformanceTier::Average, distribution.p_ave),
        (PerformanceTier::Bad, distribution.p_bad),
    ];
    rng.pick_tier(&hire_weights(base, firm_scalar))
}
