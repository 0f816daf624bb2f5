//! Per-employee Markov transition.
//!
//! Advancing an employee one period first samples churn, then the next tier
//! from the record's own tier distribution.

use crate::config::TierProfiles;
use crate::error::SimResult;
use crate::models::{EmployeeRecord, Transition};

use super::rng::Rng;

/// Advances one employee by one period.
///
/// Churn is sampled first with probability `p_churn`; a churned employee
/// yields [`Transition::Vacancy`]. Otherwise the next tier is drawn from
/// `{top: p_top, average: p_ave, bad: p_bad}` and the returned record carries
/// the transition probabilities `profiles` supplies for that tier.
///
/// The input record is left untouched.
///
/// # Examples
///
/// ```
/// use hiring_sim::config::{TierProfile, TierProfiles};
/// use hiring_sim::models::{EmployeeRecord, PerformanceTier, Transition};
/// use hiring_sim::simulation::{transition, Rng};
///
/// let profile = TierProfile { p_churn: 0.1, p_top: 0.2, p_ave: 0.6, p_bad: 0.2, output: 1.0 };
/// let profiles = TierProfiles::new(profile, profile, profile);
/// let leaver = EmployeeRecord::new(PerformanceTier::Top, 1.0, 0.8, 0.2, 0.0);
///
/// let outcome = transition(&leaver, &mut Rng::new(1), &profiles).unwrap();
/// assert_eq!(outcome, Transition::Vacancy);
/// ```
pub fn transition(
    employee: &EmployeeRecord,
    rng: &mut Rng,
    profiles: &TierProfiles,
) -> SimResult<Transition> {
    if rng.chance(employee.p_churn()) {
        return Ok(Transition::Vacancy);
    }

    let tier = rng.pick_tier(&employee.transition_weights());
    let employee = profiles.record_for(tier)?;
    Ok(Transition::Retained { employee })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sample_profiles;
    use crate::models::PerformanceTier;

    #[test]
    fn test_certain_churn_always_vacates() {
        let profiles = sample_profiles();
        let employee = EmployeeRecord::new(PerformanceTier::Average, 1.0, 0.2, 0.6, 0.2);
        let mut rng = Rng::new(1);

        for _ in 0..500 {
            assert!(transition(&employee, &mut rng, &profiles).unwrap().is_vacancy());
        }
    }

    #[test]
    fn test_no_churn_certain_top_stays_top() {
        let profiles = sample_profiles();
        let employee = EmployeeRecord::new(PerformanceTier::Bad, 0.0, 1.0, 0.0, 0.0);
        let mut rng = Rng::new(2);

        for _ in 0..500 {
            let outcome = transition(&employee, &mut rng, &profiles).unwrap();
            let next = outcome.employee().copied().unwrap();
            assert_eq!(next.performance(), PerformanceTier::Top);
        }
    }

    #[test]
    fn test_retained_record_uses_profile_of_new_tier() {
        let profiles = sample_profiles();
        let employee = EmployeeRecord::new(PerformanceTier::Top, 0.0, 0.0, 0.0, 1.0);
        let mut rng = Rng::new(3);

        let outcome = transition(&employee, &mut rng, &profiles).unwrap();
        let expected = profiles.record_for(PerformanceTier::Bad).unwrap();
        assert_eq!(outcome, Transition::Retained { employee: expected });
    }

    #[test]
    fn test_input_record_unchanged() {
        let profiles = sample_profiles();
        let employee = EmployeeRecord::new(PerformanceTier::Top, 0.1, 0.8, 0.2, 0.0);
        let before = employee;
        let mut rng = Rng::new(4);

        for _ in 0..100 {
            let _ = transition(&employee, &mut rng, &profiles).unwrap();
        }
        assert_eq!(employee, before);
    }

    #[test]
    fn test_churn_frequency_tracks_probability() {
        let profiles = sample_profiles();
        let employee = profiles.record_for(PerformanceTier::Bad).unwrap();
        let mut rng = Rng::new(5);

        let vacancies = (0..20_000)
            .filter(|_| transition(&employee, &mut rng, &profiles).unwrap().is_vacancy())
            .count();
        let freq = vacancies as f64 / 20_000.0;
        assert!((freq - 0.2).abs() < 0.02, "churn frequency {}", freq);
    }
}
