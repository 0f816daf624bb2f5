//! Employee record and performance tiers.
//!
//! This module defines the [`EmployeeRecord`] value type and the
//! [`PerformanceTier`] enum used to classify employees.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Tolerance used when checking that tier probabilities sum to one.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-9;

/// An employee's performance classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    /// A top performer.
    Top,
    /// An average performer.
    #[serde(alias = "ave")]
    Average,
    /// A poor performer.
    Bad,
}

impl PerformanceTier {
    /// All tiers, best first.
    pub const ALL: [PerformanceTier; 3] = [
        PerformanceTier::Top,
        PerformanceTier::Average,
        PerformanceTier::Bad,
    ];

    /// Returns the wire name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceTier::Top => "top",
            PerformanceTier::Average => "average",
            PerformanceTier::Bad => "bad",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of one employee's tier and transition probabilities.
///
/// Fields are read through accessors only; advancing an employee produces
/// a new record (see [`crate::simulation::transition`]).
///
/// # Examples
///
/// ```
/// use hiring_sim::models::{EmployeeRecord, PerformanceTier};
///
/// let employee = EmployeeRecord::new(PerformanceTier::Top, 0.1, 0.8, 0.2, 0.0);
/// assert_eq!(employee.performance(), PerformanceTier::Top);
/// assert_eq!(employee.p_top(), 0.8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    performance: PerformanceTier,
    p_churn: f64,
    p_top: f64,
    p_ave: f64,
    p_bad: f64,
}

impl EmployeeRecord {
    /// Creates a record from its five values without any validation.
    pub fn new(
        performance: PerformanceTier,
        p_churn: f64,
        p_top: f64,
        p_ave: f64,
        p_bad: f64,
    ) -> Self {
        Self {
            performance,
            p_churn,
            p_top,
            p_ave,
            p_bad,
        }
    }

    /// Creates a record, rejecting probabilities outside `[0, 1]` and tier
    /// probabilities that do not sum to one.
    ///
    /// # Examples
    ///
    /// ```
    /// use hiring_sim::models::{EmployeeRecord, PerformanceTier};
    ///
    /// assert!(EmployeeRecord::try_new(PerformanceTier::Average, 0.1, 0.2, 0.6, 0.2).is_ok());
    /// assert!(EmployeeRecord::try_new(PerformanceTier::Average, 0.1, 0.2, 0.6, 0.3).is_err());
    /// ```
    pub fn try_new(
        performance: PerformanceTier,
        p_churn: f64,
        p_top: f64,
        p_ave: f64,
        p_bad: f64,
    ) -> SimResult<Self> {
        let record = Self::new(performance, p_churn, p_top, p_ave, p_bad);
        record.validate()?;
        Ok(record)
    }

    /// Checks the probability invariants of this record.
    pub fn validate(&self) -> SimResult<()> {
        check_probability("p_churn", self.p_churn)?;
        check_distribution(self.p_top, self.p_ave, self.p_bad)
    }

    /// The employee's current tier.
    pub fn performance(&self) -> PerformanceTier {
        self.performance
    }

    /// Probability of leaving in a period.
    pub fn p_churn(&self) -> f64 {
        self.p_churn
    }

    /// Probability of moving to tier `top`.
    pub fn p_top(&self) -> f64 {
        self.p_top
    }

    /// Probability of moving to tier `average`.
    pub fn p_ave(&self) -> f64 {
        self.p_ave
    }

    /// Probability of moving to tier `bad`.
    pub fn p_bad(&self) -> f64 {
        self.p_bad
    }

    /// The transition probabilities paired with their tiers, best first.
    pub fn transition_weights(&self) -> [(PerformanceTier, f64); 3] {
        [
            (PerformanceTier::Top, self.p_top),
            (PerformanceTier::Average, self.p_ave),
            (PerformanceTier::Bad, self.p_bad),
        ]
    }
}

/// Rejects values outside `[0, 1]`, including NaN.
pub(crate) fn check_probability(field: &str, value: f64) -> SimResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::InvalidProbability {
            field: field.to_string(),
            value,
        })
    }
}

/// Checks that three tier probabilities are each valid and sum to one.
pub(crate) fn check_distribution(p_top: f64, p_ave: f64, p_bad: f64) -> SimResult<()> {
    check_probability("p_top", p_top)?;
    check_probability("p_ave", p_ave)?;
    check_probability("p_bad", p_bad)?;

    let sum = p_top + p_ave + p_bad;
    if (sum - 1.0).abs() > DISTRIBUTION_TOLERANCE {
        return Err(SimError::InvalidProbabilityDistribution { sum });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_read_back_as_given() {
        let employee = EmployeeRecord::new(PerformanceTier::Top, 0.1, 0.8, 0.2, 0.0);
        assert_eq!(employee.performance(), PerformanceTier::Top);
        assert_eq!(employee.p_churn(), 0.1);
        assert_eq!(employee.p_top(), 0.8);
        assert_eq!(employee.p_ave(), 0.2);
        assert_eq!(employee.p_bad(), 0.0);
    }

    #[test]
    fn test_new_performs_no_validation() {
        let employee = EmployeeRecord::new(PerformanceTier::Bad, 2.0, 0.5, 0.5, 0.5);
        assert_eq!(employee.p_churn(), 2.0);
        assert!(employee.validate().is_err());
    }

    #[test]
    fn test_try_new_accepts_valid_record() {
        let employee = EmployeeRecord::try_new(PerformanceTier::Average, 0.1, 0.2, 0.6, 0.2);
        assert!(employee.is_ok());
    }

    #[test]
    fn test_try_new_rejects_churn_above_one() {
        let result = EmployeeRecord::try_new(PerformanceTier::Top, 1.1, 0.8, 0.2, 0.0);
        match result {
            Err(SimError::InvalidProbability { field, value }) => {
                assert_eq!(field, "p_churn");
                assert_eq!(value, 1.1);
            }
            other => panic!("Expected InvalidProbability, got {:?}", other),
        }
    }

    #[test]
    fn test_try_new_rejects_negative_tier_probability() {
        let result = EmployeeRecord::try_new(PerformanceTier::Top, 0.1, 0.9, -0.2, 0.3);
        match result {
            Err(SimError::InvalidProbability { field, .. }) => assert_eq!(field, "p_ave"),
            other => panic!("Expected InvalidProbability, got {:?}", other),
        }
    }

    #[test]
    fn test_try_new_rejects_nan() {
        let result = EmployeeRecord::try_new(PerformanceTier::Top, f64::NAN, 0.8, 0.2, 0.0);
        assert!(matches!(result, Err(SimError::InvalidProbability { .. })));
    }

    #[test]
    fn test_try_new_rejects_distribution_not_summing_to_one() {
        let result = EmployeeRecord::try_new(PerformanceTier::Top, 0.1, 0.5, 0.2, 0.0);
        match result {
            Err(SimError::InvalidProbabilityDistribution { sum }) => {
                assert!((sum - 0.7).abs() < 1e-12);
            }
            other => panic!("Expected InvalidProbabilityDistribution, got {:?}", other),
        }
    }

    #[test]
    fn test_try_new_tolerates_float_rounding() {
        // 0.1 + 0.2 + 0.7 is not exactly 1.0 in binary floating point
        let result = EmployeeRecord::try_new(PerformanceTier::Bad, 0.0, 0.1, 0.2, 0.7);
        assert!(result.is_ok());
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "performance": "top",
            "p_churn": 0.1,
            "p_top": 0.8,
            "p_ave": 0.2,
            "p_bad": 0.0
        }"#;

        let employee: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(employee.performance(), PerformanceTier::Top);
        assert_eq!(employee.p_top(), 0.8);
    }

    #[test]
    fn test_deserialize_accepts_ave_alias() {
        let tier: PerformanceTier = serde_json::from_str("\"ave\"").unwrap();
        assert_eq!(tier, PerformanceTier::Average);
    }

    #[test]
    fn test_tier_serialization() {
        assert_eq!(
            serde_json::to_string(&PerformanceTier::Top).unwrap(),
            "\"top\""
        );
        assert_eq!(
            serde_json::to_string(&PerformanceTier::Average).unwrap(),
            "\"average\""
        );
        assert_eq!(
            serde_json::to_string(&PerformanceTier::Bad).unwrap(),
            "\"bad\""
        );
    }

    #[test]
    fn test_transition_weights_order() {
        let employee = EmployeeRecord::new(PerformanceTier::Average, 0.1, 0.2, 0.6, 0.2);
        let weights = employee.transition_weights();
        assert_eq!(weights[0], (PerformanceTier::Top, 0.2));
        assert_eq!(weights[1], (PerformanceTier::Average, 0.6));
        assert_eq!(weights[2], (PerformanceTier::Bad, 0.2));
    }
}
