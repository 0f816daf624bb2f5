//! Seeded PRNG for the simulation. SplitMix64: small, fast, good statistical quality.
//! Deterministic: same seed produces the same sequence. Not cryptographically secure.

use crate::models::PerformanceTier;

const SPLITMIX64_GOLDEN: u64 = 0x9e3779b97f4a7c15;
const SPLITMIX64_M1: u64 = 0xbf58476d1ce4e5b9;
const SPLITMIX64_M2: u64 = 0x94d049bb133111eb;

/// 2^-53, maps the top 53 bits of a `u64` onto `[0, 1)`.
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// SplitMix64 generator state.
#[derive(Debug, Clone, Copy)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Creates a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the next 64-bit value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(SPLITMIX64_GOLDEN);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(SPLITMIX64_M1);
        z = (z ^ (z >> 27)).wrapping_mul(SPLITMIX64_M2);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_UNIT
    }

    /// True with probability `p`. `p <= 0` never fires, `p >= 1` always does.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform index in `0..n`. `n` must be non-zero.
    #[inline]
    pub fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Samples a tier from unnormalized weights.
    ///
    /// Weights need not sum to one; rounding at the top end falls back to the
    /// last tier with positive weight.
    pub fn pick_tier(&mut self, weights: &[(PerformanceTier, f64); 3]) -> PerformanceTier {
        let total: f64 = weights.iter().map(|(_, w)| w.max(0.0)).sum();
        let target = self.next_f64() * total;

        let mut cumulative = 0.0;
        for &(tier, weight) in weights {
            let weight = weight.max(0.0);
            cumulative += weight;
            if weight > 0.0 && target < cumulative {
                return tier;
            }
        }

        weights
            .iter()
            .rev()
            .find(|(_, w)| *w > 0.0)
            .map(|(tier, _)| *tier)
            .unwrap_or(weights[weights.len() - 1].0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitmix64_deterministic() {
        let mut a = Rng::new(7);
        let mut b = Rng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn splitmix64_different_seeds_differ() {
        let mut a = Rng::new(1);
        let mut b = Rng::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn next_f64_in_unit_interval() {
        let mut rng = Rng::new(99);
        for _ in 0..10_000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = Rng::new(3);
        for _ in 0..1_000 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
        }
    }

    #[test]
    fn chance_frequency_close_to_p() {
        let mut rng = Rng::new(11);
        let hits = (0..20_000).filter(|_| rng.chance(0.3)).count();
        let freq = hits as f64 / 20_000.0;
        assert!((freq - 0.3).abs() < 0.02, "frequency {}", freq);
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = Rng::new(5);
        for _ in 0..1_000 {
            assert!(rng.below(7) < 7);
        }
        assert_eq!(rng.below(1), 0);
    }

    #[test]
    fn pick_tier_never_picks_zero_weight() {
        let mut rng = Rng::new(17);
        let weights = [
            (PerformanceTier::Top, 0.8),
            (PerformanceTier::Average, 0.2),
            (PerformanceTier::Bad, 0.0),
        ];
        for _ in 0..5_000 {
            assert_ne!(rng.pick_tier(&weights), PerformanceTier::Bad);
        }
    }

    #[test]
    fn pick_tier_certain_outcome() {
        let mut rng = Rng::new(23);
        let weights = [
            (PerformanceTier::Top, 0.0),
            (PerformanceTier::Average, 0.0),
            (PerformanceTier::Bad, 1.0),
        ];
        for _ in 0..1_000 {
            assert_eq!(rng.pick_tier(&weights), PerformanceTier::Bad);
        }
    }

    #[test]
    fn pick_tier_accepts_unnormalized_weights() {
        let mut rng = Rng::new(29);
        let weights = [
            (PerformanceTier::Top, 3.0),
            (PerformanceTier::Average, 1.0),
            (PerformanceTier::Bad, 0.0),
        ];
        let tops = (0..20_000)
            .filter(|_| rng.pick_tier(&weights) == PerformanceTier::Top)
            .count();
        let freq = tops as f64 / 20_000.0;
        assert!((freq - 0.75).abs() < 0.02, "frequency {}", freq);
    }
}
