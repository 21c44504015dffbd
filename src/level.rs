//! Level generation for new nodes.
//!
//! Every node sits on level 0. A node that reaches level `k` also reaches
//! `k + 1` with probability `p`, so heights follow a geometric distribution
//! truncated at the list's ceiling. The randomness source is pluggable:
//! implement [`LevelGenerator`] to script exact heights in tests, or build a
//! [`GeometricLevels`] over any [`rand::Rng`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{self, SkipListConfig};
use crate::error::ConfigError;

/// Draws the height of each newly inserted node.
pub trait LevelGenerator {
    /// The ceiling: the head holds this many lanes.
    fn max_level(&self) -> usize;

    /// Draws a height in `1..=self.max_level()`.
    ///
    /// Returning anything outside that range is a contract violation; the
    /// skip list clamps such values into range.
    fn random_level(&mut self) -> usize;
}

/// Geometric level generator over an arbitrary random number generator.
#[derive(Debug, Clone)]
pub struct GeometricLevels<R = SmallRng> {
    max_level: usize,
    p: f64,
    rng: R,
}

impl GeometricLevels<SmallRng> {
    /// Builds the generator described by `config`, seeding a [`SmallRng`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn from_config(config: &SkipListConfig) -> Result<Self, ConfigError> {
        Self::with_rng(
            config.max_level,
            config.probability,
            SmallRng::seed_from_u64(config.seed),
        )
    }
}

impl Default for GeometricLevels<SmallRng> {
    fn default() -> Self {
        Self {
            max_level: config::DEFAULT_MAX_LEVEL,
            p: config::DEFAULT_PROBABILITY,
            rng: SmallRng::seed_from_u64(config::DEFAULT_SEED),
        }
    }
}

impl<R: Rng> GeometricLevels<R> {
    /// Builds a generator drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max_level` is zero or above the limit, or if
    /// `p` is not in `(0, 1]`.
    pub fn with_rng(max_level: usize, p: f64, rng: R) -> Result<Self, ConfigError> {
        config::validate_max_level(max_level)?;
        config::validate_probability(p)?;
        Ok(Self { max_level, p, rng })
    }

    /// Level-growth probability.
    pub fn probability(&self) -> f64 {
        self.p
    }
}

impl<R: Rng> LevelGenerator for GeometricLevels<R> {
    #[inline]
    fn max_level(&self) -> usize {
        self.max_level
    }

    fn random_level(&mut self) -> usize {
        let mut level = 1;
        while level < self.max_level && self.rng.gen::<f64>() < self.p {
            level += 1;
        }
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_levels_stay_in_range() {
        let mut levels = GeometricLevels::from_config(&SkipListConfig::new(6, 0.5)).unwrap();
        for _ in 0..10_000 {
            let level = levels.random_level();
            assert!((1..=6).contains(&level), "level {level} out of range");
        }
    }

    #[test]
    fn test_probability_one_reaches_ceiling() {
        let mut levels = GeometricLevels::from_config(&SkipListConfig::new(5, 1.0)).unwrap();
        for _ in 0..100 {
            assert_eq!(levels.random_level(), 5);
        }
    }

    #[test]
    fn test_single_lane_never_grows() {
        let mut levels = GeometricLevels::from_config(&SkipListConfig::new(1, 0.9)).unwrap();
        for _ in 0..100 {
            assert_eq!(levels.random_level(), 1);
        }
    }

    #[test]
    fn test_distribution_is_roughly_geometric() {
        let mut levels = GeometricLevels::from_config(&SkipListConfig::new(16, 0.5)).unwrap();
        let draws = 100_000;
        let ones = (0..draws).filter(|_| levels.random_level() == 1).count();
        // Expected half; allow generous slack.
        assert!(ones > draws * 45 / 100 && ones < draws * 55 / 100, "ones = {ones}");
    }

    #[test]
    fn test_same_seed_same_levels() {
        let config = SkipListConfig::default().with_seed(42);
        let mut a = GeometricLevels::from_config(&config).unwrap();
        let mut b = GeometricLevels::from_config(&config).unwrap();
        let xs: Vec<_> = (0..64).map(|_| a.random_level()).collect();
        let ys: Vec<_> = (0..64).map(|_| b.random_level()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_custom_rng() {
        // A zero-stepping RNG always yields 0.0, which is below any valid p.
        let mut levels = GeometricLevels::with_rng(4, 0.01, StepRng::new(0, 0)).unwrap();
        assert_eq!(levels.random_level(), 4);
        assert_eq!(levels.probability(), 0.01);
    }

    #[test]
    fn test_with_rng_validates() {
        assert_eq!(
            GeometricLevels::with_rng(0, 0.5, StepRng::new(0, 1)).unwrap_err(),
            ConfigError::ZeroMaxLevel
        );
        assert_eq!(
            GeometricLevels::with_rng(4, 0.0, StepRng::new(0, 1)).unwrap_err(),
            ConfigError::InvalidProbability(0.0)
        );
    }
}
