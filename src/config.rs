//! Construction parameters for [`SkipList`](crate::SkipList).

use crate::error::ConfigError;

/// Level ceiling used by [`SkipList::new`](crate::SkipList::new).
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// Level-growth probability used by [`SkipList::new`](crate::SkipList::new).
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Largest accepted `max_level`.
///
/// Search trails live on the stack in arrays of this size.
pub const MAX_LEVEL_LIMIT: usize = 32;

/// Seed for the level generator when none is given.
pub const DEFAULT_SEED: u64 = 0x1234_5678;

/// Parameters of a skip list: level ceiling, growth probability and RNG seed.
///
/// ```
/// use skiprank::{SkipList, SkipListConfig};
///
/// let config = SkipListConfig::default().with_max_level(8).with_probability(0.25);
/// let list: SkipList<u32> = SkipList::with_config(config).unwrap();
/// assert_eq!(list.max_level(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipListConfig {
    /// Number of lanes on the head; no node ever holds more links.
    pub max_level: usize,
    /// Chance that a node reaching level `k` also reaches level `k + 1`.
    pub probability: f64,
    /// Seed of the default level generator.
    pub seed: u64,
}

impl Default for SkipListConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            probability: DEFAULT_PROBABILITY,
            seed: DEFAULT_SEED,
        }
    }
}

impl SkipListConfig {
    /// Creates a configuration with the given ceiling and probability.
    pub fn new(max_level: usize, probability: f64) -> Self {
        Self {
            max_level,
            probability,
            seed: DEFAULT_SEED,
        }
    }

    /// Sizes the ceiling for roughly `expected_len` elements.
    ///
    /// Falls back to [`DEFAULT_MAX_LEVEL`] when `probability` is invalid so that
    /// [`validate`](Self::validate) reports the probability, not the level.
    pub fn for_capacity(expected_len: usize, probability: f64) -> Self {
        let max_level = recommended_max_level(expected_len, probability)
            .map_or(DEFAULT_MAX_LEVEL, |level| level.min(MAX_LEVEL_LIMIT));
        Self::new(max_level, probability)
    }

    /// Sets the level ceiling.
    #[must_use]
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    /// Sets the level-growth probability.
    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max_level` is zero or above
    /// [`MAX_LEVEL_LIMIT`], or if `probability` is not in `(0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_max_level(self.max_level)?;
        validate_probability(self.probability)
    }
}

pub(crate) fn validate_max_level(max_level: usize) -> Result<(), ConfigError> {
    if max_level == 0 {
        return Err(ConfigError::ZeroMaxLevel);
    }
    if max_level > MAX_LEVEL_LIMIT {
        return Err(ConfigError::MaxLevelTooLarge {
            requested: max_level,
            limit: MAX_LEVEL_LIMIT,
        });
    }
    Ok(())
}

pub(crate) fn validate_probability(probability: f64) -> Result<(), ConfigError> {
    if is_valid_probability(probability) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability(probability))
    }
}

#[inline]
fn is_valid_probability(p: f64) -> bool {
    // NaN fails both comparisons.
    p > 0.0 && p <= 1.0
}

/// Suggests a level ceiling for about `expected_len` elements.
///
/// Returns `⌊log(n) / log(1/p)⌋`, the height above which additional lanes would
/// almost always be empty, clamped to at least 1 so the result is always a
/// usable `max_level`. With `p == 1` every node already reaches the ceiling,
/// so one lane is suggested.
///
/// Returns `None` if `p` is not in `(0, 1]`.
///
/// ```
/// use skiprank::recommended_max_level;
///
/// assert_eq!(recommended_max_level(65_536, 0.5), Some(16));
/// assert_eq!(recommended_max_level(65_536, 0.25), Some(8));
/// assert_eq!(recommended_max_level(100, 1.5), None);
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn recommended_max_level(expected_len: usize, p: f64) -> Option<usize> {
    if !is_valid_probability(p) {
        return None;
    }
    if expected_len <= 1 || p >= 1.0 {
        return Some(1);
    }
    let levels = ((expected_len as f64).log2() / (1.0 / p).log2()).floor();
    Some((levels as usize).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SkipListConfig::default();
        assert_eq!(config.max_level, DEFAULT_MAX_LEVEL);
        assert_eq!(config.probability, DEFAULT_PROBABILITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_levels() {
        assert_eq!(
            SkipListConfig::new(0, 0.5).validate(),
            Err(ConfigError::ZeroMaxLevel)
        );
        assert_eq!(
            SkipListConfig::new(MAX_LEVEL_LIMIT + 1, 0.5).validate(),
            Err(ConfigError::MaxLevelTooLarge {
                requested: MAX_LEVEL_LIMIT + 1,
                limit: MAX_LEVEL_LIMIT,
            })
        );
        assert!(SkipListConfig::new(MAX_LEVEL_LIMIT, 0.5).validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_probabilities() {
        for p in [0.0, -0.25, 1.0001, 7.0, f64::INFINITY] {
            assert_eq!(
                SkipListConfig::new(4, p).validate(),
                Err(ConfigError::InvalidProbability(p)),
                "p = {p}"
            );
        }
        assert!(matches!(
            SkipListConfig::new(4, f64::NAN).validate(),
            Err(ConfigError::InvalidProbability(p)) if p.is_nan()
        ));
        assert!(SkipListConfig::new(4, 1.0).validate().is_ok());
        assert!(SkipListConfig::new(4, f64::MIN_POSITIVE).validate().is_ok());
    }

    #[test]
    fn test_recommended_max_level() {
        assert_eq!(recommended_max_level(1 << 16, 0.5), Some(16));
        assert_eq!(recommended_max_level(1 << 16, 0.25), Some(8));
        assert_eq!(recommended_max_level(1000, 0.5), Some(9));
        assert_eq!(recommended_max_level(0, 0.5), Some(1));
        assert_eq!(recommended_max_level(1, 0.5), Some(1));
        assert_eq!(recommended_max_level(1000, 1.0), Some(1));
        assert_eq!(recommended_max_level(1000, 0.0), None);
        assert_eq!(recommended_max_level(1000, -0.5), None);
        assert_eq!(recommended_max_level(1000, 1.5), None);
        assert_eq!(recommended_max_level(1000, f64::NAN), None);
    }

    #[test]
    fn test_for_capacity() {
        let config = SkipListConfig::for_capacity(1 << 20, 0.5);
        assert_eq!(config.max_level, 20);
        assert!(config.validate().is_ok());

        // Ceiling is clamped to the limit.
        let config = SkipListConfig::for_capacity(usize::MAX, 0.75);
        assert_eq!(config.max_level, MAX_LEVEL_LIMIT);

        let config = SkipListConfig::for_capacity(100, 2.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidProbability(2.0)));
    }

    #[test]
    fn test_builder_setters() {
        let config = SkipListConfig::default()
            .with_max_level(5)
            .with_probability(0.3)
            .with_seed(99);
        assert_eq!(config, SkipListConfig { max_level: 5, probability: 0.3, seed: 99 });
    }
}
