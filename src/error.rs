//! Error types.
//!
//! Ordinary absence (a missing key, an out-of-range rank) is reported through
//! `Option`. The types here cover the two genuinely exceptional situations:
//! rejected construction parameters and, for [`SkipList::validate`], a broken
//! structural invariant.
//!
//! [`SkipList::validate`]: crate::SkipList::validate

use core::fmt;

/// Rejected skip list construction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `max_level` was zero; the head needs at least one lane.
    ZeroMaxLevel,
    /// `max_level` exceeded [`MAX_LEVEL_LIMIT`](crate::MAX_LEVEL_LIMIT).
    MaxLevelTooLarge {
        /// The level count that was asked for.
        requested: usize,
        /// The largest accepted level count.
        limit: usize,
    },
    /// The level-growth probability was outside `(0, 1]` or NaN.
    InvalidProbability(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxLevel => f.write_str("max level must be at least 1"),
            Self::MaxLevelTooLarge { requested, limit } => {
                write!(f, "max level {requested} exceeds the limit of {limit}")
            }
            Self::InvalidProbability(p) => {
                write!(f, "level probability {p} is outside (0, 1]")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A structural invariant found broken by [`SkipList::validate`].
///
/// Positions are 1-based level-0 positions (the head sits at 0).
///
/// [`SkipList::validate`]: crate::SkipList::validate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Two consecutive level-0 elements are not strictly ascending.
    Unordered {
        /// Position of the second element of the offending pair.
        position: usize,
    },
    /// The level-0 chain length differs from the recorded length.
    LengthMismatch {
        /// Recorded `len`.
        recorded: usize,
        /// Nodes actually reachable on level 0.
        reachable: usize,
    },
    /// A link's width disagrees with the level-0 distance it spans.
    WidthMismatch {
        /// Lane the link belongs to.
        level: usize,
        /// Position of the link's origin.
        position: usize,
        /// Width stored on the link.
        stored: usize,
        /// Width implied by level-0 positions.
        expected: usize,
    },
    /// A lane reaches a node that does not sit on the level below it.
    NotSubsequence {
        /// Lane with the stray link.
        level: usize,
    },
    /// A node holds more links than the list's configured maximum.
    LevelOverflow {
        /// Position of the node.
        position: usize,
        /// Its link count.
        level: usize,
    },
    /// A lane above `current_level` is in use, or the top lane is empty.
    CurrentLevel {
        /// Recorded `current_level`.
        recorded: usize,
        /// Highest non-empty lane count observed.
        observed: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unordered { position } => {
                write!(f, "element at position {position} is not greater than its predecessor")
            }
            Self::LengthMismatch { recorded, reachable } => {
                write!(f, "recorded length {recorded} but {reachable} nodes reachable")
            }
            Self::WidthMismatch { level, position, stored, expected } => write!(
                f,
                "link at level {level} from position {position} has width {stored}, expected {expected}"
            ),
            Self::NotSubsequence { level } => {
                write!(f, "level {level} reaches a node missing from the level below")
            }
            Self::LevelOverflow { position, level } => {
                write!(f, "node at position {position} has {level} levels, above the maximum")
            }
            Self::CurrentLevel { recorded, observed } => {
                write!(f, "current level is {recorded} but {observed} lanes are in use")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
