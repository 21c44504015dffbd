//! `SkipList` — an ordered set with positional access.
//!
//! Nodes live in a slot arena and refer to each other by index, so the
//! list owns every element outright and links never own anything. Each link
//! carries a *width*: the number of level-0 steps it spans. Summing widths
//! along a search path yields the rank of wherever the search stops, which
//! is what makes [`SkipList::at`] and [`SkipList::rank_of`] logarithmic.
//!
//! ```text
//!            4
//! o---------------------> x Level 2
//!   1     1        2
//! o---> o---> o---------> x Level 1
//!   1     1     1     1
//! o---> o---> o---> o---> x Level 0
//!       3     6     7     9
//! ```
//!
//! Time complexity (expected): search, insertion, removal and rank access are
//! all O(log n). Worst case is O(n).

mod display;
mod iter;
mod node;
mod search;
mod update;
mod validate;


use core::fmt;
use core::ops::Index;

use crate::config::SkipListConfig;
use crate::error::ConfigError;
use crate::level::{GeometricLevels, LevelGenerator};

pub use display::SkipListDiagram;
pub use iter::{IntoIter, Iter};

use node::{Arena, Link, NodeIdx};

/// An ordered set of unique elements with expected O(log n) search, insertion,
/// removal and access by rank.
///
/// The element is its own key: lookups take anything `T` can borrow as.
///
/// ```
/// use skiprank::SkipList;
///
/// let mut list = SkipList::new();
/// for x in [9, 3, 12, 6, 7] {
///     list.insert(x);
/// }
/// assert_eq!(list.at(0), Some(&3));
/// assert_eq!(list.at(4), Some(&12));
/// assert_eq!(list.rank_of(&7), Some(2));
///
/// assert_eq!(list.remove(&7), Some(7));
/// assert_eq!(list.at(2), Some(&9));
/// assert_eq!(list.find(&7), None);
/// ```
pub struct SkipList<T, G = GeometricLevels> {
    /// Lanes of the sentinel; always `max_level` long.
    head: Box<[Link]>,
    nodes: Arena<T>,
    /// Number of lanes in use, `1..=max_level`.
    current_level: usize,
    len: usize,
    levels: G,
}

impl<T> SkipList<T> {
    /// Creates an empty list with the default ceiling and probability.
    pub fn new() -> Self {
        Self::from_generator(GeometricLevels::default())
    }

    /// Creates an empty list with `max_level` lanes and level probability `p`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max_level` is zero or above
    /// [`MAX_LEVEL_LIMIT`](crate::MAX_LEVEL_LIMIT), or `p` is not in `(0, 1]`.
    pub fn with_params(max_level: usize, p: f64) -> Result<Self, ConfigError> {
        Self::with_config(SkipListConfig::new(max_level, p))
    }

    /// Creates an empty list from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn with_config(config: SkipListConfig) -> Result<Self, ConfigError> {
        GeometricLevels::from_config(&config).map(Self::from_generator)
    }
}

impl<T, R: rand::Rng> SkipList<T, GeometricLevels<R>> {
    /// Level-growth probability.
    pub fn probability(&self) -> f64 {
        self.levels.probability()
    }
}

impl<T, G: LevelGenerator> SkipList<T, G> {
    /// Creates an empty list drawing node heights from `levels`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the generator's ceiling is zero or above
    /// [`MAX_LEVEL_LIMIT`](crate::MAX_LEVEL_LIMIT).
    pub fn with_generator(levels: G) -> Result<Self, ConfigError> {
        crate::config::validate_max_level(levels.max_level())?;
        Ok(Self::from_generator(levels))
    }

    fn from_generator(levels: G) -> Self {
        let max_level = levels.max_level();
        debug!(max_level, "creating skip list");
        Self {
            head: vec![Link::END; max_level].into_boxed_slice(),
            nodes: Arena::new(),
            current_level: 1,
            len: 0,
            levels,
        }
    }

    /// The generator drawing node heights.
    pub fn level_generator(&self) -> &G {
        &self.levels
    }
}

impl<T, G> SkipList<T, G> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The level ceiling: the head's lane count.
    #[inline]
    pub fn max_level(&self) -> usize {
        self.head.len()
    }

    /// Number of lanes currently in use.
    #[inline]
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// Drops every element, keeping the configuration.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head.fill(Link::END);
        self.current_level = 1;
        self.len = 0;
    }

    /// The smallest element.
    pub fn first(&self) -> Option<&T> {
        self.head[0].target.map(|idx| self.element(idx))
    }

    #[inline]
    fn link(&self, from: NodeIdx, level: usize) -> Link {
        if from.is_head() {
            self.head[level]
        } else {
            self.nodes.node(from).links[level]
        }
    }

    #[inline]
    fn link_mut(&mut self, from: NodeIdx, level: usize) -> &mut Link {
        if from.is_head() {
            &mut self.head[level]
        } else {
            &mut self.nodes.node_mut(from).links[level]
        }
    }

    #[inline]
    fn element(&self, idx: NodeIdx) -> &T {
        &self.nodes.node(idx).element
    }
}

impl<T> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, G> fmt::Debug for SkipList<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, G> Index<usize> for SkipList<T, G> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `rank >= self.len()`.
    fn index(&self, rank: usize) -> &T {
        match self.at(rank) {
            Some(element) => element,
            None => panic!("rank {rank} out of range for skip list of length {}", self.len),
        }
    }
}

impl<T: Ord> FromIterator<T> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Ord, G: LevelGenerator> Extend<T> for SkipList<T, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}
