//! # `skiprank` - Indexable Skip List
//!
//! An ordered set built on William Pugh's skip list, augmented with per-link
//! widths so that elements can be reached by position as cheaply as by key.
//!
//! ## Key Features
//!
//! - **Ordered set semantics**: elements are unique and kept ascending; the
//!   element is its own key.
//! - **Rank access**: [`SkipList::at`] returns the k-th smallest element and
//!   [`SkipList::rank_of`] the position of a key, both in expected O(log n).
//! - **Owned removal**: [`SkipList::remove`] hands the element back instead of
//!   dropping it.
//! - **Reproducible structure**: node heights come from a seeded
//!   [`LevelGenerator`], so the same inserts always build the same list.
//!
//! ## Architecture
//!
//! Nodes live in a slot arena and link to each other by index. The head
//! sentinel holds `max_level` lanes; lane 0 chains every node, and each higher
//! lane is an express lane over a random subset of the one below.
//!
//! ### Width Invariant
//!
//! Every link stores the number of level-0 steps between its origin and its
//! target (0 when it has no target). A descent that adds up the widths of the
//! links it follows always knows the exact rank of the node it stands on.
//! Insertion splits the widths it crosses and removal merges them, so the
//! invariant holds after every operation. [`SkipList::validate`] checks it
//! exhaustively.
//!
//! ### Thread Safety
//!
//! The list has no interior synchronization. Share it across threads behind
//! an exclusive lock.
//!
//! ## Example
//!
//! ```rust
//! use skiprank::SkipList;
//!
//! let mut list = SkipList::new();
//! for x in [3, 6, 7, 9, 12] {
//!     list.insert(x);
//! }
//!
//! assert_eq!(list.len(), 5);
//! assert_eq!(list.at(0), Some(&3));
//! assert_eq!(list[4], 12);
//! assert!(list.find(&7).is_some());
//!
//! assert_eq!(list.remove(&7), Some(7));
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.at(2), Some(&9));
//! assert!(list.find(&7).is_none());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a `tracing` event when the `tracing` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

pub mod config;
pub mod error;
pub mod level;
pub mod skip_list;

pub use config::{
    recommended_max_level, SkipListConfig, DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY, DEFAULT_SEED,
    MAX_LEVEL_LIMIT,
};
pub use error::{ConfigError, InvariantViolation};
pub use level::{GeometricLevels, LevelGenerator};
pub use skip_list::{IntoIter, Iter, SkipList, SkipListDiagram};

