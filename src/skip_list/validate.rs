//! Exhaustive structural check, for tests and debugging.

use std::collections::{HashMap, HashSet};

use super::node::NodeIdx;
use super::SkipList;
use crate::error::InvariantViolation;

impl<T: Ord, G> SkipList<T, G> {
    /// Walks every lane and checks the structural invariants, in O(n · levels).
    ///
    /// Checked: level 0 is strictly ascending and holds `len` nodes; every lane
    /// is a subsequence of the one below; every link's width equals the
    /// level-0 distance it spans (0 at a lane's end); no node is taller than
    /// the ceiling; and `current_level` is exactly the number of lanes in use.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let mut positions: HashMap<NodeIdx, usize> = HashMap::with_capacity(self.len);
        let mut prev: Option<&T> = None;
        let mut curr = self.head[0].target;
        let mut position = 0;
        while let Some(idx) = curr {
            position += 1;
            let node = self.nodes.node(idx);
            if prev.is_some_and(|p| *p >= node.element) {
                return Err(InvariantViolation::Unordered { position });
            }
            if node.level() > self.max_level() {
                return Err(InvariantViolation::LevelOverflow {
                    position,
                    level: node.level(),
                });
            }
            positions.insert(idx, position);
            prev = Some(&node.element);
            curr = node.links[0].target;
        }
        if position != self.len {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.len,
                reachable: position,
            });
        }

        let mut below: HashSet<NodeIdx> = positions.keys().copied().collect();
        let mut lanes_in_use = 1;
        for level in 0..self.max_level() {
            let mut lane = HashSet::new();
            let mut from = NodeIdx::HEAD;
            let mut from_position = 0;
            loop {
                let link = self.link(from, level);
                let Some(target) = link.target else {
                    if link.width != 0 {
                        return Err(InvariantViolation::WidthMismatch {
                            level,
                            position: from_position,
                            stored: link.width,
                            expected: 0,
                        });
                    }
                    break;
                };
                let target_position = match positions.get(&target) {
                    Some(&p) if p > from_position && below.contains(&target) => p,
                    _ => return Err(InvariantViolation::NotSubsequence { level }),
                };
                if self.nodes.node(target).level() <= level {
                    return Err(InvariantViolation::NotSubsequence { level });
                }
                let expected = target_position - from_position;
                if link.width != expected {
                    return Err(InvariantViolation::WidthMismatch {
                        level,
                        position: from_position,
                        stored: link.width,
                        expected,
                    });
                }
                lane.insert(target);
                from = target;
                from_position = target_position;
            }
            // Every node tall enough for this lane must be reachable on it.
            let tall = positions
                .keys()
                .filter(|&&idx| self.nodes.node(idx).level() > level)
                .count();
            if tall != lane.len() {
                return Err(InvariantViolation::NotSubsequence { level });
            }
            if !lane.is_empty() {
                lanes_in_use = level + 1;
            }
            below = lane;
        }

        // An empty list keeps a single lane.
        if lanes_in_use != self.current_level {
            return Err(InvariantViolation::CurrentLevel {
                recorded: self.current_level,
                observed: lanes_in_use,
            });
        }
        Ok(())
    }
}
