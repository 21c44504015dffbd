//! Insertion and removal, with the width bookkeeping that keeps ranks exact.
//!
//! Widths are maintained through absolute level-0 positions: a link from
//! position `a` to position `b` has width `b - a`. Splicing a node in at
//! position `q` shifts every later node by one, and unlinking one shifts
//! them back.

use std::borrow::Borrow;

use super::node::{Link, NodeIdx};
use super::search::Trail;
use super::SkipList;
use crate::level::LevelGenerator;

impl<T: Ord, G: LevelGenerator> SkipList<T, G> {
    /// Inserts `value` and returns a reference to the stored element.
    ///
    /// If an equal element is already present the list is left untouched,
    /// `value` is dropped, and the existing element is returned.
    ///
    /// ```
    /// use skiprank::SkipList;
    ///
    /// let mut list = SkipList::new();
    /// assert_eq!(*list.insert(5), 5);
    /// list.insert(5);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> &T {
        let trail = self.trail_to(&value);
        let pred = trail.preds[0];
        if let Some(existing) = self.successor_matching(pred, &value) {
            return self.element(existing);
        }

        let level = self.levels.random_level().clamp(1, self.max_level());
        if level > self.current_level {
            trace!(from = self.current_level, to = level, "raising current level");
            self.current_level = level;
        }

        let idx = self.nodes.alloc(value, level);
        let position = trail.positions[0] + 1;
        for lane in 0..level {
            let pred = trail.preds[lane];
            let pred_position = trail.positions[lane];
            let old = self.link(pred, lane);
            // The old target moves from `pred_position + old.width` one step right.
            self.nodes.node_mut(idx).links[lane] = match old.target {
                Some(target) => Link::to(target, pred_position + old.width + 1 - position),
                None => Link::END,
            };
            *self.link_mut(pred, lane) = Link::to(idx, position - pred_position);
        }
        // Links passing over the new node now span one more step.
        for lane in level..self.current_level {
            let link = self.link_mut(trail.preds[lane], lane);
            if link.target.is_some() {
                link.width += 1;
            }
        }

        self.len += 1;
        trace!(height = level, rank = position - 1, "inserted node");
        self.element(idx)
    }
}

impl<T: Ord, G> SkipList<T, G> {
    /// Removes the element equal to `key` and hands it back.
    ///
    /// Returns `None`, leaving the list untouched, if no such element exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let trail = self.trail_to(key);
        let victim = self.successor_matching(trail.preds[0], key)?;
        Some(self.unlink(&trail, victim))
    }
}

impl<T, G> SkipList<T, G> {
    /// Removes and returns the element of zero-based `rank`.
    pub fn remove_at(&mut self, rank: usize) -> Option<T> {
        if rank >= self.len {
            return None;
        }
        let mut trail = Trail::new();
        // Stop on each lane before reaching position `rank + 1`.
        let (pred, _) = self.descend(|_, position| position <= rank, |level, pred, position| {
            trail.record(level, pred, position);
        });
        let victim = self.link(pred, 0).target?;
        Some(self.unlink(&trail, victim))
    }

    /// Removes and returns the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        let first = self.head[0].target?;
        // Every lane's predecessor of the first node is the head.
        Some(self.unlink(&Trail::new(), first))
    }

    /// Detaches `victim`, whose predecessors on every lane are in `trail`.
    fn unlink(&mut self, trail: &Trail, victim: NodeIdx) -> T {
        for lane in 0..self.current_level {
            let pred = trail.preds[lane];
            let link = self.link(pred, lane);
            if link.target == Some(victim) {
                let through = self.nodes.node(victim).links[lane];
                *self.link_mut(pred, lane) = match through.target {
                    Some(target) => Link::to(target, link.width + through.width - 1),
                    None => Link::END,
                };
            } else if link.target.is_some() {
                self.link_mut(pred, lane).width -= 1;
            }
        }

        let node = self.nodes.release(victim);
        self.len -= 1;

        let before = self.current_level;
        while self.current_level > 1 && self.head[self.current_level - 1].target.is_none() {
            self.current_level -= 1;
        }
        if self.current_level != before {
            trace!(from = before, to = self.current_level, "lowering current level");
        }
        trace!(height = node.level(), "removed node");
        node.element
    }
}
