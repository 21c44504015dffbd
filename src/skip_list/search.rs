//! Read-only descent: key lookup, rank lookup and rank-of-key.

use std::borrow::Borrow;

use super::node::NodeIdx;
use super::SkipList;
use crate::config::MAX_LEVEL_LIMIT;

/// Predecessor and its level-0 position on every lane, recorded by a descent.
///
/// Lanes the descent never visited keep the head at position 0, which is
/// exactly what an insertion raising `current_level` needs there.
pub(super) struct Trail {
    pub(super) preds: [NodeIdx; MAX_LEVEL_LIMIT],
    pub(super) positions: [usize; MAX_LEVEL_LIMIT],
}

impl Trail {
    pub(super) fn new() -> Self {
        Self {
            preds: [NodeIdx::HEAD; MAX_LEVEL_LIMIT],
            positions: [0; MAX_LEVEL_LIMIT],
        }
    }

    #[inline]
    pub(super) fn record(&mut self, level: usize, pred: NodeIdx, position: usize) {
        self.preds[level] = pred;
        self.positions[level] = position;
    }
}

impl<T, G> SkipList<T, G> {
    /// The staircase walk shared by every operation.
    ///
    /// Starting at the head on the top lane in use, follows each link whose
    /// target satisfies `advance(element, position_of_target)`, then drops a
    /// lane. `record` sees the last node reached on each lane with its
    /// position (head = 0, rank r = r + 1). Returns the final level-0 node and
    /// its position.
    pub(super) fn descend<A, R>(&self, mut advance: A, mut record: R) -> (NodeIdx, usize)
    where
        A: FnMut(&T, usize) -> bool,
        R: FnMut(usize, NodeIdx, usize),
    {
        let mut curr = NodeIdx::HEAD;
        let mut position = 0;
        for level in (0..self.current_level).rev() {
            loop {
                let link = self.link(curr, level);
                match link.target {
                    Some(next) if advance(self.element(next), position + link.width) => {
                        position += link.width;
                        curr = next;
                    }
                    _ => break,
                }
            }
            record(level, curr, position);
        }
        (curr, position)
    }

    /// Descends by key, recording the full trail.
    pub(super) fn trail_to<Q>(&self, key: &Q) -> Trail
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut trail = Trail::new();
        self.descend(|element, _| element.borrow() < key, |level, pred, position| {
            trail.record(level, pred, position);
        });
        trail
    }

    /// The level-0 successor of `pred`, if it holds `key`.
    #[inline]
    pub(super) fn successor_matching<Q>(&self, pred: NodeIdx, key: &Q) -> Option<NodeIdx>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.link(pred, 0)
            .target
            .filter(|&next| self.element(next).borrow() == key)
    }

    /// Returns the element equal to `key`.
    ///
    /// ```
    /// use skiprank::SkipList;
    ///
    /// let list: SkipList<String> = ["ant", "bee"].iter().map(|s| s.to_string()).collect();
    /// assert_eq!(list.find("bee").map(String::as_str), Some("bee"));
    /// assert!(list.find("cow").is_none());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (pred, _) = self.descend(|element, _| element.borrow() < key, |_, _, _| {});
        self.successor_matching(pred, key).map(|idx| self.element(idx))
    }

    /// Returns `true` if an element equal to `key` is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Zero-based rank of the element equal to `key`.
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (pred, position) = self.descend(|element, _| element.borrow() < key, |_, _, _| {});
        // The successor sits at `position + 1`, i.e. rank `position`.
        self.successor_matching(pred, key).map(|_| position)
    }

    /// Returns the element of zero-based `rank`, or `None` if
    /// `rank >= self.len()`.
    pub fn at(&self, rank: usize) -> Option<&T> {
        if rank >= self.len {
            return None;
        }
        let mut budget = rank + 1;
        let mut curr = NodeIdx::HEAD;
        for level in (0..self.current_level).rev() {
            loop {
                let link = self.link(curr, level);
                match link.target {
                    Some(next) if link.width <= budget => {
                        budget -= link.width;
                        curr = next;
                        if budget == 0 {
                            return Some(self.element(curr));
                        }
                    }
                    _ => break,
                }
            }
        }
        None
    }

    /// The largest element.
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|rank| self.at(rank))
    }
}
