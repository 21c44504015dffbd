//! Iterators over the level-0 chain, in ascending order.

use core::iter::FusedIterator;

use super::node::{Link, NodeIdx};
use super::SkipList;

/// Borrowing iterator, created by [`SkipList::iter`].
pub struct Iter<'a, T, G> {
    list: &'a SkipList<T, G>,
    next: Option<NodeIdx>,
    remaining: usize,
}

impl<'a, T, G> Iterator for Iter<'a, T, G> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.list.nodes.node(idx);
        self.next = node.links[0].target;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, G> ExactSizeIterator for Iter<'_, T, G> {}

impl<T, G> FusedIterator for Iter<'_, T, G> {}

impl<T, G> Clone for Iter<'_, T, G> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator, created by [`SkipList::into_iter`].
pub struct IntoIter<T, G> {
    list: SkipList<T, G>,
}

impl<T, G> Iterator for IntoIter<T, G> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, G> ExactSizeIterator for IntoIter<T, G> {}

impl<T, G> FusedIterator for IntoIter<T, G> {}

impl<T, G> SkipList<T, G> {
    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T, G> {
        Iter {
            list: self,
            next: self.head[0].target,
            remaining: self.len,
        }
    }

    /// Walks lane `level` from the head, yielding each link including the
    /// terminating one.
    pub(super) fn lane(&self, level: usize) -> impl Iterator<Item = Link> + '_ {
        let mut curr = Some(NodeIdx::HEAD);
        core::iter::from_fn(move || {
            let link = self.link(curr?, level);
            curr = link.target;
            Some(link)
        })
    }
}

impl<'a, T, G> IntoIterator for &'a SkipList<T, G> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, G> IntoIterator for SkipList<T, G> {
    type Item = T;
    type IntoIter = IntoIter<T, G>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
