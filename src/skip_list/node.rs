//! Node storage: links, nodes and the slot arena that owns them.

/// Index of a node in the arena.
///
/// [`NodeIdx::HEAD`] designates the sentinel, which lives outside the arena.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const HEAD: Self = Self(usize::MAX);

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0
    }

    #[inline(always)]
    pub(crate) fn is_head(self) -> bool {
        self == Self::HEAD
    }
}

/// A forward link and the number of level-0 steps it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Link {
    pub(crate) target: Option<NodeIdx>,
    /// 0 whenever `target` is `None`.
    pub(crate) width: usize,
}

impl Link {
    pub(crate) const END: Self = Self {
        target: None,
        width: 0,
    };

    #[inline]
    pub(crate) fn to(target: NodeIdx, width: usize) -> Self {
        debug_assert!(width > 0);
        Self {
            target: Some(target),
            width,
        }
    }
}

pub(crate) struct Node<T> {
    pub(crate) element: T,
    /// One link per lane; `links.len()` is the node's level.
    pub(crate) links: Box<[Link]>,
}

impl<T> Node<T> {
    fn new(element: T, level: usize) -> Self {
        Self {
            element,
            links: vec![Link::END; level].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub(crate) fn level(&self) -> usize {
        self.links.len()
    }
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// Slab of nodes with a free list, so indices stay stable across removals.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
        }
    }

    /// Stores a new node with `level` unlinked lanes.
    pub(crate) fn alloc(&mut self, element: T, level: usize) -> NodeIdx {
        let node = Node::new(element, level);
        match self.free_head {
            Some(idx) => {
                let slot = &mut self.slots[idx];
                if let Slot::Vacant { next_free } = *slot {
                    self.free_head = next_free;
                } else {
                    unreachable!("free list points at an occupied slot");
                }
                *slot = Slot::Occupied(node);
                NodeIdx(idx)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeIdx(self.slots.len() - 1)
            }
        }
    }

    /// Frees the slot at `idx` and hands back its node.
    pub(crate) fn release(&mut self, idx: NodeIdx) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match core::mem::replace(&mut self.slots[idx.index()], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(idx.index());
                node
            }
            Slot::Vacant { .. } => unreachable!("double release of node {}", idx.index()),
        }
    }

    #[inline]
    pub(crate) fn node(&self, idx: NodeIdx) -> &Node<T> {
        match &self.slots[idx.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling link to node {}", idx.index()),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: NodeIdx) -> &mut Node<T> {
        match &mut self.slots[idx.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling link to node {}", idx.index()),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
    }

    /// Number of slots, occupied or not.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_reuses_released_slots() {
        let mut arena = Arena::new();
        let a = arena.alloc("a", 1);
        let b = arena.alloc("b", 3);
        assert_eq!(arena.node(b).level(), 3);
        assert_eq!(arena.node(b).links[2], Link::END);

        let node = arena.release(a);
        assert_eq!(node.element, "a");

        let c = arena.alloc("c", 2);
        assert_eq!(c, a);
        assert_eq!(arena.node(c).element, "c");
        assert_eq!(arena.capacity(), 2);

        arena.node_mut(b).links[0] = Link::to(c, 1);
        assert_eq!(arena.node(b).links[0].target, Some(c));
    }

    #[test]
    fn test_free_list_is_lifo() {
        let mut arena = Arena::new();
        let ids: Vec<_> = (0..4).map(|i| arena.alloc(i, 1)).collect();
        arena.release(ids[1]);
        arena.release(ids[3]);
        assert_eq!(arena.alloc(10, 1), ids[3]);
        assert_eq!(arena.alloc(11, 1), ids[1]);
        assert_eq!(arena.alloc(12, 1).index(), 4);
    }

    #[test]
    fn test_head_sentinel() {
        assert!(NodeIdx::HEAD.is_head());
        assert!(!NodeIdx(0).is_head());
    }
}
