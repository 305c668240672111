//! Node storage.
//!
//! Every node of the list, sentinels included, lives in a single [`Arena`]
//! and is addressed by a [`NodeId`]. The four directional links of a node are
//! plain optional ids, so there is no aliasing to manage: the arena is the
//! sole owner and dropping it releases every node exactly once.
//!
//! Storage is a [`Slab`]: freed slots are handed out again by the next
//! [`Arena::alloc`], and ids stay stable for as long as their node is live.

use slab::Slab;

use crate::bound::Bound;

// ////////////////////////////////////////////////////////////////////////////
// NodeId
// ////////////////////////////////////////////////////////////////////////////

/// Stable handle to a node within an [`Arena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

// ////////////////////////////////////////////////////////////////////////////
// Node
// ////////////////////////////////////////////////////////////////////////////

/// A single element of one level.
///
/// `next`/`prev` link along the level, `up`/`down` link to the node holding
/// the same key on the adjacent level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub key: Bound,
    pub next: Option<NodeId>,
    pub prev: Option<NodeId>,
    pub up: Option<NodeId>,
    pub down: Option<NodeId>,
}

impl Node {
    /// A detached node: all links unset.
    #[inline]
    pub const fn new(key: Bound) -> Self {
        Node {
            key,
            next: None,
            prev: None,
            up: None,
            down: None,
        }
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Arena
// ////////////////////////////////////////////////////////////////////////////

/// Slab of nodes with slot reuse.
#[derive(Clone, Debug, Default)]
pub struct Arena {
    nodes: Slab<Node>,
}

impl Arena {
    /// An empty arena.
    #[inline]
    pub const fn new() -> Self {
        Arena { nodes: Slab::new() }
    }

    /// Number of live nodes.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes the arena can hold without reallocating.
    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Store a detached node holding `key`, reusing a vacant slot if any.
    #[inline]
    pub fn alloc(&mut self, key: Bound) -> NodeId {
        NodeId(self.nodes.insert(Node::new(key)))
    }

    /// Release the node at `id`, returning it.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a live node.
    #[inline]
    #[expect(
        clippy::expect_used,
        reason = "Ids only come from `alloc` and each is freed once"
    )]
    pub fn free(&mut self, id: NodeId) -> Node {
        self.nodes.try_remove(id.0).expect("double free of node")
    }

    /// Borrow the node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a live node.
    #[inline]
    #[expect(clippy::expect_used, reason = "Links never point at freed nodes")]
    pub fn get(&self, id: NodeId) -> &Node {
        self.nodes.get(id.0).expect("use of freed node")
    }

    /// Mutably borrow the node at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a live node.
    #[inline]
    #[expect(clippy::expect_used, reason = "Links never point at freed nodes")]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes.get_mut(id.0).expect("use of freed node")
    }

    /// Drop every node.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Arena, Node};
    use crate::bound::Bound;

    #[test]
    fn alloc_get() {
        let mut arena = Arena::new();
        let a = arena.alloc(Bound::NegInf);
        let b = arena.alloc(Bound::Value(3));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), &Node::new(Bound::NegInf));
        assert_eq!(arena.get(b).key, Bound::Value(3));

        arena.get_mut(a).next = Some(b);
        assert_eq!(arena.get(a).next, Some(b));
    }

    #[test]
    fn slot_reuse() {
        let mut arena = Arena::new();
        let a = arena.alloc(Bound::Value(1));
        let b = arena.alloc(Bound::Value(2));
        assert_eq!(arena.free(a).key, Bound::Value(1));
        assert_eq!(arena.len(), 1);

        let c = arena.alloc(Bound::Value(3));
        assert_eq!(c, a);
        assert_eq!(arena.get(c).key, Bound::Value(3));
        assert_eq!(arena.get(b).key, Bound::Value(2));

        // Both slots taken again, so the next one is fresh.
        let d = arena.alloc(Bound::Value(4));
        assert!(d != a && d != b);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn free_list_is_lifo() {
        let mut arena = Arena::new();
        let ids: Vec<_> = (0..4).map(|k| arena.alloc(Bound::Value(k))).collect();
        arena.free(ids[1]);
        arena.free(ids[3]);
        assert_eq!(arena.alloc(Bound::Value(10)), ids[3]);
        assert_eq!(arena.alloc(Bound::Value(11)), ids[1]);
    }

    #[test]
    #[should_panic(expected = "double free")]
    fn double_free() {
        let mut arena = Arena::new();
        let a = arena.alloc(Bound::Value(1));
        arena.free(a);
        arena.free(a);
    }

    #[test]
    #[should_panic(expected = "use of freed node")]
    fn use_after_free() {
        let mut arena = Arena::new();
        let a = arena.alloc(Bound::Value(1));
        arena.free(a);
        let _node = arena.get(a);
    }

    #[test]
    fn clear() {
        let mut arena = Arena::new();
        arena.alloc(Bound::Value(1));
        arena.alloc(Bound::Value(2));
        arena.clear();
        assert_eq!(arena.len(), 0);
    }
}
