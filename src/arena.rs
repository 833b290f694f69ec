//! Storage for the nodes of a [`Tree`][crate::Tree].
//!
//! Nodes live in a `Vec` of slots and refer to each other by [`NodeId`]. Child links are the
//! owning edges of the tree: a node is reachable (and therefore alive) only through its parent's
//! `left`/`right` or the tree's root. The `parent` link is a plain back-reference used for
//! navigation and never decides when a node is freed.
//!
//! Freed slots are recycled through a free list. Every slot carries a generation that is bumped
//! when its node is freed, so an id handed out before a removal can be told apart from the node
//! that later reuses the slot.

/// Index of a node in an [`Arena`] together with the generation of the slot it was allocated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    fn slot(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Stores a new childless node holding `value` below `parent` and returns its id.
    pub(crate) fn alloc(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let node = Node {
            value,
            left: None,
            right: None,
            parent,
        };

        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                debug_assert!(slot.node.is_none(), "free list holds an occupied slot");
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = u32::try_from(self.slots.len()).expect("arena exceeds u32::MAX nodes");
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Removes the node from its slot and hands it back. Any id still pointing at the slot goes
    /// stale.
    ///
    /// ## Panics
    ///
    /// When `id` does not refer to a live node.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<T> {
        let slot = &mut self.slots[id.slot()];
        assert_eq!(slot.generation, id.generation, "freeing a stale node id");
        let node = slot.node.take().expect("freeing an empty slot");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        node
    }

    /// Frees every node at once.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
    }

    /// The node behind `id`, or `None` if that node has been freed.
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots
            .get(id.slot())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.slot())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// The node behind an id taken from a live link.
    ///
    /// ## Panics
    ///
    /// When the node has been freed. Links inside the tree only ever name live nodes.
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.get(id).expect("tree link names a freed node")
    }

    /// Mutable counterpart of [`Arena::node`].
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.get_mut(id).expect("tree link names a freed node")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freed_slot_is_reused_with_new_generation() {
        let mut arena = Arena::new();
        let first = arena.alloc(1, None);
        assert_eq!(arena.free(first).value, 1);

        let second = arena.alloc(2, None);
        assert_eq!(first.index, second.index);
        assert_ne!(first, second);

        assert!(arena.get(first).is_none());
        assert_eq!(arena.get(second).map(|n| n.value), Some(2));
    }

    #[test]
    fn clear_invalidates_every_id() {
        let mut arena = Arena::new();
        let ids: Vec<_> = (0..4).map(|x| arena.alloc(x, None)).collect();

        arena.clear();

        assert!(ids.iter().all(|&id| arena.get(id).is_none()));

        // Slots come back lowest index first.
        let reused = arena.alloc(10, None);
        assert_eq!(reused.index, 0);
        assert_ne!(reused, ids[0]);
    }

    #[test]
    #[should_panic(expected = "stale")]
    fn double_free_panics() {
        let mut arena = Arena::new();
        let id = arena.alloc((), None);
        arena.free(id);
        arena.free(id);
    }
}
