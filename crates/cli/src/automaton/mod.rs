// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aho-Corasick automaton over byte strings.
//!
//! Build one with [`AutomatonBuilder`], then walk it through [`NodeRef`]
//! cursors obtained from [`Automaton::root`].
//!
//! The automaton is structurally immutable once built. Transitions are
//! resolved on demand and memoized per node, which gives amortized O(1)
//! work per scanned byte.

mod builder;
mod cursor;
mod node;

pub use builder::AutomatonBuilder;
pub use cursor::NodeRef;
pub use node::NodeId;

use node::AutomatonNode;

/// A multi-pattern matching automaton.
#[derive(Debug)]
pub struct Automaton {
    nodes: Vec<AutomatonNode>,
}

impl Automaton {
    /// Automaton with a lone root node.
    fn with_root() -> Self {
        Self {
            nodes: vec![AutomatonNode::default()],
        }
    }

    /// Cursor positioned at the root.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, NodeId::ROOT)
    }

    /// Cursor positioned at `id`.
    ///
    /// Returns `None` if `id` does not belong to this automaton.
    pub(crate) fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.index() < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &AutomatonNode {
        &self.nodes[id.index()]
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> &mut AutomatonNode {
        &mut self.nodes[id.index()]
    }

    /// Append a fresh node and return its id.
    fn alloc(&mut self) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(AutomatonNode::default());
        id
    }

    /// Automaton transition from `from` on `byte`.
    ///
    /// Falls back along suffix links until a node with a trie child for
    /// `byte` (or the root) is reached. The resolved target is cached on
    /// every node visited along the way, so each (node, byte) pair is
    /// resolved at most once.
    pub(crate) fn transition(&self, from: NodeId, byte: u8) -> NodeId {
        let mut visited = Vec::new();
        let mut current = from;

        let target = loop {
            let node = self.get(current);
            if let Some(cached) = node.cached_transition(byte) {
                break cached;
            }
            visited.push(current);
            if let Some(child) = node.child(byte) {
                break child;
            }
            if current == NodeId::ROOT {
                break NodeId::ROOT;
            }
            current = node.suffix_link;
        };

        for id in visited {
            self.get(id).transitions.borrow_mut().insert(byte, target);
        }
        target
    }
}
