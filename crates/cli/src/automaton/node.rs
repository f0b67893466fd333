// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Arena-allocated trie nodes.
//!
//! Every node lives in the automaton's arena and is addressed by a
//! [`NodeId`]. Trie children are the only ownership edges; suffix links,
//! terminal links, and cached transitions are plain ids pointing back into
//! the same arena, so the root's self-referential suffix link is just
//! `NodeId::ROOT` stored on the root.

use std::cell::RefCell;
use std::collections::BTreeMap;

/// Index of a node in the automaton arena.
///
/// Defaults to [`NodeId::ROOT`].
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    /// The root is always the first node allocated.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One trie vertex.
#[derive(Debug, Default)]
pub(crate) struct AutomatonNode {
    /// Trie children keyed by byte.
    pub(crate) children: BTreeMap<u8, NodeId>,
    /// Ids of fragments that end exactly at this node.
    pub(crate) terminated_ids: Vec<usize>,
    /// Node of the longest proper suffix of this node's path present in the trie.
    pub(crate) suffix_link: NodeId,
    /// Nearest node on the suffix chain that terminates some fragment.
    pub(crate) terminal_link: Option<NodeId>,
    /// Memoized automaton transitions.
    ///
    /// Filled lazily while scanning; the `RefCell` keeps the automaton
    /// `!Sync`, so at most one scan can touch the cache at a time.
    pub(crate) transitions: RefCell<BTreeMap<u8, NodeId>>,
}

impl AutomatonNode {
    pub(crate) fn child(&self, byte: u8) -> Option<NodeId> {
        self.children.get(&byte).copied()
    }

    pub(crate) fn cached_transition(&self, byte: u8) -> Option<NodeId> {
        self.transitions.borrow().get(&byte).copied()
    }
}
