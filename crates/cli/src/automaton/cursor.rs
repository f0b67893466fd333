// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lightweight cursor into an [`Automaton`].

use std::fmt;

use super::{Automaton, NodeId};

/// A copyable reference to one automaton state.
///
/// Cursors never own anything; they are the only way to read node
/// contents from outside the automaton module.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    automaton: &'a Automaton,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(automaton: &'a Automaton, id: NodeId) -> Self {
        Self { automaton, id }
    }

    /// Id of the node this cursor points at.
    pub fn id(self) -> NodeId {
        self.id
    }

    /// State reached by consuming `byte`.
    pub fn next(self, byte: u8) -> Self {
        Self::new(self.automaton, self.automaton.transition(self.id, byte))
    }

    /// Whether at least one word ends exactly at this node.
    pub fn is_terminal(self) -> bool {
        !self.terminated_ids().is_empty()
    }

    pub fn is_root(self) -> bool {
        self.id == NodeId::ROOT
    }

    /// Ids of the words ending exactly at this node, in insertion order.
    pub fn terminated_ids(self) -> &'a [usize] {
        &self.automaton.get(self.id).terminated_ids
    }

    /// Nearest terminal node along the suffix chain, if any.
    pub fn terminal_link(self) -> Option<Self> {
        self.automaton
            .get(self.id)
            .terminal_link
            .and_then(|id| self.automaton.node(id))
    }

    /// Report the id of every word that ends at the current text position.
    ///
    /// Words ending at this node are reported first, then those of each
    /// node along the terminal-link chain.
    pub fn generate_matches<F>(self, mut on_match: F)
    where
        F: FnMut(usize),
    {
        let mut current = Some(self);
        while let Some(node) = current {
            for &id in node.terminated_ids() {
                on_match(id);
            }
            current = node.terminal_link();
        }
    }

    /// Iterator over the same ids [`generate_matches`](Self::generate_matches) reports.
    pub fn matches(self) -> impl Iterator<Item = usize> + 'a {
        std::iter::successors(Some(self), |node| node.terminal_link())
            .flat_map(|node| node.terminated_ids().iter().copied())
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.automaton, other.automaton) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id.index())
            .field("terminated_ids", &self.terminated_ids())
            .finish()
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
