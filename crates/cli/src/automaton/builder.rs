// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Automaton construction.
//!
//! Construction runs in three passes:
//! 1. Insert every word into the trie.
//! 2. Breadth-first pass computing suffix links.
//! 3. Breadth-first pass computing terminal links.
//!
//! Both link passes depend on breadth-first order: a node's links are
//! derived from nodes strictly closer to the root.

use super::{Automaton, NodeId};
use crate::traverse::{BfsEvent, Graph, breadth_first_search};

/// Collects words and builds an [`Automaton`] over them.
#[derive(Debug, Default, Clone)]
pub struct AutomatonBuilder {
    words: Vec<(Vec<u8>, usize)>,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `word` under `id`.
    ///
    /// Words may repeat and may be empty; an empty word terminates at the root.
    pub fn add(&mut self, word: impl AsRef<[u8]>, id: usize) -> &mut Self {
        self.words.push((word.as_ref().to_vec(), id));
        self
    }

    /// Number of words registered so far.
    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    pub fn build(&self) -> Automaton {
        let mut automaton = Automaton::with_root();

        for (word, id) in &self.words {
            add_word(&mut automaton, word, *id);
        }
        build_suffix_links(&mut automaton);
        build_terminal_links(&mut automaton);

        tracing::debug!(
            words = self.len(),
            nodes = automaton.node_count(),
            "built automaton"
        );
        automaton
    }
}

/// Trie edge from a parent to one of its children.
#[derive(Debug, Clone, Copy)]
pub struct TrieEdge {
    source: NodeId,
    target: NodeId,
    byte: u8,
}

impl Graph for Automaton {
    type Vertex = NodeId;
    type Edge = TrieEdge;

    fn outgoing_edges(&self, vertex: NodeId) -> Vec<TrieEdge> {
        self.get(vertex)
            .children
            .iter()
            .map(|(&byte, &target)| TrieEdge {
                source: vertex,
                target,
                byte,
            })
            .collect()
    }

    fn target(&self, edge: &TrieEdge) -> NodeId {
        edge.target
    }
}

fn add_word(automaton: &mut Automaton, word: &[u8], id: usize) {
    let mut node = NodeId::ROOT;
    for &byte in word {
        node = match automaton.get(node).child(byte) {
            Some(child) => child,
            None => {
                let child = automaton.alloc();
                automaton.get_mut(node).children.insert(byte, child);
                child
            }
        };
    }
    automaton.get_mut(node).terminated_ids.push(id);
}

fn build_suffix_links(automaton: &mut Automaton) {
    breadth_first_search(automaton, NodeId::ROOT, |automaton, event| match event {
        BfsEvent::ExamineVertex(NodeId::ROOT) => {
            automaton.get_mut(NodeId::ROOT).suffix_link = NodeId::ROOT;
        }
        BfsEvent::ExamineEdge(edge) => {
            let link = if edge.source == NodeId::ROOT {
                NodeId::ROOT
            } else {
                let parent_link = automaton.get(edge.source).suffix_link;
                automaton.transition(parent_link, edge.byte)
            };
            tracing::trace!(node = edge.target.index(), link = link.index(), "suffix link");
            automaton.get_mut(edge.target).suffix_link = link;
        }
        _ => {}
    });
}

fn build_terminal_links(automaton: &mut Automaton) {
    breadth_first_search(automaton, NodeId::ROOT, |automaton, event| {
        let BfsEvent::Discover(node) = event else {
            return;
        };
        let suffix = automaton.get(node).suffix_link;
        if suffix == node {
            return;
        }

        let suffix_node = automaton.get(suffix);
        let link = if suffix_node.terminated_ids.is_empty() {
            suffix_node.terminal_link
        } else {
            Some(suffix)
        };
        automaton.get_mut(node).terminal_link = link;
    });
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
