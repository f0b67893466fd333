// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generic breadth-first traversal.
//!
//! The traversal reports three kinds of events to a caller-supplied closure:
//! - `Discover`: a vertex is seen for the first time (before it is queued)
//! - `ExamineVertex`: a vertex is dequeued for processing
//! - `ExamineEdge`: an outgoing edge of the vertex being processed
//!
//! The closure receives the graph mutably, so callers can decorate vertices
//! while the traversal runs. Edges of a vertex are collected before any
//! event for them fires.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// A graph that can be walked breadth-first.
///
/// Vertex identity is by handle, never by the value stored behind it.
pub trait Graph {
    type Vertex: Copy + Eq + Hash;
    type Edge: Copy;

    /// Outgoing edges of `vertex`, in a deterministic order.
    fn outgoing_edges(&self, vertex: Self::Vertex) -> Vec<Self::Edge>;

    /// Vertex an edge points to.
    fn target(&self, edge: &Self::Edge) -> Self::Vertex;
}

/// Event emitted during a breadth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BfsEvent<V, E> {
    Discover(V),
    ExamineVertex(V),
    ExamineEdge(E),
}

/// Walk `graph` breadth-first from `origin`, calling `visit` for each event.
///
/// Vertices are examined level by level: every vertex at depth `d` is
/// examined before any vertex at depth `d + 1`.
pub fn breadth_first_search<G, F>(graph: &mut G, origin: G::Vertex, mut visit: F)
where
    G: Graph,
    F: FnMut(&mut G, BfsEvent<G::Vertex, G::Edge>),
{
    let mut discovered: HashSet<G::Vertex> = HashSet::new();
    let mut queue: VecDeque<G::Vertex> = VecDeque::new();

    discovered.insert(origin);
    visit(graph, BfsEvent::Discover(origin));
    queue.push_back(origin);

    while let Some(vertex) = queue.pop_front() {
        visit(graph, BfsEvent::ExamineVertex(vertex));

        for edge in graph.outgoing_edges(vertex) {
            visit(graph, BfsEvent::ExamineEdge(edge));

            let target = graph.target(&edge);
            if discovered.insert(target) {
                visit(graph, BfsEvent::Discover(target));
                queue.push_back(target);
            }
        }
    }
}

#[cfg(test)]
#[path = "traverse_tests.rs"]
mod tests;
