// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming wildcard matching.
//!
//! The pattern is split on the wildcard byte into literal fragments. An
//! automaton over those fragments reports, for every scanned byte, which
//! fragments end there. Each such event votes for the pattern alignment it
//! is consistent with; an alignment that collects one vote per fragment is
//! a match.
//!
//! Votes live in a window of `pattern_len + 1` counters. Slot `k` counts
//! votes for the alignment whose last byte is `k` bytes ahead of the
//! current position, so the window slides by one slot per byte and memory
//! never depends on the length of the scanned text.

mod split;

pub use split::{Fragment, split_fragments};

use std::collections::VecDeque;

use crate::automaton::{Automaton, AutomatonBuilder, NodeId, NodeRef};

/// Matches one wildcard pattern against a stream of bytes.
#[derive(Debug)]
pub struct WildcardMatcher {
    automaton: Automaton,
    state: NodeId,
    window: VecDeque<usize>,
    fragment_count: usize,
    pattern_len: usize,
    consumed: usize,
}

impl WildcardMatcher {
    /// Build a matcher for `pattern`, where `wildcard` matches any single byte.
    pub fn build_for(pattern: impl AsRef<[u8]>, wildcard: u8) -> Self {
        let pattern = pattern.as_ref();
        let fragments = split_fragments(pattern, wildcard);

        let mut builder = AutomatonBuilder::new();
        for fragment in &fragments {
            builder.add(fragment.text, fragment.id);
        }

        let mut matcher = Self {
            automaton: builder.build(),
            state: NodeId::ROOT,
            window: VecDeque::new(),
            fragment_count: fragments.len(),
            pattern_len: pattern.len(),
            consumed: 0,
        };
        matcher.reset();

        tracing::debug!(
            pattern_len = matcher.pattern_len,
            fragments = matcher.fragment_count,
            nodes = matcher.automaton.node_count(),
            "built wildcard matcher"
        );
        matcher
    }

    /// Abandon everything scanned so far; a new stream can be scanned afterwards.
    pub fn reset(&mut self) {
        self.state = NodeId::ROOT;
        self.consumed = 0;
        self.window.clear();
        self.window.resize(self.pattern_len + 1, 0);

        // Empty fragments already end before the first byte.
        self.record_fragment_ends();
        self.shift_window();

        tracing::debug!(window = self.window.len(), "reset wildcard matcher");
    }

    /// Consume one byte, calling `on_match` if a full pattern occurrence ends here.
    pub fn scan<F>(&mut self, byte: u8, on_match: F)
    where
        F: FnOnce(),
    {
        self.state = self.cursor().next(byte).id();
        self.consumed += 1;
        self.record_fragment_ends();

        if self.window[0] == self.fragment_count {
            on_match();
        }

        self.shift_window();
    }

    /// Scan every byte of `bytes`, reporting match start positions.
    ///
    /// Positions are 0-based offsets counted from the last [`reset`](Self::reset)
    /// (or construction), so a stream can be fed in several calls.
    pub fn scan_all<I, F>(&mut self, bytes: I, mut on_match: F)
    where
        I: IntoIterator<Item = u8>,
        F: FnMut(usize),
    {
        for byte in bytes {
            let mut matched = false;
            self.scan(byte, || matched = true);
            if matched {
                // The window cannot complete before a full pattern length was consumed.
                on_match(self.consumed - self.pattern_len);
            }
        }
    }

    /// Length of the pattern, wildcards included.
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    /// Number of literal fragments, empty ones included.
    pub fn fragment_count(&self) -> usize {
        self.fragment_count
    }

    /// Bytes consumed since the last reset.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    fn cursor(&self) -> NodeRef<'_> {
        NodeRef::new(&self.automaton, self.state)
    }

    /// Vote for the alignment implied by every fragment ending at the current byte.
    fn record_fragment_ends(&mut self) {
        let Self {
            automaton,
            state,
            window,
            pattern_len,
            ..
        } = self;
        NodeRef::new(automaton, *state).generate_matches(|id| window[*pattern_len - id] += 1);
    }

    fn shift_window(&mut self) {
        self.window.push_back(0);
        self.window.pop_front();
    }
}

/// Start positions of every occurrence of `pattern` in `text`, in ascending order.
///
/// Occurrences may overlap.
pub fn find_matches(pattern: impl AsRef<[u8]>, text: impl AsRef<[u8]>, wildcard: u8) -> Vec<usize> {
    let mut matcher = WildcardMatcher::build_for(pattern, wildcard);
    let mut positions = Vec::new();
    matcher.scan_all(text.as_ref().iter().copied(), |pos| positions.push(pos));
    positions
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
