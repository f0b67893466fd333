// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting a wildcard pattern into literal fragments.

/// A literal run of the pattern between wildcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'p> {
    /// Literal bytes; empty between adjacent wildcards or at a wildcard edge.
    pub text: &'p [u8],
    /// Exclusive end offset of the fragment within the pattern.
    pub id: usize,
}

/// Split `pattern` on every occurrence of `wildcard`.
///
/// Consecutive wildcards are not coalesced: `a??b` yields `a`, an empty
/// fragment, and `b`. A pattern with `k` wildcards always yields `k + 1`
/// fragments, and the last fragment's id equals the pattern length.
pub fn split_fragments(pattern: &[u8], wildcard: u8) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for pos in memchr::memchr_iter(wildcard, pattern) {
        fragments.push(Fragment {
            text: &pattern[start..pos],
            id: pos,
        });
        start = pos + 1;
    }
    fragments.push(Fragment {
        text: &pattern[start..],
        id: pattern.len(),
    });

    fragments
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
