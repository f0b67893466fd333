// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whitespace-delimited token input.
//!
//! The pattern token is small and read into memory. The text token is
//! streamed straight from the reader's buffer into the matcher, so an
//! arbitrarily long text never has to be held in memory.

use std::io::{self, BufRead};

use crate::error::InputError;
use crate::matcher::WildcardMatcher;

/// Bytes that separate tokens.
pub(crate) fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Reads whitespace-separated tokens from a buffered reader.
pub struct TokenReader<R> {
    reader: R,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the next token into memory, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut token = Vec::new();
        let found = self.stream_token(|byte| token.push(byte))?;
        Ok(found.map(|_| token))
    }

    /// Feed the bytes of the next token to `sink`.
    ///
    /// Returns the token length, or `None` at end of input.
    pub fn stream_token<F>(&mut self, mut sink: F) -> io::Result<Option<usize>>
    where
        F: FnMut(u8),
    {
        if !self.skip_separators()? {
            return Ok(None);
        }

        let mut len = 0;
        loop {
            let buf = fill_buf(&mut self.reader)?;
            if buf.is_empty() {
                break;
            }
            let end = buf.iter().position(|&b| is_separator(b)).unwrap_or(buf.len());
            buf[..end].iter().for_each(|&b| sink(b));
            let complete = end < buf.len();

            len += end;
            self.reader.consume(end);
            if complete {
                break;
            }
        }
        Ok(Some(len))
    }

    /// Whether only separators remain.
    pub fn is_exhausted(&mut self) -> io::Result<bool> {
        Ok(!self.skip_separators()?)
    }

    /// Skip separators; returns `false` if the input ended first.
    fn skip_separators(&mut self) -> io::Result<bool> {
        loop {
            let buf = fill_buf(&mut self.reader)?;
            if buf.is_empty() {
                return Ok(false);
            }
            let skip = buf.iter().take_while(|&&b| is_separator(b)).count();
            let found = skip < buf.len();

            self.reader.consume(skip);
            if found {
                return Ok(true);
            }
        }
    }
}

/// `fill_buf` that retries on `Interrupted`.
fn fill_buf<R: BufRead>(reader: &mut R) -> io::Result<&[u8]> {
    let available = loop {
        match reader.fill_buf() {
            Ok(buf) => break buf.len(),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    };
    if available == 0 {
        return Ok(&[]);
    }
    // Non-empty buffer: served without touching the underlying reader.
    reader.fill_buf()
}

/// Read a pattern token and a text token from `reader` and match them.
///
/// Exactly two tokens are accepted. Returns the 0-based start positions of
/// every match in ascending order.
pub fn match_tokens<R: BufRead>(reader: R, wildcard: u8) -> Result<Vec<usize>, InputError> {
    let mut tokens = TokenReader::new(reader);

    let pattern = tokens.next_token()?.ok_or(InputError::MissingPattern)?;
    let mut matcher = WildcardMatcher::build_for(&pattern, wildcard);

    let mut positions = Vec::new();
    let mut matched = |pos: usize| positions.push(pos);
    let text_len = tokens
        .stream_token(|byte| matcher.scan_all([byte], &mut matched))?
        .ok_or(InputError::MissingText)?;

    if !tokens.is_exhausted()? {
        return Err(InputError::TrailingInput);
    }

    tracing::debug!(
        pattern_len = pattern.len(),
        text_len,
        matches = positions.len(),
        "scanned input"
    );
    Ok(positions)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
