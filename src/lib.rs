#![allow(clippy::module_inception)]

//! Byte-level front end for a small expression language.
//!
//! Source bytes are pulled through the [`lexer`] one token at a time by the
//! [`parser`], which appends a flat array of nodes into a caller-owned
//! [`arena`]. Structure is recorded as backward integer links between nodes
//! rather than as a pointer tree.

pub mod arena;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A borrowed slice of the source buffer.
///
/// `offset` is the byte position of `text` inside the buffer handed to the
/// lexer. The bytes are never copied, so a span is only valid while that
/// buffer is alive and unmoved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'src> {
    pub offset: usize,
    pub text: &'src [u8],
}

impl<'src> Span<'src> {
    pub fn new(offset: usize, text: &'src [u8]) -> Self {
        Span { offset, text }
    }

    /// Byte length of the lexeme.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Offset one past the last byte.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Finds the line holding `offset`.
///
/// Returns the 1-based line number, the line's bytes (including a trailing
/// newline if present) and the column of `offset` within it. Offsets at or
/// past the end of input resolve to the last line.
pub fn line_at_offset(source: &[u8], offset: usize) -> (usize, &[u8], usize) {
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive(|byte| *byte == b'\n') {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            return (line_number, line, offset - start);
        }

        start = end;
        line_number += 1;
    }

    let last = source
        .iter()
        .rposition(|byte| *byte == b'\n')
        .map_or(0, |newline| newline + 1);
    let lines = source[..last].iter().filter(|byte| **byte == b'\n').count();

    (lines + 1, &source[last..], offset.saturating_sub(last))
}
