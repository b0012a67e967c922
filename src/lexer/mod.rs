//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts a byte buffer
//! into tokens on demand for the parser. It handles:
//!
//! - Byte-level scanning driven by anchored regex patterns
//! - Recognition of keywords, labels, decimals and character literals
//! - Two-byte operators (digraphs) and raw single-byte operators
//! - Zero-copy token spans borrowing the caller's buffer

pub mod lexer;
pub mod tokens;
