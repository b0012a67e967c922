//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token borrowing a range of the source buffer

/// Creates a Token over `$source[$start..$start + $len]`.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$source` - The source buffer the token borrows from
/// * `$start` - Byte offset of the lexeme
/// * `$len` - Byte length of the lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Decimal, lexer.source, 10, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $source:expr, $start:expr, $len:expr) => {{
        let start: usize = $start;
        let len: usize = $len;
        $crate::lexer::tokens::Token {
            kind: $kind,
            span: $crate::Span::new(start, &$source[start..start + len]),
        }
    }};
}
