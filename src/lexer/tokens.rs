use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Two-byte operators, keyed by their first byte.
pub const DIGRAPHS: [(u8, u8); 4] = [(b'<', b'='), (b'>', b'='), (b'=', b'='), (b'!', b'=')];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static [u8], Keyword> = {
        let mut map = HashMap::new();
        map.insert(&b"let"[..], Keyword::Let);
        map.insert(&b"while"[..], Keyword::While);
        map.insert(&b"if"[..], Keyword::If);
        map.insert(&b"then"[..], Keyword::Then);
        map.insert(&b"else"[..], Keyword::Else);
        map.insert(&b"break"[..], Keyword::Break);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Let,
    While,
    If,
    Then,
    Else,
    Break,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::While => "while",
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::Break => "break",
        }
    }
}

/// Token type.
///
/// Single-byte operators keep their byte, so `Byte(b'+')` is the token for
/// `+`. The character-literal marker is `Byte(b'\'')`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Label,
    Decimal,
    Byte(u8),
    Digraph(u8),
    Keyword(Keyword),
}

impl TokenKind {
    pub const QUOTE: TokenKind = TokenKind::Byte(b'\'');

    const DIGRAPH_BASE: u16 = 0x100;
    const KEYWORD_BASE: u16 = 0x200;
    const SENTINEL_BASE: u16 = 0x300;

    /// Flattens the kind into one integer domain.
    ///
    /// Bytes map to themselves, digraphs and keywords live in their own
    /// reserved ranges above the byte range, and the sentinels sit above
    /// both, so no two kinds share a code.
    pub fn code(&self) -> u16 {
        match self {
            TokenKind::Byte(byte) => u16::from(*byte),
            TokenKind::Digraph(first) => Self::DIGRAPH_BASE | u16::from(*first),
            TokenKind::Keyword(keyword) => Self::KEYWORD_BASE + *keyword as u16,
            TokenKind::Label => Self::SENTINEL_BASE,
            TokenKind::Decimal => Self::SENTINEL_BASE + 1,
            TokenKind::Eof => Self::SENTINEL_BASE + 2,
        }
    }
}

/// Second byte of the digraph that starts with `first`, if any.
pub fn digraph_second(first: u8) -> Option<u8> {
    DIGRAPHS
        .iter()
        .find(|(prefix, _)| *prefix == first)
        .map(|(_, second)| *second)
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Label => write!(f, "label"),
            TokenKind::Decimal => write!(f, "decimal"),
            TokenKind::Byte(b'\'') => write!(f, "character literal"),
            TokenKind::Byte(byte) => write!(f, "`{}`", byte.escape_ascii()),
            TokenKind::Digraph(first) => match digraph_second(*first) {
                Some(second) => write!(f, "`{}{}`", *first as char, second as char),
                None => write!(f, "digraph {:#04x}", first),
            },
            TokenKind::Keyword(keyword) => write!(f, "`{}`", keyword.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub span: Span<'src>,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} \"{}\" at {}",
            self.kind,
            self.span.text.escape_ascii(),
            self.span.offset
        )
    }
}

impl Token<'_> {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// The lexeme, lossily decoded for messages.
    pub fn lexeme(&self) -> String {
        String::from_utf8_lossy(self.span.text).into_owned()
    }
}
