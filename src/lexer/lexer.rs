use lazy_static::lazy_static;
use regex::bytes::Regex;
use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, DIGRAPHS, RESERVED_LOOKUP};

/// Produces the token for a match of `len` bytes at the cursor, or `None`
/// when the match is skipped.
pub type RegexHandler = for<'src> fn(&mut Lexer<'src>, usize) -> Option<Token<'src>>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; every pattern is anchored at the cursor. Bytes that
    // match none of them become single-byte tokens.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"(?-u)^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"(?-u)^[A-Za-z][A-Za-z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"(?-u)^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^'").unwrap(), handler: char_handler },
        RegexPattern { regex: Regex::new(&digraph_pattern()).unwrap(), handler: digraph_handler },
    ];
}

fn digraph_pattern() -> String {
    let alternatives = DIGRAPHS
        .iter()
        .map(|(first, second)| regex::escape(&format!("{}{}", *first as char, *second as char)))
        .collect::<Vec<_>>();

    format!("^(?:{})", alternatives.join("|"))
}

/// Pull-based scanner over a borrowed byte buffer.
///
/// Each call to [`Lexer::lex`] yields one token and moves the cursor forward;
/// the cursor never moves back.
#[derive(Clone)]
pub struct Lexer<'src> {
    source: &'src [u8],
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src [u8]) -> Lexer<'src> {
        Lexer { source, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    /// Moves the cursor `n` bytes forward, stopping at the end of input.
    pub fn advance_n(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.source.len());
    }

    pub fn at(&self) -> u8 {
        self.source[self.pos]
    }

    pub fn remainder(&self) -> &'src [u8] {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scans the next token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token with an
    /// empty span at the end of the buffer.
    pub fn lex(&mut self) -> Token<'src> {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::Eof, self.source, self.source.len(), 0);
            }

            let remainder = self.remainder();
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|found| (pattern.handler, found.end()))
            });

            let token = match matched {
                Some((handler, len)) => handler(self, len),
                None => Some(byte_handler(self)),
            };

            if let Some(token) = token {
                trace!(kind = %token.kind, offset = token.span.offset, span = token.span.len(), "lex");
                return token;
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Same as [`Lexer::lex`], but stops instead of repeating `Eof`.
    fn next(&mut self) -> Option<Token<'src>> {
        let token = self.lex();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

fn skip_handler<'src>(lexer: &mut Lexer<'src>, len: usize) -> Option<Token<'src>> {
    lexer.advance_n(len);
    None
}

fn symbol_handler<'src>(lexer: &mut Lexer<'src>, len: usize) -> Option<Token<'src>> {
    let start = lexer.pos;
    let value = &lexer.source[start..start + len];

    let kind = match RESERVED_LOOKUP.get(value) {
        Some(keyword) => TokenKind::Keyword(*keyword),
        None => TokenKind::Label,
    };

    lexer.advance_n(len);
    Some(MK_TOKEN!(kind, lexer.source, start, len))
}

fn number_handler<'src>(lexer: &mut Lexer<'src>, len: usize) -> Option<Token<'src>> {
    let start = lexer.pos;
    lexer.advance_n(len);
    Some(MK_TOKEN!(TokenKind::Decimal, lexer.source, start, len))
}

// The marker token spans the literal byte itself; the closing quote is
// skipped unchecked.
fn char_handler<'src>(lexer: &mut Lexer<'src>, _len: usize) -> Option<Token<'src>> {
    let start = (lexer.pos + 1).min(lexer.source.len());
    let len = usize::from(start < lexer.source.len());

    lexer.advance_n(3);
    Some(MK_TOKEN!(TokenKind::QUOTE, lexer.source, start, len))
}

fn digraph_handler<'src>(lexer: &mut Lexer<'src>, len: usize) -> Option<Token<'src>> {
    let start = lexer.pos;
    let first = lexer.at();

    lexer.advance_n(len);
    Some(MK_TOKEN!(TokenKind::Digraph(first), lexer.source, start, len))
}

fn byte_handler<'src>(lexer: &mut Lexer<'src>) -> Token<'src> {
    let start = lexer.pos;
    let byte = lexer.at();

    lexer.advance_n(1);
    MK_TOKEN!(TokenKind::Byte(byte), lexer.source, start, 1)
}

/// Lexes the whole buffer, including the trailing `Eof` token.
pub fn tokenize(source: &[u8]) -> Vec<Token<'_>> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.lex();
        tokens.push(token);

        if token.kind == TokenKind::Eof {
            return tokens;
        }
    }
}
