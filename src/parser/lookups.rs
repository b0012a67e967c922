use std::collections::HashMap;

use crate::{
    errors::errors::Error,
    lexer::tokens::{Keyword, TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Relational,
    Additive,
    Multiplicative,
    Primary,
}

/// Parses a statement; the argument is the leader statement nodes link to.
pub type StmtHandler<'a, 'bump, 'src> = fn(&mut Parser<'a, 'bump, 'src>, usize) -> Result<(), Error>;
/// Parses a primary; the argument is the leader it continues, if any.
pub type NUDHandler<'a, 'bump, 'src> =
    fn(&mut Parser<'a, 'bump, 'src>, Option<usize>) -> Result<(), Error>;
pub type LEDHandler<'a, 'bump, 'src> =
    fn(&mut Parser<'a, 'bump, 'src>, BindingPower) -> Result<(), Error>;

pub fn create_token_lookups(parser: &mut Parser<'_, '_, '_>) {
    // Relational
    parser.led(TokenKind::Byte(b'<'), BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Byte(b'>'), BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Digraph(b'<'), BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Digraph(b'>'), BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Digraph(b'='), BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Digraph(b'!'), BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Byte(b'+'), BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Byte(b'-'), BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Byte(b'*'), BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Byte(b'/'), BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Byte(b'%'), BindingPower::Multiplicative, parse_binary_expr);

    // Literals and labels
    parser.nud(TokenKind::Label, parse_primary_expr);
    parser.nud(TokenKind::Decimal, parse_primary_expr);
    parser.nud(TokenKind::QUOTE, parse_primary_expr);
    parser.nud(TokenKind::Byte(b'('), parse_grouping_expr);
    parser.nud(TokenKind::Keyword(Keyword::If), parse_if_expr);

    // Statements
    parser.stmt(TokenKind::Keyword(Keyword::Let), parse_let_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::While), parse_while_stmt);
    parser.stmt(TokenKind::Keyword(Keyword::Break), parse_break_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<'a, 'bump, 'src> = HashMap<TokenKind, StmtHandler<'a, 'bump, 'src>>;
pub type NUDLookup<'a, 'bump, 'src> = HashMap<TokenKind, NUDHandler<'a, 'bump, 'src>>;
pub type LEDLookup<'a, 'bump, 'src> = HashMap<TokenKind, LEDHandler<'a, 'bump, 'src>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
