//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs and the
//! links they leave in the arena:
//! - Let bindings
//! - Binary expressions and precedence
//! - While loops, blocks and break
//! - If expressions
//! - Failure reporting and limits

use pretty_assertions::assert_eq;

use super::parser::{parse, Parser};
use crate::{
    arena::arena::Region,
    config::ParserConfig,
    errors::errors::{Error, ErrorKind},
    lexer::tokens::{Keyword, TokenKind},
};

struct Parsed {
    result: Result<(), Error>,
    nodes: Vec<(TokenKind, usize)>,
    /// Kind, offset and span of the token parsing stopped at
    token: Option<(TokenKind, usize, usize)>,
}

fn run(source: &[u8], capacity: usize, config: ParserConfig) -> Parsed {
    let region = Region::allocate(capacity).unwrap();
    let mut arena = region.arena();
    let mut parser = Parser::with_config(source, &mut arena, config);

    let result = parser.parse();
    let token = parser
        .token()
        .map(|token| (token.kind, token.span.offset, token.span.len()));
    let nodes = parser
        .arena()
        .nodes()
        .iter()
        .map(|node| (node.token.kind, node.link))
        .collect();

    Parsed {
        result,
        nodes,
        token,
    }
}

fn run_default(source: &[u8]) -> Parsed {
    run(source, 256, ParserConfig::default())
}

fn error_name(parsed: &Parsed) -> &str {
    parsed.result.as_ref().unwrap_err().get_error_name()
}

const LET: TokenKind = TokenKind::Keyword(Keyword::Let);
const WHILE: TokenKind = TokenKind::Keyword(Keyword::While);
const BREAK: TokenKind = TokenKind::Keyword(Keyword::Break);
const IF: TokenKind = TokenKind::Keyword(Keyword::If);
const THEN: TokenKind = TokenKind::Keyword(Keyword::Then);
const ELSE: TokenKind = TokenKind::Keyword(Keyword::Else);
const LABEL: TokenKind = TokenKind::Label;
const DECIMAL: TokenKind = TokenKind::Decimal;

fn byte(value: u8) -> TokenKind {
    TokenKind::Byte(value)
}

#[test]
fn test_parse_let_binding() {
    let parsed = run_default(b"let x = 42;");

    assert!(parsed.result.is_ok());
    assert_eq!(
        parsed.nodes,
        vec![(LET, 0), (LABEL, 1), (byte(b'='), 1), (DECIMAL, 1)]
    );
    assert_eq!(parsed.token, None);
}

#[test]
fn test_parse_let_binding_with_char_literal() {
    let source = b"let c = 'x';";
    let region = Region::allocate(8).unwrap();
    let mut arena = region.arena();

    assert!(parse(source, &mut arena).is_ok());
    let value = arena.nodes()[3];
    assert_eq!(value.token.kind, TokenKind::QUOTE);
    assert_eq!(value.token.span.text, b"x");
    assert_eq!(value.link, 1);
}

#[test]
fn test_statements_link_to_program_leader() {
    let parsed = run_default(b"a; b; c");

    assert!(parsed.result.is_ok());
    assert_eq!(parsed.nodes, vec![(LABEL, 0), (LABEL, 0), (LABEL, 0)]);
}

#[test]
fn test_multiplication_binds_tighter() {
    let parsed = run_default(b"1 + 2 * 3;");

    assert!(parsed.result.is_ok());
    assert_eq!(
        parsed.nodes,
        vec![
            (DECIMAL, 0),
            (byte(b'+'), 0),
            (DECIMAL, 2),
            (byte(b'*'), 2),
            (DECIMAL, 4),
        ]
    );
}

#[test]
fn test_operator_links_to_last_node_chain() {
    let parsed = run_default(b"1 * 2 + 3;");

    assert!(parsed.result.is_ok());
    assert_eq!(
        parsed.nodes,
        vec![
            (DECIMAL, 0),
            (byte(b'*'), 0),
            (DECIMAL, 2),
            (byte(b'+'), 2),
            (DECIMAL, 4),
        ]
    );
}

#[test]
fn test_grouping_opens_production() {
    let parsed = run_default(b"a - (b % c)");

    assert!(parsed.result.is_ok());
    assert_eq!(
        parsed.nodes,
        vec![
            (LABEL, 0),
            (byte(b'-'), 0),
            (byte(b'('), 2),
            (LABEL, 3),
            (byte(b'%'), 3),
            (LABEL, 5),
        ]
    );
}

#[test]
fn test_parse_if_expression() {
    let parsed = run_default(b"if (a == 1) then b else c / 2");

    assert!(parsed.result.is_ok());
    assert_eq!(
        parsed.nodes,
        vec![
            (IF, 0),
            (byte(b'('), 1),
            (LABEL, 2),
            (TokenKind::Digraph(b'='), 2),
            (DECIMAL, 4),
            (THEN, 1),
            (LABEL, 6),
            (ELSE, 1),
            (LABEL, 8),
            (byte(b'/'), 8),
            (DECIMAL, 10),
        ]
    );
}

#[test]
fn test_parse_while_with_break() {
    let parsed = run_default(b"while (x) { break; y; }");

    assert!(parsed.result.is_ok());
    assert_eq!(
        parsed.nodes,
        vec![
            (WHILE, 0),
            (byte(b'('), 1),
            (LABEL, 2),
            (byte(b'{'), 3),
            (BREAK, 3),
            (LABEL, 3),
        ]
    );
}

#[test]
fn test_nested_blocks_link_to_their_brace() {
    let parsed = run_default(b"while (a) { while (b) { break; } let c = 1; }");

    assert!(parsed.result.is_ok());
    assert_eq!(
        parsed.nodes,
        vec![
            (WHILE, 0),
            (byte(b'('), 1),
            (LABEL, 2),
            (byte(b'{'), 3),
            (WHILE, 3),
            (byte(b'('), 5),
            (LABEL, 6),
            (byte(b'{'), 7),
            (BREAK, 7),
            (LET, 3),
            (LABEL, 10),
            (byte(b'='), 10),
            (DECIMAL, 10),
        ]
    );
}

#[test]
fn test_empty_input_parses() {
    for source in [&b""[..], b"  \n\t"] {
        let parsed = run_default(source);

        assert!(parsed.result.is_ok());
        assert!(parsed.nodes.is_empty());
    }
}

#[test]
fn test_second_parse_leads_from_its_first_node() {
    let region = Region::allocate(8).unwrap();
    let mut arena = region.arena();

    parse(b"a;", &mut arena).unwrap();
    parse(b"b; c", &mut arena).unwrap();

    let links = arena.nodes().iter().map(|node| node.link).collect::<Vec<_>>();
    assert_eq!(links, vec![0, 1, 1]);
}

#[test]
fn test_break_outside_loop() {
    let parsed = run_default(b"break;");

    assert_eq!(error_name(&parsed), "BreakOutsideLoop");
    assert_eq!(parsed.token, Some((BREAK, 0, 5)));
    assert!(parsed.nodes.is_empty());
}

#[test]
fn test_let_missing_semicolon() {
    let parsed = run_default(b"let x = 1");

    assert_eq!(error_name(&parsed), "UnexpectedTokenDetailed");
    assert_eq!(parsed.token, Some((TokenKind::Eof, 9, 0)));
}

#[test]
fn test_let_requires_label() {
    let parsed = run_default(b"let 5 = 1;");

    assert_eq!(error_name(&parsed), "UnexpectedTokenDetailed");
    assert_eq!(parsed.token, Some((DECIMAL, 4, 1)));
}

#[test]
fn test_adjacent_primaries_fail() {
    let parsed = run_default(b"a b");

    assert_eq!(error_name(&parsed), "UnexpectedToken");
    assert_eq!(parsed.token, Some((LABEL, 2, 1)));
}

#[test]
fn test_assignment_is_not_an_expression() {
    let parsed = run_default(b"a = 1;");

    assert_eq!(parsed.token, Some((byte(b'='), 2, 1)));
}

#[test]
fn test_unterminated_block() {
    let parsed = run_default(b"while (1) { a;");

    assert_eq!(error_name(&parsed), "UnexpectedTokenDetailed");
    assert_eq!(parsed.token, Some((TokenKind::Eof, 14, 0)));
}

#[test]
fn test_unbalanced_parenthesis() {
    let parsed = run_default(b"(1");

    assert_eq!(parsed.token, Some((TokenKind::Eof, 2, 0)));
}

#[test]
fn test_if_requires_else() {
    let parsed = run_default(b"if (a) then b");

    assert_eq!(error_name(&parsed), "UnexpectedTokenDetailed");
    assert_eq!(parsed.token, Some((TokenKind::Eof, 13, 0)));
}

#[test]
fn test_operator_without_operand() {
    let parsed = run_default(b"1 +;");

    assert_eq!(parsed.token, Some((byte(b';'), 3, 1)));
}

#[test]
fn test_stray_closing_brace() {
    let parsed = run_default(b"a; }");

    assert_eq!(parsed.token, Some((byte(b'}'), 3, 1)));
}

#[test]
fn test_nesting_limit() {
    let mut source = vec![b'('; 300];
    source.push(b'1');
    source.extend(vec![b')'; 300]);

    let parsed = run(&source, 1024, ParserConfig::default());

    assert_eq!(error_name(&parsed), "NestingTooDeep");
    assert_eq!(parsed.token, Some((byte(b'('), 256, 1)));
}

#[test]
fn test_configured_nesting_limit() {
    let config = ParserConfig::default().with_max_depth(2);

    let parsed = run(b"((1))", 16, config);
    assert_eq!(error_name(&parsed), "NestingTooDeep");
    assert_eq!(parsed.token, Some((DECIMAL, 2, 1)));

    assert!(run(b"(1)", 16, config).result.is_ok());
}

#[test]
fn test_arena_exhaustion_is_a_syntax_error() {
    let parsed = run(b"let x = 1;", 3, ParserConfig::default());

    assert_eq!(error_name(&parsed), "ArenaExhausted");
    assert_eq!(ErrorKind::from(&parsed.result), ErrorKind::Bad);
    assert_eq!(parsed.token, Some((DECIMAL, 8, 1)));
    assert_eq!(parsed.nodes.len(), 3);
}

#[test]
fn test_success_is_eof() {
    let parsed = run_default(b"let a = 1; while (a < 3) { a; }");

    assert_eq!(ErrorKind::from(&parsed.result), ErrorKind::Eof);
}
