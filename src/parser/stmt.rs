use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one statement whose opening node links to `leader`.
pub fn parse_stmt(parser: &mut Parser<'_, '_, '_>, leader: usize) -> Result<(), Error> {
    let token_kind = parser.current_token_kind();
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&token_kind).copied() {
        return stmt_fn(parser, leader);
    }

    parse_expr(parser, BindingPower::Default, Some(leader))?;

    // An expression statement may run up to the end of its block or input.
    match parser.current_token_kind() {
        TokenKind::Byte(b';') => {
            parser.advance();
            Ok(())
        }
        TokenKind::Byte(b'}') | TokenKind::Eof => Ok(()),
        _ => Err(parser.unexpected()),
    }
}

/// `let LABEL = expr;`
///
/// The label opens the binding; `=` and the bound value continue it.
pub fn parse_let_stmt(parser: &mut Parser<'_, '_, '_>, leader: usize) -> Result<(), Error> {
    parser.emit(Some(leader))?;

    if parser.current_token_kind() != TokenKind::Label {
        return Err(parser.unexpected_detailed(String::from(
            "expected label during let binding",
        )));
    }
    let binding = parser.emit(None)?;

    parser.expect_emit(TokenKind::Byte(b'='), Some(binding))?;
    parse_expr(parser, BindingPower::Default, Some(binding))?;
    parser.expect(TokenKind::Byte(b';'))?;

    Ok(())
}

/// `while (cond) { ... }`
pub fn parse_while_stmt(parser: &mut Parser<'_, '_, '_>, leader: usize) -> Result<(), Error> {
    parser.emit(Some(leader))?;

    parser.expect_emit(TokenKind::Byte(b'('), None)?;
    parse_expr(parser, BindingPower::Default, None)?;
    parser.expect(TokenKind::Byte(b')'))?;

    parser.in_loop(parse_block_stmt)
}

/// `break;`, only inside a loop body.
pub fn parse_break_stmt(parser: &mut Parser<'_, '_, '_>, leader: usize) -> Result<(), Error> {
    if !parser.is_in_loop() {
        return Err(parser.fail(ErrorImpl::BreakOutsideLoop));
    }

    parser.emit(Some(leader))?;
    parser.expect(TokenKind::Byte(b';'))?;

    Ok(())
}

/// `{ statement* }`; the brace opens the block and every statement inside
/// links to it.
pub fn parse_block_stmt(parser: &mut Parser<'_, '_, '_>) -> Result<(), Error> {
    parser.descend(|parser| {
        let block = parser.expect_emit(TokenKind::Byte(b'{'), None)?;

        while parser.current_token_kind() != TokenKind::Byte(b'}') {
            if !parser.has_tokens() {
                return Err(parser.unexpected_detailed(String::from("unterminated block")));
            }

            parse_stmt(parser, block)?;
        }

        parser.expect(TokenKind::Byte(b'}'))?;
        Ok(())
    })
}
