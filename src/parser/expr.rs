use tracing::trace;

use crate::{
    errors::errors::Error,
    lexer::tokens::{Keyword, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose operators bind tighter than `bp`.
///
/// `leader` is the production the first primary continues; `None` starts a
/// fresh one, so the primary links to itself.
pub fn parse_expr(
    parser: &mut Parser<'_, '_, '_>,
    bp: BindingPower,
    leader: Option<usize>,
) -> Result<(), Error> {
    parser.descend(|parser| {
        // First parse NUD
        let token_kind = parser.current_token_kind();
        let nud = match parser.get_nud_lookup().get(&token_kind) {
            Some(nud) => *nud,
            None => return Err(parser.unexpected()),
        };
        nud(parser, leader)?;

        // While LED and current BP is less than BP of current token, continue parsing lhs
        while parser.binding_power(parser.current_token_kind()) > bp {
            let token_kind = parser.current_token_kind();
            let led = match parser.get_led_lookup().get(&token_kind) {
                Some(led) => *led,
                None => return Err(parser.unexpected()),
            };

            let token_bp = parser.binding_power(token_kind);
            led(parser, token_bp)?;
        }

        Ok(())
    })
}

pub fn parse_primary_expr(
    parser: &mut Parser<'_, '_, '_>,
    leader: Option<usize>,
) -> Result<(), Error> {
    if !parser
        .current_token()
        .is_one_of_many(&[TokenKind::Label, TokenKind::Decimal, TokenKind::QUOTE])
    {
        return Err(parser.unexpected());
    }

    parser.emit(leader)?;
    Ok(())
}

// The operator continues the chain of whatever node came right before it.
pub fn parse_binary_expr(parser: &mut Parser<'_, '_, '_>, bp: BindingPower) -> Result<(), Error> {
    let link = parser.last_link();
    let index = parser.emit(Some(link))?;
    trace!(index, link, ?bp, "binary operator");

    parse_expr(parser, bp, None)
}

pub fn parse_grouping_expr(
    parser: &mut Parser<'_, '_, '_>,
    leader: Option<usize>,
) -> Result<(), Error> {
    parser.emit(leader)?;
    parse_expr(parser, BindingPower::Default, None)?;
    parser.expect(TokenKind::Byte(b')'))?;

    Ok(())
}

/// `if (cond) then expr else expr`
///
/// The clause's `(` opens the production; `then` and `else` link back to it
/// while the condition and both branches start fresh.
pub fn parse_if_expr(parser: &mut Parser<'_, '_, '_>, leader: Option<usize>) -> Result<(), Error> {
    parser.emit(leader)?;

    let clause = parser.expect_emit(TokenKind::Byte(b'('), None)?;
    parse_expr(parser, BindingPower::Default, None)?;
    parser.expect(TokenKind::Byte(b')'))?;

    parser.expect_emit(TokenKind::Keyword(Keyword::Then), Some(clause))?;
    parse_expr(parser, BindingPower::Default, None)?;

    parser.expect_emit(TokenKind::Keyword(Keyword::Else), Some(clause))?;
    parse_expr(parser, BindingPower::Default, None)
}
