//! Parser implementation producing the linked node array.
//!
//! This module contains the main Parser struct and the program entry point.
//! The parser pulls tokens from its lexer one at a time and appends a node
//! for every significant token into the caller's arena. Expressions use a
//! Pratt parser with NUD/LED handlers; statements dispatch on their leading
//! keyword.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for primaries
//! - LED (left denotation) handlers for binary operators
//! - Binding powers for operator precedence

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    arena::arena::Arena,
    config::ParserConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Holds the lexer and its one-token lookahead, the arena nodes are appended
/// to, and the slot recording the token a failed parse stopped at.
pub struct Parser<'a, 'bump, 'src> {
    lexer: Lexer<'src>,
    /// Lookahead token, not yet consumed
    current: Token<'src>,
    arena: &'a mut Arena<'bump, 'src>,
    /// The token parsing stopped at, set on failure
    token: Option<Token<'src>>,
    config: ParserConfig,
    /// Open expressions and blocks
    depth: usize,
    /// Open `while` bodies
    loop_depth: usize,
    stmt_lookup: StmtLookup<'a, 'bump, 'src>,
    nud_lookup: NUDLookup<'a, 'bump, 'src>,
    led_lookup: LEDLookup<'a, 'bump, 'src>,
    binding_power_lookup: BPLookup,
}

impl<'a, 'bump, 'src> Parser<'a, 'bump, 'src> {
    pub fn new(source: &'src [u8], arena: &'a mut Arena<'bump, 'src>) -> Self {
        Self::with_config(source, arena, ParserConfig::default())
    }

    pub fn with_config(
        source: &'src [u8],
        arena: &'a mut Arena<'bump, 'src>,
        config: ParserConfig,
    ) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.lex();

        let mut parser = Parser {
            lexer,
            current,
            arena,
            token: None,
            config,
            depth: 0,
            loop_depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses statements until the input is exhausted.
    ///
    /// On failure the offending token is kept and available from
    /// [`Parser::token`]; nodes appended before the failure carry no meaning.
    pub fn parse(&mut self) -> Result<(), Error> {
        let leader = self.arena.len();
        debug!(capacity = self.arena.capacity(), leader, "parse");

        while self.has_tokens() {
            if let Err(error) = parse_stmt(self, leader) {
                debug!(
                    error = error.get_error_name(),
                    offset = error.get_position(),
                    span = error.get_span(),
                    "parse failed"
                );
                return Err(error);
            }
        }

        debug!(nodes = self.arena.len() - leader, "parsed");
        Ok(())
    }

    /// The token a failed parse stopped at.
    pub fn token(&self) -> Option<&Token<'src>> {
        self.token.as_ref()
    }

    pub fn arena(&self) -> &Arena<'bump, 'src> {
        &*self.arena
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token<'src> {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token<'src> {
        let previous = self.current;
        self.current = self.lexer.lex();
        previous
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::Eof
    }

    /// Appends the current token and advances past it.
    ///
    /// The node links to `link`, or to itself when `link` is `None`.
    pub fn emit(&mut self, link: Option<usize>) -> Result<usize, Error> {
        let index = self.arena.len();
        let link = link.unwrap_or(index);

        match self.arena.push(self.current, link) {
            Ok(index) => {
                trace!(index, link, kind = %self.current.kind, "node");
                self.advance();
                Ok(index)
            }
            Err(error) => {
                self.token = Some(self.current);
                Err(error)
            }
        }
    }

    /// Index the last appended node links to.
    pub fn last_link(&self) -> usize {
        self.arena
            .last()
            .map_or(self.arena.len(), |node| node.link)
    }

    /// Consumes a structural token of the given kind without appending it.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token<'src>, Error> {
        if self.current.kind != expected_kind {
            return Err(self.unexpected_detailed(format!("expected {}", expected_kind)));
        }

        Ok(self.advance())
    }

    /// Appends a token of the given kind, see [`Parser::emit`].
    pub fn expect_emit(
        &mut self,
        expected_kind: TokenKind,
        link: Option<usize>,
    ) -> Result<usize, Error> {
        if self.current.kind != expected_kind {
            return Err(self.unexpected_detailed(format!("expected {}", expected_kind)));
        }

        self.emit(link)
    }

    /// Records the current token as the failure point.
    pub fn fail(&mut self, error_impl: ErrorImpl) -> Error {
        self.token = Some(self.current);
        Error::new(error_impl, self.current.span.offset, self.current.span.len())
    }

    pub fn unexpected(&mut self) -> Error {
        let token = self.current.lexeme();
        self.fail(ErrorImpl::UnexpectedToken { token })
    }

    pub fn unexpected_detailed(&mut self, message: String) -> Error {
        let token = self.current.lexeme();
        self.fail(ErrorImpl::UnexpectedTokenDetailed { token, message })
    }

    /// Runs `parse_fn` one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` instead of recursing past
    /// `ParserConfig::max_depth`.
    pub fn descend<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.config.max_depth {
            let limit = self.config.max_depth;
            return Err(self.fail(ErrorImpl::NestingTooDeep { limit }));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;
        result
    }

    /// Runs `parse_fn` as the body of a loop, where `break` is allowed.
    pub fn in_loop<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.loop_depth += 1;
        let result = parse_fn(self);
        self.loop_depth -= 1;
        result
    }

    pub fn is_in_loop(&self) -> bool {
        self.loop_depth > 0
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<'a, 'bump, 'src> {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<'a, 'bump, 'src> {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup<'a, 'bump, 'src> {
        &self.led_lookup
    }

    /// Binding power of `kind`; tokens that cannot continue an expression
    /// have `BindingPower::Default`.
    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(
        &mut self,
        kind: TokenKind,
        binding_power: BindingPower,
        led_fn: LEDHandler<'a, 'bump, 'src>,
    ) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (primary) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<'a, 'bump, 'src>) {
        self.binding_power_lookup.insert(kind, BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<'a, 'bump, 'src>) {
        self.binding_power_lookup.insert(kind, BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses `source` into `arena`.
///
/// Convenience wrapper for callers that only need the error, which carries
/// the offending token's position and span.
pub fn parse<'bump, 'src>(source: &'src [u8], arena: &mut Arena<'bump, 'src>) -> Result<(), Error> {
    Parser::new(source, arena).parse()
}
