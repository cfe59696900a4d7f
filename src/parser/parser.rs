//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser keeps a
//! two-token window (`current` and `peek`) over the lexer and dispatches
//! through the static tables in [`super::lookups`]:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{BindingPower, Lookups, TOKEN_LOOKUPS},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Token source, pulled one token at a time
    lexer: Lexer<'a>,
    /// The token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Syntax errors collected so far, in source order
    errors: Vec<Error>,
    /// Handler and binding power tables
    lookups: &'static Lookups,
    /// Nesting level of the expression being parsed
    depth: usize,
}

/// Deepest expression nesting the parser accepts.
pub const MAX_EXPR_DEPTH: usize = 256;

impl<'a> Parser<'a> {
    /// Creates a new Parser and primes `current` and `peek` from the lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            lookups: &*TOKEN_LOOKUPS,
            depth: 0,
        }
    }

    /// Parses statements until the end of the input.
    ///
    /// Never stops early: a statement that fails to parse is recorded in the
    /// error list, the parser skips past the next `;`, and parsing carries on.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.has_tokens() {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    debug!(%error, position = %error.get_position(), "statement failed to parse");
                    self.errors.push(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Messages of every syntax error collected so far.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Syntax errors collected so far, with their positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the lookahead window by one token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances if the peek token is of `expected_kind`.
    ///
    /// On mismatch nothing is consumed and an `UnexpectedToken` error is
    /// returned; callers abandon the construct they were parsing.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek.kind == expected_kind {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.span.start,
            ))
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    pub fn lookups(&self) -> &'static Lookups {
        self.lookups
    }

    pub fn current_binding_power(&self) -> BindingPower {
        self.lookups.binding_power(self.current.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        self.lookups.binding_power(self.peek.kind)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enters one more level of expression nesting.
    ///
    /// Fails with `ExpressionTooDeep` past [`MAX_EXPR_DEPTH`]; the caller
    /// restores the level it started from with [`Parser::reset_depth`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_EXPR_DEPTH {
            return Err(Error::new(
                ErrorImpl::ExpressionTooDeep {
                    limit: MAX_EXPR_DEPTH,
                },
                self.current.span.start,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn reset_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Skips to the `;` ending the current statement, or to `EOF`.
    fn synchronize(&mut self) {
        while !matches!(self.current.kind, TokenKind::Semicolon | TokenKind::EOF) {
            self.advance();
        }
    }
}
