use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = for<'a> fn(&mut Parser<'a>) -> Result<Stmt, Error>;
pub type NUDHandler = for<'a> fn(&mut Parser<'a>) -> Result<Expr, Error>;
pub type LEDHandler = for<'a> fn(&mut Parser<'a>, Expr) -> Result<Expr, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

lazy_static! {
    /// Handler tables shared by every parser. Built once, read-only afterwards.
    pub static ref TOKEN_LOOKUPS: Lookups = create_token_lookups();
}

/// Statement, NUD and LED handlers plus infix binding powers, keyed by token kind.
#[derive(Default)]
pub struct Lookups {
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl Lookups {
    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn get_stmt(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Infix binding power of a token; `Lowest` for tokens that are not infix operators.
    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }
}

pub fn create_token_lookups() -> Lookups {
    let mut lookups = Lookups::default();

    // Equality and relational
    lookups.led(TokenKind::Equals, BindingPower::Equals, parse_infix_expr);
    lookups.led(TokenKind::NotEquals, BindingPower::Equals, parse_infix_expr);
    lookups.led(TokenKind::LessThan, BindingPower::LessGreater, parse_infix_expr);
    lookups.led(TokenKind::GreaterThan, BindingPower::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Sum, parse_infix_expr);
    lookups.led(TokenKind::Minus, BindingPower::Sum, parse_infix_expr);
    lookups.led(TokenKind::Asterisk, BindingPower::Product, parse_infix_expr);
    lookups.led(TokenKind::Slash, BindingPower::Product, parse_infix_expr);

    lookups.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    lookups.nud(TokenKind::Identifier, parse_identifier);
    lookups.nud(TokenKind::Integer, parse_integer_literal);
    lookups.nud(TokenKind::True, parse_boolean_literal);
    lookups.nud(TokenKind::False, parse_boolean_literal);
    lookups.nud(TokenKind::Bang, parse_prefix_expr);
    lookups.nud(TokenKind::Minus, parse_prefix_expr);
    lookups.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    lookups.stmt(TokenKind::Let, parse_let_stmt);
    lookups.stmt(TokenKind::Return, parse_return_stmt);

    lookups
}
