#![allow(clippy::module_inception)]

//! Front end for the Monkey scripting language.
//!
//! Source text flows through the [`lexer`] one token at a time into the
//! [`parser`], which builds an [`ast::ast::Program`] and collects syntax
//! errors instead of stopping at the first one.

use std::fmt::Display;

use crate::{ast::ast::Program, lexer::lexer::Lexer, parser::parser::Parser};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Builds a span from byte offsets, saturating at `u32::MAX`.
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(u32::try_from(start).unwrap_or(u32::MAX)),
            end: Position(u32::try_from(end).unwrap_or(u32::MAX)),
        }
    }

    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Parses a complete source string.
///
/// Returns the (possibly partial) program together with every syntax error
/// message collected on the way. A non-empty error list does not mean the
/// program is empty: statements that parsed cleanly are still kept.
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.errors())
}
