//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into tokens for the parser. It handles:
//!
//! - Whitespace skipping
//! - Keywords and identifiers (letters and underscores only)
//! - Integer literals as plain digit runs
//! - Single and two-character operators (`==`, `!=`)
//! - `Illegal` tokens for anything unrecognised

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
