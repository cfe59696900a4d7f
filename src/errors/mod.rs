//! Error types for the front end.
//!
//! Syntax errors are plain values: the parser collects them and keeps going,
//! so callers get every problem in a source string in one pass.

pub mod errors;
