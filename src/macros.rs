//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a kind, literal and span

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - Anything convertible into the token's literal `String`
/// * `$start`, `$end` - Byte offsets of the token in the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42", 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $start:expr, $end:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: ::std::string::String::from($literal),
            span: $crate::Span::new($start, $end),
        }
    };
}
