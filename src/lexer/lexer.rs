use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind};

/// Pull-based tokenizer over a borrowed source string.
///
/// The lexer works on bytes: `ch` is the byte at `position` and
/// `read_position` is always one past it. A `ch` of `0` marks the end of the
/// input, after which every call to [`Lexer::next_token`] yields `EOF`.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();

        lexer
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;

        let token = match self.ch {
            b'(' => self.single(TokenKind::OpenParen),
            b')' => self.single(TokenKind::CloseParen),
            b'{' => self.single(TokenKind::OpenCurly),
            b'}' => self.single(TokenKind::CloseCurly),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::LessThan),
            b'>' => self.single(TokenKind::GreaterThan),
            b'=' => self.either(b'=', TokenKind::Equals, TokenKind::Assign),
            b'!' => self.either(b'=', TokenKind::NotEquals, TokenKind::Bang),
            0 if self.at_eof() => MK_TOKEN!(TokenKind::EOF, "", start, start),
            ch if is_letter(ch) => {
                let literal = self.read_while(is_letter);
                MK_TOKEN!(
                    TokenKind::lookup_identifier(literal),
                    literal,
                    start,
                    self.position
                )
            }
            ch if ch.is_ascii_digit() => {
                let literal = self.read_while(|c| c.is_ascii_digit());
                MK_TOKEN!(TokenKind::Integer, literal, start, self.position)
            }
            _ => {
                // The offending byte is skipped so lexing always makes progress.
                self.read_char();
                MK_TOKEN!(TokenKind::Illegal, "", start, self.position)
            }
        };

        trace!(kind = %token.kind, literal = %token.literal, "lexed token");
        token
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn read_char(&mut self) {
        self.ch = self.byte_at(self.read_position);
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        self.byte_at(self.read_position)
    }

    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.read_char();

        MK_TOKEN!(kind, &self.source[start..self.position], start, self.position)
    }

    /// Emits `pair` if the next byte is `second`, otherwise `lone`.
    fn either(&mut self, second: u8, pair: TokenKind, lone: TokenKind) -> Token {
        if self.peek_char() == second {
            let start = self.position;
            self.read_char();
            self.read_char();

            MK_TOKEN!(pair, &self.source[start..self.position], start, self.position)
        } else {
            self.single(lone)
        }
    }

    fn read_while(&mut self, predicate: fn(u8) -> bool) -> &'a str {
        let source = self.source;
        let start = self.position;
        while !self.at_eof() && predicate(self.ch) {
            self.read_char();
        }

        &source[start..self.position]
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, `EOF`.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::EOF).then_some(token)
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Lexes the whole source, including the trailing `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
