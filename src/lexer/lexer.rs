use std::{collections::HashMap, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::{
        errors::{Error, ErrorImpl},
        sink::DiagnosticSink,
    },
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^\\s+").unwrap();
}

/// Pull-based scanner over one source string.
///
/// Each call to [`Lexer::next_token`] produces exactly one token. Once the end
/// of the source is reached every further call yields `End`.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    reserved: &'static HashMap<&'static str, TokenKind>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.to_string(),
            pos: 0,
            file: file_name,
            reserved: &RESERVED_LOOKUP,
        }
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// The lookahead character, `None` once the source is exhausted.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    fn token(&self, kind: TokenKind, value: String, start: usize) -> Token {
        MK_TOKEN!(kind, value, MK_SPAN!(&self.file, start, self.pos))
    }

    /// Scans the next token, or the error that stopped it from being recognised.
    pub fn scan(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();

        let start = self.pos;
        let Some(ch) = self.at() else {
            return Ok(self.token(TokenKind::End, String::new(), start));
        };

        match ch {
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.symbol()),
            c if c.is_ascii_digit() => self.number(),
            '\'' => self.char_literal(),
            '+' => Ok(self.single(TokenKind::Plus, ch)),
            '-' => Ok(self.single(TokenKind::Dash, ch)),
            '*' => Ok(self.single(TokenKind::Star, ch)),
            '/' => Ok(self.single(TokenKind::Slash, ch)),
            ';' => Ok(self.single(TokenKind::Semicolon, ch)),
            '(' => Ok(self.single(TokenKind::OpenParen, ch)),
            ')' => Ok(self.single(TokenKind::CloseParen, ch)),
            '{' => Ok(self.single(TokenKind::OpenCurly, ch)),
            '}' => Ok(self.single(TokenKind::CloseCurly, ch)),
            '=' => Ok(self.with_equals(TokenKind::Assignment, TokenKind::Equals, ch)),
            '<' => Ok(self.with_equals(TokenKind::Less, TokenKind::LessEquals, ch)),
            '>' => Ok(self.with_equals(TokenKind::Greater, TokenKind::GreaterEquals, ch)),
            '!' => {
                if self.peek() == Some('=') {
                    self.advance_n(2);
                    Ok(self.token(TokenKind::NotEquals, String::from("!="), start))
                } else {
                    Err(Error::new(
                        ErrorImpl::InvalidOperatorSequence {
                            token: String::from("!"),
                        },
                        self.get_position(),
                    ))
                }
            }
            other => {
                let position = self.get_position();
                // Step over the bad character so a rescan cannot stall on it.
                self.advance_n(other.len_utf8());
                Err(Error::new(
                    ErrorImpl::InvalidCharacter {
                        token: other.to_string(),
                    },
                    position,
                ))
            }
        }
    }

    /// Produces the next token, reporting any scan error to `sink` and
    /// substituting `End` at the position of the failure.
    pub fn next_token(&mut self, sink: &mut dyn DiagnosticSink) -> Token {
        match self.scan() {
            Ok(token) => {
                trace!(kind = %token.kind, value = %token.value, offset = token.span.start.0, "scanned");
                token
            }
            Err(error) => {
                let position = error.get_position().clone();
                sink.report(error);
                MK_TOKEN!(
                    TokenKind::End,
                    String::new(),
                    Span {
                        start: position.clone(),
                        end: position
                    }
                )
            }
        }
    }

    fn skip_whitespace(&mut self) {
        let matched = WHITESPACE_PATTERN
            .find(self.remainder())
            .map_or(0, |m| m.end());
        self.advance_n(matched);
    }

    fn single(&mut self, kind: TokenKind, ch: char) -> Token {
        let start = self.pos;
        self.advance_n(ch.len_utf8());
        self.token(kind, ch.to_string(), start)
    }

    fn with_equals(&mut self, single: TokenKind, double: TokenKind, ch: char) -> Token {
        if self.peek() == Some('=') {
            let start = self.pos;
            self.advance_n(2);
            self.token(double, format!("{}=", ch), start)
        } else {
            self.single(single, ch)
        }
    }

    fn symbol(&mut self) -> Token {
        let start = self.pos;
        let matched = SYMBOL_PATTERN.find(self.remainder()).map_or(0, |m| m.end());
        let value = String::from(&self.remainder()[..matched]);
        self.advance_n(matched);

        let kind = self
            .reserved
            .get(value.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        self.token(kind, value, start)
    }

    fn number(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        let matched = NUMBER_PATTERN.find(self.remainder()).map_or(0, |m| m.end());
        let value = String::from(&self.remainder()[..matched]);
        self.advance_n(matched);

        // The pattern already took one decimal point; another one is malformed.
        if self.at() == Some('.') {
            return Err(Error::new(
                ErrorImpl::MalformedNumber {
                    token: format!("{}.", value),
                },
                self.get_position(),
            ));
        }

        Ok(self.token(TokenKind::Number, value, start))
    }

    fn char_literal(&mut self) -> Result<Token, Error> {
        let start = self.pos;
        self.advance_n(1);

        let ch = match self.at() {
            Some(ch) if ch != '\'' => ch,
            _ => {
                return Err(Error::new(
                    ErrorImpl::MalformedCharLiteral {
                        token: String::from("'"),
                    },
                    self.get_position(),
                ))
            }
        };
        self.advance_n(ch.len_utf8());

        if self.at() != Some('\'') {
            return Err(Error::new(
                ErrorImpl::MalformedCharLiteral {
                    token: format!("'{}", ch),
                },
                self.get_position(),
            ));
        }
        self.advance_n(1);

        Ok(self.token(TokenKind::CharLiteral, ch.to_string(), start))
    }
}

/// Drains a fresh lexer up to and including the first `End` token.
pub fn tokenize(source: &str, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];
    let mut errors: Vec<Error> = vec![];

    loop {
        let token = lex.next_token(&mut errors);
        let done = token.kind == TokenKind::End;
        tokens.push(token);

        if done {
            break;
        }
    }

    (tokens, errors)
}
