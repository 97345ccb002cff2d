use std::str::Chars;

use tallyspan::{Span, Spand};
use thiserror::Error;

use crate::token::{Token, TokenKind};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("invalid character '{0}'")]
    InvalidChar(char),
    #[error("integer literal too large")]
    IntegerOverflow,
}

pub struct Lexer<'a> {
    input: &'a str,
    chars: Chars<'a>,

    /// start byte position of current token
    byte_start: u32,

    /// byte position of cursor
    byte: u32,
}

const EOF: char = '\0';

pub type LexError = Spand<LexErrorKind>;
pub type LexResult<T> = Result<T, LexError>;

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        assert!(u32::try_from(input.len()).is_ok());

        Self {
            input,
            chars: input.chars(),
            byte_start: 0,
            byte: 0,
        }
    }

    /// Lex the whole input, appending the terminating `Eof` token.
    ///
    /// Either every token is produced or every lex error is, never a mix.
    pub fn lex_all(mut self) -> Result<Vec<Token>, Vec<LexError>> {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        for item in &mut self {
            match item {
                Ok(ok) => tokens.push(ok),
                Err(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            tokens.push(Token::new(TokenKind::Eof, Span::point(self.byte)));
            Ok(tokens)
        } else {
            Err(errors)
        }
    }

    fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF)
    }

    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    fn bump(&mut self) -> Option<char> {
        #[allow(clippy::cast_possible_truncation)]
        self.chars
            .next()
            .inspect(|c| self.byte += c.len_utf8() as u32)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.first()) {
            self.bump();
        }
    }

    const fn make_span(&self) -> Span {
        Span::new(self.byte_start, self.byte)
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(|c| c.is_ascii_whitespace());
    }

    fn view(&self) -> &'a str {
        &self.input[self.byte_start as usize..self.byte as usize]
    }

    fn number(&mut self) -> LexResult<Token> {
        self.eat_while(|c| c.is_ascii_digit());

        let span = self.make_span();
        match self.view().parse::<u64>() {
            Ok(value) => Ok(Token::new(TokenKind::Integer(value), span)),
            Err(_) => Err(LexError::new(LexErrorKind::IntegerOverflow, span)),
        }
    }

    pub fn next_token(&mut self) -> Option<LexResult<Token>> {
        self.skip_whitespace();

        self.byte_start = self.byte;
        let c = self.bump()?;

        match c {
            '+' => Some(Ok(Token::new(TokenKind::Plus, self.make_span()))),
            '-' => Some(Ok(Token::new(TokenKind::Minus, self.make_span()))),

            '0'..='9' => Some(self.number()),

            _ => Some(Err(LexError::new(
                LexErrorKind::InvalidChar(c),
                self.make_span(),
            ))),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
