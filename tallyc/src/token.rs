use std::fmt::Display;

use tallyspan::Spand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Integer(u64),

    Plus,
    Minus,

    Eof,
}

pub type Token = Spand<TokenKind>;

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(x) => write!(f, "{x}"),

            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),

            Self::Eof => write!(f, "<eof>"),
        }
    }
}
