use std::fmt;
use std::fmt::Write;

use tallyspan::{Span, Spand};
use thiserror::Error;

use crate::token::{Token, TokenKind};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodegenErrorKind {
    #[error("expected '{0}'")]
    Expected(TokenKind),
    #[error("expected a number")]
    ExpectedNumber,
}

pub type CodegenError = Spand<CodegenErrorKind>;
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Walks the token stream once and emits one instruction per operand,
/// keeping the running value in `rax`.
pub struct Codegen<'a> {
    tokens:  &'a [Token],
    current: usize,
    asm:     String,
}

impl<'a> Codegen<'a> {
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            asm: String::new(),
        }
    }

    fn last_span(&self) -> Span {
        self.tokens
            .get(self.current)
            .or_else(|| self.tokens.last())
            .map(|tk| tk.span)
            .unwrap_or_default()
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.current).copied()
    }

    const fn eat(&mut self) {
        self.current += 1;
    }

    fn at_end(&self) -> bool {
        self.peek().is_none_or(|tk| tk.kind == TokenKind::Eof)
    }

    fn next_if_kind(&mut self, tk: TokenKind) -> Option<Span> {
        match self.peek() {
            Some(Token { kind, span }) if kind == tk => {
                self.eat();
                Some(span)
            }
            _ => None,
        }
    }

    fn expect(&mut self, expect: TokenKind) -> CodegenResult<Span> {
        match self.peek() {
            Some(Token { kind, span }) if kind == expect => {
                self.eat();
                Ok(span)
            }
            _ => Err(CodegenError::new(
                CodegenErrorKind::Expected(expect),
                self.last_span(),
            )),
        }
    }

    fn expect_number(&mut self) -> CodegenResult<u64> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Integer(value),
                ..
            }) => {
                self.eat();
                Ok(value)
            }
            _ => Err(CodegenError::new(
                CodegenErrorKind::ExpectedNumber,
                self.last_span(),
            )),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.asm.push_str(line);
        self.asm.push('\n');
    }

    fn push_insn(&mut self, insn: fmt::Arguments<'_>) {
        let _ = writeln!(self.asm, "  {insn}");
    }

    /// Drain the tokens, producing the full assembly text.
    ///
    /// The grammar is `number (('+' | '-') number)*`; each operand after the
    /// first becomes a single `add` or `sub` on the accumulator.
    pub fn emit(mut self) -> CodegenResult<String> {
        self.push_line(".intel_syntax noprefix");
        self.push_line(".globl main");
        self.push_line("main:");

        let first = self.expect_number()?;
        self.push_insn(format_args!("mov rax, {first}"));

        while !self.at_end() {
            if self.next_if_kind(TokenKind::Plus).is_some() {
                let value = self.expect_number()?;
                self.push_insn(format_args!("add rax, {value}"));
            } else {
                self.expect(TokenKind::Minus)?;
                let value = self.expect_number()?;
                self.push_insn(format_args!("sub rax, {value}"));
            }
        }

        self.push_insn(format_args!("ret"));

        Ok(self.asm)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexer::Lexer;

    fn emit(input: &str) -> CodegenResult<String> {
        let tokens = Lexer::new(input).lex_all().unwrap();
        Codegen::new(&tokens).emit()
    }

    #[test]
    fn lone_number_loads_and_returns() {
        let asm = emit("42").unwrap();
        let lines: Vec<_> = asm.lines().collect();
        assert_eq!(
            lines,
            vec![
                ".intel_syntax noprefix",
                ".globl main",
                "main:",
                "  mov rax, 42",
                "  ret",
            ]
        );
    }

    #[test]
    fn chain_emits_one_instruction_per_operand() {
        let asm = emit("5+20-4").unwrap();
        let lines: Vec<_> = asm.lines().collect();
        assert_eq!(
            lines,
            vec![
                ".intel_syntax noprefix",
                ".globl main",
                "main:",
                "  mov rax, 5",
                "  add rax, 20",
                "  sub rax, 4",
                "  ret",
            ]
        );
    }

    #[test]
    fn whitespace_does_not_change_the_assembly() {
        let asm = emit("1+2").unwrap();
        assert_eq!(asm, emit("1 + 2").unwrap());
        assert_eq!(asm, emit(" 1  +   2 ").unwrap());
    }

    #[test]
    fn empty_expression_is_not_a_number() {
        let err = emit("").unwrap_err();
        assert_eq!(err.kind, CodegenErrorKind::ExpectedNumber);

        let err = emit("   ").unwrap_err();
        assert_eq!(err.kind, CodegenErrorKind::ExpectedNumber);
    }

    #[test]
    fn leading_operator_is_not_a_number() {
        let err = emit("+1").unwrap_err();
        assert_eq!(err.kind, CodegenErrorKind::ExpectedNumber);
        assert_eq!(err.span, Span::new(0, 1));
    }

    #[test]
    fn dangling_operator_is_not_a_number() {
        let err = emit("1+").unwrap_err();
        assert_eq!(err.kind, CodegenErrorKind::ExpectedNumber);
        assert_eq!(err.span, Span::point(2));
    }

    #[test]
    fn adjacent_numbers_expect_an_operator() {
        let err = emit("1 2").unwrap_err();
        assert_eq!(err.kind, CodegenErrorKind::Expected(TokenKind::Minus));
        assert_eq!(err.span, Span::new(2, 3));
    }

    #[test]
    fn long_chain_stays_in_source_order() {
        let asm = emit("0+1+2+3-1-2-3").unwrap();
        let body: Vec<_> = asm
            .lines()
            .filter(|line| line.starts_with("  add") || line.starts_with("  sub"))
            .collect();
        assert_eq!(
            body,
            vec![
                "  add rax, 1",
                "  add rax, 2",
                "  add rax, 3",
                "  sub rax, 1",
                "  sub rax, 2",
                "  sub rax, 3",
            ]
        );
    }
}
