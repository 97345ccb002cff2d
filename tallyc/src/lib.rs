use crate::codegen::CodegenError;
use crate::lexer::LexError;

pub mod codegen;
pub mod lexer;
pub mod token;

#[derive(Debug, Clone)]
pub enum CompileError {
    Lex(Vec<LexError>),
    Codegen(CodegenError),
}

impl From<Vec<LexError>> for CompileError {
    fn from(value: Vec<LexError>) -> Self {
        Self::Lex(value)
    }
}

impl From<CodegenError> for CompileError {
    fn from(value: CodegenError) -> Self {
        Self::Codegen(value)
    }
}
