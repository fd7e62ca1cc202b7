//! Токенизатор SQL для sqltok

pub mod lexer;
pub mod token;

pub(crate) mod buffer;
pub(crate) mod context;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
