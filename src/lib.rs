//! sqltok - Лексический токенизатор SQL на Rust
//!
//! Этот модуль предоставляет посимвольный конечный автомат, который преобразует
//! SQL-подобную строку в упорядоченный список классифицированных токенов:
//! слова, строковые литералы, числа и разделители. Первая лексическая ошибка
//! немедленно завершает разбор.

pub mod common;
pub mod tokenizer;

pub use common::error::{Error, Result};
pub use tokenizer::{tokenize, Lexer, Token, TokenKind};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
