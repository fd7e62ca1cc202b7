//! Токены для SQL токенизатора sqltok
//!
//! Определяет типы токенов, которые распознает конечный автомат:
//! слова, строковые литералы, числа и разделители.

use serde::Serialize;
use std::fmt;

/// Типы токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// Идентификатор, ключевое слово или литерал без кавычек
    Word,

    /// Строковый литерал в одинарных кавычках (кавычки не входят в значение)
    String,

    /// Числовой литерал, целый или десятичный, включая ведущий знак
    Number,

    /// Одиночный символ-разделитель: = . ( ) ; ,
    Separator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Word => "WORD",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Separator => "SEPARATOR",
        };
        write!(f, "{}", name)
    }
}

/// Токен с лексемой и типом
///
/// Создается один раз при фиксации буфера накопления и дальше не изменяется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub value: String,
    pub token_type: TokenKind,
}

impl Token {
    pub fn new(value: String, token_type: TokenKind) -> Self {
        Self { value, token_type }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.value, self.token_type)
    }
}
