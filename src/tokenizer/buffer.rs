//! Буфер накопления лексемы и список готовых токенов

use crate::tokenizer::token::{Token, TokenKind};

/// Накопитель токенов
///
/// Держит буфер текущей лексемы и упорядоченный список зафиксированных
/// токенов. Между фиксациями буфер содержит не больше одной лексемы.
#[derive(Debug, Default)]
pub(crate) struct TokenBuffer {
    buffer: String,
    tokens: Vec<Token>,
}

impl TokenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет символ в буфер накопления
    pub fn buffer(&mut self, character: char) {
        self.buffer.push(character);
    }

    /// Фиксирует содержимое буфера как новый токен и очищает буфер.
    /// Пустой буфер токена не дает.
    pub fn push_token(&mut self, kind: TokenKind) {
        if !self.buffer.is_empty() {
            let token = Token::new(std::mem::take(&mut self.buffer), kind);
            log::debug!("committed token {}", token);
            self.tokens.push(token);
        }
    }

    /// Проверяет, пуст ли буфер накопления
    pub fn buffer_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Возвращает упорядоченный список токенов
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
