//! Лексический токенизатор SQL для sqltok
//!
//! Преобразует входную строку в последовательность токенов. Разбор ведется
//! посимвольным конечным автоматом за один проход: каждый символ
//! обрабатывается ровно одним обработчиком текущего состояния, откаты
//! курсора ограничены одной-двумя позициями.

use crate::common::{Error, Result};
use crate::tokenizer::context::{NumberState, ScanContext, ScanState};
use crate::tokenizer::token::{Token, TokenKind};

/// Символы-разделители, включая пробельные
const SEPARATOR_CHARS: [char; 9] = ['=', '.', '(', ')', ';', ',', '\r', '\n', ' '];
/// Знаки числа
const SIGN_CHARS: [char; 2] = ['+', '-'];
/// Десятичный разделитель
const DECIMAL_SEPARATOR: char = '.';
/// Ограничитель строкового литерала
const STRING_CHAR: char = '\'';

/// Лексический токенизатор SQL
pub struct Lexer {
    /// Исходный текст
    input: Vec<char>,
    /// Контекст сканирования
    context: ScanContext,
}

impl Lexer {
    /// Создает новый токенизатор
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            context: ScanContext::new(),
        }
    }
}

/// Разбивает входную строку на токены
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}

// Подключаем обработчики состояний из отдельного файла
include!("lexer_states.rs");
