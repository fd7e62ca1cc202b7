//! Контекст сканирования для токенизатора

use crate::common::Error;
use crate::tokenizer::buffer::TokenBuffer;
use crate::tokenizer::token::TokenKind;

/// Состояния конечного автомата
///
/// `Initial` - стартовое состояние; `End` терминально и достигается
/// только при лексической ошибке (нормальный конец входа завершает цикл
/// сканирования без перехода в `End`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    Initial,
    Word,
    String,
    Number,
    Sign,
    Separator,
    End,
}

/// Подсостояния разбора числа; имеют смысл только в состоянии `Number`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberState {
    /// Число не разбирается
    None,
    /// Только что буферизован ведущий знак, следующим гарантированно идет цифра
    Sign,
    /// Накопление цифр до десятичного разделителя
    Integer,
    /// Накопление цифр после десятичного разделителя
    Decimal,
}

/// Изменяемое состояние сканирования
///
/// Каждый вызов токенизатора создает свой контекст, поэтому между
/// независимыми вызовами нет общего состояния.
#[derive(Debug)]
pub(crate) struct ScanContext {
    /// Текущее состояние автомата
    pub state: ScanState,
    /// Подсостояние разбора числа
    pub number_state: NumberState,
    /// Курсор во входной строке
    pub position: usize,
    /// Накопитель токенов
    pub tokens: TokenBuffer,
    /// Зафиксированная лексическая ошибка
    pub error: Option<Error>,
}

impl ScanContext {
    pub fn new() -> Self {
        Self {
            state: ScanState::Initial,
            number_state: NumberState::None,
            position: 0,
            tokens: TokenBuffer::new(),
            error: None,
        }
    }

    /// Продвигает курсор на один символ
    pub fn advance(&mut self) {
        self.position += 1;
    }

    /// Возвращает курсор назад, чтобы символ был обработан заново
    /// другим состоянием
    pub fn rewind(&mut self, count: usize) {
        self.position -= count;
    }

    /// Добавляет символ в буфер накопления
    pub fn buffer(&mut self, character: char) {
        self.tokens.buffer(character);
    }

    /// Фиксирует буфер как токен указанного типа
    pub fn push_token(&mut self, kind: TokenKind) {
        self.tokens.push_token(kind);
    }

    /// Завершает числовой токен и возвращает автомат в исходное состояние
    pub fn push_number_token(&mut self) {
        self.push_token(TokenKind::Number);
        self.state = ScanState::Initial;
        self.number_state = NumberState::None;
    }

    /// Останавливает сканирование с лексической ошибкой
    pub fn fail(&mut self, error: Error) {
        log::debug!("scan terminated at {}: {}", self.position, error);
        self.error = Some(error);
        self.state = ScanState::End;
    }
}
