//! Обработка ошибок для sqltok

use thiserror::Error;

/// Основной тип ошибки для sqltok
///
/// Все варианты описывают лексические ошибки во входной строке и несут
/// позицию, на которой сканирование было прервано. Нарушения внутренних
/// инвариантов автомата ошибками не являются и приводят к панике.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Знак внутри слова или идентификатора
    #[error("Sign in the middle of the word/identifier at {position}")]
    SignInsideIdentifier { position: usize },

    /// Два знака подряд
    #[error("Two signs are not expected at {position}")]
    DoubleSign { position: usize },

    /// Знак непосредственно перед разделителем
    #[error("Sign followed by separator at {position}")]
    SignFollowedBySeparator { position: usize },

    /// Повторный десятичный разделитель в числе
    #[error("Unexpected decimal separator at {position}")]
    DuplicateDecimalSeparator { position: usize },
}

/// Тип результата для sqltok
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку знака внутри идентификатора
    pub fn sign_inside_identifier(position: usize) -> Self {
        Self::SignInsideIdentifier { position }
    }

    /// Создает ошибку двойного знака
    pub fn double_sign(position: usize) -> Self {
        Self::DoubleSign { position }
    }

    /// Создает ошибку знака перед разделителем
    pub fn sign_followed_by_separator(position: usize) -> Self {
        Self::SignFollowedBySeparator { position }
    }

    /// Создает ошибку повторного десятичного разделителя
    pub fn duplicate_decimal_separator(position: usize) -> Self {
        Self::DuplicateDecimalSeparator { position }
    }

    /// Возвращает позицию во входной строке, на которой прервано сканирование
    pub fn position(&self) -> usize {
        match self {
            Self::SignInsideIdentifier { position }
            | Self::DoubleSign { position }
            | Self::SignFollowedBySeparator { position }
            | Self::DuplicateDecimalSeparator { position } => *position,
        }
    }
}
