//! Общие типы и утилиты для sqltok

pub mod error;

pub use error::{Error, Result};
