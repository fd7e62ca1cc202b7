//! Тесты для токенизатора sqltok
