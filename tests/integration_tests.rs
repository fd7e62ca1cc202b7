//! Интеграционные тесты для sqltok
//!
//! Проверяют публичный интерфейс крейта: вызов токенизатора,
//! тексты ошибок и сериализацию результата.

use sqltok::{tokenize, Error, TokenKind};

#[test]
fn test_tokenize_full_query() {
    let sql = "SELECT 'abcd' as id, a.name, +12 as num, \r\nFROM activities";
    let tokens = tokenize(sql).unwrap();

    assert_eq!(tokens.len(), 15);
    assert_eq!(tokens[0].value, "SELECT");
    assert_eq!(tokens[1].token_type, TokenKind::String);
    assert_eq!(tokens[9].token_type, TokenKind::Number);
    assert_eq!(tokens[9].value, "+12");
    assert_eq!(tokens.last().unwrap().value, "activities");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        tokenize("12.5.6").unwrap_err().to_string(),
        "Unexpected decimal separator at 5"
    );
    assert_eq!(
        tokenize("a+b").unwrap_err().to_string(),
        "Sign in the middle of the word/identifier at 2"
    );
    assert_eq!(
        tokenize("+-").unwrap_err().to_string(),
        "Two signs are not expected at 2"
    );
    assert_eq!(
        tokenize("+ 1").unwrap_err().to_string(),
        "Sign followed by separator at 2"
    );
}

#[test]
fn test_error_position_accessor() {
    let error = tokenize("12.5.6").unwrap_err();

    assert_eq!(error, Error::DuplicateDecimalSeparator { position: 5 });
    assert_eq!(error.position(), 5);
}

#[test]
fn test_no_partial_tokens_on_error() {
    // При ошибке наружу не попадает ни одного токена: результат несет
    // ровно первую ошибку, а не частичный список
    let result = tokenize("abc, a+b");
    assert_eq!(
        result.unwrap_err(),
        Error::SignInsideIdentifier { position: 7 }
    );
}

#[test]
fn test_token_list_serialization() {
    let tokens = tokenize("a.name").unwrap();
    let json = serde_json::to_string(&tokens).unwrap();

    assert!(json.contains(r#""value":"a""#));
    assert!(json.contains(r#""token_type":"Separator""#));
}
