//! Tests for the wire protocol
//!
//! Covers the line tokenizer (verbs, arities, case folding, values with
//! spaces) and the JSON response encoding (field presence and order).

use nestkv::error::NestError;
use nestkv::protocol::{Command, Response};

// =============================================================================
// Tokenizer: Valid Commands
// =============================================================================

#[test]
fn test_parse_put() {
    let cmd = Command::parse("PUT key value").unwrap();
    assert_eq!(
        cmd,
        Command::Put {
            key: "key".to_string(),
            value: "value".to_string(),
        }
    );
}

#[test]
fn test_parse_put_value_with_spaces() {
    let cmd = Command::parse("PUT greeting hello there world").unwrap();
    assert_eq!(
        cmd,
        Command::Put {
            key: "greeting".to_string(),
            value: "hello there world".to_string(),
        }
    );
}

#[test]
fn test_parse_get_and_del() {
    assert_eq!(
        Command::parse("GET k").unwrap(),
        Command::Get { key: "k".to_string() }
    );
    assert_eq!(
        Command::parse("DEL k").unwrap(),
        Command::Del { key: "k".to_string() }
    );
}

#[test]
fn test_parse_bare_verbs() {
    assert_eq!(Command::parse("START").unwrap(), Command::Start);
    assert_eq!(Command::parse("COMMIT").unwrap(), Command::Commit);
    assert_eq!(Command::parse("ROLLBACK").unwrap(), Command::Rollback);
}

#[test]
fn test_parse_verbs_case_insensitive() {
    assert!(matches!(
        Command::parse("put k v").unwrap(),
        Command::Put { .. }
    ));
    assert!(matches!(
        Command::parse("pUt k v").unwrap(),
        Command::Put { .. }
    ));
    assert_eq!(Command::parse("rollback").unwrap(), Command::Rollback);
}

#[test]
fn test_parse_trims_surrounding_whitespace() {
    assert_eq!(
        Command::parse("  GET k\r").unwrap(),
        Command::Get { key: "k".to_string() }
    );
}

// =============================================================================
// Tokenizer: Malformed Commands
// =============================================================================

#[test]
fn test_parse_put_missing_value() {
    let err = Command::parse("PUT key").unwrap_err();
    assert!(matches!(err, NestError::MalformedCommand(_)));
    assert!(err.to_string().contains("PUT <key> <value>"));
}

#[test]
fn test_parse_get_wrong_arity() {
    assert!(matches!(
        Command::parse("GET").unwrap_err(),
        NestError::MalformedCommand(_)
    ));
    assert!(matches!(
        Command::parse("GET a b").unwrap_err(),
        NestError::MalformedCommand(_)
    ));
}

#[test]
fn test_parse_del_wrong_arity() {
    assert!(matches!(
        Command::parse("DEL").unwrap_err(),
        NestError::MalformedCommand(_)
    ));
}

#[test]
fn test_parse_bare_verbs_reject_arguments() {
    assert!(matches!(
        Command::parse("START now").unwrap_err(),
        NestError::MalformedCommand(_)
    ));
    assert!(matches!(
        Command::parse("COMMIT all").unwrap_err(),
        NestError::MalformedCommand(_)
    ));
    assert!(matches!(
        Command::parse("ROLLBACK everything").unwrap_err(),
        NestError::MalformedCommand(_)
    ));
}

#[test]
fn test_parse_empty_input() {
    let err = Command::parse("").unwrap_err();
    assert!(matches!(err, NestError::MalformedCommand(_)));
    assert!(err.to_string().contains("Available commands"));

    assert!(matches!(
        Command::parse("   \t  ").unwrap_err(),
        NestError::MalformedCommand(_)
    ));
}

#[test]
fn test_parse_unknown_verb() {
    let err = Command::parse("FETCH k").unwrap_err();
    assert!(matches!(err, NestError::UnknownCommand(_)));

    let text = err.to_string();
    assert!(text.contains("'FETCH'"));
    assert!(text.contains("PUT, GET, DEL, START, COMMIT, ROLLBACK"));
}

// =============================================================================
// Response Encoding
// =============================================================================

#[test]
fn test_encode_bare_ok() {
    assert_eq!(Response::ok().to_json(), r#"{"status":"Ok"}"#);
}

#[test]
fn test_encode_ok_with_result() {
    assert_eq!(
        Response::ok_result("42").to_json(),
        r#"{"status":"Ok","result":"42"}"#
    );
}

#[test]
fn test_encode_error_with_mesg() {
    assert_eq!(
        Response::error("boom").to_json(),
        r#"{"status":"Error","mesg":"boom"}"#
    );
}

#[test]
fn test_encode_ok_with_mesg() {
    assert_eq!(
        Response::ok_mesg("goodbye").to_json(),
        r#"{"status":"Ok","mesg":"goodbye"}"#
    );
}

#[test]
fn test_encode_escapes_json_characters() {
    assert_eq!(
        Response::ok_result(r#"say "hi""#).to_json(),
        r#"{"status":"Ok","result":"say \"hi\""}"#
    );
}
