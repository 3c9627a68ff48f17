//! Command definitions and line tokenizer
//!
//! Parses one text line into a command, enforcing per-verb argument counts.

use crate::error::{NestError, Result};

const AVAILABLE: &str = "PUT, GET, DEL, START, COMMIT, ROLLBACK";

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a key-value pair
    Put { key: String, value: String },

    /// Retrieve a value by key
    Get { key: String },

    /// Delete a key
    Del { key: String },

    /// Open a new transaction level
    Start,

    /// Commit the innermost transaction level
    Commit,

    /// Discard the innermost transaction level
    Rollback,
}

impl Command {
    /// Parse a single protocol line.
    ///
    /// The line splits on at most the first two spaces, so a PUT value is
    /// the remainder of the line and may itself contain spaces. Verbs are
    /// matched case-insensitively.
    pub fn parse(line: &str) -> Result<Command> {
        let mut parts = line.trim().splitn(3, ' ');

        let verb = match parts.next() {
            Some(v) if !v.is_empty() => v,
            _ => {
                return Err(NestError::MalformedCommand(format!(
                    "empty command. Available commands: {AVAILABLE}"
                )))
            }
        };

        let arg1 = parts.next();
        let arg2 = parts.next();

        match verb.to_ascii_uppercase().as_str() {
            "PUT" => match (arg1, arg2) {
                (Some(key), Some(value)) => Ok(Command::Put {
                    key: key.to_string(),
                    value: value.to_string(),
                }),
                _ => Err(NestError::MalformedCommand(
                    "PUT requires two arguments. Usage: PUT <key> <value>".to_string(),
                )),
            },
            "GET" => match (arg1, arg2) {
                (Some(key), None) => Ok(Command::Get {
                    key: key.to_string(),
                }),
                _ => Err(NestError::MalformedCommand(
                    "GET requires one argument. Usage: GET <key>".to_string(),
                )),
            },
            "DEL" => match (arg1, arg2) {
                (Some(key), None) => Ok(Command::Del {
                    key: key.to_string(),
                }),
                _ => Err(NestError::MalformedCommand(
                    "DEL requires one argument. Usage: DEL <key>".to_string(),
                )),
            },
            "START" => match arg1 {
                None => Ok(Command::Start),
                Some(_) => Err(NestError::MalformedCommand(
                    "START does not take arguments".to_string(),
                )),
            },
            "COMMIT" => match arg1 {
                None => Ok(Command::Commit),
                Some(_) => Err(NestError::MalformedCommand(
                    "COMMIT does not take arguments".to_string(),
                )),
            },
            "ROLLBACK" => match arg1 {
                None => Ok(Command::Rollback),
                Some(_) => Err(NestError::MalformedCommand(
                    "ROLLBACK does not take arguments".to_string(),
                )),
            },
            other => Err(NestError::UnknownCommand(other.to_string())),
        }
    }
}
