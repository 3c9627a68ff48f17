//! Error types for NestKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using NestError
pub type Result<T> = std::result::Result<T, NestError>;

/// Unified error type for NestKV operations
#[derive(Debug, Error)]
pub enum NestError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Transaction Errors
    // -------------------------------------------------------------------------
    #[error("no active transaction to {0}")]
    NoActiveTransaction(&'static str),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    MalformedCommand(String),

    #[error("unknown command '{0}'. Available commands: PUT, GET, DEL, START, COMMIT, ROLLBACK")]
    UnknownCommand(String),
}
