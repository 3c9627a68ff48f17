//! Protocol Module
//!
//! Defines the line-oriented text protocol for client-server communication.
//!
//! ## Request Format
//!
//! One command per line, newline-terminated. Verbs match case-insensitively.
//!
//! ```text
//! PUT <key> <value>     value runs to end of line, may contain spaces
//! GET <key>
//! DEL <key>
//! START
//! COMMIT
//! ROLLBACK
//! ```
//!
//! The literal line `exit` (case-insensitive) closes the connection; it is
//! handled by the network layer before tokenizing.
//!
//! ## Response Format
//!
//! One JSON object per line:
//!
//! ```text
//! {"status":"Ok"}
//! {"status":"Ok","result":"some value"}
//! {"status":"Error","mesg":"human-readable detail"}
//! ```
//!
//! `result` appears only when a command yields a value (GET, DEL); `mesg`
//! appears on errors.

mod command;
mod response;

pub use command::Command;
pub use response::{Response, Status};
