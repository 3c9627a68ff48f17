//! # NestKV
//!
//! An in-memory key-value store with:
//! - Nested transactions scoped per client connection
//! - Tombstone-based deletes inside transactions
//! - A single exclusive lock serializing all engine operations
//! - A line-oriented TCP protocol with JSON responses
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │              (One Thread per Connection)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Command Façade                             │
//! │           (Tokenize → Dispatch → JSON Response)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────▼────────────┐
//!          │          Store          │
//!          │     (Single Mutex)      │
//!          └────┬───────────────┬────┘
//!               │               │
//!               ▼               ▼
//!       ┌─────────────┐  ┌──────────────┐
//!       │  Committed  │  │   Session    │
//!       │     Map     │  │   Registry   │
//!       └─────────────┘  └──────┬───────┘
//!                               │
//!                               ▼
//!                       ┌──────────────┐
//!                       │ Frame Stack  │
//!                       │ (per session)│
//!                       └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod session;
pub mod store;
pub mod api;
pub mod network;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{NestError, Result};
pub use config::Config;
pub use session::SessionId;
pub use store::Store;
pub use api::Api;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of NestKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
