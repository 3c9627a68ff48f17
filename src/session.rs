//! Session identity
//!
//! Each client connection is one session. The engine keys every operation by
//! an opaque `SessionId` rather than by thread identity, so the concurrency
//! model stays portable to schedulers where a session is not pinned to one
//! OS thread.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle identifying one logical session (one connection).
///
/// Stable for the lifetime of the connection and never reused while the
/// process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// Allocate a fresh session identity from the process-wide counter
    pub fn next() -> Self {
        SessionId(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}
