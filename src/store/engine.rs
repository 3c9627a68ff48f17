//! Storage engine
//!
//! Owns the committed map and the session registry behind one exclusive
//! lock. Every public operation takes the `SessionId` of the caller and
//! resolves against that session's frame stack before touching the shared
//! committed state.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::{NestError, Result};
use crate::session::SessionId;
use super::frame::Frame;

/// Shared state guarded by the engine lock
#[derive(Debug, Default)]
struct Inner {
    /// The committed key space. Mutated only by outermost commits and by
    /// autocommit put/delete.
    committed: HashMap<String, String>,

    /// Registry of live sessions. Each stack holds that session's open
    /// frames, innermost last; an empty or absent stack means autocommit.
    sessions: HashMap<SessionId, Vec<Frame>>,
}

/// The transactional key-value store
///
/// All six operations plus session teardown are serialized by a single
/// mutex; lock hold time is O(1) per operation (a map lookup/insert/erase
/// or a constant-size frame merge). The lock is never held across calls,
/// so two sessions with open transactions interleave freely — each
/// session's frames stay private, but overlapping commits resolve as
/// last-commit-wins.
#[derive(Debug, Default)]
pub struct Store {
    inner: Mutex<Inner>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Key Operations
    // =========================================================================

    /// Store a key-value pair.
    ///
    /// With an open transaction the write lands in the session's innermost
    /// frame; otherwise it goes straight to the committed map. Always
    /// succeeds.
    pub fn put(&self, session: SessionId, key: String, value: String) {
        let mut inner = self.inner.lock();
        match inner.sessions.get_mut(&session).and_then(|s| s.last_mut()) {
            Some(frame) => frame.insert(key, value),
            None => {
                inner.committed.insert(key, value);
            }
        }
    }

    /// Retrieve the value visible to this session for the key.
    ///
    /// Resolution order: the session's own frames innermost-to-outermost,
    /// then the committed map. The first level that records the key wins;
    /// a tombstone at any level yields `None`.
    pub fn get(&self, session: SessionId, key: &str) -> Option<String> {
        let inner = self.inner.lock();
        if let Some(stack) = inner.sessions.get(&session) {
            for frame in stack.iter().rev() {
                if let Some(entry) = frame.entry(key) {
                    return entry.clone();
                }
            }
        }
        inner.committed.get(key).cloned()
    }

    /// Delete a key, returning whether it was visible beforehand.
    ///
    /// With an open transaction a tombstone is recorded in the innermost
    /// frame; otherwise the key is removed from the committed map. When the
    /// key is not visible, nothing is recorded and `false` is returned.
    pub fn delete(&self, session: SessionId, key: &str) -> bool {
        let mut inner = self.inner.lock();

        let in_transaction = inner
            .sessions
            .get(&session)
            .map_or(false, |s| !s.is_empty());

        if !in_transaction {
            return inner.committed.remove(key).is_some();
        }

        if !Self::visible(&inner, session, key) {
            return false;
        }

        // Stack known non-empty from the check above.
        if let Some(frame) = inner.sessions.get_mut(&session).and_then(|s| s.last_mut()) {
            frame.remove(key.to_string());
        }
        true
    }

    // =========================================================================
    // Transaction Operations
    // =========================================================================

    /// Open a new transaction level for the session.
    ///
    /// Pushes an empty frame onto the session's stack, registering the
    /// session on first use. Nesting depth is unbounded.
    pub fn start(&self, session: SessionId) {
        let mut inner = self.inner.lock();
        inner.sessions.entry(session).or_default().push(Frame::new());
    }

    /// Commit the session's innermost transaction level.
    ///
    /// The popped frame merges into the enclosing frame when one exists;
    /// committing the outermost frame applies it to the committed map
    /// (values overwrite, tombstones remove).
    pub fn commit(&self, session: SessionId) -> Result<()> {
        let mut inner = self.inner.lock();

        let frame = {
            let stack = inner
                .sessions
                .get_mut(&session)
                .filter(|s| !s.is_empty())
                .ok_or(NestError::NoActiveTransaction("commit"))?;

            // Non-empty per the filter above.
            let frame = stack.pop().unwrap_or_default();

            if let Some(parent) = stack.last_mut() {
                parent.absorb(frame);
                return Ok(());
            }
            frame
        };

        // Outermost commit: apply to the committed map.
        for (key, entry) in frame.into_entries() {
            match entry {
                Some(value) => {
                    inner.committed.insert(key, value);
                }
                None => {
                    inner.committed.remove(&key);
                }
            }
        }

        Ok(())
    }

    /// Discard the session's innermost transaction level.
    ///
    /// The popped frame's mutations are dropped; ancestors and the
    /// committed map are untouched.
    pub fn rollback(&self, session: SessionId) -> Result<()> {
        let mut inner = self.inner.lock();

        let stack = inner
            .sessions
            .get_mut(&session)
            .filter(|s| !s.is_empty())
            .ok_or(NestError::NoActiveTransaction("rollback"))?;

        stack.pop();
        Ok(())
    }

    // =========================================================================
    // Session Lifecycle
    // =========================================================================

    /// Tear down a session, discarding any open frames.
    ///
    /// Equivalent to rolling back every open level; the committed map is
    /// untouched. Idempotent — ending an unknown session is a no-op. The
    /// network layer calls this on every connection exit path so an abrupt
    /// disconnect never leaks an open transaction.
    pub fn end_session(&self, session: SessionId) {
        let mut inner = self.inner.lock();
        if let Some(stack) = inner.sessions.remove(&session) {
            if !stack.is_empty() {
                tracing::debug!(
                    "{} ended with {} open transaction level(s), discarding",
                    session,
                    stack.len()
                );
            }
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of keys in the committed map
    pub fn committed_len(&self) -> usize {
        self.inner.lock().committed.len()
    }

    /// Current transaction nesting depth for the session (0 = autocommit)
    pub fn depth(&self, session: SessionId) -> usize {
        self.inner
            .lock()
            .sessions
            .get(&session)
            .map_or(0, |s| s.len())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Visibility check per the read resolution order, with the lock held
    fn visible(inner: &Inner, session: SessionId, key: &str) -> bool {
        if let Some(stack) = inner.sessions.get(&session) {
            for frame in stack.iter().rev() {
                if let Some(entry) = frame.entry(key) {
                    return entry.is_some();
                }
            }
        }
        inner.committed.contains_key(key)
    }
}
