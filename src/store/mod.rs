//! Store Module
//!
//! The transactional storage engine.
//!
//! ## Responsibilities
//! - Own the committed key space (string → string)
//! - Track one frame stack per live session
//! - Resolve reads innermost-frame-first, committed map last
//! - Merge or discard frames on commit/rollback
//!
//! ## Concurrency Model: Single Exclusive Lock
//!
//! All operations (put/get/delete/start/commit/rollback) and session
//! registration/teardown run under one process-wide mutex with O(1) hold
//! time per operation. The lock is *not* held across a transaction's
//! lifetime: transactions give each session private, ordered frames — not
//! serializable isolation. Concurrent commits to overlapping keys resolve
//! as last-commit-wins.

mod frame;
mod engine;

pub use frame::Frame;
pub use engine::Store;
