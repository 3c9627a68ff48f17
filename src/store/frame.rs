//! Transaction frame
//!
//! One nesting level of one session's transaction. A frame records pending
//! mutations as an overlay: a key mapped to `Some(value)` is a pending put,
//! a key mapped to `None` is a tombstone (pending delete), and a key absent
//! from the frame is untouched at this level.

use std::collections::HashMap;

/// An isolated overlay of pending mutations for one transaction level
#[derive(Debug, Default, Clone)]
pub struct Frame {
    entries: HashMap<String, Option<String>>,
}

impl Frame {
    /// Create a new empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pending put, overwriting any prior entry for the key
    pub fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, Some(value));
    }

    /// Record a tombstone for the key
    pub fn remove(&mut self, key: String) {
        self.entries.insert(key, None);
    }

    /// Look up a key at this level.
    ///
    /// Three-way outcome: `None` means the frame does not touch the key,
    /// `Some(Some(v))` is a pending value, `Some(None)` is a tombstone.
    pub fn entry(&self, key: &str) -> Option<&Option<String>> {
        self.entries.get(key)
    }

    /// Whether the frame records anything (value or tombstone) for the key
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Merge a committed child frame into this one.
    ///
    /// Entry-wise overwrite, tombstones included: the child is the inner
    /// (newer) level, so its entries win over ours.
    pub fn absorb(&mut self, child: Frame) {
        self.entries.extend(child.entries);
    }

    /// Iterate over the frame's entries, consuming it
    pub fn into_entries(self) -> impl Iterator<Item = (String, Option<String>)> {
        self.entries.into_iter()
    }

    /// Number of keys touched by this frame
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the frame touches no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_three_way_lookup() {
        let mut frame = Frame::new();
        frame.insert("a".to_string(), "1".to_string());
        frame.remove("b".to_string());

        assert_eq!(frame.entry("a"), Some(&Some("1".to_string())));
        assert_eq!(frame.entry("b"), Some(&None));
        assert_eq!(frame.entry("c"), None);
    }

    #[test]
    fn test_tombstone_counts_as_contained() {
        let mut frame = Frame::new();
        frame.remove("gone".to_string());

        assert!(frame.contains("gone"));
        assert!(!frame.is_empty());
    }

    #[test]
    fn test_absorb_inner_wins() {
        let mut parent = Frame::new();
        parent.insert("k".to_string(), "old".to_string());
        parent.insert("only_parent".to_string(), "p".to_string());

        let mut child = Frame::new();
        child.insert("k".to_string(), "new".to_string());
        child.remove("only_parent".to_string());

        parent.absorb(child);

        assert_eq!(parent.entry("k"), Some(&Some("new".to_string())));
        assert_eq!(parent.entry("only_parent"), Some(&None));
        assert_eq!(parent.len(), 2);
    }
}
