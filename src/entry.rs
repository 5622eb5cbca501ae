//! Key-value entries stored in the heap

use std::fmt;

/// A single `(key, value)` pair held by a heap
///
/// Entries have no identity beyond their position in the heap's storage and
/// are moved around freely while the heap restores its ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, T> {
    /// The priority key; smaller keys leave the heap first
    pub key: K,
    /// The payload associated with the key
    pub value: T,
}

impl<K, T> Entry<K, T> {
    /// Creates an entry holding `value` under `key`
    pub fn new(key: K, value: T) -> Self {
        Self { key, value }
    }

    /// Splits the entry into its key and value
    pub fn into_parts(self) -> (K, T) {
        (self.key, self.value)
    }
}

impl<K, T> From<(K, T)> for Entry<K, T> {
    fn from((key, value): (K, T)) -> Self {
        Self::new(key, value)
    }
}

/// Renders as `[key:value]`
impl<K: fmt::Display, T: fmt::Display> fmt::Display for Entry<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.key, self.value)
    }
}
