//! Array-backed binary min-heap
//!
//! [`MinimumHeap`] stores its entries in a single `Vec`, read as a complete
//! binary tree: the entry at index `i` has children at `2i + 1` and `2i + 2`
//! and its parent at `(i - 1) / 2`. Every parent's key is `<=` the keys of
//! its children after each public operation returns.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `remove_min` | O(log n)   |
//! | `peek_min`   | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use heap_priority_queue::{Heap, MinimumHeap};
//!
//! let mut heap = MinimumHeap::with_capacity(8);
//! heap.insert(5, "a");
//! heap.insert(1, "b");
//! heap.insert(3, "c");
//!
//! assert_eq!(heap.peek_min(), Ok(&"b"));
//! assert_eq!(heap.to_string(), "[[1:b],[5:a],[3:c]]");
//! ```

use std::fmt;
use std::slice;

use log::{debug, trace};

use crate::entry::Entry;
use crate::traits::{Heap, HeapError};

/// Capacity used by [`MinimumHeap::new`] and [`Default`]
pub const DEFAULT_CAPACITY: usize = 16;

/// A binary min-heap of `(key, value)` entries
///
/// Keys only need `Ord`; values are opaque. There is no way to address an
/// entry after insertion other than reading the minimum or iterating the
/// storage in array order.
#[derive(Debug, Clone)]
pub struct MinimumHeap<K, T> {
    /// The heap data stored as a complete binary tree in array form
    data: Vec<Entry<K, T>>,
}

impl<K: Ord, T> Heap<K, T> for MinimumHeap<K, T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, key: K, value: T) {
        self.data.push(Entry::new(key, value));
        self.sift_up(self.data.len() - 1);
    }

    fn peek_min(&self) -> Result<&T, HeapError> {
        self.peek_min_entry().map(|entry| &entry.value)
    }

    fn peek_min_entry(&self) -> Result<&Entry<K, T>, HeapError> {
        self.data.first().ok_or_else(|| {
            debug!("peek on empty heap");
            HeapError::Empty
        })
    }

    fn remove_min(&mut self) -> Result<Entry<K, T>, HeapError> {
        if self.data.is_empty() {
            debug!("remove_min on empty heap");
            return Err(HeapError::Empty);
        }

        // The last entry takes the root's slot; the old root comes back out.
        let min = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }
}

impl<K: Ord, T> MinimumHeap<K, T> {
    /// Creates an empty heap with [`DEFAULT_CAPACITY`] slots reserved
    pub fn new() -> Self {
        <Self as Heap<K, T>>::with_capacity(DEFAULT_CAPACITY)
    }

    /// Returns the number of entries the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Iterates over the entries in storage order (not sorted order)
    pub fn iter(&self) -> slice::Iter<'_, Entry<K, T>> {
        self.data.iter()
    }

    /// Checks that every non-root entry's key is `>=` its parent's key
    pub fn verify_heap_order(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2].key <= self.data[i].key)
    }

    /// Move the entry at `index` toward the root until its parent is not larger
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[parent].key > self.data[index].key {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        trace!("sift_up settled at index {}", index);
    }

    /// Move the entry at `index` toward the leaves until no child is smaller
    ///
    /// Only the smaller child is compared against; on equal children the left
    /// one is taken.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            if left >= len {
                break;
            }
            let min_child = if right < len && self.data[right].key < self.data[left].key {
                right
            } else {
                left
            };

            if self.data[index].key > self.data[min_child].key {
                self.data.swap(index, min_child);
                index = min_child;
            } else {
                break;
            }
        }
        trace!("sift_down settled at index {}", index);
    }
}

impl<K: Ord, T> Default for MinimumHeap<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, T> Extend<(K, T)> for MinimumHeap<K, T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, T> IntoIterator for &'a MinimumHeap<K, T> {
    type Item = &'a Entry<K, T>;
    type IntoIter = slice::Iter<'a, Entry<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Lists the entries in storage order, e.g. `[[1:b],[5:a],[3:c]]`
impl<K: fmt::Display, T: fmt::Display> fmt::Display for MinimumHeap<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", entry)?;
        }
        f.write_str("]")
    }
}
