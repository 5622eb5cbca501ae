//! Common traits for heap data structures
//!
//! This module provides the [`Heap`] trait implemented by the heap core and
//! consumed by the priority-queue facade, along with the crate's single
//! error type [`HeapError`].
//!
//! The trait deliberately has no `decrease_key` or `merge`: entries carry no
//! stable handle once inserted, and the minimum is the only element that can
//! be read or removed.

use std::fmt;

use crate::entry::Entry;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The minimum was read or removed while the heap held no entries
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for minimum-heap data structures
///
/// Heaps store `(key, value)` pairs and always expose the entry with the
/// smallest key first. Reading or removing the minimum of an empty heap is a
/// caller bug, so those operations return [`HeapError::Empty`] instead of a
/// default value.
///
/// # Example
///
/// ```rust
/// use heap_priority_queue::{Heap, HeapError, MinimumHeap};
///
/// let mut heap = MinimumHeap::with_capacity(4);
/// heap.insert(3, "three");
/// heap.insert(1, "one");
///
/// assert_eq!(heap.peek_min(), Ok(&"one"));
/// assert_eq!(heap.remove_min().map(|e| e.value), Ok("one"));
/// assert_eq!(heap.remove_min().map(|e| e.value), Ok("three"));
/// assert_eq!(heap.peek_min(), Err(HeapError::Empty));
/// ```
pub trait Heap<K: Ord, T> {
    /// Creates a new empty heap with room for `capacity` entries
    ///
    /// The capacity is a hint only; storage grows as needed.
    fn with_capacity(capacity: usize) -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of entries in the heap
    fn len(&self) -> usize;

    /// Inserts a value with the given key
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, key: K, value: T);

    /// Returns the value with the minimum key without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no entries.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Result<&T, HeapError>;

    /// Returns the minimum entry (key and value) without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no entries.
    fn peek_min_entry(&self) -> Result<&Entry<K, T>, HeapError>;

    /// Removes the entry with the minimum key and returns it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no entries. The heap is
    /// left untouched in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_min(&mut self) -> Result<Entry<K, T>, HeapError>;
}

/// Queue-level interface served by [`HeapPriorityQueue`](crate::HeapPriorityQueue)
///
/// Code written against this trait can swap the heap-backed queue for any
/// other minimum-priority queue.
///
/// # Example
///
/// ```rust
/// use heap_priority_queue::{HeapPriorityQueue, PriorityQueue};
///
/// fn drain<Q: PriorityQueue<u32, char>>(queue: &mut Q) -> String {
///     std::iter::from_fn(|| queue.pop().ok()).collect()
/// }
///
/// let mut queue = HeapPriorityQueue::new();
/// queue.insert_with_priority(2, 'b');
/// queue.insert_with_priority(1, 'a');
/// assert_eq!(drain(&mut queue), "ab");
/// ```
pub trait PriorityQueue<K: Ord, T> {
    /// Returns true if the queue holds no items
    fn is_empty(&self) -> bool;

    /// Returns the number of items in the queue
    fn len(&self) -> usize;

    /// Adds an item with the given priority
    fn insert_with_priority(&mut self, priority: K, item: T);

    /// Removes and returns the item with the smallest priority
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue is empty.
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Returns the item with the smallest priority without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue is empty.
    fn peek(&self) -> Result<&T, HeapError>;
}
