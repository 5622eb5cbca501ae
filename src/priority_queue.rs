//! Priority-queue facade over a heap
//!
//! [`HeapPriorityQueue`] gives a heap the familiar queue vocabulary
//! (`insert_with_priority`, `pop`, `peek`). It wraps exactly one heap and
//! forwards every call to it.
//!
//! # Example
//!
//! ```rust
//! use heap_priority_queue::{HeapError, HeapPriorityQueue};
//!
//! let mut queue = HeapPriorityQueue::with_capacity(3);
//! queue.insert_with_priority(5, "a");
//! queue.insert_with_priority(1, "b");
//! queue.insert_with_priority(3, "c");
//!
//! assert_eq!(queue.peek(), Ok(&"b"));
//! assert_eq!(queue.pop(), Ok("b"));
//! assert_eq!(queue.pop(), Ok("c"));
//! assert_eq!(queue.pop(), Ok("a"));
//! assert_eq!(queue.pop(), Err(HeapError::Empty));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::binary_heap::{MinimumHeap, DEFAULT_CAPACITY};
use crate::traits::{Heap, HeapError, PriorityQueue};

/// A minimum-priority queue
///
/// # Type Parameters
/// - `K`: The priority type; smaller priorities are served first
/// - `T`: The item type
/// - `H`: The underlying heap implementation (defaults to [`MinimumHeap`])
pub struct HeapPriorityQueue<K: Ord, T, H: Heap<K, T> = MinimumHeap<K, T>> {
    heap: H,
    _phantom: PhantomData<(K, T)>,
}

impl<K: Ord, T> HeapPriorityQueue<K, T> {
    /// Creates an empty queue backed by a [`MinimumHeap`] with room for `capacity` items
    ///
    /// The capacity is a hint only; the queue grows as needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_heap(MinimumHeap::with_capacity(capacity))
    }

    /// Creates an empty queue with the default capacity hint
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<K: Ord, T, H: Heap<K, T>> HeapPriorityQueue<K, T, H> {
    /// Wraps an existing heap
    pub fn from_heap(heap: H) -> Self {
        Self {
            heap,
            _phantom: PhantomData,
        }
    }

    /// Returns true if the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of items in the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds an item with the given priority
    pub fn insert_with_priority(&mut self, priority: K, item: T) {
        self.heap.insert(priority, item)
    }

    /// Removes and returns the item with the smallest priority
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        self.heap.remove_min().map(|entry| entry.value)
    }

    /// Removes the item with the smallest priority, returning it with its priority
    pub fn pop_with_priority(&mut self) -> Result<(K, T), HeapError> {
        self.heap.remove_min().map(|entry| entry.into_parts())
    }

    /// Returns the item with the smallest priority without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.heap.peek_min()
    }

    /// Returns a reference to the underlying heap
    pub fn heap(&self) -> &H {
        &self.heap
    }
}

impl<K: Ord, T, H: Heap<K, T>> PriorityQueue<K, T> for HeapPriorityQueue<K, T, H> {
    fn is_empty(&self) -> bool {
        HeapPriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        HeapPriorityQueue::len(self)
    }

    fn insert_with_priority(&mut self, priority: K, item: T) {
        HeapPriorityQueue::insert_with_priority(self, priority, item)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        HeapPriorityQueue::pop(self)
    }

    fn peek(&self) -> Result<&T, HeapError> {
        HeapPriorityQueue::peek(self)
    }
}

impl<K: Ord, T, H: Heap<K, T>> Default for HeapPriorityQueue<K, T, H> {
    fn default() -> Self {
        Self::from_heap(H::with_capacity(DEFAULT_CAPACITY))
    }
}

impl<K: Ord, T, H: Heap<K, T> + fmt::Debug> fmt::Debug for HeapPriorityQueue<K, T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapPriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}

impl<K: Ord, T, H: Heap<K, T> + fmt::Display> fmt::Display for HeapPriorityQueue<K, T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.heap, f)
    }
}
