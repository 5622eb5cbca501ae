//! Binary Min-Heap Priority Queue for Rust
//!
//! This crate provides a generic minimum-priority queue backed by an
//! array-based binary heap. Each item is stored alongside an orderable
//! priority key, and the item with the smallest key is always served first.
//!
//! # Features
//!
//! - **MinimumHeap**: O(log n) insert and remove-min; O(1) peek
//! - **HeapPriorityQueue**: `insert_with_priority` / `pop` / `peek` facade over any [`Heap`]
//!
//! Reading or removing from an empty heap returns [`HeapError::Empty`].
//! There is no decrease-key, merge, or heapify; entries cannot be addressed
//! after insertion.
//!
//! # Example
//!
//! ```rust
//! use heap_priority_queue::HeapPriorityQueue;
//!
//! let mut queue = HeapPriorityQueue::new();
//! queue.insert_with_priority(5, "a");
//! queue.insert_with_priority(1, "b");
//! queue.insert_with_priority(3, "c");
//!
//! assert_eq!(queue.peek(), Ok(&"b"));
//! assert_eq!(queue.pop(), Ok("b"));
//! assert_eq!(queue.to_string(), "[[3:c],[5:a]]");
//! ```

pub mod binary_heap;
pub mod entry;
pub mod priority_queue;
pub mod traits;

#[cfg(test)]
mod testing;

pub use binary_heap::{MinimumHeap, DEFAULT_CAPACITY};
pub use entry::Entry;
pub use priority_queue::HeapPriorityQueue;
pub use traits::{Heap, HeapError, PriorityQueue};
