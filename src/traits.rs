//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: push/peek/pop/merge, shaped like Rust's `BinaryHeap` API
//! - [`DecreaseKeyHeap`]: adds handle-based `decrease_key` and `delete`
//!
//! Keys are plain integers ([`Key`]). Callers insert non-negative keys; the
//! signed type leaves room for the transient "below the minimum" key used
//! when deleting an arbitrary element.

use std::fmt;

/// Priority type used by every heap in this crate
pub type Key = i64;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A key passed to insert was negative
    NegativeKey,
    /// A decrease amount was not in `1..=current_key`
    DiffOutOfRange,
    /// The handle is no longer valid (element was removed or belongs to another heap)
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::NegativeKey => write!(f, "keys must be non-negative"),
            HeapError::DiffOutOfRange => {
                write!(f, "decrease amount must be positive and at most the current key")
            }
            HeapError::InvalidHandle => {
                write!(f, "handle does not refer to a live element of this heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in the heap, used for decrease_key and delete
///
/// This is an opaque type that identifies a specific element, not a
/// position: it keeps pointing at the same element however the heap is
/// restructured.
pub trait Handle: Clone + PartialEq + Eq {}

/// Base trait for heap/priority queue data structures
///
/// Unlike `BinaryHeap`, which stores values directly (using `Ord`), these
/// heaps store (key, item) pairs and always surface the smallest key.
///
/// # Example
///
/// ```rust
/// use binomial_meld::Heap;
/// use binomial_meld::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.push(3, "three").unwrap();
/// heap.push(1, "one").unwrap();
/// heap.push(2, "two").unwrap();
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given key
    ///
    /// # Errors
    /// Returns `HeapError::NegativeKey` if `key < 0`.
    fn push(&mut self, key: Key, item: T) -> Result<(), HeapError>;

    /// Returns the minimum key and associated item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&Key, &T)>;

    /// Removes and returns the minimum key and associated item
    fn pop(&mut self) -> Option<(Key, T)>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}

/// Extended heap trait with handle-based updates
///
/// # Example
///
/// ```rust
/// use binomial_meld::{DecreaseKeyHeap, Heap};
/// use binomial_meld::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// let handle = heap.push_with_handle(10, "item").unwrap();
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some((&5, &"item")));
/// ```
pub trait DecreaseKeyHeap<T>: Heap<T> {
    /// The handle type for this heap
    type Handle: Handle;

    /// Inserts an element with the given key, returning a handle
    ///
    /// # Errors
    /// Returns `HeapError::NegativeKey` if `key < 0`.
    fn push_with_handle(&mut self, key: Key, item: T) -> Result<Self::Handle, HeapError>;

    /// Lowers the key of the element identified by the handle by `diff`
    ///
    /// # Errors
    /// - `HeapError::InvalidHandle` if the element is no longer in this heap
    /// - `HeapError::DiffOutOfRange` unless `0 < diff <= current key`
    fn decrease_key(&mut self, handle: &Self::Handle, diff: Key) -> Result<(), HeapError>;

    /// Removes the element identified by the handle, returning its key and item
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the element is no longer in this heap.
    fn delete(&mut self, handle: &Self::Handle) -> Result<(Key, T), HeapError>;
}
