//! Standard library compatibility layer
//!
//! Provides a `BinaryHeap`-shaped wrapper for callers that only need keys.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//! - **Keys only**: elements are non-negative [`Key`]s; `push` rejects negatives.
//!
//! # Example
//!
//! ```rust
//! use binomial_meld::stdlib_compat::StdHeap;
//!
//! let mut heap: StdHeap = StdHeap::new();
//! heap.push(5).unwrap();
//! heap.push(3).unwrap();
//! heap.push(7).unwrap();
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! ```

use crate::binomial::BinomialHeap;
use crate::traits::{Heap, HeapError, Key};

/// A `BinaryHeap`-like wrapper where the key is the whole element
///
/// # Type Parameters
/// - `H`: The underlying heap implementation, `BinomialHeap<()>` by default
pub struct StdHeap<H: Heap<()> = BinomialHeap<()>> {
    heap: H,
}

impl<H: Heap<()>> StdHeap<H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self { heap: H::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a key onto the heap
    ///
    /// # Errors
    /// Returns `HeapError::NegativeKey` if `key < 0`.
    pub fn push(&mut self, key: Key) -> Result<(), HeapError> {
        self.heap.push(key, ())
    }

    /// Returns the smallest key without removing it
    pub fn peek(&self) -> Option<&Key> {
        self.heap.peek().map(|(key, _)| key)
    }

    /// Removes and returns the smallest key
    pub fn pop(&mut self) -> Option<Key> {
        self.heap.pop().map(|(key, _)| key)
    }

    /// Moves every key of `other` into this heap
    pub fn append(&mut self, other: Self) {
        self.heap.merge(other.heap);
    }
}

impl<H: Heap<()>> Default for StdHeap<H> {
    fn default() -> Self {
        Self::new()
    }
}
