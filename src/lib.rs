//! Mergeable binomial heap for Rust
//!
//! This crate provides a binomial heap over integer keys with opaque
//! payloads and stable element handles.
//!
//! # Features
//!
//! - **Insert / delete-min / decrease-key / delete**: O(log n) worst case
//! - **Meld**: O(log(n₁ + n₂)) worst case; the donor heap is left empty and
//!   its handles keep working against the receiver
//! - **Find-min**: O(1)
//!
//! Nodes are reference counted with weak back-links, and handles are weak
//! references to elements: a handle to a removed element, or to an element
//! of another heap, is detected instead of dangling.
//!
//! # Example
//!
//! ```rust
//! use binomial_meld::binomial::BinomialHeap;
//!
//! let mut heap = BinomialHeap::new();
//! let handle1 = heap.insert(5, "item1").unwrap();
//! let _handle2 = heap.insert(3, "item2").unwrap();
//! heap.decrease_key(&handle1, 4).unwrap();
//! assert_eq!(heap.peek(), Some((&1, &"item1")));
//! ```

pub mod binomial;
pub mod rank;
pub mod stdlib_compat;
mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use binomial::{BinomialHeap, ItemHandle};
pub use traits::{DecreaseKeyHeap, Heap, HeapError, Key};
