//! Rank type for binomial tree roots.
//!
//! A rank-r binomial tree holds exactly 2ʳ nodes, so a heap that fits in
//! memory never needs a rank above 63. `u8` keeps the node record small and
//! still leaves headroom up to 255.

/// Number of children of a node; also log₂ of its subtree size.
pub type Rank = u8;

/// Largest representable rank.
pub const MAX_RANK: Rank = u8::MAX;

/// Increments a rank after a link, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`, which would require a tree of 2²⁵⁶ nodes.
///
/// # Example
///
/// ```rust
/// use binomial_meld::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1)
        .expect("rank overflow: a linked tree cannot exceed 2^255 nodes")
}

/// Number of nodes in a binomial tree of the given rank.
///
/// # Panics
///
/// Panics if `2^rank` does not fit in a `usize`.
#[inline]
pub fn subtree_size(rank: Rank) -> usize {
    1usize
        .checked_shl(u32::from(rank))
        .expect("subtree size exceeds usize")
}
