//! Binomial Heap implementation
//!
//! A binomial heap is a forest of binomial trees with:
//! - O(log n) insert, delete_min, decrease_key and delete
//! - O(log(n₁ + n₂)) meld
//! - O(1) find_min
//!
//! # Algorithm Overview
//!
//! **Binomial Tree Bₖ**: B₀ is a single node; Bₖ is two B_{k-1} trees where
//! one root becomes the newest child of the other. Bₖ has exactly 2ᵏ nodes.
//!
//! The heap keeps at most one tree per rank, so the ranks present mirror the
//! set bits of `len()` and there are `popcount(len())` trees.
//!
//! **Key Operations**:
//! - **Insert**: meld a single-node heap into this one
//! - **Meld**: lay both root lists out by rank and add them like binary
//!   numbers; two trees of equal rank are linked into a carry of rank+1
//! - **Delete-min**: unlink the minimum root, turn its children into a heap
//!   of their own and meld that back in
//! - **Decrease-key**: bubble the element up by exchanging items with the
//!   parent; tree pointers are never touched, so handles stay valid
//! - **Delete**: drive the key below the minimum, then delete-min
//!
//! # Layout
//!
//! Roots form a circular singly linked list ordered by ascending rank. The
//! heap anchors it at `last`, the highest-rank root, so `last.next` is the
//! lowest-rank root. Every node's children form the same kind of ring,
//! anchored at the parent's `child` pointer (its highest-rank child).
//!
//! Nodes are `Rc<RefCell<_>>` records (see the `storage` module). A meld
//! relinks roots only: the donor's nodes are adopted as they are, so the
//! cost never depends on how many heaps were melded into either side.
//!
//! # Link tie-break
//!
//! When two roots of equal rank carry equal keys, the first operand of the
//! link stays the root. Meld links `(receiver tree, donor tree)` for a rank
//! collision and `(carry, existing tree)` while propagating a carry. The
//! classic array-based formulation links `(donor tree, receiver tree)` on a
//! collision and so lets the donor win ties there; pops of equal keys can
//! come out in a different order than under that formulation.

use crate::rank::{checked_increment, subtree_size, Rank};
use crate::storage::{
    self, item_of, key_of, next_of, parent_of, rank_of, Item, ItemRef, NodeRef, Owner, WeakItem,
};
use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError, Key};
use log::{debug, trace};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Handle to an element in a [`BinomialHeap`]
///
/// Handles identify the element, not its position: decrease_key may move the
/// element to another node, and a meld may move it to another heap, and the
/// handle follows it. Once the element is removed the handle stops resolving
/// and every operation taking it returns [`HeapError::InvalidHandle`].
pub struct ItemHandle<T> {
    item: WeakItem<T>,
}

impl<T> Clone for ItemHandle<T> {
    fn clone(&self) -> Self {
        ItemHandle {
            item: self.item.clone(),
        }
    }
}

impl<T> PartialEq for ItemHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.item.ptr_eq(&other.item)
    }
}

impl<T> Eq for ItemHandle<T> {}

impl<T> Hash for ItemHandle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.item.as_ptr(), state);
    }
}

impl<T> fmt::Debug for ItemHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemHandle")
            .field("live", &(self.item.strong_count() > 0))
            .finish()
    }
}

impl<T> Handle for ItemHandle<T> {}

/// Root list bookkeeping for a forest
///
/// Delete-min builds a second `Forest` out of a removed root's children and
/// melds it into the heap's own.
struct Forest<T> {
    /// Highest-rank root; entry point of the circular root list
    last: Option<NodeRef<T>>,
    /// Root holding the smallest key
    min: Option<NodeRef<T>>,
    size: usize,
    num_trees: usize,
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Forest {
            last: None,
            min: None,
            size: 0,
            num_trees: 0,
        }
    }
}

impl<T> Forest<T> {
    fn singleton(node: NodeRef<T>) -> Self {
        Forest {
            last: Some(Rc::clone(&node)),
            min: Some(node),
            size: 1,
            num_trees: 1,
        }
    }
}

/// Binomial Heap
///
/// # Example
///
/// ```rust
/// use binomial_meld::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// let handle = heap.insert(5, "item").unwrap();
/// heap.insert(3, "other").unwrap();
/// heap.decrease_key(&handle, 4).unwrap();
/// assert_eq!(heap.peek(), Some((&1, &"item")));
/// ```
pub struct BinomialHeap<T> {
    roots: Forest<T>,
    /// Identity shared with every item inserted here or melded in
    owner: Rc<Owner>,
}

impl<T> Default for BinomialHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinomialHeap<T> {
    fn drop(&mut self) {
        // Rings are strong cycles; cut every owning edge so the nodes free
        let mut pending: Vec<NodeRef<T>> = self.roots.last.take().into_iter().collect();
        self.roots.min = None;
        while let Some(node) = pending.pop() {
            let mut unlinked = node.borrow_mut();
            pending.extend(unlinked.next.take());
            pending.extend(unlinked.child.take());
        }
    }
}

impl<T> fmt::Debug for BinomialHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialHeap")
            .field("len", &self.roots.size)
            .field("num_trees", &self.roots.num_trees)
            .field("min", &self.peek().map(|(key, _)| *key))
            .finish()
    }
}

impl<T> BinomialHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self {
            roots: Forest::default(),
            owner: Owner::fresh(),
        }
    }

    /// Number of elements in the heap
    pub fn len(&self) -> usize {
        self.roots.size
    }

    pub fn is_empty(&self) -> bool {
        self.roots.size == 0
    }

    /// Number of binomial trees in the root list; always `len().count_ones()`
    pub fn num_trees(&self) -> usize {
        self.roots.num_trees
    }

    /// Inserts an element and returns a handle to it
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// The element becomes a one-node heap which is then melded in, so the
    /// work is a binary increment: one link per carried rank.
    ///
    /// # Errors
    /// Returns `HeapError::NegativeKey` if `key < 0`; the heap is unchanged.
    pub fn insert(&mut self, key: Key, payload: T) -> Result<ItemHandle<T>, HeapError> {
        if key < 0 {
            debug!("rejected insert with negative key {key}");
            return Err(HeapError::NegativeKey);
        }

        let node = storage::new_node(key, payload, Rc::clone(&self.owner));
        let handle = ItemHandle {
            item: Rc::downgrade(&item_of(&node)),
        };
        self.meld_forest(Forest::singleton(node));
        Ok(handle)
    }

    /// Returns a handle to the element with the smallest key
    ///
    /// **Time Complexity**: O(1)
    pub fn find_min(&self) -> Option<ItemHandle<T>> {
        self.roots.min.as_ref().map(|min| ItemHandle {
            item: Rc::downgrade(&item_of(min)),
        })
    }

    /// Returns the smallest key and its payload without removing them
    pub fn peek(&self) -> Option<(&Key, &T)> {
        let min = self.roots.min.as_ref()?;
        let item = self.item_ref(&item_of(min));
        Some((&item.key, &item.payload))
    }

    /// Removes and returns the element with the smallest key
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Unlink the minimum root; the root list is singly linked, so this
    ///    scans for its predecessor (O(number of trees))
    /// 2. Rescan the remaining roots for the new minimum
    /// 3. The removed root's children are B_{k-1}, ..., B₀ trees: they already
    ///    form a valid root list, so clear their parent links and meld them
    ///    back as a heap of 2ᵏ − 1 elements
    ///
    /// Returns `None` on an empty heap.
    pub fn delete_min(&mut self) -> Option<(Key, T)> {
        let min = self.roots.min.take()?;
        let rank = rank_of(&min);
        let subtree = subtree_size(rank);

        if Rc::ptr_eq(&next_of(&min), &min) {
            // The whole heap is this one tree
            self.roots = Forest::default();
        } else {
            let prev = Self::predecessor(&min);
            prev.borrow_mut().next = Some(next_of(&min));
            if self.roots.last.as_ref().is_some_and(|last| Rc::ptr_eq(last, &min)) {
                self.roots.last = Some(Rc::clone(&prev));
            }
            self.roots.size -= subtree;
            self.roots.num_trees -= 1;
            self.roots.min = Some(Self::scan_min(&prev));
        }

        let newest_child = min.borrow_mut().child.take();
        if let Some(child) = newest_child {
            Self::orphan_children(&child);
            let children = Forest {
                min: Some(Self::scan_min(&child)),
                last: Some(child),
                size: subtree - 1,
                num_trees: usize::from(rank),
            };
            self.meld_forest(children);
        }

        Some(storage::free(min))
    }

    /// Lowers the key of an element by `diff`
    ///
    /// **Time Complexity**: O(log n) worst-case (tree height)
    ///
    /// # Errors
    /// - `HeapError::InvalidHandle` if the element is not in this heap
    /// - `HeapError::DiffOutOfRange` unless `0 < diff <= current key`
    ///
    /// On error the heap is unchanged.
    pub fn decrease_key(&mut self, handle: &ItemHandle<T>, diff: Key) -> Result<(), HeapError> {
        let item = self.resolve(handle)?;
        let current = item.borrow().key;
        if diff <= 0 || diff > current {
            debug!("rejected decrease of key {current} by {diff}");
            return Err(HeapError::DiffOutOfRange);
        }

        self.sift_up(&item, current - diff);
        Ok(())
    }

    /// Removes an arbitrary element, returning its key and payload
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// The element's key is driven to one below the current minimum so that
    /// it surfaces as the minimum root, then delete-min removes it. The
    /// returned key is the one the element had before the call.
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the element is not in this heap;
    /// the heap is unchanged.
    pub fn delete(&mut self, handle: &ItemHandle<T>) -> Result<(Key, T), HeapError> {
        let item = self.resolve(handle)?;
        let key = item.borrow().key;

        let min = self
            .roots
            .min
            .as_ref()
            .expect("a heap holding a live element has a minimum");
        if !Rc::ptr_eq(&item_of(min), &item) {
            let below_min = key_of(min) - 1;
            self.sift_up(&item, below_min);
        }
        // The removed node must be the item's only owner
        drop(item);

        let (_, payload) = self
            .delete_min()
            .expect("a heap holding a live element is non-empty");
        Ok((key, payload))
    }

    /// Moves every element of `other` into this heap
    ///
    /// **Time Complexity**: O(log(n₁ + n₂)) worst-case
    ///
    /// `other` is left as a fresh empty heap. Handles obtained from `other`
    /// keep working against `self`.
    pub fn meld(&mut self, other: &mut Self) {
        let mut donor = std::mem::take(other);
        if donor.is_empty() {
            return;
        }
        if self.is_empty() {
            std::mem::swap(self, &mut donor);
            return;
        }

        debug!(
            "melding heap of {} elements into heap of {}",
            donor.roots.size, self.roots.size
        );
        let roots = std::mem::take(&mut donor.roots);
        self.owner = Owner::union(Rc::clone(&self.owner), Rc::clone(&donor.owner));
        self.meld_forest(roots);
    }

    /// Returns the key and payload of a live element
    pub fn get(&self, handle: &ItemHandle<T>) -> Option<(Key, &T)> {
        let item = self.lookup(handle)?;
        let item = self.item_ref(&item);
        Some((item.key, &item.payload))
    }

    /// Returns the current key of a live element
    pub fn key(&self, handle: &ItemHandle<T>) -> Option<Key> {
        self.lookup(handle).map(|item| item.borrow().key)
    }

    /// Mutable access to a live element's payload; its key cannot be changed here
    pub fn payload_mut(&mut self, handle: &ItemHandle<T>) -> Option<&mut T> {
        let item = self.lookup(handle)?;
        // SAFETY: the item is held by a node of this heap, so it outlives the
        // `&mut self` borrow, and that borrow excludes every other access.
        Some(unsafe { &mut (*item.as_ptr()).payload })
    }

    /// Returns true if the handle still refers to an element of this heap
    pub fn contains(&self, handle: &ItemHandle<T>) -> bool {
        self.lookup(handle).is_some()
    }

    /// Removes every element; all outstanding handles become invalid
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Drains the heap into a vector sorted by ascending key
    pub fn into_sorted_vec(mut self) -> Vec<(Key, T)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(entry) = self.delete_min() {
            sorted.push(entry);
        }
        sorted
    }

    /// Walks the whole forest and checks every structural invariant
    ///
    /// Checks: circular root list of `num_trees` roots with distinct ranks in
    /// ascending order from `last.next`; `num_trees == popcount(len)`; each
    /// rank-r node has children of ranks 0..r in ring order and a 2ʳ-node
    /// subtree; parent links; heap order; item/node back-references; item
    /// ownership; `min` holds the smallest root key.
    ///
    /// **Time Complexity**: O(n). Meant for tests, never called by operations.
    pub fn verify_structure(&self) -> Result<(), String> {
        let roots = &self.roots;
        if roots.size == 0 {
            if roots.last.is_some() || roots.min.is_some() || roots.num_trees != 0 {
                return Err("empty heap still references roots".to_string());
            }
            return Ok(());
        }

        if roots.num_trees != roots.size.count_ones() as usize {
            return Err(format!(
                "{} trees for {} elements (expected {})",
                roots.num_trees,
                roots.size,
                roots.size.count_ones()
            ));
        }

        let last = roots.last.as_ref().ok_or("non-empty heap without anchor")?;
        let min = roots.min.as_ref().ok_or("non-empty heap without minimum")?;
        let min_key = key_of(min);

        let mut total = 0;
        let mut trees = 0;
        let mut previous_rank: Option<Rank> = None;
        let mut min_seen = false;
        let first = next_of(last);
        let mut node = Rc::clone(&first);
        loop {
            if node.borrow().parent.is_some() {
                return Err(format!("root {:p} has a parent", Rc::as_ptr(&node)));
            }
            let rank = rank_of(&node);
            if previous_rank.is_some_and(|previous| previous >= rank) {
                return Err("root ranks are not strictly ascending".to_string());
            }
            if key_of(&node) < min_key {
                return Err(format!("root {:p} is smaller than the minimum", Rc::as_ptr(&node)));
            }
            min_seen |= Rc::ptr_eq(&node, min);
            previous_rank = Some(rank);
            total += self.verify_subtree(&node)?;
            trees += 1;
            if trees > roots.num_trees {
                return Err("root list is longer than num_trees".to_string());
            }
            if Rc::ptr_eq(&node, last) {
                break;
            }
            node = next_of(&node);
        }

        if !Rc::ptr_eq(&next_of(last), &first) || trees != roots.num_trees {
            return Err(format!("root list has {trees} trees, expected {}", roots.num_trees));
        }
        if !min_seen {
            return Err("minimum is not in the root list".to_string());
        }
        if total != roots.size {
            return Err(format!("len is {} but trees hold {total}", roots.size));
        }
        Ok(())
    }

    /// Checks one binomial tree and returns its node count
    fn verify_subtree(&self, node: &NodeRef<T>) -> Result<usize, String> {
        let item = item_of(node);
        let key = {
            let item = item.borrow();
            if !item.node.upgrade().is_some_and(|back| Rc::ptr_eq(&back, node)) {
                return Err(format!("item of {:p} points elsewhere", Rc::as_ptr(node)));
            }
            if !Rc::ptr_eq(&Owner::root(&item.owner), &self.owner) {
                return Err(format!("item of {:p} belongs to another heap", Rc::as_ptr(node)));
            }
            item.key
        };

        let rank = rank_of(node);
        let newest = node.borrow().child.clone();
        let mut count = 1;
        let mut children = 0;
        if let Some(newest) = newest {
            let oldest = next_of(&newest);
            let mut child = Rc::clone(&oldest);
            loop {
                if !parent_of(&child).is_some_and(|parent| Rc::ptr_eq(&parent, node)) {
                    return Err(format!("child {:p} does not point back", Rc::as_ptr(&child)));
                }
                if usize::from(rank_of(&child)) != children {
                    return Err(format!("child ranks under {:p} are out of order", Rc::as_ptr(node)));
                }
                if key_of(&child) < key {
                    return Err(format!("heap order violated below {:p}", Rc::as_ptr(node)));
                }
                count += self.verify_subtree(&child)?;
                children += 1;
                if children > usize::from(rank) {
                    return Err(format!("{:p} has more children than its rank", Rc::as_ptr(node)));
                }
                child = next_of(&child);
                if Rc::ptr_eq(&child, &oldest) {
                    break;
                }
            }
        }

        if children != usize::from(rank) || count != subtree_size(rank) {
            return Err(format!(
                "rank {rank} node {:p} has {children} children and {count} nodes",
                Rc::as_ptr(node)
            ));
        }
        Ok(count)
    }

    /// Resolves a handle to an item of this heap
    fn lookup(&self, handle: &ItemHandle<T>) -> Option<ItemRef<T>> {
        let item = handle.item.upgrade()?;
        let owner = Rc::clone(&item.borrow().owner);
        Rc::ptr_eq(&Owner::root(&owner), &self.owner).then_some(item)
    }

    fn resolve(&self, handle: &ItemHandle<T>) -> Result<ItemRef<T>, HeapError> {
        self.lookup(handle).ok_or_else(|| {
            debug!("stale handle {handle:?}");
            HeapError::InvalidHandle
        })
    }

    /// Borrows an item of this heap for as long as the heap is borrowed
    fn item_ref(&self, item: &ItemRef<T>) -> &Item<T> {
        // SAFETY: `item` is held by a node of this heap, so it lives at least
        // as long as `&self`. Items are only borrowed mutably through
        // `&mut self`, which cannot coexist with the returned reference.
        unsafe { &*item.as_ptr() }
    }

    /// Sets an element's key and restores heap order above it
    ///
    /// The new key must not exceed the old one. While the element's node is
    /// smaller than its parent the two nodes exchange items; the tree itself
    /// is never relinked. Afterwards the minimum pointer is updated if the
    /// element reached a root below the current minimum.
    fn sift_up(&mut self, item: &ItemRef<T>, new_key: Key) {
        item.borrow_mut().key = new_key;

        let mut node = item
            .borrow()
            .node
            .upgrade()
            .expect("a live item is held by a node");
        let mut levels = 0;
        while let Some(parent) = parent_of(&node) {
            if key_of(&node) >= key_of(&parent) {
                break;
            }
            Self::swap_items(&node, &parent);
            node = parent;
            levels += 1;
        }
        trace!("sift-up to key {new_key} climbed {levels} levels");

        let min = self.roots.min.as_ref().expect("sift-up runs on a non-empty heap");
        if key_of(&node) < key_of(min) {
            self.roots.min = Some(node);
        }
    }

    fn swap_items(a: &NodeRef<T>, b: &NodeRef<T>) {
        let mut a_node = a.borrow_mut();
        let mut b_node = b.borrow_mut();
        std::mem::swap(&mut a_node.item, &mut b_node.item);
        a_node.item.borrow_mut().node = Rc::downgrade(a);
        b_node.item.borrow_mut().node = Rc::downgrade(b);
    }

    /// Links two trees of equal rank; the smaller key (or `a` on a tie) stays the root
    ///
    /// **Time Complexity**: O(1)
    ///
    /// The other root becomes the parent's newest child: it is spliced into
    /// the child ring right after the previous newest child, and the
    /// parent's `child` pointer moves to it.
    fn link(a: NodeRef<T>, b: NodeRef<T>) -> NodeRef<T> {
        debug_assert_eq!(rank_of(&a), rank_of(&b));

        let (root, child) = if key_of(&b) < key_of(&a) {
            (b, a)
        } else {
            (a, b)
        };

        let newest = root.borrow_mut().child.take();
        let child_next = match newest {
            None => Rc::clone(&child),
            Some(newest) => {
                let oldest = next_of(&newest);
                newest.borrow_mut().next = Some(Rc::clone(&child));
                oldest
            }
        };
        {
            let mut linked = child.borrow_mut();
            linked.next = Some(child_next);
            linked.parent = Some(Rc::downgrade(&root));
        }
        {
            let mut parent = root.borrow_mut();
            parent.child = Some(child);
            parent.rank = checked_increment(parent.rank);
        }
        root
    }

    /// Melds a forest into the heap
    ///
    /// **Algorithm**: binary addition with carry propagation.
    /// 1. Lay each root list out in an array indexed by rank, sized
    ///    max rank + 2 so the final carry always has a slot
    /// 2. Walk ranks upward; a tree present on one side only is copied,
    ///    two trees of the same rank are linked and the rank+1 result
    ///    carries upward, linking with every occupied slot it meets
    /// 3. Rebuild the circular root list from the surviving slots in
    ///    ascending rank order, anchor it at the highest rank, count the
    ///    trees and rescan for the minimum
    fn meld_forest(&mut self, other: Forest<T>) {
        if other.size == 0 {
            return;
        }
        if self.roots.size == 0 {
            self.roots = other;
            return;
        }

        let ours = std::mem::take(&mut self.roots);
        let size = ours.size + other.size;
        let max_rank = Self::top_rank(&ours).max(Self::top_rank(&other));
        let width = usize::from(max_rank) + 2;

        let mut slots = Self::rank_slots(&ours, width);
        let theirs = Self::rank_slots(&other, width);

        for (rank, tree) in theirs.into_iter().enumerate() {
            let Some(tree) = tree else { continue };
            let occupant = slots[rank].take();
            match occupant {
                None => slots[rank] = Some(tree),
                Some(ours) => {
                    let mut carry = Self::link(ours, tree);
                    let mut slot = rank + 1;
                    while let Some(existing) = slots[slot].take() {
                        trace!("carry of rank {slot} meets an existing tree");
                        carry = Self::link(carry, existing);
                        slot += 1;
                    }
                    slots[slot] = Some(carry);
                }
            }
        }

        self.roots = Self::connect_roots(slots, size);
    }

    fn top_rank(forest: &Forest<T>) -> Rank {
        forest.last.as_ref().map_or(0, rank_of)
    }

    /// Lays a root list out by rank
    fn rank_slots(forest: &Forest<T>, width: usize) -> Vec<Option<NodeRef<T>>> {
        let mut slots = vec![None; width];
        let Some(last) = forest.last.as_ref() else {
            return slots;
        };

        let mut node = Rc::clone(last);
        loop {
            let rank = usize::from(rank_of(&node));
            debug_assert!(slots[rank].is_none(), "two roots of rank {rank}");
            let next = next_of(&node);
            slots[rank] = Some(node);
            if Rc::ptr_eq(&next, last) {
                break;
            }
            node = next;
        }
        slots
    }

    /// Chains occupied slots into a circular root list
    fn connect_roots(slots: Vec<Option<NodeRef<T>>>, size: usize) -> Forest<T> {
        let roots: Vec<NodeRef<T>> = slots.into_iter().flatten().collect();
        let (Some(first), Some(last)) = (roots.first(), roots.last()) else {
            return Forest::default();
        };

        for pair in roots.windows(2) {
            pair[0].borrow_mut().next = Some(Rc::clone(&pair[1]));
        }
        last.borrow_mut().next = Some(Rc::clone(first));

        Forest {
            last: Some(Rc::clone(last)),
            min: Some(Self::scan_min(last)),
            size,
            num_trees: roots.len(),
        }
    }

    /// Finds the smallest key in a ring; `start` wins ties
    fn scan_min(start: &NodeRef<T>) -> NodeRef<T> {
        let mut best = Rc::clone(start);
        let mut best_key = key_of(start);
        let mut node = next_of(start);
        while !Rc::ptr_eq(&node, start) {
            let key = key_of(&node);
            if key < best_key {
                best = Rc::clone(&node);
                best_key = key;
            }
            node = next_of(&node);
        }
        best
    }

    /// Finds the node whose `next` is `node` in its ring
    ///
    /// **Time Complexity**: O(ring length)
    fn predecessor(node: &NodeRef<T>) -> NodeRef<T> {
        let mut current = Rc::clone(node);
        loop {
            let next = next_of(&current);
            if Rc::ptr_eq(&next, node) {
                return current;
            }
            current = next;
        }
    }

    /// Clears the parent link of every node in a child ring
    fn orphan_children(newest: &NodeRef<T>) {
        let mut child = Rc::clone(newest);
        loop {
            child.borrow_mut().parent = None;
            child = next_of(&child);
            if Rc::ptr_eq(&child, newest) {
                break;
            }
        }
    }
}

impl<T> Heap<T> for BinomialHeap<T> {
    fn new() -> Self {
        BinomialHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinomialHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinomialHeap::len(self)
    }

    fn push(&mut self, key: Key, item: T) -> Result<(), HeapError> {
        self.insert(key, item).map(|_| ())
    }

    fn peek(&self) -> Option<(&Key, &T)> {
        BinomialHeap::peek(self)
    }

    fn pop(&mut self) -> Option<(Key, T)> {
        self.delete_min()
    }

    fn merge(&mut self, mut other: Self) {
        self.meld(&mut other);
    }
}

impl<T> DecreaseKeyHeap<T> for BinomialHeap<T> {
    type Handle = ItemHandle<T>;

    fn push_with_handle(&mut self, key: Key, item: T) -> Result<ItemHandle<T>, HeapError> {
        self.insert(key, item)
    }

    fn decrease_key(&mut self, handle: &ItemHandle<T>, diff: Key) -> Result<(), HeapError> {
        BinomialHeap::decrease_key(self, handle, diff)
    }

    fn delete(&mut self, handle: &ItemHandle<T>) -> Result<(Key, T), HeapError> {
        BinomialHeap::delete(self, handle)
    }
}
