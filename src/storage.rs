//! Reference-counted node and item records
//!
//! Owning edges of the forest (a node's `child` and every ring `next`) are
//! strong `Rc`s; edges that point back up (`parent`, `Item::node`) and the
//! handles given to callers are `Weak`. Once a node is unlinked and dropped
//! its item goes with it, so a stale handle simply fails to upgrade.
//!
//! Rings are cyclic, which `Rc` cannot reclaim on its own: the heap unlinks
//! every ring when it is dropped.
//!
//! # Ownership tokens
//!
//! Every heap holds an [`Owner`] token and every item remembers the token of
//! the heap it was inserted into. Meld unions the two heaps' tokens
//! (union by rank), so deciding whether an item belongs to a heap walks at
//! most log₂(number of heaps melded together) links and a meld never visits
//! the donor's elements.

use crate::rank::Rank;
use crate::traits::Key;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Strong reference to a node
pub(crate) type NodeRef<T> = Rc<RefCell<Node<T>>>;

/// Non-owning reference to a node (parent links, item back-links)
pub(crate) type WeakNode<T> = Weak<RefCell<Node<T>>>;

/// Strong reference to an item; only the node holding it owns one
pub(crate) type ItemRef<T> = Rc<RefCell<Item<T>>>;

/// Non-owning reference to an item, as held by handles
pub(crate) type WeakItem<T> = Weak<RefCell<Item<T>>>;

/// Position of an element in a binomial tree
///
/// A node owns its place in the forest; the element it currently holds is
/// `item`. Sift-up exchanges `item` between a node and its parent instead of
/// relinking, so the tree shape never changes outside of link/unlink.
pub(crate) struct Node<T> {
    pub(crate) rank: Rank,
    /// Most recently linked child; its `next` is the lowest-rank child
    pub(crate) child: Option<NodeRef<T>>,
    /// Next node in the circular root or sibling list (self when alone).
    /// Only `None` while the node is being freed or torn down.
    pub(crate) next: Option<NodeRef<T>>,
    pub(crate) parent: Option<WeakNode<T>>,
    pub(crate) item: ItemRef<T>,
}

/// An element as seen by callers: key, payload and the node holding it
pub(crate) struct Item<T> {
    pub(crate) key: Key,
    pub(crate) payload: T,
    pub(crate) node: WeakNode<T>,
    pub(crate) owner: Rc<Owner>,
}

/// Allocates a rank-0 node holding a fresh item; the node's `next` is itself
pub(crate) fn new_node<T>(key: Key, payload: T, owner: Rc<Owner>) -> NodeRef<T> {
    let item = Rc::new(RefCell::new(Item {
        key,
        payload,
        node: Weak::new(),
        owner,
    }));
    let node = Rc::new(RefCell::new(Node {
        rank: 0,
        child: None,
        next: None,
        parent: None,
        item: Rc::clone(&item),
    }));
    item.borrow_mut().node = Rc::downgrade(&node);
    node.borrow_mut().next = Some(Rc::clone(&node));
    node
}

/// Unlinks a node that nothing else references and returns its element
///
/// # Panics
///
/// Panics if another strong reference to the node or its item is still
/// alive; callers must have removed the node from every ring first.
pub(crate) fn free<T>(node: NodeRef<T>) -> (Key, T) {
    {
        let mut unlinked = node.borrow_mut();
        unlinked.next = None;
        unlinked.child = None;
    }
    let Node { item, .. } = Rc::try_unwrap(node)
        .ok()
        .expect("freed node is still referenced")
        .into_inner();
    let Item { key, payload, .. } = Rc::try_unwrap(item)
        .ok()
        .expect("freed item is still referenced")
        .into_inner();
    (key, payload)
}

pub(crate) fn next_of<T>(node: &NodeRef<T>) -> NodeRef<T> {
    node.borrow()
        .next
        .clone()
        .expect("linked node has a ring successor")
}

pub(crate) fn parent_of<T>(node: &NodeRef<T>) -> Option<NodeRef<T>> {
    node.borrow().parent.as_ref().and_then(Weak::upgrade)
}

pub(crate) fn item_of<T>(node: &NodeRef<T>) -> ItemRef<T> {
    Rc::clone(&node.borrow().item)
}

pub(crate) fn key_of<T>(node: &NodeRef<T>) -> Key {
    node.borrow().item.borrow().key
}

pub(crate) fn rank_of<T>(node: &NodeRef<T>) -> Rank {
    node.borrow().rank
}

/// Identity of a heap, merged union-find style when heaps are melded
#[derive(Debug, Default)]
pub(crate) struct Owner {
    merged_into: RefCell<Option<Rc<Owner>>>,
    rank: Cell<u8>,
}

impl Owner {
    pub(crate) fn fresh() -> Rc<Owner> {
        Rc::new(Owner::default())
    }

    /// Representative token of the set `token` belongs to
    ///
    /// Compresses the walked path so later lookups are shorter.
    pub(crate) fn root(token: &Rc<Owner>) -> Rc<Owner> {
        let mut root = Rc::clone(token);
        loop {
            let parent = root.merged_into.borrow().clone();
            match parent {
                Some(parent) => root = parent,
                None => break,
            }
        }

        let mut current = Rc::clone(token);
        while !Rc::ptr_eq(&current, &root) {
            let parent = current
                .merged_into
                .replace(Some(Rc::clone(&root)))
                .expect("non-root token has a parent");
            current = parent;
        }
        root
    }

    /// Unions two root tokens and returns the root of the combined set
    pub(crate) fn union(a: Rc<Owner>, b: Rc<Owner>) -> Rc<Owner> {
        if Rc::ptr_eq(&a, &b) {
            return a;
        }
        let (root, child) = if a.rank.get() < b.rank.get() {
            (b, a)
        } else {
            (a, b)
        };
        if root.rank.get() == child.rank.get() {
            root.rank.set(root.rank.get() + 1);
        }
        *child.merged_into.borrow_mut() = Some(Rc::clone(&root));
        root
    }

    /// Number of links between `token` and its root
    #[cfg(test)]
    pub(crate) fn depth(token: &Rc<Owner>) -> usize {
        let mut depth = 0;
        let mut current = Rc::clone(token);
        loop {
            let parent = current.merged_into.borrow().clone();
            match parent {
                Some(parent) => {
                    current = parent;
                    depth += 1;
                }
                None => return depth,
            }
        }
    }
}
