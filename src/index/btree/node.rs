//! Node layout for the multiway search tree.
//!
//! A [`Node`] is a bounded, ordered run of [`Entry`] slots. Whether a node is
//! a leaf or an internal node is not recorded in the node itself: callers
//! thread the remaining height down the traversal, and a node reached with
//! height `0` is a leaf.
//!
//! # Layout
//! ```text
//!            internal node (height > 0)
//!   ┌──────┬───────┬──────┬───────┬──────┬───────┐
//!   │ key0 │ Child │ key1 │ Child │ key2 │ Child │
//!   └──────┴───┬───┴──────┴───┬───┴──────┴───┬───┘
//!              ▼              ▼              ▼
//!   ┌────────────────┐ ┌────────────────┐ ┌────────────────┐
//!   │ k │ V │ k │ V  │ │ k │ V │ k │ V  │ │ k │ V │ k │ V  │
//!   └────────────────┘ └────────────────┘ └────────────────┘
//!              leaf nodes (height 0)
//! ```
//!
//! For every internal entry past the first, `key` is the smallest key stored
//! in that entry's subtree.

use std::borrow::Borrow;

use crate::common::config::{NODE_CAPACITY, SPLIT_POINT};

/// What an entry points at.
#[derive(Debug)]
pub(crate) enum Link<K, V> {
    /// Payload of a leaf entry.
    Value(V),
    /// Subtree one level below an internal entry.
    Child(Box<Node<K, V>>),
}

/// One slot of a node.
#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) link: Link<K, V>,
}

impl<K, V> Entry<K, V> {
    /// A leaf entry carrying a value.
    #[inline]
    pub(crate) fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            link: Link::Value(value),
        }
    }

    /// An internal entry routing `key` and everything above it to `child`.
    #[inline]
    pub(crate) fn internal(key: K, child: Box<Node<K, V>>) -> Self {
        Self {
            key,
            link: Link::Child(child),
        }
    }

    #[inline]
    pub(crate) fn value(&self) -> Option<&V> {
        match &self.link {
            Link::Value(value) => Some(value),
            Link::Child(_) => None,
        }
    }
}

/// Outcome of inserting into a subtree.
#[derive(Debug)]
pub(crate) enum Insertion<K, V> {
    /// The subtree took the entry without overflowing.
    Absorbed,
    /// The subtree's top node overflowed; this is its new right half.
    Split(Box<Node<K, V>>),
}

/// A bounded ordered sequence of at most [`NODE_CAPACITY`] entries.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Node<K, V> {
    /// Create an empty node with room for a full complement of entries.
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::with_capacity(NODE_CAPACITY),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.entries.len() >= NODE_CAPACITY
    }

    #[inline]
    pub(crate) fn entries(&self) -> &[Entry<K, V>] {
        &self.entries
    }

    /// Key of the first entry.
    ///
    /// # Panics
    /// Panics if the node is empty. Only the root of an empty tree is ever
    /// empty; split halves and internal nodes always hold entries.
    #[inline]
    pub(crate) fn first_key(&self) -> &K {
        &self.entries[0].key
    }

    /// Subtree linked from entry `idx` of an internal node.
    pub(crate) fn child(&self, idx: usize) -> &Node<K, V> {
        match &self.entries[idx].link {
            Link::Child(child) => child,
            Link::Value(_) => unreachable!("leaf entry found above the leaf level"),
        }
    }

    pub(crate) fn child_mut(&mut self, idx: usize) -> &mut Node<K, V> {
        match &mut self.entries[idx].link {
            Link::Child(child) => child,
            Link::Value(_) => unreachable!("leaf entry found above the leaf level"),
        }
    }

    /// Place `entry` at `idx`, shifting `[idx, len)` one slot to the right.
    ///
    /// The caller is responsible for keeping the node ordered.
    pub(crate) fn insert_at(&mut self, idx: usize, entry: Entry<K, V>) {
        debug_assert!(idx <= self.len(), "insert index out of bounds");
        debug_assert!(!self.is_full(), "insert into a full node");
        self.entries.insert(idx, entry);
    }

    /// Move entries `[SPLIT_POINT, NODE_CAPACITY)` into a new right sibling.
    ///
    /// `self` keeps the lower half.
    pub(crate) fn split(&mut self) -> Box<Node<K, V>> {
        debug_assert!(self.is_full(), "only a full node is split");
        let mut right = Node::new();
        right.entries.extend(self.entries.drain(SPLIT_POINT..));
        Box::new(right)
    }
}

impl<K: Ord, V> Node<K, V> {
    /// Slot a new leaf entry for `key` belongs in.
    ///
    /// This is the first position holding a strictly greater key, so an
    /// equal key lands after every existing copy of itself.
    pub(crate) fn leaf_position<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.partition_point(|entry| entry.key.borrow() <= key)
    }

    /// Index of the child a search for `key` descends into.
    ///
    /// Picks the smallest `j` such that `j` is the last entry or `key` is
    /// below the key of entry `j + 1`. The first entry's key is never read.
    pub(crate) fn route<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.entries.get(1..) {
            Some(rest) => rest.partition_point(|entry| entry.key.borrow() <= key),
            None => 0,
        }
    }

    /// Value of the first leaf entry whose key equals `key`.
    pub(crate) fn find_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .and_then(Entry::value)
    }
}
