//! Balanced multiway search tree with a fan-out of [`NODE_CAPACITY`].
//!
//! Every leaf sits at the same depth. The tree only grows at the root: an
//! insertion that overflows a node splits it and hands the right half to the
//! parent, and when the root itself splits a new root is placed above it.
//!
//! # Duplicate keys
//! [`BTree::put`] never overwrites. Inserting a key that is already present
//! adds another leaf entry after the existing ones and still counts towards
//! [`BTree::len`]. [`BTree::get`] returns the first matching entry of the
//! leaf its search is routed to.

mod node;
mod render;
mod stats;

#[cfg(test)]
mod proptests;

use std::borrow::Borrow;
use std::sync::atomic::Ordering;

use tracing::{debug, trace};

use crate::common::config::NODE_CAPACITY;
use crate::common::{Error, IndexKey, Result};

use node::{Entry, Insertion, Node};

pub use stats::{StatsSnapshot, TreeStats};

/// An in-memory ordered map backed by a balanced multiway search tree.
///
/// # Example
/// ```
/// use fanout_btree::BTree;
///
/// let mut tree = BTree::new();
/// tree.put("foo", "bar").unwrap();
///
/// assert_eq!(tree.get(&"foo").unwrap(), Some(&"bar"));
/// assert_eq!(tree.get(&"baz").unwrap(), None);
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Debug)]
pub struct BTree<K, V> {
    /// Owned exclusively by the tree; every other node is owned by an entry.
    root: Box<Node<K, V>>,

    /// Internal levels above the leaves.
    height: usize,

    /// Number of applied `put` calls, duplicates included.
    len: usize,

    stats: TreeStats,
}

impl<K, V> BTree<K, V> {
    /// Create an empty tree: a single leaf root with no entries.
    pub fn new() -> Self {
        Self {
            root: Box::new(Node::new()),
            height: 0,
            len: 0,
            stats: TreeStats::new(),
        }
    }

    /// Number of applied insertions.
    ///
    /// Duplicate keys are counted each time they are put.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of internal levels above the leaf level.
    ///
    /// `0` while the root is itself a leaf.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Counters for the operations applied to this tree.
    #[inline]
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    fn reject(&self, message: &'static str) -> Error {
        self.stats.rejected_keys.fetch_add(1, Ordering::Relaxed);
        debug!(reason = message, "rejected null key");
        Error::InvalidArgument(message)
    }
}

impl<K: Ord, V> BTree<K, V> {
    /// Look up the value stored under `key`.
    ///
    /// Returns `Ok(None)` when no entry matches.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if `key` is null
    pub fn get<Q>(&self, key: &Q) -> Result<Option<&V>>
    where
        K: Borrow<Q>,
        Q: IndexKey + ?Sized,
    {
        if key.is_null() {
            return Err(self.reject("argument to get() is null"));
        }

        let found = Self::search(&self.root, key, self.height);
        self.stats.record_lookup(found.is_some());
        Ok(found)
    }

    /// Whether some entry is stored under `key`.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if `key` is null
    pub fn contains_key<Q>(&self, key: &Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: IndexKey + ?Sized,
    {
        Ok(self.get(key)?.is_some())
    }

    fn search<'a, Q>(node: &'a Node<K, V>, key: &Q, height: usize) -> Option<&'a V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if height == 0 {
            return node.find_value(key);
        }
        let j = node.route(key);
        Self::search(node.child(j), key, height - 1)
    }
}

impl<K: IndexKey + Clone, V> BTree<K, V> {
    /// Insert `value` under `key`.
    ///
    /// Always adds a new entry, even when `key` is already present.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if `key` is null; the tree is left untouched
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        if key.is_null() {
            return Err(self.reject("argument key to put() is null"));
        }

        let insertion = Self::insert(&mut self.root, key, value, self.height, &self.stats);
        self.len += 1;
        self.stats.inserts.fetch_add(1, Ordering::Relaxed);

        if let Insertion::Split(sibling) = insertion {
            self.grow(sibling);
        }
        Ok(())
    }

    /// Place a new root above the old root and its freshly split sibling.
    fn grow(&mut self, sibling: Box<Node<K, V>>) {
        let old_root = std::mem::replace(&mut self.root, Box::new(Node::new()));

        let left_key = old_root.first_key().clone();
        let right_key = sibling.first_key().clone();
        self.root.insert_at(0, Entry::internal(left_key, old_root));
        self.root.insert_at(1, Entry::internal(right_key, sibling));

        self.height += 1;
        self.stats.root_splits.fetch_add(1, Ordering::Relaxed);
        debug!(height = self.height, "root split");
    }

    fn insert(
        node: &mut Node<K, V>,
        key: K,
        value: V,
        height: usize,
        stats: &TreeStats,
    ) -> Insertion<K, V> {
        if height == 0 {
            let j = node.leaf_position(&key);
            node.insert_at(j, Entry::leaf(key, value));
        } else {
            let j = node.route(&key);
            let sibling = match Self::insert(node.child_mut(j), key, value, height - 1, stats) {
                Insertion::Absorbed => return Insertion::Absorbed,
                Insertion::Split(sibling) => sibling,
            };
            let routing_key = sibling.first_key().clone();
            node.insert_at(j + 1, Entry::internal(routing_key, sibling));
        }

        if !node.is_full() {
            return Insertion::Absorbed;
        }

        stats.node_splits.fetch_add(1, Ordering::Relaxed);
        trace!(height, capacity = NODE_CAPACITY, "splitting full node");
        Insertion::Split(node.split())
    }
}

impl<K, V> Default for BTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
