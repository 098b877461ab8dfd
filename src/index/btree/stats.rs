//! Operation statistics for the search tree.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters recorded by a [`BTree`](super::BTree).
///
/// All fields are atomic so that lookups, which only borrow the tree
/// immutably, can still count themselves.
///
/// # Memory Ordering
/// Every counter uses `Ordering::Relaxed`: counters are independent of each
/// other and of the tree contents.
///
/// # Example
/// ```
/// use fanout_btree::TreeStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = TreeStats::new();
/// stats.hits.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.hits.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct TreeStats {
    /// Number of lookups that reached the tree.
    pub lookups: AtomicU64,

    /// Lookups that found a value.
    pub hits: AtomicU64,

    /// Lookups that reported the key absent.
    pub misses: AtomicU64,

    /// Number of applied insertions.
    pub inserts: AtomicU64,

    /// Nodes divided because they reached capacity, root included.
    pub node_splits: AtomicU64,

    /// Root splits; each one added a level to the tree.
    pub root_splits: AtomicU64,

    /// Calls rejected because their key was null.
    pub rejected_keys: AtomicU64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            lookups: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            inserts: AtomicU64::new(0),
            node_splits: AtomicU64::new(0),
            root_splits: AtomicU64::new(0),
            rejected_keys: AtomicU64::new(0),
        }
    }

    /// Fraction of lookups that found a value (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        self.snapshot().hit_rate()
    }

    /// Get a non-atomic copy of the current counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            lookups: self.lookups.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            node_splits: self.node_splits.load(Ordering::Relaxed),
            root_splits: self.root_splits.load(Ordering::Relaxed),
            rejected_keys: self.rejected_keys.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.inserts.store(0, Ordering::Relaxed);
        self.node_splits.store(0, Ordering::Relaxed);
        self.root_splits.store(0, Ordering::Relaxed);
        self.rejected_keys.store(0, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_lookup(&self, found: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if found {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Default for TreeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time copy of [`TreeStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub lookups: u64,
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub node_splits: u64,
    pub root_splits: u64,
    pub rejected_keys: u64,
}

impl StatsSnapshot {
    /// Fraction of lookups that found a value (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ lookups: {}, hit_rate: {:.2}%, inserts: {}, splits: {}, root_splits: {} }}",
            self.lookups,
            self.hit_rate() * 100.0,
            self.inserts,
            self.node_splits,
            self.root_splits
        )
    }
}
