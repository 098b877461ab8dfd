//! fanout-btree - An in-memory ordered map backed by a balanced multiway
//! search tree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            BTree<K, V>                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   root ──▶ internal node  [ k0 │ k1 │ k2 ]   (height levels)    │
//! │                             │    │    │                         │
//! │                             ▼    ▼    ▼                         │
//! │            leaf nodes  [k:v k:v] [k:v k:v] [k:v k:v k:v]        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   get:  route down by key, scan the leaf                        │
//! │   put:  route down, insert into the leaf, split full nodes on   │
//! │         the way back up, grow a new root if the root splits     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (config, Error, IndexKey)
//! - [`index`] - The search tree itself
//!
//! # Concurrency
//! The tree is a plain single-threaded structure. Share it between threads
//! by wrapping it in a lock and taking the lock around each operation.
//!
//! # Quick Start
//! ```
//! use fanout_btree::BTree;
//!
//! let mut tree = BTree::new();
//! for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
//!     tree.put(key, i).unwrap();
//! }
//!
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.get(&"c").unwrap(), Some(&2));
//! assert_eq!(tree.get(&"z").unwrap(), None);
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::NODE_CAPACITY;
pub use common::{Error, IndexKey, Result};

pub use index::{BTree, StatsSnapshot, TreeStats};
