//! Index structures.
//!
//! - [`btree`] - Balanced multiway search tree (fan-out 4)

pub mod btree;

pub use btree::{BTree, StatsSnapshot, TreeStats};
