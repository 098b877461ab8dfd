//! Configuration constants for the search tree.

/// Maximum number of entries a node can hold (the tree's fan-out).
///
/// A node that reaches this many entries is split before the insertion
/// returns, so a node at rest never holds more than [`MAX_NODE_ENTRIES`].
pub const NODE_CAPACITY: usize = 4;

/// Index at which an overfull node is divided.
///
/// Entries `[SPLIT_POINT, NODE_CAPACITY)` move into the new right sibling.
pub const SPLIT_POINT: usize = NODE_CAPACITY / 2;

/// Fewest entries any non-root node holds.
pub const MIN_NODE_ENTRIES: usize = SPLIT_POINT;

/// Most entries any node holds between operations.
pub const MAX_NODE_ENTRIES: usize = NODE_CAPACITY - 1;
