use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::common::config::{MAX_NODE_ENTRIES, MIN_NODE_ENTRIES};

/// Walk the whole tree, checking the structural invariants, and return every
/// leaf key in traversal order.
fn validate_tree<K: Ord + Clone + Debug, V>(t: &BTree<K, V>) -> Vec<K> {
    let mut keys = Vec::new();
    let leaves = validate_node(&*t.root, t.height, true, &mut keys);

    assert_eq!(keys.len(), t.len(), "leaf entry count must match BTree::len");
    assert!(
        keys.windows(2).all(|w| w[0] <= w[1]),
        "leaf keys must be non-decreasing in traversal order"
    );
    if t.height == 0 {
        assert_eq!(leaves, 1);
    }
    keys
}

/// Returns the number of leaves under `node`.
fn validate_node<K: Ord + Clone + Debug, V>(
    node: &Node<K, V>,
    height: usize,
    is_root: bool,
    keys: &mut Vec<K>,
) -> usize {
    let n = node.len();
    if is_root && height == 0 {
        assert!(n <= MAX_NODE_ENTRIES, "root leaf overflow: {n}");
    } else if is_root {
        assert!((2..=MAX_NODE_ENTRIES).contains(&n), "invalid root entry count: {n}");
    } else {
        assert!(
            (MIN_NODE_ENTRIES..=MAX_NODE_ENTRIES).contains(&n),
            "invalid entry count: {n}"
        );
    }

    if height == 0 {
        for entry in node.entries() {
            assert!(entry.value().is_some(), "leaf entry without a value");
            keys.push(entry.key.clone());
        }
        return 1;
    }

    let mut leaves = 0;
    for (i, entry) in node.entries().iter().enumerate() {
        assert!(entry.value().is_none(), "internal entry carrying a value");
        let start = keys.len();
        leaves += validate_node(node.child(i), height - 1, false, keys);
        if i > 0 {
            assert_eq!(
                keys[start], entry.key,
                "routing key must be the minimum of its subtree"
            );
        }
    }
    leaves
}

fn keys_strategy() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(any::<u16>(), 0..=600)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_len_counts_every_put(keys in prop::collection::vec(0u16..64, 0..=400)) {
        let mut tree = BTree::new();
        for (i, &k) in keys.iter().enumerate() {
            tree.put(k, i).unwrap();
            prop_assert_eq!(tree.len(), i + 1);
        }
        prop_assert_eq!(tree.is_empty(), keys.is_empty());
        validate_tree(&tree);
    }

    #[test]
    fn prop_structure_holds_after_every_put(keys in keys_strategy()) {
        let mut tree = BTree::new();
        let mut last_height = 0;
        for &k in &keys {
            tree.put(k, ()).unwrap();
            // Height only ever grows by one level at a time
            prop_assert!(tree.height() == last_height || tree.height() == last_height + 1);
            last_height = tree.height();
        }
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(validate_tree(&tree), sorted);
    }

    #[test]
    fn prop_unique_keys_round_trip(keys in prop::collection::hash_set(any::<u32>(), 0..=500)) {
        let mut tree = BTree::new();
        for &k in &keys {
            tree.put(k, u64::from(k) * 3).unwrap();
        }
        for &k in &keys {
            prop_assert_eq!(tree.get(&k).unwrap(), Some(&(u64::from(k) * 3)));
        }
        validate_tree(&tree);
    }

    #[test]
    fn prop_missing_keys_are_absent(
        keys in prop::collection::btree_set(0u32..10_000, 0..=300),
        probes in prop::collection::vec(0u32..10_000, 0..=100),
    ) {
        let mut tree = BTree::new();
        for &k in &keys {
            tree.put(k * 2, 0u8).unwrap();
        }
        for p in probes {
            let odd = p * 2 + 1;
            prop_assert_eq!(tree.get(&odd).unwrap(), None);
        }
    }

    #[test]
    fn prop_duplicate_keys_stay_reachable(keys in prop::collection::vec(0u8..16, 1..=300)) {
        let mut tree = BTree::new();
        for (i, &k) in keys.iter().enumerate() {
            tree.put(k, i).unwrap();
        }
        let present: BTreeSet<u8> = keys.iter().copied().collect();
        for k in 0u8..16 {
            let found = tree.get(&k).unwrap();
            prop_assert_eq!(found.is_some(), present.contains(&k));
            if let Some(&i) = found {
                prop_assert_eq!(keys[i], k);
            }
        }
        validate_tree(&tree);
    }
}

#[test]
fn test_sequential_worst_case_is_balanced() {
    let mut tree = BTree::new();
    for i in 0..4096u32 {
        tree.put(i, i).unwrap();
    }
    let keys = validate_tree(&tree);
    assert_eq!(keys, (0..4096).collect::<Vec<_>>());
}
