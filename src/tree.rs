//! Huffman tree construction.
//!
//! Builds a single binary tree from a frequency table by repeatedly merging
//! the two lowest-weight nodes until one root remains. Extraction uses a
//! binary min-heap; among weight ties the most recently created node wins,
//! which reproduces the last-occurring-minimum selection of the reference
//! linear scan (surviving scan positions there equal creation order).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use crate::freq::FrequencyTable;

/// Node in a Huffman tree.
///
/// Only leaves carry a symbol; an internal node's weight is always the sum
/// of its two children's weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Number of leaves under (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Heap entry wrapping a node with its creation sequence number.
///
/// Ordered by ascending weight; weight ties rank the higher sequence number
/// first, so a `Reverse`-wrapped max-heap pops the minimum-weight node that
/// was created last.
struct RankedNode {
    node: HuffmanNode,
    seq: u64,
}

impl PartialEq for RankedNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedNode {}

impl PartialOrd for RankedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .weight()
            .cmp(&other.node.weight())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A completed Huffman tree.
///
/// The root is absent when the frequency table held no symbols; a table with
/// exactly one symbol produces a lone-leaf root, which later yields the
/// empty bit-string as that symbol's code.
#[derive(Debug, Default, Clone)]
pub struct HuffmanTree {
    root: Option<HuffmanNode>,
}

impl HuffmanTree {
    /// Builds the tree from observed frequencies.
    pub fn from_frequencies(table: &FrequencyTable) -> Self {
        let mut heap = BinaryHeap::with_capacity(table.len());
        let mut seq: u64 = 0;

        for (symbol, weight) in table.iter() {
            heap.push(Reverse(RankedNode {
                node: HuffmanNode::Leaf { symbol, weight },
                seq,
            }));
            seq += 1;
        }

        while heap.len() > 1 {
            // First pop becomes the left child, second the right.
            let left = heap.pop().unwrap().0.node;
            let right = heap.pop().unwrap().0.node;
            let weight = left.weight() + right.weight();
            heap.push(Reverse(RankedNode {
                node: HuffmanNode::Internal {
                    weight,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                seq,
            }));
            seq += 1;
        }

        let root = heap.pop().map(|r| r.0.node);
        debug!(
            leaves = root.as_ref().map_or(0, HuffmanNode::leaf_count),
            "huffman tree built"
        );
        HuffmanTree { root }
    }

    #[cfg(test)]
    pub(crate) fn from_root(root: Option<HuffmanNode>) -> Self {
        HuffmanTree { root }
    }

    pub fn root(&self) -> Option<&HuffmanNode> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of leaves, equal to the number of distinct observed symbols.
    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, HuffmanNode::leaf_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(corpus: &str) -> FrequencyTable {
        FrequencyTable::scan(corpus.as_bytes()).unwrap()
    }

    /// Every internal node's weight must equal the sum of its children's.
    fn check_weight_sums(node: &HuffmanNode) {
        if let HuffmanNode::Internal {
            weight,
            left,
            right,
        } = node
        {
            assert_eq!(*weight, left.weight() + right.weight());
            check_weight_sums(left);
            check_weight_sums(right);
        }
    }

    fn count_internal(node: &HuffmanNode) -> usize {
        match node {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => {
                1 + count_internal(left) + count_internal(right)
            }
        }
    }

    #[test]
    fn empty_table_builds_empty_tree() {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::new());
        assert!(tree.is_empty());
        assert_eq!(tree.leaf_count(), 0);
    }

    #[test]
    fn single_symbol_root_is_the_lone_leaf() {
        let tree = HuffmanTree::from_frequencies(&table_of("aaaa"));
        match tree.root() {
            Some(HuffmanNode::Leaf { symbol, weight }) => {
                assert_eq!(*symbol, 'a');
                assert_eq!(*weight, 4);
            }
            other => panic!("expected lone leaf root, got {other:?}"),
        }
    }

    #[test]
    fn two_symbols_build_one_merge() {
        let tree = HuffmanTree::from_frequencies(&table_of("ab"));
        let root = tree.root().unwrap();
        assert!(!root.is_leaf());
        assert_eq!(root.weight(), 2);
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn weight_ties_pick_the_most_recent_node() {
        // 'a' and 'b' tie at weight 1; 'b' was created later, so it is
        // popped first and becomes the left child.
        let tree = HuffmanTree::from_frequencies(&table_of("ab"));
        match tree.root().unwrap() {
            HuffmanNode::Internal { left, right, .. } => {
                assert_eq!(**left, HuffmanNode::Leaf { symbol: 'b', weight: 1 });
                assert_eq!(**right, HuffmanNode::Leaf { symbol: 'a', weight: 1 });
            }
            other => panic!("expected internal root, got {other:?}"),
        }
    }

    #[test]
    fn reference_shape_for_skewed_frequencies() {
        // Frequencies a:2 b:1 c:1 (first seen a, b, c). The reference scan
        // merges (c, b) first, then makes that node the left child of the
        // root with 'a' on the right.
        let tree = HuffmanTree::from_frequencies(&table_of("aabc"));
        match tree.root().unwrap() {
            HuffmanNode::Internal { left, right, .. } => {
                assert_eq!(**right, HuffmanNode::Leaf { symbol: 'a', weight: 2 });
                match &**left {
                    HuffmanNode::Internal { left, right, .. } => {
                        assert_eq!(**left, HuffmanNode::Leaf { symbol: 'c', weight: 1 });
                        assert_eq!(**right, HuffmanNode::Leaf { symbol: 'b', weight: 1 });
                    }
                    other => panic!("expected merged pair on the left, got {other:?}"),
                }
            }
            other => panic!("expected internal root, got {other:?}"),
        }
    }

    #[test]
    fn internal_weights_sum_their_children() {
        let tree = HuffmanTree::from_frequencies(&table_of(
            "the quick brown fox jumps over the lazy dog",
        ));
        check_weight_sums(tree.root().unwrap());
    }

    #[test]
    fn node_counts_match_distinct_symbols() {
        let table = table_of("mississippi river");
        let tree = HuffmanTree::from_frequencies(&table);
        let root = tree.root().unwrap();
        assert_eq!(tree.leaf_count(), table.len());
        assert_eq!(count_internal(root), table.len() - 1);
    }
}
