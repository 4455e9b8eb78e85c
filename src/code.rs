//! Code table derivation.
//!
//! Walks a finished Huffman tree once and records, for every leaf, the
//! bit-string path from the root ("0" for a left descent, "1" for a right
//! descent). The prefix-free property falls out of the tree shape: symbols
//! live only at leaves, and no leaf is an ancestor of another.

use std::array;

use tracing::trace;

use crate::freq::{SYMBOL_RANGE, symbol_index};
use crate::tree::{HuffmanNode, HuffmanTree};

/// A derived code for one symbol: its resolved weight and its bit-string
/// path, represented as text over {'0', '1'}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: char,
    pub weight: u64,
    pub code: String,
}

/// Codes for every symbol present in the tree, stored densely by symbol.
///
/// Iteration order is ascending code point. Symbols without a leaf in the
/// tree have no entry and look up as `None`; the encoder passes them
/// through verbatim.
pub struct CodeTable {
    entries: [Option<CodeEntry>; SYMBOL_RANGE],
}

impl Default for CodeTable {
    fn default() -> Self {
        CodeTable {
            entries: array::from_fn(|_| None),
        }
    }
}

impl CodeTable {
    /// Derives the full code table from a finished tree.
    ///
    /// An empty tree yields an empty table. A lone-leaf root yields a single
    /// entry whose code is the empty bit-string.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::default();
        if let Some(root) = tree.root() {
            table.assign(root, String::new());
        }
        table
    }

    fn assign(&mut self, node: &HuffmanNode, path: String) {
        match node {
            HuffmanNode::Leaf { symbol, weight } => {
                trace!(symbol = %symbol, weight, code = %path, "derived code");
                if let Some(index) = symbol_index(*symbol) {
                    self.entries[index] = Some(CodeEntry {
                        symbol: *symbol,
                        weight: *weight,
                        code: path,
                    });
                }
            }
            HuffmanNode::Internal { left, right, .. } => {
                let mut left_path = path.clone();
                left_path.push('0');
                self.assign(left, left_path);
                let mut right_path = path;
                right_path.push('1');
                self.assign(right, right_path);
            }
        }
    }

    /// Looks up the entry for `c` by exact symbol match.
    pub fn get(&self, c: char) -> Option<&CodeEntry> {
        symbol_index(c).and_then(|index| self.entries[index].as_ref())
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &CodeEntry> {
        self.entries.iter().flatten()
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    fn table_for(corpus: &str) -> CodeTable {
        let freqs = FrequencyTable::scan(corpus.as_bytes()).unwrap();
        CodeTable::from_tree(&HuffmanTree::from_frequencies(&freqs))
    }

    fn assert_prefix_free(table: &CodeTable) {
        for a in table.iter() {
            for b in table.iter() {
                if a.symbol != b.symbol {
                    assert!(
                        !b.code.starts_with(&a.code),
                        "{:?} is a prefix of {:?}",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn empty_tree_yields_empty_table() {
        let table = table_for("");
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn lone_leaf_gets_the_empty_code() {
        let table = table_for("aaaa");
        let entry = table.get('a').unwrap();
        assert_eq!(entry.code, "");
        assert_eq!(entry.weight, 4);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn two_equal_symbols_get_distinct_one_bit_codes() {
        let table = table_for("ab");
        let a = table.get('a').unwrap();
        let b = table.get('b').unwrap();
        assert_eq!(a.code.len(), 1);
        assert_eq!(b.code.len(), 1);
        assert_ne!(a.code, b.code);
    }

    #[test]
    fn entries_iterate_in_ascending_symbol_order() {
        let table = table_for("zebra");
        let symbols: Vec<char> = table.iter().map(|entry| entry.symbol).collect();
        let mut sorted = symbols.clone();
        sorted.sort_unstable();
        assert_eq!(symbols, sorted);
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = table_for("it was the best of times, it was the worst of times");
        assert!(table.len() > 2);
        assert_prefix_free(&table);
    }

    #[test]
    fn uncoded_symbols_look_up_as_none() {
        let table = table_for("ab");
        assert!(table.get('z').is_none());
        assert!(table.get('\n').is_none());
    }

    #[test]
    fn frequent_symbols_get_codes_no_longer_than_rare_ones() {
        let table = table_for("aaaaaaaaab");
        let a = table.get('a').unwrap();
        let b = table.get('b').unwrap();
        assert!(a.code.len() <= b.code.len());
    }
}
