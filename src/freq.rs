//! Symbol frequency accumulation.
//!
//! The first stage of the pipeline: scans a corpus stream and counts how
//! often each printable-ASCII symbol occurs. Characters outside the coded
//! range are skipped entirely; they are neither counted nor retained.

use std::io::BufRead;

use tracing::debug;

use crate::utils::Result;

/// Lower bound of the coded symbol range (space).
pub const SYMBOL_MIN: char = ' ';
/// Upper bound of the coded symbol range (tilde).
pub const SYMBOL_MAX: char = '~';
/// Number of distinct symbols in the coded range.
pub const SYMBOL_RANGE: usize = SYMBOL_MAX as usize - SYMBOL_MIN as usize + 1;

/// Returns true if `c` falls inside the coded symbol range.
pub fn is_coded_symbol(c: char) -> bool {
    (SYMBOL_MIN..=SYMBOL_MAX).contains(&c)
}

/// Dense table index for a coded symbol, or `None` outside the range.
pub(crate) fn symbol_index(c: char) -> Option<usize> {
    is_coded_symbol(c).then(|| c as usize - SYMBOL_MIN as usize)
}

/// Occurrence counts for the symbols observed in a corpus stream.
///
/// Entries are kept in first-seen order. The order carries no meaning for
/// code optimality, but it feeds the tree builder's tie-break and therefore
/// determines the exact tree shape.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    entries: Vec<(char, u64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans a full stream line by line, recording every coded symbol.
    ///
    /// An empty stream yields an empty table. Fails with an I/O error if the
    /// stream cannot be read; the table is not usable for that invocation.
    pub fn scan<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = Self::new();
        for line in reader.lines() {
            let line = line?;
            for c in line.chars() {
                table.record(c);
            }
        }
        debug!(symbols = table.len(), "corpus scan complete");
        Ok(table)
    }

    /// Records one observation of `c`. Out-of-range characters are ignored.
    pub fn record(&mut self, c: char) {
        if !is_coded_symbol(c) {
            return;
        }
        match self.entries.iter_mut().find(|(symbol, _)| *symbol == c) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((c, 1)),
        }
    }

    /// Observation count for `c`, or `None` if it was never recorded.
    pub fn count(&self, c: char) -> Option<u64> {
        self.entries
            .iter()
            .find(|(symbol, _)| *symbol == c)
            .map(|&(_, count)| count)
    }

    /// Number of distinct symbols observed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }
}
