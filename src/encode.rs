//! Stream encoding against a finished code table.
//!
//! Transforms a target stream line by line: coded symbols are replaced by
//! their bit-string codes, anything else passes through verbatim, and a
//! running size comparison is kept against a fixed 8-bit-per-character
//! baseline.
//!
//! The default output is the literal-text form: each code bit costs one
//! full '0' or '1' character on the wire, so the "compressed" file is often
//! byte-larger than the input even though the nominal bit counts shrink.
//! This is deliberate reference behavior; [`OutputMode::Packed`] is the
//! opt-in alternative that packs code bits into real bytes.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::bits::BitWriter;
use crate::code::CodeTable;
use crate::freq::FrequencyTable;
use crate::tree::HuffmanTree;
use crate::utils::{HuffmanError, Result};

/// Nominal bit width charged per input character for the baseline size.
const BASELINE_BITS_PER_CHAR: u64 = 8;

/// How encoded bits are written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Codes are emitted as literal '0'/'1' text characters (reference
    /// behavior, the default).
    #[default]
    Text,
    /// Codes are packed into real bytes. Uncoded characters and line
    /// separators force byte alignment, so this is a size experiment rather
    /// than a framed format.
    Packed,
}

/// Size accounting for one encoding run, in nominal bits.
///
/// `original_bits` charges every processed character the fixed baseline
/// width; `final_bits` sums the code lengths of coded characters only. Both
/// count nominal bits regardless of the output mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EncodeStats {
    pub original_bits: u64,
    pub final_bits: u64,
}

impl EncodeStats {
    /// Baseline size minus encoded size. Negative when rare symbols with
    /// long codes dominate the target.
    pub fn difference(&self) -> i64 {
        self.original_bits as i64 - self.final_bits as i64
    }

    /// Baseline size over encoded size, or `None` when no character was
    /// coded (the division is undefined, not infinite).
    pub fn ratio(&self) -> Option<f64> {
        (self.final_bits != 0).then(|| self.original_bits as f64 / self.final_bits as f64)
    }
}

impl fmt::Display for EncodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original File Size: {} bits.", self.original_bits)?;
        writeln!(f, "Final File Size: {} bits.", self.final_bits)?;
        writeln!(f, "Difference: {} bits.", self.difference())?;
        match self.ratio() {
            Some(ratio) => write!(f, "Compression Ratio: {ratio}"),
            None => write!(f, "Compression Ratio: undefined"),
        }
    }
}

/// Applies a code table to a target stream.
pub struct Encoder<'a> {
    table: &'a CodeTable,
    mode: OutputMode,
}

impl<'a> Encoder<'a> {
    /// Creates an encoder with the default literal-text output mode.
    pub fn new(table: &'a CodeTable) -> Self {
        Self::with_mode(table, OutputMode::default())
    }

    pub fn with_mode(table: &'a CodeTable, mode: OutputMode) -> Self {
        Self { table, mode }
    }

    /// Encodes the whole target stream into `writer`, one line at a time.
    ///
    /// Coded symbols emit their bit-string; everything else passes through
    /// verbatim. Pending output is flushed after each line, then a line
    /// separator is written (including after the final line, matching the
    /// reference behavior).
    pub fn encode<R: BufRead, W: Write>(&self, reader: R, writer: W) -> Result<EncodeStats> {
        let stats = match self.mode {
            OutputMode::Text => self.encode_text(reader, writer)?,
            OutputMode::Packed => self.encode_packed(reader, writer)?,
        };
        debug!(
            original_bits = stats.original_bits,
            final_bits = stats.final_bits,
            "encoding complete"
        );
        Ok(stats)
    }

    fn encode_text<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<EncodeStats> {
        let mut stats = EncodeStats::default();
        let mut utf8 = [0u8; 4];
        for line in reader.lines() {
            let line = line?;
            for c in line.chars() {
                match self.table.get(c) {
                    Some(entry) => {
                        writer.write_all(entry.code.as_bytes())?;
                        stats.final_bits += entry.code.len() as u64;
                    }
                    None => writer.write_all(c.encode_utf8(&mut utf8).as_bytes())?,
                }
                stats.original_bits += BASELINE_BITS_PER_CHAR;
            }
            writer.flush()?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(stats)
    }

    fn encode_packed<R: BufRead, W: Write>(&self, reader: R, writer: W) -> Result<EncodeStats> {
        let mut stats = EncodeStats::default();
        let mut bits = BitWriter::new(writer);
        let mut utf8 = [0u8; 4];
        for line in reader.lines() {
            let line = line?;
            for c in line.chars() {
                match self.table.get(c) {
                    Some(entry) => {
                        for bit in entry.code.bytes() {
                            bits.write_bit(bit == b'1')?;
                        }
                        stats.final_bits += entry.code.len() as u64;
                    }
                    None => bits.write_bytes(c.encode_utf8(&mut utf8).as_bytes())?,
                }
                stats.original_bits += BASELINE_BITS_PER_CHAR;
            }
            bits.flush()?;
            bits.write_bytes(b"\n")?;
        }
        bits.flush()?;
        Ok(stats)
    }
}

/// Runs the full pipeline: scan `corpus` for frequencies, build the tree and
/// code table from them, then encode `target` into `output`.
///
/// On failure, whatever output was already flushed is left on disk.
pub fn huffman_encode(
    target: &Path,
    corpus: &Path,
    output: &Path,
    mode: OutputMode,
) -> Result<EncodeStats> {
    let table = build_code_table(corpus)?;
    encode_file(&table, target, output, mode)
}

/// Scans a corpus file and derives its code table.
pub fn build_code_table(corpus: &Path) -> Result<CodeTable> {
    let corpus_file = File::open(corpus).map_err(|source| HuffmanError::Open {
        path: corpus.to_path_buf(),
        source,
    })?;
    let freqs = FrequencyTable::scan(BufReader::new(corpus_file))?;
    let tree = HuffmanTree::from_frequencies(&freqs);
    Ok(CodeTable::from_tree(&tree))
}

/// Encodes `target` into `output` with an existing code table.
pub fn encode_file(
    table: &CodeTable,
    target: &Path,
    output: &Path,
    mode: OutputMode,
) -> Result<EncodeStats> {
    let target_file = File::open(target).map_err(|source| HuffmanError::Open {
        path: target.to_path_buf(),
        source,
    })?;
    let output_file = File::create(output).map_err(|source| HuffmanError::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let stats = Encoder::with_mode(table, mode).encode(
        BufReader::new(target_file),
        BufWriter::new(output_file),
    )?;
    info!(target = %target.display(), output = %output.display(), "file encoded");
    Ok(stats)
}
