//! A Rust library for Huffman-coding text streams.
//!
//! This crate builds a prefix-free binary code for the printable ASCII range
//! from a corpus file's symbol frequencies, then applies that code to a
//! target stream and reports how the nominal sizes compare.
//!
//! # Quick Start
//!
//! ```ignore
//! use huffman_encoder::{huffman_encode, OutputMode};
//! use std::path::Path;
//!
//! let stats = huffman_encode(
//!     Path::new("book.txt"),   // stream to encode
//!     Path::new("corpus.txt"), // stream the code is derived from
//!     Path::new("book.huff"),
//!     OutputMode::Text,
//! )?;
//! println!("{stats}");
//! ```
//!
//! # Pipeline
//!
//! - [`FrequencyTable`]: per-symbol counts over the corpus
//! - [`HuffmanTree`]: greedy minimum-weight merge of the counted symbols
//! - [`CodeTable`]: one bit-string code per leaf of the tree
//! - [`Encoder`]: applies the table to the target, with size statistics
//!
//! By default codes are written as literal '0'/'1' text, exactly as the
//! statistics count them; [`OutputMode::Packed`] packs them into real bytes
//! instead. There is no decoder: the text output carries no symbol framing,
//! so it is a one-directional transform by design.

// Core modules
pub mod bits;
pub mod code;
pub mod encode;
pub mod freq;
pub mod tree;
pub mod utils;

// Pipeline types
pub use code::{CodeEntry, CodeTable};
pub use encode::{EncodeStats, Encoder, OutputMode, build_code_table, encode_file, huffman_encode};
pub use freq::{FrequencyTable, SYMBOL_MAX, SYMBOL_MIN, is_coded_symbol};
pub use tree::{HuffmanNode, HuffmanTree};

// Error types
pub use utils::error::{HuffmanError, Result};

// Constants
pub const HUFFMAN_VERSION: &str = "0.1.0";
