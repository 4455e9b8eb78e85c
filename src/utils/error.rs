use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all operations in the Huffman encoder library.
#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A specialized `Result` type for Huffman coding operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
