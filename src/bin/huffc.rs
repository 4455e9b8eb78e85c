//! huffc CLI - Huffman text encoder
//!
//! Builds a prefix code from a corpus file and encodes a target file with
//! it, printing size statistics to the status channel (stdout).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use huffman_encoder::utils::log::init_subscriber;
use huffman_encoder::{EncodeStats, OutputMode, Result, build_code_table, encode_file};

/// Encode a text file with a Huffman code derived from a corpus file.
///
/// The corpus only supplies symbol frequencies; it may be the same file as
/// the target. Output is '0'/'1' text by default.
#[derive(Parser, Debug)]
#[command(name = "huffc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to encode
    #[arg(value_name = "TARGET")]
    target: PathBuf,

    /// File the code table is derived from
    #[arg(value_name = "CORPUS")]
    corpus: PathBuf,

    /// Output file
    #[arg(value_name = "OUTPUT", default_value = "Output")]
    output: PathBuf,

    /// Pack code bits into real bytes instead of '0'/'1' text
    #[arg(long)]
    packed: bool,

    /// Print the derived code table and enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<EncodeStats> {
    let table = build_code_table(&args.corpus)?;
    if args.verbose {
        for entry in table.iter() {
            println!("{}: {}: {}", entry.symbol, entry.weight, entry.code);
        }
    }
    let mode = if args.packed {
        OutputMode::Packed
    } else {
        OutputMode::Text
    };
    encode_file(&table, &args.target, &args.output, mode)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_subscriber(if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    });

    match run(&args) {
        Ok(stats) => {
            println!("{stats}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
