//! Structured logging for the Huffman encoder library.
//!
//! Level-based, structured logging built on the `tracing` crate. Library code
//! logs through the re-exported macros; binaries and tests that want output
//! call [`init_subscriber`] once at startup.

pub use tracing::{Level, debug, error, info, span, trace, warn};
use tracing_subscriber::FmtSubscriber;

/// Initializes a global logging subscriber.
///
/// This should be called once at the beginning of the program's execution.
/// It sets up a simple subscriber that logs messages to standard error.
///
/// # Arguments
/// * `max_level` - The maximum level of messages to log (e.g., `Level::INFO`, `Level::DEBUG`).
pub fn init_subscriber(max_level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_target(false) // Don't print the module path
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Setting default tracing subscriber failed");
}
