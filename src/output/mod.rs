//! Output module: JSON Lines persistence
//!
//! The sink accepts the final ordered record sequence and writes one
//! serialized record per line. `read_records` exists for the round-trip
//! contract used by tests and downstream consumers.

mod jsonl;

pub use jsonl::{read_records, write_records};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
