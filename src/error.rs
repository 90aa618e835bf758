// Error types for the record store and the message catalogs

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading the accounts file.
///
/// A missing file is not represented here: absence yields an empty listing.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read accounts file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while loading a message catalog file.
#[derive(Debug, Error)]
pub enum MessagesError {
    #[error("cannot read messages file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid messages JSON: {0}")]
    Json(#[from] serde_json::Error),
}
