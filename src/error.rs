//! Error types for loading the syllabus and persisting check marks.
//!
//! Only a failed document load is ever shown to the user. Store errors stay inside the store,
//! which logs them and carries on with whatever it holds in memory.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The syllabus document could not be read or is not JSON.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The data file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Location the document was expected at.
        path: PathBuf,
        /// Underlying read failure.
        source: io::Error,
    },

    /// The data file is not valid JSON.
    #[error("failed to parse syllabus data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures while reading or writing the on-disk check store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file could not be read or written.
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),

    /// The store file exists but does not hold a JSON object of strings.
    #[error("store is corrupt: {0}")]
    Parse(#[from] serde_json::Error),
}
