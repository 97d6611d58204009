//! Errors raised while loading a dictionary.
use std::io;
use std::path::PathBuf;

/// Failure to load a word list. Fatal for a frontend: without a
/// dictionary no query can be answered.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// the file could not be opened or mapped
    #[error("Failed to open dictionary {path:?}: {source}")]
    Open {
        /// path of the dictionary
        path: PathBuf,
        /// underlying I/O error
        source: io::Error,
    },

    /// reading from the word source failed midway
    #[error("Failed to read dictionary: {0}")]
    Read(#[from] io::Error),
}
