//! Errors for loading placement fixtures.

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Result alias for fallible placement helpers.
pub type Result<T> = StdResult<T, Error>;

/// Errors raised while loading placement fixtures.
#[derive(Debug, Error)]
pub enum Error {
    /// The scenario file could not be read.
    #[error("failed to read scenario {path}: {source}")]
    Read {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The scenario text is not valid RON for a [`crate::Scenario`].
    #[error("invalid scenario: {message}")]
    Parse {
        /// File the text came from, when known.
        path: Option<PathBuf>,
        /// Parser message including position.
        message: String,
    },
}
