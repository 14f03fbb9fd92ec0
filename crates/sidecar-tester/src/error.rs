//! Error handling for the sidecar-tester crate.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for sidecar-tester operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running the tester.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Configuration parsing or validation errors.
    #[error("Configuration error: {}", .0.pretty())]
    Config(#[from] config::Error),
    /// Scenario loading errors.
    #[error("Scenario error: {0}")]
    Scenario(#[from] sidecar_place::Error),
    /// Controller setup or rendering errors.
    #[error("Controller error: {0}")]
    Controller(#[from] sidecar_controller::Error),
    /// Report serialization errors.
    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
    /// The scenario offers nothing to anchor the overlay to.
    #[error("No anchor available in scenario")]
    NoAnchor,
}
