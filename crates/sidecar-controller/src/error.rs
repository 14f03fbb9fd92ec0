//! Error types for the controller crate.

use std::result::Result as StdResult;

use thiserror::Error;

use crate::WindowId;

/// Convenient result type for the controller crate.
pub type Result<T> = StdResult<T, Error>;

/// Errors surfaced by the controller and its renderer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A renderer call failed for one window.
    #[error("{op} failed for {window:?}: {message}")]
    Render {
        /// Window the call targeted.
        window: WindowId,
        /// Renderer operation name.
        op: &'static str,
        /// Backend message.
        message: String,
    },
    /// Generic error for unexpected conditions.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a render error.
    pub fn render<M: Into<String>>(window: WindowId, op: &'static str, msg: M) -> Self {
        Self::Render {
            window,
            op,
            message: msg.into(),
        }
    }

    /// Helper for wrapping generic string errors.
    pub fn other<M: Into<String>>(msg: M) -> Self {
        Self::Other(msg.into())
    }
}
