//! sidecar-controller: owns the overlay windows and decides when and how
//! they change.
//!
//! - [`scheduler`]: debounced/throttled update lanes with cancellation.
//! - [`visibility`]: opacity and level policy derived from focus state.
//! - [`OverlayController`]: ties placement, policy and the [`Renderer`] together.

mod controller;
mod error;
mod render;
pub mod scheduler;
pub mod visibility;
mod windows;

pub use controller::OverlayController;
pub use error::{Error, Result};
pub use render::{RecordingRenderer, RenderCall, Renderer};
pub use windows::{ChatPanel, WindowId, WindowLevel, WindowSet, WindowSpec, WindowState};
