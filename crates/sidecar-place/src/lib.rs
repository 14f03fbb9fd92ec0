//! sidecar-place: compute frames for the overlay windows that sit beside a
//! host editor.
//!
//! Everything in this crate is synchronous and free of side effects. The
//! [`Introspect`] trait is the only way geometry enters; the result is a
//! [`WidgetLocation`] that callers hand to a renderer.
//!
//! Coordinates: introspection frames use a top-left origin anchored at the
//! primary display, while every frame produced here uses the bottom-left
//! origin expected by window servers.

mod error;
mod introspect;
mod location;
mod orchestrator;
mod scenario;
pub mod strategy;

pub use error::{Error, Result};
pub use introspect::{
    AppWindow, FocusHolder, FocusSnapshot, FocusedEditor, HostWindowKind, Introspect,
};
pub use location::{Monitors, PanelLocation, WidgetLocation};
pub use orchestrator::generate_widget_location;
pub use scenario::Scenario;
