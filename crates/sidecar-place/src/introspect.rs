//! Boundary to the accessibility layer that reports editor and window geometry.

use serde::{Deserialize, Serialize};
use sidecar_geom::Rect;

use crate::Monitors;

/// The text surface that currently has keyboard focus inside the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusedEditor {
    /// Opaque handle the introspection layer uses to find the element again.
    pub handle: u64,
    /// Frame of the editor's scroll container, top-left origin.
    pub frame: Rect,
}

/// The host application's focused window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppWindow {
    /// Window frame, top-left origin.
    pub frame: Rect,
    /// Accessibility identifier, empty when absent.
    #[serde(default)]
    pub identifier: String,
    /// Accessibility label, empty when absent.
    #[serde(default)]
    pub label: String,
    /// Accessibility description, empty when absent.
    #[serde(default)]
    pub description: String,
}

/// Which application class currently holds input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusHolder {
    /// The host editor.
    Host,
    /// Our own service process (the overlays themselves).
    OwnService,
    /// Some unrelated application.
    Other,
    /// No application is frontmost.
    #[default]
    Nothing,
}

impl FocusHolder {
    /// True for the host and our own service.
    pub fn is_host_or_service(self) -> bool {
        matches!(self, Self::Host | Self::OwnService)
    }
}

/// Kind of the host's focused window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HostWindowKind {
    /// The host has no focused window, e.g. all windows are minimized.
    #[default]
    None,
    /// A standard document window.
    Standard,
    /// Some other element, such as a sheet or a popover.
    Other,
}

/// Focus state sampled once per opacity evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FocusSnapshot {
    /// Class of the frontmost application.
    #[serde(default)]
    pub holder: FocusHolder,
    /// Bundle identifier of the frontmost application.
    #[serde(default)]
    pub app_id: Option<String>,
    /// Kind of the host's focused window.
    #[serde(default)]
    pub host_window: HostWindowKind,
    /// Whether the application focused before the current one was the host.
    #[serde(default)]
    pub previous_was_host: bool,
}

/// Read-only view of the desktop as seen through accessibility APIs.
///
/// Every query may fail; failures are reported as `None` and placement falls
/// back accordingly.
pub trait Introspect: Send + Sync {
    /// The focused editor of the host, if the host is frontmost and an editor has focus.
    fn focused_editor(&self) -> Option<FocusedEditor>;

    /// Frame of the first line of the current selection, top-left origin.
    fn selection_first_line_frame(&self, editor: &FocusedEditor) -> Option<Rect>;

    /// Frame of the whole selection. Defaults to the first line.
    fn selection_frame(&self, editor: &FocusedEditor) -> Option<Rect> {
        self.selection_first_line_frame(editor)
    }

    /// Frame of a third-party completion popup near the cursor.
    fn completion_popup_frame(&self) -> Option<Rect> {
        None
    }

    /// The host's focused window.
    fn focused_app_window(&self) -> Option<AppWindow>;

    /// Frame of the host window with the given accessibility identifier.
    fn workspace_window_frame(&self, identifier: &str) -> Option<Rect>;

    /// Primary and active display frames.
    fn monitors(&self) -> Option<Monitors>;

    /// Current focus state.
    fn focus_snapshot(&self) -> FocusSnapshot;
}
