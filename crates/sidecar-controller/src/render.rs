//! Boundary to the window toolkit, plus a recording implementation.

use std::{collections::HashSet, mem, sync::Arc};

use parking_lot::Mutex;
use serde::Serialize;
use sidecar_geom::Rect;

use crate::{Error, Result, WindowId, WindowSpec};

/// Sink for window changes decided by the controller.
pub trait Renderer: Send + Sync {
    /// Create the native window described by `spec`.
    fn create_window(&self, spec: &WindowSpec) -> Result<()>;
    /// Move and resize a window.
    fn apply_frame(&self, window: WindowId, frame: Rect, animated: bool) -> Result<()>;
    /// Set a window's opacity (0 or 1).
    fn apply_opacity(&self, window: WindowId, value: f64) -> Result<()>;
    /// Let clicks pass through a window or not.
    fn apply_ignores_mouse(&self, window: WindowId, ignores: bool) -> Result<()>;
    /// Float a window above normal windows or drop it to the normal level.
    fn apply_window_level(&self, window: WindowId, float_on_top: bool) -> Result<()>;
    /// Order a window to the front without activating it.
    fn order_front(&self, window: WindowId) -> Result<()>;
}

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderCall {
    /// `create_window`
    Create(WindowId),
    /// `apply_frame`
    Frame {
        /// Target window.
        window: WindowId,
        /// New frame.
        frame: Rect,
        /// Animate the change.
        animated: bool,
    },
    /// `apply_opacity`
    Opacity {
        /// Target window.
        window: WindowId,
        /// New opacity.
        value: f64,
    },
    /// `apply_ignores_mouse`
    IgnoresMouse {
        /// Target window.
        window: WindowId,
        /// Clicks pass through.
        ignores: bool,
    },
    /// `apply_window_level`
    Level {
        /// Target window.
        window: WindowId,
        /// Float above normal windows.
        float_on_top: bool,
    },
    /// `order_front`
    OrderFront(WindowId),
}

impl RenderCall {
    /// Window the call targeted.
    pub fn window(&self) -> WindowId {
        match self {
            Self::Create(w) | Self::OrderFront(w) => *w,
            Self::Frame { window, .. }
            | Self::Opacity { window, .. }
            | Self::IgnoresMouse { window, .. }
            | Self::Level { window, .. } => *window,
        }
    }
}

/// Renderer that records every call, for tests and headless diagnostics.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    /// Calls in order.
    calls: Arc<Mutex<Vec<RenderCall>>>,
    /// Windows whose calls fail.
    failing: Arc<Mutex<HashSet<WindowId>>>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded calls.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().clone()
    }

    /// Drain recorded calls.
    pub fn take(&self) -> Vec<RenderCall> {
        mem::take(&mut *self.calls.lock())
    }

    /// Recorded frame changes as `(window, frame)` pairs.
    pub fn frames(&self) -> Vec<(WindowId, Rect)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                RenderCall::Frame { window, frame, .. } => Some((*window, *frame)),
                _ => None,
            })
            .collect()
    }

    /// Make every call for `window` fail (or succeed again).
    pub fn set_failing(&self, window: WindowId, fail: bool) {
        let mut g = self.failing.lock();
        if fail {
            g.insert(window);
        } else {
            g.remove(&window);
        }
    }

    /// Record `call`, failing if its window is marked.
    fn note(&self, op: &'static str, call: RenderCall) -> Result<()> {
        let window = call.window();
        if self.failing.lock().contains(&window) {
            return Err(Error::render(window, op, "injected failure"));
        }
        self.calls.lock().push(call);
        Ok(())
    }
}

impl Renderer for RecordingRenderer {
    fn create_window(&self, spec: &WindowSpec) -> Result<()> {
        self.note("create_window", RenderCall::Create(spec.id))
    }

    fn apply_frame(&self, window: WindowId, frame: Rect, animated: bool) -> Result<()> {
        self.note(
            "apply_frame",
            RenderCall::Frame {
                window,
                frame,
                animated,
            },
        )
    }

    fn apply_opacity(&self, window: WindowId, value: f64) -> Result<()> {
        self.note("apply_opacity", RenderCall::Opacity { window, value })
    }

    fn apply_ignores_mouse(&self, window: WindowId, ignores: bool) -> Result<()> {
        self.note(
            "apply_ignores_mouse",
            RenderCall::IgnoresMouse { window, ignores },
        )
    }

    fn apply_window_level(&self, window: WindowId, float_on_top: bool) -> Result<()> {
        self.note(
            "apply_window_level",
            RenderCall::Level {
                window,
                float_on_top,
            },
        )
    }

    fn order_front(&self, window: WindowId) -> Result<()> {
        self.note("order_front", RenderCall::OrderFront(window))
    }
}
