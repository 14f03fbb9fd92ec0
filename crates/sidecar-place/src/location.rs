//! Geometry values exchanged between strategies and callers.

use serde::{Deserialize, Serialize};
use sidecar_geom::Rect;

/// Display geometry needed by every strategy.
///
/// `primary` is the display anchored at the global origin and defines the
/// height used to flip introspection frames. `active` is the display frames
/// are clamped to. The two may be the same rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Monitors {
    /// Display anchored at the global origin.
    pub primary: Rect,
    /// Display used for clamping.
    pub active: Rect,
}

impl Monitors {
    /// Single-display layout where primary and active coincide.
    pub const fn single(frame: Rect) -> Self {
        Self {
            primary: frame,
            active: frame,
        }
    }
}

/// A panel frame plus whether its top edge hangs from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelLocation {
    /// Target frame in window coordinates.
    pub frame: Rect,
    /// True when the panel's top edge aligns with the anchor and grows downwards.
    pub align_top: bool,
}

impl PanelLocation {
    /// Zero frame aligned to the bottom.
    pub const ZERO: Self = Self {
        frame: Rect::ZERO,
        align_top: false,
    };
}

/// Frames for every overlay window derived from one anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetLocation {
    /// Frame of the small widget window.
    pub widget_frame: Rect,
    /// Frame of the tab shown beside the widget.
    pub tab_frame: Rect,
    /// Location shared by the default panel, toast and attached chat panel.
    pub default_panel: PanelLocation,
    /// Location of the suggestion panel, when one could be computed.
    pub suggestion_panel: Option<PanelLocation>,
}

impl WidgetLocation {
    /// The all-zero placement, used when the host has no usable window.
    pub const fn zero() -> Self {
        Self {
            widget_frame: Rect::ZERO,
            tab_frame: Rect::ZERO,
            default_panel: PanelLocation::ZERO,
            suggestion_panel: None,
        }
    }
}
