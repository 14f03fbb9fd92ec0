//! The two primary strategies: pinned below the editor, or following the cursor.

use sidecar_geom::{
    Rect, Size, flip_y,
    style::{CURSOR_PREFERRED_INSIDE_WIDTH, DEFAULT_PREFERRED_INSIDE_WIDTH, WIDGET_PADDING},
};

use super::horizontal::{HorizontalRequest, frames_for_windows};
use crate::{Monitors, WidgetLocation};

/// Pin the widget just below the anchor's bottom edge with bottom-aligned panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedToBottom {
    /// Collapse the widget into a zero-sized anchor point.
    pub hide_widget: bool,
    /// Anchors at least this wide host the panel inside their bounds.
    pub preferred_inside_min_width: f64,
    /// Amount the anchor was expanded by before placement.
    pub inset: Size,
}

impl Default for FixedToBottom {
    fn default() -> Self {
        Self {
            hide_widget: true,
            preferred_inside_min_width: DEFAULT_PREFERRED_INSIDE_WIDTH,
            inset: Size::ZERO,
        }
    }
}

impl FixedToBottom {
    /// Compute frames for `anchor`.
    pub fn frames(&self, anchor: Rect, monitors: &Monitors) -> WidgetLocation {
        frames_for_windows(
            &HorizontalRequest {
                y: flip_y(monitors.primary.h, anchor.max_y()) + WIDGET_PADDING,
                fixed_align_top: Some(false),
                anchor,
                preferred_inside_min_width: self.preferred_inside_min_width,
                hide_widget: self.hide_widget,
                inset: self.inset,
            },
            monitors,
        )
    }
}

/// Follow the text cursor vertically; alignment flips around the display midline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignToTextCursor {
    /// Collapse the widget into a zero-sized anchor point.
    pub hide_widget: bool,
    /// Anchors at least this wide host the panel inside their bounds.
    pub preferred_inside_min_width: f64,
}

impl Default for AlignToTextCursor {
    fn default() -> Self {
        Self {
            hide_widget: true,
            preferred_inside_min_width: CURSOR_PREFERRED_INSIDE_WIDTH,
        }
    }
}

impl AlignToTextCursor {
    /// The strategy used when no selection frame is readable.
    pub fn fallback(&self) -> FixedToBottom {
        FixedToBottom {
            hide_widget: self.hide_widget,
            ..FixedToBottom::default()
        }
    }

    /// Compute frames for `anchor`, following `selection` when it is known.
    pub fn frames(
        &self,
        anchor: Rect,
        monitors: &Monitors,
        selection: Option<Rect>,
    ) -> WidgetLocation {
        let Some(selection) = selection else {
            return self.fallback().frames(anchor, monitors);
        };
        frames_for_windows(
            &HorizontalRequest {
                y: flip_y(monitors.primary.h, selection.max_y()),
                fixed_align_top: None,
                anchor,
                preferred_inside_min_width: self.preferred_inside_min_width,
                hide_widget: self.hide_widget,
                inset: Size::ZERO,
            },
            monitors,
        )
    }
}
