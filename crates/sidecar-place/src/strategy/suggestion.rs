//! Suggestion panel placement next to the text cursor.
//!
//! The panel prefers to sit under the cursor line. When a completion popup
//! occupies that side, it is placed beside the popup, or flipped to the
//! opposite side when there is no horizontal room.

use sidecar_geom::{
    Rect, flip_y,
    style::{
        SCREEN_EDGE_MARGIN, SUGGESTION_MAX_HEIGHT, SUGGESTION_MIN_WIDTH, SUGGESTION_X_OFFSET,
        WIDGET_PADDING,
    },
};
use tracing::trace;

use crate::{Monitors, PanelLocation};

/// Place the suggestion panel near the first line of the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearbyTextCursor;

impl NearbyTextCursor {
    /// Compute the suggestion panel location, or `None` when the cursor is not
    /// visible inside `anchor`.
    pub fn frame(
        &self,
        anchor: Rect,
        monitors: &Monitors,
        selection: Option<Rect>,
        popup: Option<Rect>,
    ) -> Option<PanelLocation> {
        let selection = selection?;
        if selection.outside_vertical_extent_of(&anchor) {
            trace!("selection outside editor viewport");
            return None;
        }

        let active = monitors.active;
        let y = flip_y(monitors.primary.h, selection.max_y())
            .max(active.min_y() + SCREEN_EDGE_MARGIN)
            .min(active.max_y() - SCREEN_EDGE_MARGIN);
        let align_top = y - SUGGESTION_MAX_HEIGHT >= active.min_y();
        let ctx = Cursor {
            y,
            x: selection.max_x() - SUGGESTION_X_OFFSET,
            selection,
            active,
        };

        let Some(popup) = popup else {
            return Some(ctx.ignoring_popup(align_top));
        };

        let popup_below = popup.min_y() >= selection.mid_y();
        if popup_below != align_top {
            return Some(ctx.ignoring_popup(align_top));
        }

        let y = if popup_below {
            y - SUGGESTION_MAX_HEIGHT
        } else {
            y + selection.h - WIDGET_PADDING
        };
        match beside_popup(&popup, &active) {
            Some(x) => Some(PanelLocation {
                frame: Rect::new(x, y, SUGGESTION_MIN_WIDTH, SUGGESTION_MAX_HEIGHT),
                align_top,
            }),
            None => {
                trace!("no room beside completion popup; flipping");
                Some(ctx.ignoring_popup(!align_top))
            }
        }
    }
}

/// Clamped cursor row and proposed column shared by the popup-free layouts.
struct Cursor {
    /// Clamped row in window coordinates.
    y: f64,
    /// Proposed left edge before clamping to the display.
    x: f64,
    /// First-line selection frame.
    selection: Rect,
    /// Active display frame.
    active: Rect,
}

impl Cursor {
    /// Layout used when no completion popup needs to be avoided.
    fn ignoring_popup(&self, align_top: bool) -> PanelLocation {
        let x = if self.x + SUGGESTION_MIN_WIDTH <= self.active.max_x() {
            self.x
        } else {
            self.active.max_x() - SUGGESTION_MIN_WIDTH
        };
        let y = if align_top {
            self.y - SUGGESTION_MAX_HEIGHT
        } else {
            self.y + self.selection.h + WIDGET_PADDING
        };
        PanelLocation {
            frame: Rect::new(x, y, SUGGESTION_MIN_WIDTH, SUGGESTION_MAX_HEIGHT),
            align_top,
        }
    }
}

/// Left edge for a panel beside `popup`, trying the right side first.
fn beside_popup(popup: &Rect, active: &Rect) -> Option<f64> {
    let right = popup.max_x() + WIDGET_PADDING;
    if right + SUGGESTION_MIN_WIDTH <= active.max_x() {
        return Some(right);
    }
    let left = popup.min_x() - WIDGET_PADDING - SUGGESTION_MIN_WIDTH;
    (left >= active.min_x()).then_some(left)
}
