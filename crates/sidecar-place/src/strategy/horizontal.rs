//! Shared layout routine: clamp a target row, then put the panel to the
//! right of the anchor, to its left, or inside it.

use sidecar_geom::{
    Rect, Size, flip_y,
    style::{
        PANEL_HEIGHT, PANEL_WIDTH, SCREEN_EDGE_MARGIN, WIDGET_HEIGHT, WIDGET_PADDING, WIDGET_WIDTH,
    },
};
use tracing::trace;

use crate::{Monitors, PanelLocation, WidgetLocation};

/// Inputs for [`frames_for_windows`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalRequest {
    /// Proposed widget row in window coordinates, before clamping.
    pub y: f64,
    /// Forced panel alignment; `None` derives it from the clamped row.
    pub fixed_align_top: Option<bool>,
    /// Anchor frame in introspection coordinates.
    pub anchor: Rect,
    /// Anchors at least this wide never get the panel on their right.
    pub preferred_inside_min_width: f64,
    /// Collapse the widget into a zero-sized anchor point.
    pub hide_widget: bool,
    /// Amount the anchor was expanded by; subtracted back out of panel positions.
    pub inset: Size,
}

/// Which side of the anchor the panel ended up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Right of the anchor.
    Right,
    /// Left of the anchor.
    Left,
    /// Overlapping the anchor, hanging from its right edge.
    Inside,
}

/// Compute every overlay frame for one anchor. `suggestion_panel` is left
/// empty.
pub fn frames_for_windows(req: &HorizontalRequest, monitors: &Monitors) -> WidgetLocation {
    let (side, location) = layout(req, monitors);
    trace!(?side, y = location.widget_frame.y, "horizontal layout");
    location
}

/// Same as [`frames_for_windows`] but also reports the chosen side.
pub fn layout(req: &HorizontalRequest, monitors: &Monitors) -> (Side, WidgetLocation) {
    let a = req.anchor;
    let primary_h = monitors.primary.h;
    let active = monitors.active;

    let lo = req
        .y
        .max(flip_y(primary_h, a.max_y()) + WIDGET_PADDING)
        .max(active.min_y() + SCREEN_EDGE_MARGIN);
    let y = lo
        .min(active.max_y() - SCREEN_EDGE_MARGIN)
        .min(flip_y(primary_h, a.min_y()) - WIDGET_HEIGHT - WIDGET_PADDING);

    let right_widget = Rect::new(
        a.max_x() - WIDGET_PADDING - WIDGET_WIDTH,
        y,
        WIDGET_WIDTH,
        WIDGET_HEIGHT,
    );
    let right_anchor = if req.hide_widget {
        Rect::new(a.max_x() - WIDGET_PADDING, y, 0.0, 0.0)
    } else {
        right_widget
    };

    let align_top = req.fixed_align_top.unwrap_or(y > active.mid_y());
    let wide = a.w >= req.preferred_inside_min_width;

    let right_panel_x = right_anchor.max_x() + WIDGET_PADDING * 2.0 - req.inset.width;
    if !wide && active.max_x() > right_panel_x + PANEL_WIDTH {
        return (
            Side::Right,
            beside(right_anchor, right_widget, right_panel_x, align_top, req.inset),
        );
    }

    let left_widget = Rect::new(a.min_x() + WIDGET_PADDING, y, WIDGET_WIDTH, WIDGET_HEIGHT);
    let left_anchor = if req.hide_widget {
        Rect::new(a.min_x() + WIDGET_PADDING, y, 0.0, 0.0)
    } else {
        left_widget
    };
    let left_panel_x =
        left_anchor.min_x() - WIDGET_PADDING * 2.0 - PANEL_WIDTH + req.inset.width;
    let put_left = if wide && a.max_x() <= active.max_x() {
        false
    } else {
        left_panel_x > active.min_x()
    };
    if put_left {
        return (
            Side::Left,
            beside(left_anchor, left_widget, left_panel_x, align_top, req.inset),
        );
    }

    let panel = Rect::new(
        right_anchor.max_x() - PANEL_WIDTH,
        if align_top {
            right_anchor.max_y() - PANEL_HEIGHT - WIDGET_HEIGHT - WIDGET_PADDING
        } else {
            right_anchor.max_y() + WIDGET_PADDING - req.inset.height
        },
        PANEL_WIDTH,
        PANEL_HEIGHT,
    );
    let tab = Rect::new(
        right_anchor.min_x() - WIDGET_PADDING - WIDGET_WIDTH,
        right_anchor.y,
        WIDGET_WIDTH,
        WIDGET_HEIGHT,
    );
    (
        Side::Inside,
        WidgetLocation {
            widget_frame: right_widget,
            tab_frame: tab,
            default_panel: PanelLocation {
                frame: panel,
                align_top,
            },
            suggestion_panel: None,
        },
    )
}

/// Frames for a panel placed beside `anchor` at `panel_x`.
fn beside(anchor: Rect, widget: Rect, panel_x: f64, align_top: bool, inset: Size) -> WidgetLocation {
    let panel = Rect::new(
        panel_x,
        if align_top {
            anchor.max_y() - PANEL_HEIGHT
        } else {
            anchor.min_y() - inset.height
        },
        PANEL_WIDTH,
        PANEL_HEIGHT,
    );
    let tab = Rect::new(
        anchor.x,
        if align_top {
            anchor.min_y() - WIDGET_HEIGHT - WIDGET_PADDING
        } else {
            anchor.max_y() + WIDGET_PADDING
        },
        WIDGET_WIDTH,
        WIDGET_HEIGHT,
    );
    WidgetLocation {
        widget_frame: widget,
        tab_frame: tab,
        default_panel: PanelLocation {
            frame: panel,
            align_top,
        },
        suggestion_panel: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitors() -> Monitors {
        Monitors {
            primary: Rect::new(0.0, 0.0, 1920.0, 1000.0),
            active: Rect::new(0.0, 0.0, 1920.0, 1080.0),
        }
    }

    fn req(anchor: Rect, y: f64) -> HorizontalRequest {
        HorizontalRequest {
            y,
            fixed_align_top: None,
            anchor,
            preferred_inside_min_width: 999_999.0,
            hide_widget: true,
            inset: Size::ZERO,
        }
    }

    #[test]
    fn row_is_clamped_to_anchor_bottom() {
        let anchor = Rect::new(100.0, 200.0, 600.0, 400.0);
        let (side, loc) = layout(&req(anchor, 0.0), &monitors());
        assert_eq!(side, Side::Right);
        // max(0, 1000 - 600 + 4, 4) = 404, below every upper bound.
        assert_eq!(loc.widget_frame.y, 404.0);
    }

    #[test]
    fn row_is_clamped_to_anchor_top() {
        let anchor = Rect::new(100.0, 200.0, 600.0, 400.0);
        let (_, loc) = layout(&req(anchor, 5000.0), &monitors());
        // 1000 - 200 - 20 - 4
        assert_eq!(loc.widget_frame.y, 776.0);
    }

    #[test]
    fn derived_alignment_uses_strict_midpoint() {
        // Place the anchor so the clamped row lands exactly on active.mid_y (540).
        let m = Monitors::single(Rect::new(0.0, 0.0, 1920.0, 1080.0));
        let anchor = Rect::new(100.0, 100.0, 600.0, 444.0);
        // lower bound: 1080 - 544 + 4 = 540
        let (_, loc) = layout(&req(anchor, 0.0), &m);
        assert_eq!(loc.widget_frame.y, 540.0);
        assert!(!loc.default_panel.align_top);

        let (_, loc) = layout(&req(anchor, 541.0), &m);
        assert!(loc.default_panel.align_top);
    }

    #[test]
    fn right_side_requires_strictly_more_room() {
        let m = monitors();
        // right anchor max_x = a.max_x - 4; panel_x = a.max_x + 4; need active.max_x > a.max_x + 458
        let exact = Rect::new(0.0, 200.0, 1920.0 - 458.0, 400.0);
        let (side, _) = layout(&req(exact, 0.0), &m);
        assert_ne!(side, Side::Right);

        let roomy = Rect::new(0.0, 200.0, 1920.0 - 458.5, 400.0);
        let (side, loc) = layout(&req(roomy, 0.0), &m);
        assert_eq!(side, Side::Right);
        assert_eq!(loc.default_panel.frame.x, roomy.max_x() + 4.0);
    }

    #[test]
    fn left_side_requires_strictly_more_room() {
        let m = monitors();
        // Anchor flush with the right edge so the right side never fits.
        // left panel_x = a.min_x + 4 - 8 - 454 = a.min_x - 458
        let exact = Rect::new(458.0, 200.0, 1920.0 - 458.0, 400.0);
        let (side, _) = layout(&req(exact, 0.0), &m);
        assert_eq!(side, Side::Inside);

        let roomy = Rect::new(458.5, 200.0, 1920.0 - 458.5, 400.0);
        let (side, loc) = layout(&req(roomy, 0.0), &m);
        assert_eq!(side, Side::Left);
        assert_eq!(loc.default_panel.frame.x, 0.5);
        assert_eq!(loc.widget_frame.x, 462.5);
    }

    #[test]
    fn wide_anchor_on_screen_goes_inside() {
        let m = monitors();
        let anchor = Rect::new(600.0, 200.0, 800.0, 400.0);
        let mut r = req(anchor, 0.0);
        r.preferred_inside_min_width = 800.0;
        let (side, loc) = layout(&r, &m);
        assert_eq!(side, Side::Inside);
        assert_eq!(loc.default_panel.frame.x, anchor.max_x() - 4.0 - 454.0);
        assert_eq!(loc.tab_frame.x, anchor.max_x() - 4.0 - 4.0 - 20.0);
        // align bottom: anchor.max_y + pad
        assert_eq!(loc.default_panel.frame.y, loc.widget_frame.y + 4.0);
    }

    #[test]
    fn wide_anchor_past_screen_edge_may_go_left() {
        let m = monitors();
        let anchor = Rect::new(600.0, 200.0, 1400.0, 400.0);
        let mut r = req(anchor, 0.0);
        r.preferred_inside_min_width = 800.0;
        let (side, _) = layout(&r, &m);
        assert_eq!(side, Side::Left);
    }

    #[test]
    fn visible_widget_widens_the_anchor() {
        let m = monitors();
        let anchor = Rect::new(100.0, 200.0, 600.0, 400.0);
        let mut r = req(anchor, 0.0);
        r.hide_widget = false;
        let (_, loc) = layout(&r, &m);
        // widget occupies [676, 696]; panel starts at 696 + 8
        assert_eq!(loc.widget_frame, Rect::new(676.0, 404.0, 20.0, 20.0));
        assert_eq!(loc.default_panel.frame.x, 704.0);
        assert_eq!(loc.tab_frame, Rect::new(676.0, 428.0, 20.0, 20.0));
    }

    #[test]
    fn inset_shifts_panel_back() {
        let m = monitors();
        let anchor = Rect::new(100.0, 200.0, 600.0, 400.0);
        let mut r = req(anchor, 0.0);
        r.fixed_align_top = Some(false);
        r.inset = Size::new(14.0, 4.0);
        let (_, loc) = layout(&r, &m);
        assert_eq!(loc.default_panel.frame.x, 696.0 + 8.0 - 14.0);
        assert_eq!(loc.default_panel.frame.y, 404.0 - 4.0);
    }

    #[test]
    fn align_top_hangs_panel_from_anchor() {
        let m = monitors();
        let anchor = Rect::new(100.0, 200.0, 600.0, 400.0);
        let mut r = req(anchor, 0.0);
        r.fixed_align_top = Some(true);
        let (_, loc) = layout(&r, &m);
        assert!(loc.default_panel.align_top);
        assert_eq!(loc.default_panel.frame.y, 404.0 - 500.0);
        assert_eq!(loc.tab_frame.y, 404.0 - 20.0 - 4.0);
    }
}
