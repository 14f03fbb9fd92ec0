use sidecar_geom::{Rect, Size};

use super::{
    AlignToTextCursor, FixedToBottom,
    horizontal::{HorizontalRequest, Side, layout},
};
use crate::Monitors;

fn reference_monitors() -> Monitors {
    Monitors {
        primary: Rect::new(0.0, 0.0, 1920.0, 1000.0),
        active: Rect::new(0.0, 0.0, 1920.0, 1080.0),
    }
}

#[test]
fn fixed_to_bottom_reference_layout() {
    let anchor = Rect::new(100.0, 200.0, 600.0, 400.0);
    let loc = FixedToBottom::default().frames(anchor, &reference_monitors());

    // min(max(404, 404, 4), 1076, 776)
    assert_eq!(loc.widget_frame, Rect::new(676.0, 404.0, 20.0, 20.0));
    assert_eq!(loc.tab_frame, Rect::new(696.0, 408.0, 20.0, 20.0));
    assert_eq!(loc.default_panel.frame, Rect::new(704.0, 404.0, 454.0, 500.0));
    assert!(!loc.default_panel.align_top);
    assert!(loc.suggestion_panel.is_none());
}

#[test]
fn fixed_to_bottom_is_pure() {
    let anchor = Rect::new(37.5, 211.25, 913.0, 377.0);
    let m = reference_monitors();
    let s = FixedToBottom::default();
    let first = s.frames(anchor, &m);
    for _ in 0..16 {
        let next = s.frames(anchor, &m);
        assert_eq!(next.widget_frame.x.to_bits(), first.widget_frame.x.to_bits());
        assert_eq!(next.widget_frame.y.to_bits(), first.widget_frame.y.to_bits());
        assert_eq!(next, first);
    }
}

#[test]
fn align_without_selection_matches_fixed() {
    let anchor = Rect::new(100.0, 200.0, 600.0, 400.0);
    let m = reference_monitors();
    for hide_widget in [true, false] {
        let align = AlignToTextCursor {
            hide_widget,
            ..AlignToTextCursor::default()
        };
        let fixed = FixedToBottom {
            hide_widget,
            ..FixedToBottom::default()
        };
        assert_eq!(align.frames(anchor, &m, None), fixed.frames(anchor, &m));
    }
}

#[test]
fn align_follows_selection_row() {
    let anchor = Rect::new(100.0, 100.0, 600.0, 800.0);
    let m = reference_monitors();
    let selection = Rect::new(300.0, 300.0, 8.0, 16.0);
    let loc = AlignToTextCursor::default().frames(anchor, &m, Some(selection));
    // 1000 - 316 = 684 beats the bottom clamp of 204; 684 > 540 so panels hang down.
    assert_eq!(loc.widget_frame.y, 684.0);
    assert!(loc.default_panel.align_top);
    assert_eq!(loc.default_panel.frame.y, 684.0 - 500.0);
}

#[test]
fn cursor_strategy_prefers_inside_for_wide_editors() {
    let anchor = Rect::new(0.0, 100.0, 1_000_000.0, 800.0);
    let m = reference_monitors();
    let selection = Rect::new(300.0, 300.0, 8.0, 16.0);
    let loc = AlignToTextCursor::default().frames(anchor, &m, Some(selection));
    assert_eq!(loc.default_panel.frame.x, anchor.max_x() - 4.0 - 454.0);
}

#[test]
fn expanded_window_inset_matches_reference() {
    // A non-workspace window already widened by 14 on each side.
    let anchor = Rect::new(86.0, 200.0, 628.0, 400.0);
    let s = FixedToBottom {
        preferred_inside_min_width: 9_999_999_999.0,
        inset: Size::new(14.0, 4.0),
        ..FixedToBottom::default()
    };
    let loc = s.frames(anchor, &reference_monitors());
    assert_eq!(loc.widget_frame.y, 404.0);
    assert_eq!(loc.default_panel.frame, Rect::new(710.0 + 8.0 - 14.0, 400.0, 454.0, 500.0));
}

#[test]
fn preferred_width_tie_counts_as_wide() {
    let m = reference_monitors();
    let anchor = Rect::new(100.0, 200.0, 600.0, 400.0);
    let base = HorizontalRequest {
        y: 0.0,
        fixed_align_top: Some(false),
        anchor,
        preferred_inside_min_width: 600.0,
        hide_widget: true,
        inset: Size::ZERO,
    };
    assert_eq!(layout(&base, &m).0, Side::Inside);

    let narrower = HorizontalRequest {
        preferred_inside_min_width: 600.5,
        ..base
    };
    assert_eq!(layout(&narrower, &m).0, Side::Right);
}

#[test]
fn wide_anchor_ending_on_screen_edge_stays_inside() {
    let m = reference_monitors();
    // anchor.max_x == active.max_x: `<=` keeps the left side refused.
    let anchor = Rect::new(1000.0, 200.0, 920.0, 400.0);
    let req = HorizontalRequest {
        y: 0.0,
        fixed_align_top: Some(false),
        anchor,
        preferred_inside_min_width: 900.0,
        hide_widget: true,
        inset: Size::ZERO,
    };
    assert_eq!(layout(&req, &m).0, Side::Inside);

    let past = HorizontalRequest {
        anchor: Rect::new(1000.5, 200.0, 920.0, 400.0),
        ..req
    };
    assert_eq!(layout(&past, &m).0, Side::Left);
}
