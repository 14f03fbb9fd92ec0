//! Pick an anchor from the current desktop state and run the configured strategies.

use config::Config;
use sidecar_geom::{
    Rect, Size,
    style::{NEVER_INSIDE_WIDTH, WIDGET_PADDING, WIDGET_WIDTH},
};
use tracing::debug;

use crate::{
    Introspect, WidgetLocation,
    strategy::{FixedToBottom, PrimaryStrategy, select_primary, select_suggestion},
};

/// Compute frames for every overlay window.
///
/// Prefers the focused editor as anchor. Without one, the host's focused
/// window is used instead, skipping menus and short windows. Returns `None`
/// when nothing usable is focused; callers keep their previous frames.
pub fn generate_widget_location(source: &dyn Introspect, cfg: &Config) -> Option<WidgetLocation> {
    if let Some(loc) = editor_location(source, cfg) {
        return Some(loc);
    }
    window_location(source, cfg)
}

/// Anchor on the focused editor's container.
fn editor_location(source: &dyn Introspect, cfg: &Config) -> Option<WidgetLocation> {
    let editor = source.focused_editor()?;
    let monitors = source.monitors()?;

    let selection = source.selection_frame(&editor);
    let mode = cfg.placement.position_mode;
    debug!(
        primary = ?select_primary(mode, selection.is_some()),
        "placing against focused editor"
    );
    let mut loc =
        PrimaryStrategy::from(mode).place(editor.frame, &monitors, selection, &cfg.placement);

    let suggestion = select_suggestion(cfg.placement.suggestion_mode);
    loc.suggestion_panel = suggestion.place(
        editor.frame,
        &monitors,
        source.selection_first_line_frame(&editor),
        source.completion_popup_frame(),
    );
    Some(loc)
}

/// Anchor on the host's focused window when no editor is focused.
fn window_location(source: &dyn Introspect, cfg: &Config) -> Option<WidgetLocation> {
    let host = &cfg.host;
    let window = source.focused_app_window()?;
    if host.is_menu(&window.description) {
        debug!(description = %window.description, "focused element is a menu");
        return None;
    }
    if window.frame.h <= host.min_window_height {
        debug!(h = window.frame.h, "focused window too short to anchor");
        return None;
    }
    let monitors = source.monitors()?;

    let (mut frame, is_workspace) = if host.is_transient(&window.identifier, &window.label) {
        match source.workspace_window_frame(&host.workspace_window_id) {
            Some(rect) => {
                debug!(id = %window.identifier, "transient window; using workspace window");
                (rect, true)
            }
            None => {
                debug!("transient window without workspace window");
                return Some(WidgetLocation::zero());
            }
        }
    } else {
        (window.frame, host.is_workspace(&window.identifier))
    };

    let inset = if is_workspace {
        frame.h -= host.workspace_bottom_inset;
        Size::ZERO
    } else {
        expand_for_widget(&mut frame)
    };

    let strategy = FixedToBottom {
        hide_widget: cfg.placement.hide_widget,
        preferred_inside_min_width: NEVER_INSIDE_WIDTH,
        inset,
    };
    Some(strategy.frames(frame, &monitors))
}

/// Widen a window so the widget clears its edge buttons; returns the inset to undo.
fn expand_for_widget(frame: &mut Rect) -> Size {
    let extra = WIDGET_PADDING * 2.0 + WIDGET_WIDTH;
    frame.x -= WIDGET_PADDING + WIDGET_WIDTH / 2.0;
    frame.w += extra;
    Size::new(extra / 2.0, WIDGET_PADDING)
}
