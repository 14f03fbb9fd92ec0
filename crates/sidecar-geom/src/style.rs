//! Fixed layout constants for overlay windows, in points.

/// Gap between an overlay control and the edge it is attached to.
pub const WIDGET_PADDING: f64 = 4.0;
/// Width of the small anchor control.
pub const WIDGET_WIDTH: f64 = 20.0;
/// Height of the small anchor control.
pub const WIDGET_HEIGHT: f64 = 20.0;

/// Width of the content panel.
pub const PANEL_WIDTH: f64 = 454.0;
/// Height of the content panel.
pub const PANEL_HEIGHT: f64 = 500.0;

/// Minimum width reserved for the suggestion panel.
pub const SUGGESTION_MIN_WIDTH: f64 = 540.0;
/// Maximum height reserved for the suggestion panel.
pub const SUGGESTION_MAX_HEIGHT: f64 = 400.0;
/// Distance the suggestion panel is pulled left of the caret's right edge.
pub const SUGGESTION_X_OFFSET: f64 = 40.0;

/// Margin kept between overlays and the active display's vertical edges.
pub const SCREEN_EDGE_MARGIN: f64 = 4.0;

/// Preferred-inside-editor width used when the widget follows the text cursor.
pub const CURSOR_PREFERRED_INSIDE_WIDTH: f64 = 999_999.0;
/// Preferred-inside-editor width used by the fixed-to-bottom strategy.
pub const DEFAULT_PREFERRED_INSIDE_WIDTH: f64 = 999_999_999.0;
/// Preferred-inside-editor width that can never be reached by a real window.
pub const NEVER_INSIDE_WIDTH: f64 = 9_999_999_999.0;
