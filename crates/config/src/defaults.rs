// Defaults and constants for sidecar configuration

// Placement defaults
pub(crate) const HIDE_WIDGET: bool = true;
pub(crate) const PREFER_INSIDE_EDITOR_MIN_WIDTH: f64 = 999_999_999.0;

// Panel defaults
pub(crate) const PANEL_DETACHED: bool = true;
pub(crate) const FLOAT_ON_TOP_WHEN_DETACHED: bool = false;
pub(crate) const FLOAT_ON_TOP_WHEN_OVERLAPS_HOST: bool = true;
pub(crate) const PANEL_HAS_CONTENT: bool = true;

// Host defaults
pub(crate) const HOST_BUNDLE_ID: &str = "com.apple.dt.Xcode";
pub(crate) const WORKSPACE_WINDOW_ID: &str = "Xcode.WorkspaceWindow";
pub(crate) const TRANSIENT_WINDOW_IDS: &[&str] = &["open_quickly"];
pub(crate) const TRANSIENT_WINDOW_LABELS: &[&str] = &["alert"];
pub(crate) const MENU_DESCRIPTIONS: &[&str] = &["menu bar", "menu bar item"];
pub(crate) const MIN_WINDOW_HEIGHT: f64 = 300.0;
pub(crate) const WORKSPACE_BOTTOM_INSET: f64 = 40.0;

// Timing defaults
pub(crate) const OPACITY_DEBOUNCE_MS: u64 = 200;
pub(crate) const LOCATION_THROTTLE_MS: u64 = 50;
pub(crate) const QUIET_PERIOD_MS: u64 = 3000;

// Serde default functions
pub(crate) const fn default_hide_widget() -> bool {
    HIDE_WIDGET
}
pub(crate) const fn default_prefer_inside_editor_min_width() -> f64 {
    PREFER_INSIDE_EDITOR_MIN_WIDTH
}
pub(crate) const fn default_panel_detached() -> bool {
    PANEL_DETACHED
}
pub(crate) const fn default_float_on_top_when_detached() -> bool {
    FLOAT_ON_TOP_WHEN_DETACHED
}
pub(crate) const fn default_float_on_top_when_overlaps_host() -> bool {
    FLOAT_ON_TOP_WHEN_OVERLAPS_HOST
}
pub(crate) const fn default_panel_has_content() -> bool {
    PANEL_HAS_CONTENT
}
pub(crate) fn default_host_bundle_id() -> String {
    HOST_BUNDLE_ID.to_string()
}
pub(crate) fn default_workspace_window_id() -> String {
    WORKSPACE_WINDOW_ID.to_string()
}
pub(crate) fn default_transient_window_ids() -> Vec<String> {
    to_strings(TRANSIENT_WINDOW_IDS)
}
pub(crate) fn default_transient_window_labels() -> Vec<String> {
    to_strings(TRANSIENT_WINDOW_LABELS)
}
pub(crate) fn default_menu_descriptions() -> Vec<String> {
    to_strings(MENU_DESCRIPTIONS)
}
pub(crate) const fn default_min_window_height() -> f64 {
    MIN_WINDOW_HEIGHT
}
pub(crate) const fn default_workspace_bottom_inset() -> f64 {
    WORKSPACE_BOTTOM_INSET
}
pub(crate) const fn default_opacity_debounce_ms() -> u64 {
    OPACITY_DEBOUNCE_MS
}
pub(crate) const fn default_location_throttle_ms() -> u64 {
    LOCATION_THROTTLE_MS
}
pub(crate) const fn default_quiet_period_ms() -> u64 {
    QUIET_PERIOD_MS
}

/// Own a static list of string slices.
fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
