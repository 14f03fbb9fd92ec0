//! Core configuration data types used in the config crate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Strategy used to place the widget and the default panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PositionMode {
    /// Pin the widget just below the editor's bottom edge.
    #[default]
    FixedToBottom,
    /// Follow the text cursor, falling back to `FixedToBottom` when no selection is readable.
    AlignToTextCursor,
}

/// Strategy used to place the suggestion panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SuggestionMode {
    /// Place the suggestion panel next to the text cursor.
    #[default]
    NearbyTextCursor,
    /// Never compute a suggestion panel location.
    Disabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
/// Top-level sidecar configuration.
pub struct Config {
    /// Placement strategy selection.
    #[serde(default)]
    pub placement: Placement,

    /// Detachable panel behaviour.
    #[serde(default)]
    pub panel: Panel,

    /// Identifiers describing the host application.
    #[serde(default)]
    pub host: HostProfile,

    /// Scheduler timings.
    #[serde(default)]
    pub timing: Timing,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
/// Placement configuration section.
pub struct Placement {
    /// Primary placement strategy.
    #[serde(default)]
    pub position_mode: PositionMode,

    /// Suggestion placement strategy.
    #[serde(default)]
    pub suggestion_mode: SuggestionMode,

    /// Collapse the widget to a zero-sized anchor when computing panel positions.
    #[serde(default = "defaults::default_hide_widget")]
    pub hide_widget: bool,

    /// Editors at least this wide host the panel inside their own bounds.
    ///
    /// Read by the fixed-to-bottom mode only; cursor alignment and its
    /// no-selection fallback keep their built-in thresholds.
    #[serde(default = "defaults::default_prefer_inside_editor_min_width")]
    pub prefer_inside_editor_min_width: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position_mode: PositionMode::default(),
            suggestion_mode: SuggestionMode::default(),
            hide_widget: defaults::HIDE_WIDGET,
            prefer_inside_editor_min_width: defaults::PREFER_INSIDE_EDITOR_MIN_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
/// Detachable chat panel configuration section.
pub struct Panel {
    /// Start with the chat panel detached into a free-floating window.
    #[serde(default = "defaults::default_panel_detached")]
    pub detached: bool,

    /// Keep the detached panel floating on top regardless of focus.
    #[serde(default = "defaults::default_float_on_top_when_detached")]
    pub float_on_top_when_detached: bool,

    /// Float the detached panel while the host or sidecar itself holds focus.
    #[serde(default = "defaults::default_float_on_top_when_overlaps_host")]
    pub float_on_top_when_overlaps_host: bool,

    /// Whether the panel has content to show.
    #[serde(default = "defaults::default_panel_has_content")]
    pub has_content: bool,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            detached: defaults::PANEL_DETACHED,
            float_on_top_when_detached: defaults::FLOAT_ON_TOP_WHEN_DETACHED,
            float_on_top_when_overlaps_host: defaults::FLOAT_ON_TOP_WHEN_OVERLAPS_HOST,
            has_content: defaults::PANEL_HAS_CONTENT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
/// Identifiers and thresholds describing the host editor application.
pub struct HostProfile {
    /// Bundle identifier of the host editor.
    ///
    /// Not read by placement; introspection backends use it to classify the
    /// frontmost application when building a focus snapshot.
    #[serde(default = "defaults::default_host_bundle_id")]
    pub bundle_id: String,

    /// Identifier of the host's main workspace window.
    #[serde(default = "defaults::default_workspace_window_id")]
    pub workspace_window_id: String,

    /// Window identifiers treated as transient (the workspace window is used instead).
    #[serde(default = "defaults::default_transient_window_ids")]
    pub transient_window_ids: Vec<String>,

    /// Window labels treated as transient (the workspace window is used instead).
    #[serde(default = "defaults::default_transient_window_labels")]
    pub transient_window_labels: Vec<String>,

    /// Element descriptions that identify menu elements, never used as anchors.
    #[serde(default = "defaults::default_menu_descriptions")]
    pub menu_descriptions: Vec<String>,

    /// Windows must be strictly taller than this to anchor overlays.
    #[serde(default = "defaults::default_min_window_height")]
    pub min_window_height: f64,

    /// Height trimmed from the bottom of the workspace window so its buttons stay clear.
    #[serde(default = "defaults::default_workspace_bottom_inset")]
    pub workspace_bottom_inset: f64,
}

impl Default for HostProfile {
    fn default() -> Self {
        Self {
            bundle_id: defaults::default_host_bundle_id(),
            workspace_window_id: defaults::default_workspace_window_id(),
            transient_window_ids: defaults::default_transient_window_ids(),
            transient_window_labels: defaults::default_transient_window_labels(),
            menu_descriptions: defaults::default_menu_descriptions(),
            min_window_height: defaults::MIN_WINDOW_HEIGHT,
            workspace_bottom_inset: defaults::WORKSPACE_BOTTOM_INSET,
        }
    }
}

impl HostProfile {
    /// True for alert and quick-open style windows that should not anchor overlays.
    pub fn is_transient(&self, identifier: &str, label: &str) -> bool {
        self.transient_window_ids.iter().any(|id| id == identifier)
            || self.transient_window_labels.iter().any(|l| l == label)
    }

    /// True when `description` names a menu element.
    pub fn is_menu(&self, description: &str) -> bool {
        self.menu_descriptions.iter().any(|d| d == description)
    }

    /// True when `identifier` is the host's workspace window.
    pub fn is_workspace(&self, identifier: &str) -> bool {
        self.workspace_window_id == identifier
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
/// Scheduler timing configuration section.
pub struct Timing {
    /// Debounce applied to opacity updates during bursts.
    #[serde(default = "defaults::default_opacity_debounce_ms")]
    pub opacity_debounce_ms: u64,

    /// Minimum spacing between location updates during bursts.
    #[serde(default = "defaults::default_location_throttle_ms")]
    pub location_throttle_ms: u64,

    /// After this long without a commit, requests run immediately.
    #[serde(default = "defaults::default_quiet_period_ms")]
    pub quiet_period_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            opacity_debounce_ms: defaults::OPACITY_DEBOUNCE_MS,
            location_throttle_ms: defaults::LOCATION_THROTTLE_MS,
            quiet_period_ms: defaults::QUIET_PERIOD_MS,
        }
    }
}

impl Timing {
    /// Opacity debounce as a `Duration`.
    pub fn opacity_debounce(&self) -> Duration {
        Duration::from_millis(self.opacity_debounce_ms)
    }

    /// Location throttle interval as a `Duration`.
    pub fn location_throttle(&self) -> Duration {
        Duration::from_millis(self.location_throttle_ms)
    }

    /// Quiet period as a `Duration`.
    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }
}
