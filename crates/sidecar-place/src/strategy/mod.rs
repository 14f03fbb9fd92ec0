//! Placement strategies and the pure selector that picks between them.
//!
//! Every strategy funnels into [`horizontal::frames_for_windows`]; they only
//! differ in the row they propose and whether panel alignment is forced.

use config::{Placement, PositionMode, SuggestionMode};
use sidecar_geom::Rect;

use crate::{Monitors, PanelLocation, WidgetLocation};

mod fixed;
pub mod horizontal;
mod suggestion;

#[cfg(test)]
mod deterministic_tests;

pub use fixed::{AlignToTextCursor, FixedToBottom};
pub use suggestion::NearbyTextCursor;

/// Strategy used for the widget and the default panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryStrategy {
    /// See [`FixedToBottom`].
    FixedToBottom,
    /// See [`AlignToTextCursor`].
    AlignToTextCursor,
}

impl From<PositionMode> for PrimaryStrategy {
    fn from(mode: PositionMode) -> Self {
        match mode {
            PositionMode::FixedToBottom => Self::FixedToBottom,
            PositionMode::AlignToTextCursor => Self::AlignToTextCursor,
        }
    }
}

impl PrimaryStrategy {
    /// Run the strategy for `anchor`.
    ///
    /// The configured preferred inside width applies to
    /// [`Self::FixedToBottom`] only. Cursor alignment keeps its own width,
    /// and without a selection it degrades to a default [`FixedToBottom`].
    pub fn place(
        self,
        anchor: Rect,
        monitors: &Monitors,
        selection: Option<Rect>,
        placement: &Placement,
    ) -> WidgetLocation {
        match self {
            Self::FixedToBottom => FixedToBottom {
                hide_widget: placement.hide_widget,
                preferred_inside_min_width: placement.prefer_inside_editor_min_width,
                ..FixedToBottom::default()
            }
            .frames(anchor, monitors),
            Self::AlignToTextCursor => AlignToTextCursor {
                hide_widget: placement.hide_widget,
                ..AlignToTextCursor::default()
            }
            .frames(anchor, monitors, selection),
        }
    }
}

/// Strategy used for the suggestion panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionStrategy {
    /// See [`NearbyTextCursor`].
    NearbyTextCursor,
    /// Never produce a suggestion panel location.
    Disabled,
}

impl From<SuggestionMode> for SuggestionStrategy {
    fn from(mode: SuggestionMode) -> Self {
        match mode {
            SuggestionMode::NearbyTextCursor => Self::NearbyTextCursor,
            SuggestionMode::Disabled => Self::Disabled,
        }
    }
}

impl SuggestionStrategy {
    /// Run the strategy for `anchor`.
    pub fn place(
        self,
        anchor: Rect,
        monitors: &Monitors,
        selection: Option<Rect>,
        popup: Option<Rect>,
    ) -> Option<PanelLocation> {
        match self {
            Self::NearbyTextCursor => NearbyTextCursor.frame(anchor, monitors, selection, popup),
            Self::Disabled => None,
        }
    }
}

/// The primary strategy that will actually run for `mode`.
///
/// Cursor alignment needs a readable selection; without one the result
/// degrades to [`PrimaryStrategy::FixedToBottom`].
pub fn select_primary(mode: PositionMode, selection_available: bool) -> PrimaryStrategy {
    match PrimaryStrategy::from(mode) {
        PrimaryStrategy::AlignToTextCursor if !selection_available => {
            PrimaryStrategy::FixedToBottom
        }
        s => s,
    }
}

/// The suggestion strategy configured by `mode`.
pub fn select_suggestion(mode: SuggestionMode) -> SuggestionStrategy {
    SuggestionStrategy::from(mode)
}
