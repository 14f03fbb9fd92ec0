//! Opacity and window-level policy derived from focus state.

use config::Panel;
use sidecar_place::{FocusHolder, FocusSnapshot, HostWindowKind};

use crate::WindowId;

/// Chat panel state read by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    /// The chat panel floats freely instead of following the anchor.
    pub detached: bool,
    /// The chat panel has something to show.
    pub has_content: bool,
    /// The chat panel is the key window.
    pub is_key: bool,
}

/// Result of one opacity evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityDecision {
    /// Opacity of the shared panel.
    pub shared_panel: f64,
    /// Opacity of the suggestion panel.
    pub suggestion_panel: f64,
    /// Opacity of the widget.
    pub widget: f64,
    /// Opacity of the toast.
    pub toast: f64,
    /// New hidden flag for the chat panel; `None` leaves it untouched.
    pub chat_hidden: Option<bool>,
}

impl VisibilityDecision {
    /// Per-window opacities in application order.
    pub fn opacities(&self) -> [(WindowId, f64); 4] {
        [
            (WindowId::SharedPanel, self.shared_panel),
            (WindowId::SuggestionPanel, self.suggestion_panel),
            (WindowId::Widget, self.widget),
            (WindowId::Toast, self.toast),
        ]
    }
}

/// Map a visibility flag to an opacity.
fn alpha(visible: bool) -> f64 {
    if visible { 1.0 } else { 0.0 }
}

/// Decide overlay opacity for the current focus state.
pub fn decide(snapshot: &FocusSnapshot, panel: &PanelState) -> VisibilityDecision {
    match snapshot.holder {
        FocusHolder::Host => {
            // Minimized or windowless host.
            let no_focus = snapshot.host_window == HostWindowKind::None;
            let a = alpha(!no_focus);
            VisibilityDecision {
                shared_panel: a,
                suggestion_panel: a,
                widget: a,
                toast: a,
                chat_hidden: Some(if panel.detached {
                    !panel.has_content
                } else {
                    no_focus
                }),
            }
        }
        FocusHolder::OwnService => {
            let no_focus = snapshot.host_window != HostWindowKind::Standard;
            let a = alpha(!no_focus);
            VisibilityDecision {
                shared_panel: a,
                suggestion_panel: a,
                widget: alpha(!no_focus && snapshot.previous_was_host),
                toast: a,
                chat_hidden: Some(if panel.detached {
                    !panel.has_content
                } else {
                    no_focus && !panel.is_key
                }),
            }
        }
        FocusHolder::Other | FocusHolder::Nothing => VisibilityDecision {
            shared_panel: 0.0,
            suggestion_panel: 0.0,
            widget: 0.0,
            toast: 0.0,
            chat_hidden: (!panel.detached).then_some(true),
        },
    }
}

/// Whether the chat panel should float above normal windows.
pub fn chat_panel_floats(holder: FocusHolder, detached: bool, cfg: &Panel) -> bool {
    if cfg.float_on_top_when_detached || !detached {
        return true;
    }
    cfg.float_on_top_when_overlaps_host && holder.is_host_or_service()
}
