//! The overlay window set: static capabilities plus the state last applied.

use serde::{Deserialize, Serialize};
use sidecar_geom::{
    Rect,
    style::{PANEL_HEIGHT, PANEL_WIDTH},
};

/// Identifies one overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WindowId {
    /// Invisible window that joins every space to detect full-screen apps.
    FullscreenDetector,
    /// Small widget anchored to the editor.
    Widget,
    /// Default panel shared by transient content.
    SharedPanel,
    /// Inline suggestion panel.
    SuggestionPanel,
    /// Detachable chat panel.
    ChatPanel,
    /// Click-through toast.
    Toast,
}

impl WindowId {
    /// Every window, in creation order.
    pub const ALL: [Self; 6] = [
        Self::FullscreenDetector,
        Self::Widget,
        Self::SharedPanel,
        Self::SuggestionPanel,
        Self::ChatPanel,
        Self::Toast,
    ];

    /// Position in [`Self::ALL`].
    const fn index(self) -> usize {
        match self {
            Self::FullscreenDetector => 0,
            Self::Widget => 1,
            Self::SharedPanel => 2,
            Self::SuggestionPanel => 3,
            Self::ChatPanel => 4,
            Self::Toast => 5,
        }
    }
}

/// Window stacking level, in the window server's numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowLevel(pub i32);

impl WindowLevel {
    /// Ordinary document windows.
    pub const NORMAL: Self = Self(0);
    /// Utility panels that float above documents.
    pub const FLOATING: Self = Self(3);

    /// `n` steps above [`Self::FLOATING`].
    pub const fn above_floating(n: i32) -> Self {
        Self(Self::FLOATING.0 + n)
    }
}

/// Static capabilities of one window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Which window.
    pub id: WindowId,
    /// The window may become key and main.
    pub can_become_key: bool,
    /// Clicks pass through the window.
    pub ignores_mouse: bool,
    /// Initial stacking level.
    pub level: WindowLevel,
    /// The window appears on every space.
    pub joins_all_spaces: bool,
    /// The window is ordered in at creation.
    pub initially_visible: bool,
    /// The window draws a shadow.
    pub has_shadow: bool,
    /// Initial content size.
    pub initial_frame: Rect,
}

impl WindowSpec {
    /// Capabilities for `id`.
    pub fn for_window(id: WindowId) -> Self {
        let base = Self {
            id,
            can_become_key: false,
            ignores_mouse: false,
            level: WindowLevel::FLOATING,
            joins_all_spaces: false,
            initially_visible: true,
            has_shadow: true,
            initial_frame: Rect::ZERO,
        };
        let panel_frame = Rect::new(0.0, 0.0, PANEL_WIDTH, PANEL_HEIGHT);
        match id {
            WindowId::FullscreenDetector => Self {
                level: WindowLevel::NORMAL,
                joins_all_spaces: true,
                initially_visible: false,
                has_shadow: false,
                ..base
            },
            WindowId::Widget => base,
            WindowId::SharedPanel => Self {
                can_become_key: true,
                level: WindowLevel::above_floating(2),
                initial_frame: panel_frame,
                ..base
            },
            WindowId::SuggestionPanel => Self {
                level: WindowLevel::above_floating(2),
                initial_frame: panel_frame,
                ..base
            },
            WindowId::ChatPanel => Self {
                can_become_key: true,
                level: WindowLevel::above_floating(1),
                ..base
            },
            WindowId::Toast => Self {
                ignores_mouse: true,
                has_shadow: false,
                ..base
            },
        }
    }
}

/// State last applied to one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowState {
    /// Static capabilities.
    pub spec: WindowSpec,
    /// Current frame.
    pub frame: Rect,
    /// Current opacity.
    pub alpha: f64,
}

/// Chat panel visibility and level.
///
/// Opacity is 1 only while the panel is displayed and not hidden, and mouse
/// events pass through whenever it is transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatPanel {
    /// Hidden by the visibility policy.
    pub window_hidden: bool,
    /// The user has the panel open.
    pub panel_displayed: bool,
    /// Floating above normal windows.
    pub float_on_top: bool,
    /// The panel is the key window.
    pub is_key: bool,
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self {
            window_hidden: false,
            panel_displayed: false,
            float_on_top: true,
            is_key: false,
        }
    }
}

impl ChatPanel {
    /// Effective opacity.
    pub fn alpha(&self) -> f64 {
        if self.panel_displayed && !self.window_hidden {
            1.0
        } else {
            0.0
        }
    }

    /// Clicks pass through while transparent.
    pub fn ignores_mouse(&self) -> bool {
        self.alpha() <= 0.0
    }

    /// Current stacking level.
    pub fn level(&self) -> WindowLevel {
        if self.float_on_top {
            WindowLevel::above_floating(1)
        } else {
            WindowLevel::NORMAL
        }
    }
}

/// Every overlay window, owned by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSet {
    /// Per-window state indexed by [`WindowId::index`].
    windows: [WindowState; 6],
    /// Chat panel flags.
    pub chat: ChatPanel,
    /// The chat panel floats freely instead of following the anchor.
    pub detached: bool,
    /// The chat panel has something to show.
    pub has_content: bool,
}

impl WindowSet {
    /// Build all windows up front.
    pub fn new(detached: bool, has_content: bool) -> Self {
        let windows = WindowId::ALL.map(|id| {
            let spec = WindowSpec::for_window(id);
            WindowState {
                spec,
                frame: spec.initial_frame,
                alpha: if spec.initially_visible { 1.0 } else { 0.0 },
            }
        });
        let mut set = Self {
            windows,
            chat: ChatPanel::default(),
            detached,
            has_content,
        };
        set.sync_chat_alpha();
        set
    }

    /// State of `id`.
    pub fn get(&self, id: WindowId) -> &WindowState {
        &self.windows[id.index()]
    }

    /// Every window in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &WindowState> {
        self.windows.iter()
    }

    /// Record a new frame.
    pub fn set_frame(&mut self, id: WindowId, frame: Rect) {
        self.windows[id.index()].frame = frame;
    }

    /// Record a new opacity.
    pub fn set_alpha(&mut self, id: WindowId, alpha: f64) {
        self.windows[id.index()].alpha = alpha;
    }

    /// Update the chat panel's hidden flag and return its new opacity.
    pub fn set_chat_hidden(&mut self, hidden: bool) -> f64 {
        self.chat.window_hidden = hidden;
        self.sync_chat_alpha()
    }

    /// Update the chat panel's displayed flag and return its new opacity.
    pub fn set_chat_displayed(&mut self, displayed: bool) -> f64 {
        self.chat.panel_displayed = displayed;
        self.sync_chat_alpha()
    }

    /// Mirror the chat panel's effective opacity into its window state.
    fn sync_chat_alpha(&mut self) -> f64 {
        let alpha = self.chat.alpha();
        self.set_alpha(WindowId::ChatPanel, alpha);
        alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_match_window_roles() {
        let detector = WindowSpec::for_window(WindowId::FullscreenDetector);
        assert!(detector.joins_all_spaces);
        assert!(!detector.initially_visible);
        assert!(!detector.can_become_key);

        assert!(WindowSpec::for_window(WindowId::Toast).ignores_mouse);
        assert!(WindowSpec::for_window(WindowId::SharedPanel).can_become_key);
        assert!(!WindowSpec::for_window(WindowId::SuggestionPanel).can_become_key);
        assert_eq!(
            WindowSpec::for_window(WindowId::ChatPanel).level,
            WindowLevel::above_floating(1)
        );
    }

    #[test]
    fn chat_panel_starts_transparent() {
        let set = WindowSet::new(true, true);
        assert_eq!(set.get(WindowId::ChatPanel).alpha, 0.0);
        assert!(set.chat.ignores_mouse());
        assert_eq!(set.get(WindowId::Widget).alpha, 1.0);
        assert_eq!(set.get(WindowId::FullscreenDetector).alpha, 0.0);
    }

    #[test]
    fn chat_alpha_requires_displayed_and_not_hidden() {
        let mut set = WindowSet::new(false, true);
        assert_eq!(set.set_chat_displayed(true), 1.0);
        assert!(!set.chat.ignores_mouse());
        assert_eq!(set.set_chat_hidden(true), 0.0);
        assert!(set.chat.ignores_mouse());
        assert_eq!(set.set_chat_hidden(false), 1.0);
        assert_eq!(set.set_chat_displayed(false), 0.0);
    }

    #[test]
    fn float_flag_selects_level() {
        let mut chat = ChatPanel::default();
        assert_eq!(chat.level(), WindowLevel::above_floating(1));
        chat.float_on_top = false;
        assert_eq!(chat.level(), WindowLevel::NORMAL);
    }
}
