//! The overlay controller: owns the window set and drives both update lanes.

use std::sync::Arc;

use config::Config;
use parking_lot::Mutex;
use sidecar_geom::Rect;
use sidecar_place::{FocusHolder, Introspect, generate_widget_location};
use tracing::{debug, trace, warn};

use crate::{
    Renderer, Result, WindowId, WindowLevel, WindowSet,
    scheduler::{Lane, LanePolicy},
    visibility::{self, PanelState},
};

/// Windows that follow the anchor and are ordered front unconditionally.
const ANCHORED: [WindowId; 4] = [
    WindowId::Widget,
    WindowId::Toast,
    WindowId::SharedPanel,
    WindowId::SuggestionPanel,
];

/// State shared with scheduled evaluations.
struct Inner {
    /// Effective configuration.
    config: Config,
    /// Source of geometry and focus state.
    introspect: Arc<dyn Introspect>,
    /// Sink for window changes.
    renderer: Arc<dyn Renderer>,
    /// Every overlay window.
    windows: Mutex<WindowSet>,
}

/// Coordinates placement and visibility of the overlay windows.
///
/// Opacity and location requests go through independent lanes: opacity is
/// debounced, location is throttled, and both collapse bursts into a single
/// evaluation. Other operations apply synchronously.
pub struct OverlayController {
    /// Shared state.
    inner: Arc<Inner>,
    /// Debounced opacity lane.
    opacity: Lane,
    /// Throttled location lane.
    location: Lane,
}

impl OverlayController {
    /// Create every window through `renderer` and return an idle controller.
    pub fn new(
        config: Config,
        introspect: Arc<dyn Introspect>,
        renderer: Arc<dyn Renderer>,
    ) -> Result<Self> {
        let windows = WindowSet::new(config.panel.detached, config.panel.has_content);
        for w in windows.iter() {
            renderer.create_window(&w.spec)?;
        }
        let timing = config.timing;
        let opacity = Lane::new(
            "opacity",
            LanePolicy::Debounce(timing.opacity_debounce()),
            timing.quiet_period(),
        );
        let location = Lane::new(
            "location",
            LanePolicy::Throttle(timing.location_throttle()),
            timing.quiet_period(),
        );
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                introspect,
                renderer,
                windows: Mutex::new(windows),
            }),
            opacity,
            location,
        })
    }

    /// Re-evaluate overlay opacity from the current focus state.
    ///
    /// Returns the request's sequence number within the opacity lane.
    pub fn update_window_opacity(&self, immediate: bool) -> u64 {
        let inner = self.inner.clone();
        self.opacity
            .request(immediate, move || inner.evaluate_opacity())
    }

    /// Recompute and apply overlay frames.
    ///
    /// Returns the request's sequence number within the location lane.
    pub fn update_window_location(&self, animated: bool, immediate: bool) -> u64 {
        let inner = self.inner.clone();
        self.location
            .request(immediate, move || inner.evaluate_location(animated))
    }

    /// Make the shared and suggestion panels transparent.
    pub fn hide_panel_windows(&self) -> Result<()> {
        let mut windows = self.inner.windows.lock();
        for id in [WindowId::SharedPanel, WindowId::SuggestionPanel] {
            windows.set_alpha(id, 0.0);
            self.inner.renderer.apply_opacity(id, 0.0)?;
        }
        Ok(())
    }

    /// Make the suggestion panel transparent.
    pub fn hide_suggestion_panel_window(&self) -> Result<()> {
        let mut windows = self.inner.windows.lock();
        windows.set_alpha(WindowId::SuggestionPanel, 0.0);
        self.inner
            .renderer
            .apply_opacity(WindowId::SuggestionPanel, 0.0)
    }

    /// Detach the chat panel from the anchor, or re-attach it.
    pub fn set_panel_detached(&self, detached: bool) -> Result<()> {
        let holder = self.inner.introspect.focus_snapshot().holder;
        let mut windows = self.inner.windows.lock();
        windows.detached = detached;
        debug!(detached, "chat panel detachment changed");
        self.inner.adjust_chat_level(&mut windows, holder)
    }

    /// Open or close the chat panel.
    pub fn set_panel_displayed(&self, displayed: bool) -> Result<()> {
        let mut windows = self.inner.windows.lock();
        windows.set_chat_displayed(displayed);
        self.inner.push_chat_alpha(&windows)
    }

    /// Record whether the chat panel has content to show.
    pub fn set_panel_has_content(&self, has_content: bool) {
        self.inner.windows.lock().has_content = has_content;
    }

    /// Record whether the chat panel is the key window.
    pub fn set_chat_panel_key(&self, is_key: bool) {
        self.inner.windows.lock().chat.is_key = is_key;
    }

    /// Order every overlay to the front; the chat panel only while it floats.
    pub fn order_front(&self) -> Result<()> {
        let windows = self.inner.windows.lock();
        for id in ANCHORED {
            self.inner.renderer.order_front(id)?;
        }
        if windows.chat.level() > WindowLevel::NORMAL {
            self.inner.renderer.order_front(WindowId::ChatPanel)?;
        }
        Ok(())
    }

    /// Recompute the chat panel's stacking level from the current focus holder.
    pub fn adjust_chat_panel_window_level(&self) -> Result<()> {
        let holder = self.inner.introspect.focus_snapshot().holder;
        let mut windows = self.inner.windows.lock();
        self.inner.adjust_chat_level(&mut windows, holder)
    }

    /// Snapshot of the window set.
    pub fn windows(&self) -> WindowSet {
        self.inner.windows.lock().clone()
    }

    /// Cancel pending work in both lanes.
    pub fn cancel_pending(&self) {
        self.opacity.cancel();
        self.location.cancel();
    }

    /// The opacity lane.
    pub fn opacity_lane(&self) -> &Lane {
        &self.opacity
    }

    /// The location lane.
    pub fn location_lane(&self) -> &Lane {
        &self.location
    }
}

impl Drop for OverlayController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl Inner {
    /// Apply the visibility policy to every overlay.
    fn evaluate_opacity(&self) {
        let snapshot = self.introspect.focus_snapshot();
        let mut windows = self.windows.lock();
        let panel = PanelState {
            detached: windows.detached,
            has_content: windows.has_content,
            is_key: windows.chat.is_key,
        };
        let decision = visibility::decide(&snapshot, &panel);
        debug!(holder = ?snapshot.holder, ?decision, "opacity evaluated");

        for (id, value) in decision.opacities() {
            windows.set_alpha(id, value);
            warn_on_err(self.renderer.apply_opacity(id, value));
        }
        if let Some(hidden) = decision.chat_hidden {
            windows.set_chat_hidden(hidden);
            warn_on_err(self.push_chat_alpha(&windows));
        }
    }

    /// Compute a fresh placement and apply it.
    fn evaluate_location(&self, animated: bool) {
        let Some(loc) = generate_widget_location(self.introspect.as_ref(), &self.config) else {
            debug!("no anchor available; keeping frames");
            return;
        };
        let holder = self.introspect.focus_snapshot().holder;
        let mut windows = self.windows.lock();
        let panel = loc.default_panel.frame;

        self.place(&mut windows, WindowId::Widget, loc.widget_frame, animated);
        self.place(&mut windows, WindowId::Toast, panel, animated);
        self.place(&mut windows, WindowId::SharedPanel, panel, animated);
        if let Some(suggestion) = loc.suggestion_panel {
            self.place(&mut windows, WindowId::SuggestionPanel, suggestion.frame, animated);
        }
        if windows.detached {
            trace!("chat panel detached; frame untouched");
        } else {
            self.place(&mut windows, WindowId::ChatPanel, panel, animated);
        }
        warn_on_err(self.adjust_chat_level(&mut windows, holder));
    }

    /// Record and apply one frame.
    fn place(&self, windows: &mut WindowSet, id: WindowId, frame: Rect, animated: bool) {
        windows.set_frame(id, frame);
        warn_on_err(self.renderer.apply_frame(id, frame, animated));
    }

    /// Push the chat panel's opacity and click-through state.
    fn push_chat_alpha(&self, windows: &WindowSet) -> Result<()> {
        self.renderer
            .apply_opacity(WindowId::ChatPanel, windows.chat.alpha())?;
        self.renderer
            .apply_ignores_mouse(WindowId::ChatPanel, windows.chat.ignores_mouse())
    }

    /// Set the chat panel level, touching the renderer only when it changes.
    ///
    /// The new level is recorded only once the renderer accepts it, so a
    /// failed change is retried on the next adjustment.
    fn adjust_chat_level(&self, windows: &mut WindowSet, holder: FocusHolder) -> Result<()> {
        let float = visibility::chat_panel_floats(holder, windows.detached, &self.config.panel);
        if windows.chat.float_on_top == float {
            return Ok(());
        }
        self.renderer
            .apply_window_level(WindowId::ChatPanel, float)?;
        windows.chat.float_on_top = float;
        debug!(float, ?holder, "chat panel level changed");
        Ok(())
    }
}

/// Log renderer failures inside scheduled evaluations.
fn warn_on_err(result: Result<()>) {
    if let Err(e) = result {
        warn!("render failed: {}", e);
    }
}
