//! Recorded desktop state that stands in for live introspection.
//!
//! Scenarios are written in RON and drive both the integration tests and the
//! `sidecar-tester` binary:
//!
//! ```ron
//! (
//!     editor: (handle: 1, frame: (x: 100.0, y: 200.0, w: 600.0, h: 400.0)),
//!     selection: (x: 300.0, y: 300.0, w: 8.0, h: 16.0),
//!     monitors: (
//!         primary: (x: 0.0, y: 0.0, w: 1920.0, h: 1000.0),
//!         active: (x: 0.0, y: 0.0, w: 1920.0, h: 1080.0),
//!     ),
//! )
//! ```

use std::{collections::BTreeMap, fs, path::Path};

use ron::{Options, extensions::Extensions};
use serde::{Deserialize, Serialize};
use sidecar_geom::Rect;

use crate::{AppWindow, Error, FocusSnapshot, FocusedEditor, Introspect, Monitors, Result};

/// A static snapshot of everything [`Introspect`] can report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Focused editor, if any.
    #[serde(default)]
    pub editor: Option<FocusedEditor>,
    /// Full selection frame.
    #[serde(default)]
    pub selection: Option<Rect>,
    /// First line of the selection; defaults to `selection`.
    #[serde(default)]
    pub selection_first_line: Option<Rect>,
    /// Third-party completion popup.
    #[serde(default)]
    pub completion_popup: Option<Rect>,
    /// Host's focused window.
    #[serde(default)]
    pub app_window: Option<AppWindow>,
    /// Host windows by accessibility identifier.
    #[serde(default)]
    pub windows: BTreeMap<String, Rect>,
    /// Display layout.
    #[serde(default)]
    pub monitors: Option<Monitors>,
    /// Focus state.
    #[serde(default)]
    pub focus: FocusSnapshot,
}

impl Scenario {
    /// Parse a scenario from RON text.
    pub fn from_ron(text: &str, path: Option<&Path>) -> Result<Self> {
        Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(text)
            .map_err(|e| Error::Parse {
                path: path.map(Path::to_path_buf),
                message: e.to_string(),
            })
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&text, Some(path))
    }
}

impl Introspect for Scenario {
    fn focused_editor(&self) -> Option<FocusedEditor> {
        self.editor
    }

    fn selection_first_line_frame(&self, _editor: &FocusedEditor) -> Option<Rect> {
        self.selection_first_line.or(self.selection)
    }

    fn selection_frame(&self, _editor: &FocusedEditor) -> Option<Rect> {
        self.selection.or(self.selection_first_line)
    }

    fn completion_popup_frame(&self) -> Option<Rect> {
        self.completion_popup
    }

    fn focused_app_window(&self) -> Option<AppWindow> {
        self.app_window.clone()
    }

    fn workspace_window_frame(&self, identifier: &str) -> Option<Rect> {
        self.windows.get(identifier).copied()
    }

    fn monitors(&self) -> Option<Monitors> {
        self.monitors
    }

    fn focus_snapshot(&self) -> FocusSnapshot {
        self.focus.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FocusHolder;

    #[test]
    fn parses_minimal_scenario() {
        let text = r#"(
            editor: (handle: 1, frame: (x: 100.0, y: 200.0, w: 600.0, h: 400.0)),
            monitors: (
                primary: (x: 0.0, y: 0.0, w: 1920.0, h: 1000.0),
                active: (x: 0.0, y: 0.0, w: 1920.0, h: 1080.0),
            ),
            focus: (holder: Host, host_window: Standard),
        )"#;
        let s = Scenario::from_ron(text, None).unwrap();
        assert_eq!(s.editor.unwrap().frame, Rect::new(100.0, 200.0, 600.0, 400.0));
        assert_eq!(s.focus.holder, FocusHolder::Host);
        assert!(s.selection.is_none());
        assert!(s.windows.is_empty());
    }

    #[test]
    fn first_line_defaults_to_selection() {
        let editor = FocusedEditor {
            handle: 0,
            frame: Rect::ZERO,
        };
        let sel = Rect::new(1.0, 2.0, 3.0, 4.0);
        let s = Scenario {
            selection: Some(sel),
            ..Scenario::default()
        };
        assert_eq!(s.selection_first_line_frame(&editor), Some(sel));
        assert_eq!(s.selection_frame(&editor), Some(sel));
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let err = Scenario::from_ron("(bogus: 1)", None).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
