use std::{fs, path::Path, time::Duration};

use crate::*;

#[test]
fn empty_config_uses_defaults() {
    let cfg = load_from_str("()", None).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.placement.position_mode, PositionMode::FixedToBottom);
    assert_eq!(cfg.placement.suggestion_mode, SuggestionMode::NearbyTextCursor);
    assert!(cfg.placement.hide_widget);
    assert!(cfg.panel.detached);
    assert!(!cfg.panel.float_on_top_when_detached);
    assert!(cfg.panel.float_on_top_when_overlaps_host);
    assert_eq!(cfg.timing.opacity_debounce(), Duration::from_millis(200));
    assert_eq!(cfg.timing.location_throttle(), Duration::from_millis(50));
    assert_eq!(cfg.timing.quiet_period(), Duration::from_secs(3));
}

#[test]
fn partial_sections_keep_field_defaults() {
    let ron = r#"(
        placement: (position_mode: AlignToTextCursor),
        timing: (location_throttle_ms: 20),
    )"#;
    let cfg = load_from_str(ron, None).unwrap();
    assert_eq!(cfg.placement.position_mode, PositionMode::AlignToTextCursor);
    assert!(cfg.placement.hide_widget);
    assert_eq!(cfg.timing.location_throttle_ms, 20);
    assert_eq!(cfg.timing.opacity_debounce_ms, 200);
    assert_eq!(cfg.host, HostProfile::default());
}

#[test]
fn host_profile_matches_default_identifiers() {
    let host = HostProfile::default();
    assert!(host.is_transient("open_quickly", "editor"));
    assert!(host.is_transient("some.window", "alert"));
    assert!(!host.is_transient("some.window", "editor"));
    assert!(host.is_menu("menu bar"));
    assert!(host.is_menu("menu bar item"));
    assert!(!host.is_menu("menu"));
    assert!(host.is_workspace("Xcode.WorkspaceWindow"));
    assert_eq!(host.min_window_height, 300.0);
    assert_eq!(host.workspace_bottom_inset, 40.0);
}

#[test]
fn host_profile_can_be_overridden() {
    let ron = r#"(
        host: (
            bundle_id: "org.example.Editor",
            workspace_window_id: "main",
            transient_window_ids: ["palette"],
        ),
    )"#;
    let cfg = load_from_str(ron, None).unwrap();
    assert!(cfg.host.is_workspace("main"));
    assert!(cfg.host.is_transient("palette", ""));
    assert!(!cfg.host.is_transient("open_quickly", ""));
    assert!(cfg.host.is_transient("x", "alert"));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = load_from_str("(placement: (bogus: true))", None).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.pretty().starts_with("Config parse error"));
}

#[test]
fn validation_rejects_zero_quiet_period() {
    let err = load_from_str("(timing: (quiet_period_ms: 0))", None).unwrap_err();
    match &err {
        Error::Validation { field, .. } => assert_eq!(*field, "timing.quiet_period_ms"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validation_rejects_negative_sizes() {
    let err = load_from_str("(host: (min_window_height: -1.0))", None).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation {
            field: "host.min_window_height",
            ..
        }
    ));

    let err = load_from_str(
        "(placement: (prefer_inside_editor_min_width: -5.0))",
        Some(Path::new("/tmp/x.ron")),
    )
    .unwrap_err();
    assert_eq!(err.path(), Some(Path::new("/tmp/x.ron")));
    assert!(err.pretty().contains("/tmp/x.ron"));
}

#[test]
fn load_from_path_reads_file() {
    let dir = std::env::temp_dir().join(format!("sidecar-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.ron");
    fs::write(&path, "(panel: (detached: false))").unwrap();

    let cfg = load(Some(&path)).unwrap();
    assert!(!cfg.panel.detached);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_file_is_a_read_error() {
    let path = Path::new("/nonexistent/sidecar/config.ron");
    let err = load_from_path(path).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert_eq!(err.path(), Some(path));
}

#[test]
fn explicit_path_wins_resolution() {
    let p = Path::new("/some/where.ron");
    assert_eq!(resolve_config_path(Some(p)).as_deref(), Some(p));
}
