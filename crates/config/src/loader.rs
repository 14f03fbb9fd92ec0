//! Parse and load user configuration.

use std::{fs, path::Path};

use ron::{Options, extensions::Extensions};
use tracing::debug;

use crate::{Config, Error, resolve_config_path};

/// Parse a `Config` from RON text, attributing errors to `path` when given.
pub fn load_from_str(text: &str, path: Option<&Path>) -> Result<Config, Error> {
    let options = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
    let cfg: Config = options.from_str(text).map_err(|e| Error::Parse {
        path: path.map(Path::to_path_buf),
        message: e.to_string(),
    })?;
    validate(&cfg, path)?;
    Ok(cfg)
}

/// Load a fully resolved `Config` from a RON file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    load_from_str(&text, Some(path))
}

/// Load the effective configuration, falling back to defaults when no file exists.
pub fn load(explicit: Option<&Path>) -> Result<Config, Error> {
    match resolve_config_path(explicit) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_from_path(&path)
        }
        None => {
            debug!("no config file; using defaults");
            Ok(Config::default())
        }
    }
}

/// Reject values that would make placement or scheduling meaningless.
fn validate(cfg: &Config, path: Option<&Path>) -> Result<(), Error> {
    let fail = |field: &'static str, message: &str| Error::Validation {
        path: path.map(Path::to_path_buf),
        field,
        message: message.to_string(),
    };
    if !(cfg.placement.prefer_inside_editor_min_width >= 0.0) {
        return Err(fail(
            "placement.prefer_inside_editor_min_width",
            "must be a non-negative number",
        ));
    }
    if !(cfg.host.min_window_height >= 0.0) {
        return Err(fail("host.min_window_height", "must be a non-negative number"));
    }
    if !(cfg.host.workspace_bottom_inset >= 0.0) {
        return Err(fail(
            "host.workspace_bottom_inset",
            "must be a non-negative number",
        ));
    }
    if cfg.timing.quiet_period_ms == 0 {
        return Err(fail("timing.quiet_period_ms", "must be greater than zero"));
    }
    Ok(())
}
