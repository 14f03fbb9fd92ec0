//! Shared configuration types (placement, panel, host profile, timing) used by sidecar.
#![warn(unsafe_op_in_unsafe_fn)]

use std::{
    env,
    path::{Path, PathBuf},
};

mod defaults;
mod error;
mod loader;
mod types;

#[cfg(test)]
mod test_parse;

pub use error::Error;
pub use loader::{load, load_from_path, load_from_str};
pub use types::{Config, HostProfile, Panel, Placement, PositionMode, SuggestionMode, Timing};

/// Determine the preferred user config path (`~/.sidecar/config.ron`).
pub fn default_config_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".sidecar");
    p.push("config.ron");
    p
}

/// Resolve the effective config path using the default policy.
///
/// Policy:
/// 1) Use `explicit` when provided.
/// 2) Else use `~/.sidecar/config.ron` when it exists.
/// 3) Else `None`; callers fall back to [`Config::default`].
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let preferred = default_config_path();
    preferred.exists().then_some(preferred)
}
