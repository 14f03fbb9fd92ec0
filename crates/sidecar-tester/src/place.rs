//! Implementation for the `place` diagnostic subcommand.

use sidecar_place::{Scenario, generate_widget_location};
use tracing::{debug, info};

use crate::{
    cli::PlaceArgs,
    error::{Error, Result},
};

/// Compute the placement for a scenario and print it as JSON.
pub fn run(args: &PlaceArgs) -> Result<()> {
    let config = config::load(args.config.as_deref())?;
    let scenario = Scenario::load(&args.scenario)?;
    debug!(path = %args.scenario.display(), "scenario loaded");

    let loc = generate_widget_location(&scenario, &config).ok_or(Error::NoAnchor)?;
    info!(
        widget = ?loc.widget_frame,
        suggestion = loc.suggestion_panel.is_some(),
        "placement computed"
    );
    println!("{}", serde_json::to_string_pretty(&loc)?);
    Ok(())
}
