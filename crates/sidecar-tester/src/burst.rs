//! Implementation for the `burst` diagnostic subcommand.

use std::sync::Arc;

use serde::Serialize;
use sidecar_controller::{OverlayController, RecordingRenderer, Renderer, WindowId};
use sidecar_geom::Rect;
use sidecar_place::{Introspect, Scenario};
use tokio::{runtime::Builder, time};
use tracing::{debug, info};

use crate::{cli::BurstArgs, error::Result};

/// Outcome of one burst run.
#[derive(Debug, Serialize)]
struct BurstReport {
    /// Requests sent.
    requests: u32,
    /// Evaluations that reached the apply step.
    commits: u64,
    /// Every frame handed to the renderer, in order.
    frames: Vec<AppliedFrame>,
}

/// One frame change seen by the renderer.
#[derive(Debug, Serialize)]
struct AppliedFrame {
    /// Target window.
    window: WindowId,
    /// New frame.
    frame: Rect,
}

/// Drive a burst of location requests through the controller and print a report.
pub fn run(args: &BurstArgs) -> Result<()> {
    let config = config::load(args.config.as_deref())?;
    let scenario: Arc<dyn Introspect> = Arc::new(Scenario::load(&args.scenario)?);
    let recorder = RecordingRenderer::new();
    let renderer: Arc<dyn Renderer> = Arc::new(recorder.clone());

    let runtime = Builder::new_current_thread().enable_time().build()?;
    let commits = runtime.block_on(async {
        let controller = OverlayController::new(config, scenario, renderer)?;
        recorder.take();
        for i in 0..args.count {
            let seq = controller.update_window_location(false, args.immediate);
            debug!(i, seq, "location requested");
            time::sleep(args.spacing).await;
        }
        time::sleep(args.settle).await;
        Ok::<_, sidecar_controller::Error>(controller.location_lane().commits())
    })?;

    let frames: Vec<AppliedFrame> = recorder
        .frames()
        .into_iter()
        .map(|(window, frame)| AppliedFrame { window, frame })
        .collect();
    info!(requests = args.count, commits, frames = frames.len(), "burst complete");
    let report = BurstReport {
        requests: args.count,
        commits,
        frames,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
