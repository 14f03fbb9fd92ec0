//! Per-class update lanes with debounce/throttle and cancellation.
//!
//! A [`Lane`] owns at most one pending task. Every new request cancels the
//! pending one before scheduling itself, so a burst of triggers collapses
//! into a single evaluation carrying the most recent request. The delay is
//! derived from the time of the last *commit* (the last evaluation that
//! actually ran), never from the time of the last trigger.
//!
//! Evaluations of one lane never interleave: each holds the lane's apply
//! gate for its whole run.

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use tokio::{
    sync::Mutex as AsyncMutex,
    task::JoinHandle,
    time::{self, Instant},
};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// How a lane spaces out bursts of requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePolicy {
    /// Wait a fixed delay after every request; newer requests restart the wait.
    Debounce(Duration),
    /// Keep commits at least this far apart.
    Throttle(Duration),
}

/// When a request should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Run at once; the task is not registered as pending.
    Now,
    /// Run after the delay unless a newer request cancels it.
    After(Duration),
}

impl LanePolicy {
    /// Decide when a request issued at `now` should run.
    ///
    /// Immediate requests, first requests and requests arriving at least
    /// `quiet` after the last commit run at once.
    pub fn schedule(
        self,
        last_commit: Option<Instant>,
        now: Instant,
        quiet: Duration,
        immediate: bool,
    ) -> Schedule {
        if immediate {
            return Schedule::Now;
        }
        let Some(last) = last_commit else {
            return Schedule::Now;
        };
        let since = now.saturating_duration_since(last);
        if since >= quiet {
            return Schedule::Now;
        }
        match self {
            Self::Debounce(delay) => Schedule::After(delay),
            Self::Throttle(interval) => Schedule::After(interval.saturating_sub(since)),
        }
    }
}

/// A scheduled task that may still be cancelled.
struct Pending {
    /// Sequence number of the request that spawned the task.
    seq: u64,
    /// Cancels the delay and suppresses the evaluation.
    token: CancellationToken,
    /// Task handle, kept so the task is owned by the lane.
    handle: JoinHandle<()>,
}

/// Mutable lane bookkeeping.
#[derive(Default)]
struct LaneState {
    /// When the last evaluation started.
    last_commit: Option<Instant>,
    /// The cancellable task, if any.
    pending: Option<Pending>,
    /// Last issued request number.
    seq: u64,
    /// Number of evaluations that ran.
    commits: u64,
}

/// One serialized update lane.
#[derive(Clone)]
pub struct Lane {
    /// Lane name used in logs.
    name: &'static str,
    /// Spacing policy.
    policy: LanePolicy,
    /// Requests this long after the last commit run at once.
    quiet: Duration,
    /// Shared bookkeeping.
    state: Arc<Mutex<LaneState>>,
    /// Held for the duration of every evaluation.
    gate: Arc<AsyncMutex<()>>,
}

impl Lane {
    /// Create an idle lane.
    pub fn new(name: &'static str, policy: LanePolicy, quiet: Duration) -> Self {
        Self {
            name,
            policy,
            quiet,
            state: Arc::new(Mutex::new(LaneState::default())),
            gate: Arc::new(AsyncMutex::new(())),
        }
    }

    /// Submit a request. `job` runs at most once, under the apply gate, unless
    /// a newer request cancels it first. Returns the request's sequence number.
    ///
    /// Must be called from within a tokio runtime.
    pub fn request<F>(&self, immediate: bool, job: F) -> u64
    where
        F: FnOnce() + Send + 'static,
    {
        let name = self.name;
        let mut st = self.state.lock();
        if let Some(prev) = st.pending.take() {
            prev.token.cancel();
            trace!(lane = name, seq = prev.seq, "lane_cancel_pending");
        }
        st.seq += 1;
        let seq = st.seq;

        let schedule = self
            .policy
            .schedule(st.last_commit, Instant::now(), self.quiet, immediate);
        trace!(lane = name, seq, ?schedule, "lane_request");

        let token = CancellationToken::new();
        let cancel = token.clone();
        let state = self.state.clone();
        let gate = self.gate.clone();
        let delay = match schedule {
            Schedule::Now => None,
            Schedule::After(d) => Some(d),
        };

        let fut = async move {
            if let Some(delay) = delay {
                tokio::select! {
                    _ = time::sleep(delay) => {}
                    _ = cancel.cancelled() => {
                        trace!(lane = name, seq, "lane_cancelled_delay");
                        return;
                    }
                }
            }
            let _guard = gate.lock().await;
            if cancel.is_cancelled() {
                trace!(lane = name, seq, "lane_cancelled_gate");
                return;
            }
            {
                let mut st = state.lock();
                st.last_commit = Some(Instant::now());
                st.commits += 1;
                if st.pending.as_ref().is_some_and(|p| p.seq == seq) {
                    st.pending = None;
                }
            }
            trace!(lane = name, seq, "lane_commit");
            job();
        };

        // The state lock is still held, so the task cannot observe the lane
        // before its own pending entry is in place.
        let handle = tokio::spawn(fut);
        if delay.is_some() {
            st.pending = Some(Pending { seq, token, handle });
        }
        seq
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&self) {
        if let Some(prev) = self.state.lock().pending.take() {
            prev.token.cancel();
            trace!(lane = self.name, seq = prev.seq, "lane_cancel");
        }
    }

    /// True while a delayed task is waiting to run.
    pub fn is_pending(&self) -> bool {
        self.state
            .lock()
            .pending
            .as_ref()
            .is_some_and(|p| !p.handle.is_finished())
    }

    /// Number of evaluations that have run.
    pub fn commits(&self) -> u64 {
        self.state.lock().commits
    }
}
