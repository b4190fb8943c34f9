//! Async tracking service.
//!
//! A background task owns the [`SessionTracker`]. Fixes are sent over an
//! `mpsc` channel and the latest [`TrackingSnapshot`] is published on a
//! `watch` channel, refreshed at least once per tick so elapsed time keeps
//! moving between fixes.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval};

use super::fix::{LocationFix, TrackingSnapshot};
use super::session::SessionTracker;
use crate::domain::NewSkiSession;

/// Default snapshot refresh interval.
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);
/// Interval at which a device is expected to deliver fixes.
pub const FIX_INTERVAL: Duration = Duration::from_secs(3);

/// Where the tracker's notion of "now" comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSource {
    /// Wall clock, for live tracking.
    #[default]
    Wall,
    /// Timestamp of the latest fix, for replaying a recorded track.
    Fixes,
}

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub tick: Duration,
    pub time_source: TimeSource,
    pub channel_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick: DEFAULT_TICK,
            time_source: TimeSource::Wall,
            channel_capacity: 64,
        }
    }
}

impl TrackerConfig {
    #[must_use]
    pub const fn with_time_source(mut self, time_source: TimeSource) -> Self {
        self.time_source = time_source;
        self
    }

    #[must_use]
    pub const fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Tracking session has already stopped")]
    Stopped,

    #[error("Tracking task failed: {0}")]
    TaskFailed(String),
}

/// Handle to a running tracking session.
pub struct TrackerService {
    fix_tx: mpsc::Sender<LocationFix>,
    snapshot_rx: watch::Receiver<TrackingSnapshot>,
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<NewSkiSession>,
}

impl TrackerService {
    /// Start a session. With [`TimeSource::Wall`] it starts now; with
    /// [`TimeSource::Fixes`] it starts at the first fix received.
    #[must_use]
    pub fn start(config: TrackerConfig) -> Self {
        let (fix_tx, fix_rx) = mpsc::channel(config.channel_capacity.max(1));
        let (snapshot_tx, snapshot_rx) = watch::channel(TrackingSnapshot::default());
        let (stop_tx, stop_rx) = oneshot::channel();

        let handle = tokio::spawn(run(config, fix_rx, snapshot_tx, stop_rx));
        tracing::debug!("tracking session started");

        Self {
            fix_tx,
            snapshot_rx,
            stop_tx,
            handle,
        }
    }

    /// Queue a fix for processing.
    pub async fn submit(&self, fix: LocationFix) -> Result<(), TrackerError> {
        self.fix_tx.send(fix).await.map_err(|_| TrackerError::Stopped)
    }

    /// A sender for producers that feed fixes independently.
    #[must_use]
    pub fn sender(&self) -> mpsc::Sender<LocationFix> {
        self.fix_tx.clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TrackingSnapshot> {
        self.snapshot_rx.clone()
    }

    #[must_use]
    pub fn latest(&self) -> TrackingSnapshot {
        *self.snapshot_rx.borrow()
    }

    /// Stop tracking once queued fixes are processed and return the session.
    pub async fn stop(self) -> Result<NewSkiSession, TrackerError> {
        let Self {
            fix_tx,
            stop_tx,
            handle,
            ..
        } = self;
        drop(fix_tx);
        // The task may already be draining; a closed receiver is fine.
        let _ = stop_tx.send(());
        handle
            .await
            .map_err(|e| TrackerError::TaskFailed(e.to_string()))
    }
}

struct Clock {
    source: TimeSource,
    started_wall_ms: i64,
    started: Instant,
}

impl Clock {
    fn new(source: TimeSource) -> Self {
        Self {
            source,
            started_wall_ms: Utc::now().timestamp_millis(),
            started: Instant::now(),
        }
    }

    fn start_ms(&self) -> i64 {
        self.started_wall_ms
    }

    fn now_ms(&self, tracker: &SessionTracker) -> i64 {
        match self.source {
            TimeSource::Wall => {
                let elapsed = i64::try_from(self.started.elapsed().as_millis()).unwrap_or(i64::MAX);
                self.started_wall_ms.saturating_add(elapsed)
            }
            TimeSource::Fixes => tracker
                .last_fix()
                .map_or(tracker.start_ms(), |f| f.timestamp_ms),
        }
    }
}

async fn run(
    config: TrackerConfig,
    mut fix_rx: mpsc::Receiver<LocationFix>,
    snapshot_tx: watch::Sender<TrackingSnapshot>,
    mut stop_rx: oneshot::Receiver<()>,
) -> NewSkiSession {
    let clock = Clock::new(config.time_source);
    let mut tracker = SessionTracker::new(clock.start_ms());
    let mut awaiting_first_fix = config.time_source == TimeSource::Fixes;
    let mut input_open = true;

    let mut tick = interval(config.tick);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut apply = |tracker: &mut SessionTracker, fix: LocationFix| {
        if awaiting_first_fix {
            tracker.start(fix.timestamp_ms);
            awaiting_first_fix = false;
        }
        tracker.process(fix);
    };

    loop {
        tokio::select! {
            biased;

            _ = &mut stop_rx => {
                while let Ok(fix) = fix_rx.try_recv() {
                    apply(&mut tracker, fix);
                }
                break;
            }

            received = fix_rx.recv(), if input_open => {
                if let Some(fix) = received {
                    apply(&mut tracker, fix);
                    snapshot_tx.send_replace(tracker.snapshot(clock.now_ms(&tracker)));
                } else {
                    input_open = false;
                }
            }

            _ = tick.tick() => {
                snapshot_tx.send_replace(tracker.snapshot(clock.now_ms(&tracker)));
            }
        }
    }

    let now_ms = clock.now_ms(&tracker);
    snapshot_tx.send_replace(tracker.snapshot(now_ms));
    let session = tracker.finish(now_ms);
    tracing::info!(
        distance_km = session.distance_km,
        max_speed_kmh = session.max_speed_kmh,
        duration_ms = session.duration_ms,
        "tracking session finished"
    );
    session
}
