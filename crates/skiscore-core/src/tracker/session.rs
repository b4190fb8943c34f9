//! Per-fix session statistics.

use chrono::{DateTime, Utc};

use super::fix::{LocationFix, TrackingSnapshot};
use super::geo::haversine_m;
use crate::domain::NewSkiSession;

/// Altitude gain per fix (m) that counts as climbing.
pub const LIFT_ALTITUDE_DELTA_M: f64 = 2.0;
/// Consecutive climbing fixes before the skier is considered on a lift.
pub const LIFT_CONSECUTIVE_FIXES: u32 = 3;
/// Receiver speeds below this (m/s) are ignored in favour of derived speed.
pub const MIN_RECEIVER_SPEED_MPS: f32 = 0.3;
/// Steps shorter than this (m) are GPS jitter.
pub const MIN_STEP_M: f64 = 0.5;
/// Steps faster than this (km/h) are GPS glitches.
pub const MAX_PLAUSIBLE_SPEED_KMH: f64 = 200.0;
/// Only speeds above this (km/h) feed the average.
pub const MOVING_SPEED_KMH: f64 = 2.0;

/// Accumulates distance, speeds and vertical drop from a stream of fixes.
///
/// Movement while riding a lift is not counted.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    start_ms: i64,
    previous: Option<LocationFix>,
    ascending_fixes: u32,
    riding_lift: bool,
    current_speed_kmh: f64,
    distance_m: f64,
    max_speed_kmh: f64,
    speed_sum_kmh: f64,
    speed_samples: u32,
    vertical_drop_m: f64,
}

impl SessionTracker {
    /// A tracker whose session started at `now_ms`.
    #[must_use]
    pub fn new(now_ms: i64) -> Self {
        Self {
            start_ms: now_ms,
            ..Self::default()
        }
    }

    /// Reset all statistics and start a new session at `now_ms`.
    pub fn start(&mut self, now_ms: i64) {
        *self = Self::new(now_ms);
    }

    #[must_use]
    pub const fn start_ms(&self) -> i64 {
        self.start_ms
    }

    #[must_use]
    pub const fn last_fix(&self) -> Option<&LocationFix> {
        self.previous.as_ref()
    }

    #[must_use]
    pub const fn riding_lift(&self) -> bool {
        self.riding_lift
    }

    /// Feed one fix into the session.
    pub fn process(&mut self, fix: LocationFix) {
        if let Some(prev) = self.previous {
            self.update_lift_state(&prev, &fix);
        }

        let step_m = self
            .previous
            .map(|prev| haversine_m(prev.latitude, prev.longitude, fix.latitude, fix.longitude));

        self.current_speed_kmh = match (fix.speed_mps, self.previous, step_m) {
            (Some(s), _, _) if s >= MIN_RECEIVER_SPEED_MPS => f64::from(s) * 3.6,
            (_, Some(prev), Some(d)) if fix.timestamp_ms > prev.timestamp_ms => {
                let secs = (fix.timestamp_ms - prev.timestamp_ms) as f64 / 1000.0;
                d / secs * 3.6
            }
            _ => 0.0,
        };

        if let (false, Some(prev), Some(d)) = (self.riding_lift, self.previous, step_m) {
            self.record_step(&prev, &fix, d);
        }

        self.previous = Some(fix);
    }

    fn update_lift_state(&mut self, prev: &LocationFix, fix: &LocationFix) {
        if fix.altitude_m - prev.altitude_m > LIFT_ALTITUDE_DELTA_M {
            self.ascending_fixes += 1;
        } else {
            self.ascending_fixes = 0;
            self.riding_lift = false;
        }
        if self.ascending_fixes >= LIFT_CONSECUTIVE_FIXES {
            if !self.riding_lift {
                tracing::debug!(altitude = fix.altitude_m, "lift ride detected");
            }
            self.riding_lift = true;
        }
    }

    fn record_step(&mut self, prev: &LocationFix, fix: &LocationFix, step_m: f64) {
        let speed = self.current_speed_kmh;
        if step_m <= MIN_STEP_M || speed >= MAX_PLAUSIBLE_SPEED_KMH {
            return;
        }
        self.distance_m += step_m;
        if speed > MOVING_SPEED_KMH {
            self.speed_sum_kmh += speed;
            self.speed_samples += 1;
        }
        self.max_speed_kmh = self.max_speed_kmh.max(speed);
        let descent = prev.altitude_m - fix.altitude_m;
        if descent > 0.0 {
            self.vertical_drop_m += descent;
        }
    }

    #[must_use]
    pub fn avg_speed_kmh(&self) -> f64 {
        if self.speed_samples == 0 {
            0.0
        } else {
            self.speed_sum_kmh / f64::from(self.speed_samples)
        }
    }

    /// Current statistics as of `now_ms`.
    #[must_use]
    pub fn snapshot(&self, now_ms: i64) -> TrackingSnapshot {
        TrackingSnapshot {
            speed_kmh: self.current_speed_kmh,
            distance_km: self.distance_m / 1000.0,
            elapsed_ms: (now_ms - self.start_ms).max(0),
            max_speed_kmh: self.max_speed_kmh,
            avg_speed_kmh: self.avg_speed_kmh(),
            riding_lift: self.riding_lift,
            altitude_m: self.previous.map_or(0.0, |f| f.altitude_m),
        }
    }

    /// Close the session at `now_ms`.
    #[must_use]
    pub fn finish(&self, now_ms: i64) -> NewSkiSession {
        NewSkiSession {
            recorded_at: DateTime::<Utc>::from_timestamp_millis(self.start_ms).unwrap_or_default(),
            duration_ms: (now_ms - self.start_ms).max(0),
            max_speed_kmh: self.max_speed_kmh,
            avg_speed_kmh: self.avg_speed_kmh(),
            distance_km: self.distance_m / 1000.0,
            vertical_drop_m: self.vertical_drop_m,
        }
    }
}
