//! Recorded ski session types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ski session stored in the diary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkiSession {
    pub id: i64,
    pub recorded_at: DateTime<Utc>,
    pub duration_ms: i64,
    pub max_speed_kmh: f64,
    /// Average speed while descending (lift rides excluded).
    pub avg_speed_kmh: f64,
    pub distance_km: f64,
    /// Accumulated descent in metres.
    pub vertical_drop_m: f64,
}

/// Data for recording a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSkiSession {
    pub recorded_at: DateTime<Utc>,
    pub duration_ms: i64,
    pub max_speed_kmh: f64,
    pub avg_speed_kmh: f64,
    pub distance_km: f64,
    pub vertical_drop_m: f64,
}

impl NewSkiSession {
    /// Name of the first stat that is negative or not finite, if any.
    #[must_use]
    pub fn invalid_field(&self) -> Option<&'static str> {
        if self.duration_ms < 0 {
            return Some("duration_ms");
        }
        [
            ("max_speed_kmh", self.max_speed_kmh),
            ("avg_speed_kmh", self.avg_speed_kmh),
            ("distance_km", self.distance_km),
            ("vertical_drop_m", self.vertical_drop_m),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite() || *v < 0.0)
        .map(|(name, _)| name)
    }
}

/// Aggregate statistics across all recorded sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub total_distance_km: f64,
    pub max_speed_kmh: f64,
    /// Number of distinct UTC days with at least one session.
    pub days_skied: i64,
}

/// Format a duration in milliseconds as `HH:MM:SS`.
#[must_use]
pub fn format_duration(ms: i64) -> String {
    let secs = ms.max(0) / 1000;
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}
