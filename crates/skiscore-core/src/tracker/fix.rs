//! Location fixes and tracking snapshots.

use serde::{Deserialize, Serialize};

/// A single GPS fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    /// Unix epoch milliseconds.
    pub timestamp_ms: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_m: f64,
    /// Speed reported by the receiver, when available.
    pub speed_mps: Option<f32>,
}

impl LocationFix {
    /// Parse a CSV line `timestamp_ms,lat,lon,altitude_m[,speed_mps]`.
    ///
    /// Returns `None` for blank lines, comments (`#`) and a header row.
    pub fn parse_csv_line(line: &str) -> Option<Result<Self, String>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("timestamp") {
            return None;
        }
        Some(Self::parse_fields(line))
    }

    fn parse_fields(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if !(4..=5).contains(&fields.len()) {
            return Err(format!("expected 4 or 5 fields, got {}", fields.len()));
        }
        let num = |idx: usize, name: &str| -> Result<f64, String> {
            let value = fields[idx]
                .parse::<f64>()
                .map_err(|e| format!("invalid {name} '{}': {e}", fields[idx]))?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(format!("{name} must be finite, got '{}'", fields[idx]))
            }
        };
        let timestamp_ms = fields[0]
            .parse::<i64>()
            .map_err(|e| format!("invalid timestamp '{}': {e}", fields[0]))?;
        let latitude = num(1, "latitude")?;
        let longitude = num(2, "longitude")?;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(format!("coordinates out of range: {latitude},{longitude}"));
        }
        let altitude_m = num(3, "altitude")?;
        let speed_mps = match fields.get(4) {
            Some(s) if !s.is_empty() => {
                let speed = s
                    .parse::<f32>()
                    .map_err(|e| format!("invalid speed '{s}': {e}"))?;
                if !speed.is_finite() {
                    return Err(format!("speed must be finite, got '{s}'"));
                }
                Some(speed)
            }
            _ => None,
        };
        Ok(Self {
            timestamp_ms,
            latitude,
            longitude,
            altitude_m,
            speed_mps,
        })
    }
}

/// Live statistics published while tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingSnapshot {
    pub speed_kmh: f64,
    pub distance_km: f64,
    pub elapsed_ms: i64,
    pub max_speed_kmh: f64,
    pub avg_speed_kmh: f64,
    pub riding_lift: bool,
    pub altitude_m: f64,
}
