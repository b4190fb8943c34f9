//! Unit conversion for display.
//!
//! Weather is always fetched in metric; the `units` setting only changes
//! how values are printed.

use skiscore_core::settings::DEFAULT_UNITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
    /// Kelvin and m/s.
    Standard,
}

impl Units {
    /// Unknown names fall back to metric.
    pub fn from_setting(value: &str) -> Self {
        match value {
            "imperial" => Self::Imperial,
            "standard" => Self::Standard,
            other => {
                if other != DEFAULT_UNITS {
                    tracing::warn!(units = other, "unknown units, using metric");
                }
                Self::Metric
            }
        }
    }

    /// Temperature given in °C.
    pub fn temperature(self, celsius: f64) -> String {
        match self {
            Self::Metric => format!("{celsius:.1}°C"),
            Self::Imperial => format!("{:.1}°F", celsius.mul_add(9.0 / 5.0, 32.0)),
            Self::Standard => format!("{:.1}K", celsius + 273.15),
        }
    }

    /// Wind speed given in m/s.
    pub fn speed(self, mps: f64) -> String {
        match self {
            Self::Metric => format!("{:.1} km/h", mps * 3.6),
            Self::Imperial => format!("{:.1} mph", mps * 2.236_936),
            Self::Standard => format!("{mps:.1} m/s"),
        }
    }

    /// Precipitation given in mm.
    pub fn precipitation(self, mm: f64) -> String {
        match self {
            Self::Imperial => format!("{:.2} in", mm / 25.4),
            Self::Metric | Self::Standard => format!("{mm:.1} mm"),
        }
    }

    /// Distance given in metres.
    pub fn visibility(self, metres: Option<u32>) -> String {
        match (self, metres) {
            (_, None) => "--".to_string(),
            (Self::Imperial, Some(m)) => format!("{:.1} mi", f64::from(m) / 1609.344),
            (Self::Metric | Self::Standard, Some(m)) => format!("{:.1} km", f64::from(m) / 1000.0),
        }
    }
}
