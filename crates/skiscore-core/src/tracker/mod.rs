//! Ski session tracking from GPS fixes.

mod fix;
mod geo;
mod service;
mod session;

pub use fix::{LocationFix, TrackingSnapshot};
pub use geo::{EARTH_RADIUS_M, haversine_m};
pub use service::{DEFAULT_TICK, FIX_INTERVAL, TimeSource, TrackerConfig, TrackerError, TrackerService};
pub use session::SessionTracker;

/// SOS text for an emergency contact, including a map link when a fix is known.
#[must_use]
pub fn emergency_message(last_fix: Option<&LocationFix>) -> String {
    last_fix.map_or_else(
        || {
            "EMERGENZA: Ho bisogno di aiuto sulle piste da sci. \
             Posizione GPS non disponibile al momento."
                .to_string()
        },
        |fix| {
            format!(
                "EMERGENZA: Ho bisogno di aiuto. Mi trovo a questa posizione: \
                 https://maps.google.com/?q={:.6},{:.6} - Altitudine: {:.0}m.",
                fix.latitude, fix.longitude, fix.altitude_m
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_with_position() {
        let fix = LocationFix {
            timestamp_ms: 0,
            latitude: 46.536_15,
            longitude: 12.138_96,
            altitude_m: 2240.4,
            speed_mps: None,
        };
        assert_eq!(
            emergency_message(Some(&fix)),
            "EMERGENZA: Ho bisogno di aiuto. Mi trovo a questa posizione: \
             https://maps.google.com/?q=46.536150,12.138960 - Altitudine: 2240m."
        );
    }

    #[test]
    fn message_without_position() {
        let msg = emergency_message(None);
        assert!(msg.starts_with("EMERGENZA"));
        assert!(msg.contains("Posizione GPS non disponibile"));
        assert!(!msg.contains("maps.google.com"));
    }
}
