//! Great-circle distance.

/// Mean Earth radius (WGS84), metres.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Haversine distance in metres between two WGS84 points in degrees.
#[must_use]
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (phi1.cos() * phi2.cos()).mul_add(
        (d_lambda / 2.0).sin().powi(2),
        (d_phi / 2.0).sin().powi(2),
    );
    2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
}
