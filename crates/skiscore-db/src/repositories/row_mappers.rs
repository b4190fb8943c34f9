//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use skiscore_core::{RepositoryError, SkiResort, SkiSession};
use sqlx::Row;

/// Shared SELECT column list for session queries.
pub const SESSION_SELECT_COLUMNS: &str =
    "id, recorded_at, duration_ms, max_speed_kmh, avg_speed_kmh, distance_km, vertical_drop_m";

/// Shared SELECT column list for favourite queries.
pub const FAVORITE_SELECT_COLUMNS: &str = "name, country, latitude, longitude";

/// Timestamps are stored as UTC text so `date()` works in SQL.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Parse a stored timestamp, tolerating a missing fraction or " UTC" suffix.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let trimmed = s.trim_end_matches(" UTC");
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .ok()
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

pub fn row_to_session(row: &sqlx::sqlite::SqliteRow) -> Result<SkiSession, RepositoryError> {
    let recorded_at: String = row.try_get("recorded_at").map_err(storage)?;
    let recorded_at = parse_datetime(&recorded_at).ok_or_else(|| {
        RepositoryError::Serialization(format!("invalid recorded_at '{recorded_at}'"))
    })?;

    Ok(SkiSession {
        id: row.try_get("id").map_err(storage)?,
        recorded_at,
        duration_ms: row.try_get("duration_ms").map_err(storage)?,
        max_speed_kmh: row.try_get("max_speed_kmh").map_err(storage)?,
        avg_speed_kmh: row.try_get("avg_speed_kmh").map_err(storage)?,
        distance_km: row.try_get("distance_km").map_err(storage)?,
        vertical_drop_m: row.try_get("vertical_drop_m").map_err(storage)?,
    })
}

pub fn row_to_resort(row: &sqlx::sqlite::SqliteRow) -> Result<SkiResort, RepositoryError> {
    Ok(SkiResort {
        name: row.try_get("name").map_err(storage)?,
        country: row.try_get("country").map_err(storage)?,
        latitude: row.try_get("latitude").map_err(storage)?,
        longitude: row.try_get("longitude").map_err(storage)?,
    })
}
