//! Ski resort and geocoding result types.

use serde::{Deserialize, Serialize};

use super::weather::CurrentWeather;
use crate::scoring::SkiScore;

/// A ski resort identified by name and coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkiResort {
    pub name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl SkiResort {
    /// Create a new resort.
    pub fn new(name: impl Into<String>, country: Option<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            country,
            latitude,
            longitude,
        }
    }

    /// Stable identity used for favourites storage.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}_{}_{}", self.name, self.latitude, self.longitude)
    }
}

impl PartialEq for SkiResort {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for SkiResort {}

/// A single match returned by a place-name search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationMatch {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub country_code: Option<String>,
    /// First-level administrative region (region/state).
    pub admin1: Option<String>,
    pub elevation: Option<f64>,
}

impl LocationMatch {
    /// Human readable name like "Cortina d'Ampezzo, Veneto, Italia".
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut out = self.name.clone();
        for part in [&self.admin1, &self.country].into_iter().flatten() {
            if !part.is_empty() {
                out.push_str(", ");
                out.push_str(part);
            }
        }
        out
    }

    /// Convert the match into a resort named by its display name.
    #[must_use]
    pub fn into_resort(self) -> SkiResort {
        SkiResort {
            name: self.display_name(),
            country: self.country,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A resort together with its latest conditions and score, if fetched.
#[derive(Debug, Clone)]
pub struct ScoredResort {
    pub resort: SkiResort,
    pub is_favorite: bool,
    pub weather: Option<CurrentWeather>,
    pub score: Option<SkiScore>,
}

impl ScoredResort {
    /// A resort whose conditions have not been fetched (or failed to fetch).
    pub const fn unscored(resort: SkiResort, is_favorite: bool) -> Self {
        Self {
            resort,
            is_favorite,
            weather: None,
            score: None,
        }
    }
}
