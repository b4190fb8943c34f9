//! Weather domain types.
//!
//! Units are metric throughout: temperatures in °C, wind in m/s,
//! precipitation in mm and visibility in metres.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Condition group as reported by the weather provider (`weather[0].main`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Snow,
    Rain,
    Drizzle,
    Thunderstorm,
    Mist,
    Fog,
    Haze,
    Smoke,
    Dust,
    Sand,
    Ash,
    Squall,
    Tornado,
    Other(String),
}

impl WeatherCondition {
    /// Parse a provider condition group. Unknown groups are kept verbatim.
    #[must_use]
    pub fn parse(main: &str) -> Self {
        match main {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Snow" => Self::Snow,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Thunderstorm" => Self::Thunderstorm,
            "Mist" => Self::Mist,
            "Fog" => Self::Fog,
            "Haze" => Self::Haze,
            "Smoke" => Self::Smoke,
            "Dust" => Self::Dust,
            "Sand" => Self::Sand,
            "Ash" => Self::Ash,
            "Squall" => Self::Squall,
            "Tornado" => Self::Tornado,
            other => Self::Other(other.to_string()),
        }
    }

    /// Italian condition text shown to the user.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Clear => "Cielo sereno",
            Self::Clouds => "Nuvoloso",
            Self::Snow => "Neve",
            Self::Rain => "Pioggia",
            Self::Drizzle => "Pioviggine",
            Self::Thunderstorm => "Temporale",
            Self::Mist => "Foschia",
            Self::Fog => "Nebbia",
            Self::Haze => "Caligine",
            Self::Smoke => "Fumo",
            Self::Dust => "Polvere",
            Self::Sand => "Sabbia",
            Self::Ash => "Cenere",
            Self::Squall => "Burrasca",
            Self::Tornado => "Tornado",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::Clouds => "☁️",
            Self::Snow => "🌨️",
            Self::Rain | Self::Drizzle => "🌧️",
            Self::Thunderstorm => "⛈️",
            Self::Mist | Self::Fog | Self::Haze => "🌫️",
            Self::Squall => "💨",
            _ => "🌡️",
        }
    }

    /// Label for an optional condition ("Sconosciuto" when absent).
    #[must_use]
    pub fn label_or_unknown(condition: Option<&Self>) -> &str {
        condition.map_or("Sconosciuto", Self::label)
    }

    /// Emoji for an optional condition.
    #[must_use]
    pub fn emoji_or_default(condition: Option<&Self>) -> &'static str {
        condition.map_or("🌡️", Self::emoji)
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// URL of the 2x provider icon for an icon code such as `13d`.
#[must_use]
pub fn icon_url(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }
    format!("https://openweathermap.org/img/wn/{code}@2x.png")
}

/// Current conditions at a location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub feels_like: f64,
    pub wind_speed: f64,
    pub wind_gust: f64,
    /// Snow in the last hour (mm), 0 when not reported.
    pub snow_1h: f64,
    /// Snow in the last three hours (mm), 0 when not reported.
    pub snow_3h: f64,
    /// Visibility in metres, `None` when not reported.
    pub visibility: Option<u32>,
    pub condition: Option<WeatherCondition>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub weather_id: Option<i32>,
    pub humidity: Option<u8>,
    pub observed_at: Option<DateTime<Utc>>,
}

impl CurrentWeather {
    /// Wind speed converted to km/h.
    #[must_use]
    pub fn wind_speed_kmh(&self) -> f64 {
        self.wind_speed * 3.6
    }
}

/// One 3-hour forecast slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSlot {
    /// Slot start in the provider's reference time (`dt_txt`).
    pub timestamp: NaiveDateTime,
    /// Temperatures, `None` when the provider sent no `main` block.
    pub temp: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub wind_speed: f64,
    /// Snow accumulated over the slot (mm).
    pub snow_3h: f64,
    /// Rain accumulated over the slot (mm).
    pub rain_3h: f64,
    pub visibility: Option<u32>,
    pub condition: Option<WeatherCondition>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl ForecastSlot {
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// A day of forecast aggregated from its 3-hour slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub day_name: String,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Total snowfall over the day (mm).
    pub snowfall: f64,
    /// Strongest wind across the day's slots (m/s).
    pub wind_speed_max: f64,
    pub condition: Option<WeatherCondition>,
    pub description: Option<String>,
    pub icon: Option<String>,
}
