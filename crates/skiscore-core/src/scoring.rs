//! Skiability score.
//!
//! A score from 0 to 100 combining four weighted components computed from
//! current conditions: snowfall, visibility, wind and temperature.

use serde::{Deserialize, Serialize};

use crate::domain::{CurrentWeather, DailyForecast, WeatherCondition};

pub const SNOW_WEIGHT: f64 = 0.30;
pub const VISIBILITY_WEIGHT: f64 = 0.30;
pub const WIND_WEIGHT: f64 = 0.25;
pub const TEMPERATURE_WEIGHT: f64 = 0.15;

/// Score with its per-component breakdown (each component is 0..=100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkiScore {
    pub total: u8,
    pub snow: f64,
    pub visibility: f64,
    pub wind: f64,
    pub temperature: f64,
}

impl SkiScore {
    #[must_use]
    pub const fn category(&self) -> ScoreCategory {
        ScoreCategory::from_total(self.total)
    }

    #[must_use]
    pub const fn rating(&self) -> ScoreRating {
        ScoreRating::from_total(self.total)
    }
}

/// Traffic-light bucket used for colouring a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    Green,
    Yellow,
    Red,
}

impl ScoreCategory {
    #[must_use]
    pub const fn from_total(total: u8) -> Self {
        match total {
            70.. => Self::Green,
            40.. => Self::Yellow,
            _ => Self::Red,
        }
    }
}

/// Verbal rating of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreRating {
    #[must_use]
    pub const fn from_total(total: u8) -> Self {
        match total {
            80.. => Self::Excellent,
            60.. => Self::Good,
            40.. => Self::Fair,
            _ => Self::Poor,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Eccellente",
            Self::Good => "Buono",
            Self::Fair => "Discreto",
            Self::Poor => "Scarso",
        }
    }
}

impl std::fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute the score for current conditions.
#[must_use]
pub fn calculate(weather: &CurrentWeather) -> SkiScore {
    let condition = weather.condition.as_ref();
    let snow = snow_score(condition, weather.snow_1h, weather.snow_3h);
    let visibility = visibility_score(condition, weather.visibility);
    let wind = wind_score(weather.wind_speed);
    let temperature = temperature_score(weather.temp);

    let weighted = snow.mul_add(
        SNOW_WEIGHT,
        visibility.mul_add(
            VISIBILITY_WEIGHT,
            wind.mul_add(WIND_WEIGHT, temperature * TEMPERATURE_WEIGHT),
        ),
    );

    SkiScore {
        total: weighted.clamp(0.0, 100.0).round() as u8,
        snow,
        visibility,
        wind,
        temperature,
    }
}

/// Score a forecast day by treating its aggregate as conditions.
///
/// Uses the day's strongest wind, the mid-point of its temperature range
/// and its total snowfall spread evenly over 24 hours.
#[must_use]
pub fn score_daily(day: &DailyForecast) -> SkiScore {
    let conditions = CurrentWeather {
        temp: (day.temp_min + day.temp_max) / 2.0,
        temp_min: day.temp_min,
        temp_max: day.temp_max,
        wind_speed: day.wind_speed_max,
        // 8 slots of 3 hours: rate = snow_3h / 3 = snowfall / 24.
        snow_3h: day.snowfall / 8.0,
        condition: day.condition.clone(),
        ..CurrentWeather::default()
    };
    calculate(&conditions)
}

/// Snowfall component.
#[must_use]
pub fn snow_score(condition: Option<&WeatherCondition>, snow_1h: f64, snow_3h: f64) -> f64 {
    let Some(condition) = condition else {
        return 40.0;
    };
    match condition {
        WeatherCondition::Snow => {
            let rate = if snow_1h > 0.0 {
                snow_1h
            } else if snow_3h > 0.0 {
                snow_3h / 3.0
            } else {
                0.0
            };
            if rate <= 0.0 {
                60.0
            } else if (2.0..=5.0).contains(&rate) {
                100.0
            } else if rate < 2.0 {
                80.0
            } else if rate <= 8.0 {
                70.0
            } else {
                50.0
            }
        }
        WeatherCondition::Rain | WeatherCondition::Thunderstorm => 0.0,
        WeatherCondition::Drizzle => 10.0,
        _ => 40.0,
    }
}

/// Visibility component. A visibility of 0 is treated as unknown.
#[must_use]
pub fn visibility_score(condition: Option<&WeatherCondition>, visibility: Option<u32>) -> f64 {
    let visibility = visibility.filter(|v| *v > 0);
    if visibility.is_some_and(|v| v < 1000) {
        return 10.0;
    }
    let Some(condition) = condition else {
        return 50.0;
    };
    let base: f64 = match condition {
        WeatherCondition::Clear => 100.0,
        WeatherCondition::Clouds => 60.0,
        WeatherCondition::Snow => 50.0,
        WeatherCondition::Haze => 30.0,
        WeatherCondition::Mist | WeatherCondition::Fog => 10.0,
        WeatherCondition::Rain | WeatherCondition::Drizzle => 20.0,
        WeatherCondition::Thunderstorm => 5.0,
        _ => 40.0,
    };
    if visibility.is_some_and(|v| v < 3000) {
        base.min(30.0)
    } else {
        base
    }
}

/// Wind component from wind speed in m/s.
#[must_use]
pub fn wind_score(wind_speed: f64) -> f64 {
    if wind_speed < 3.0 {
        100.0
    } else if wind_speed <= 7.0 {
        (wind_speed - 3.0).mul_add(-10.0, 100.0)
    } else if wind_speed <= 12.0 {
        (wind_speed - 7.0).mul_add(-12.0, 60.0)
    } else {
        0.0
    }
}

/// Temperature component from air temperature in °C.
#[must_use]
pub fn temperature_score(temp: f64) -> f64 {
    if (-8.0..=1.0).contains(&temp) {
        100.0
    } else if (-15.0..-8.0).contains(&temp) {
        (-8.0 - temp).mul_add(-10.0, 100.0)
    } else if temp < -15.0 {
        30.0
    } else if temp <= 5.0 {
        (temp - 1.0).mul_add(-15.0, 100.0)
    } else if temp <= 15.0 {
        (temp - 5.0).mul_add(-4.0, 40.0)
    } else {
        0.0
    }
}
