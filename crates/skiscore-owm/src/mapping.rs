//! Conversion from wire types to core domain types.

use chrono::{DateTime, NaiveDateTime};
use skiscore_core::{CurrentWeather, ForecastSlot, LocationMatch, WeatherCondition};

use crate::error::{OwmError, OwmResult};
use crate::models::{
    CurrentWeatherResponse, ForecastItemDto, ForecastResponse, GeocodingResponse, GeocodingResultDto,
    PrecipitationDto, WeatherDto,
};

const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn condition_of(weather: Option<&WeatherDto>) -> Option<WeatherCondition> {
    weather
        .and_then(|w| w.main.as_deref())
        .filter(|m| !m.is_empty())
        .map(WeatherCondition::parse)
}

fn precipitation(p: Option<&PrecipitationDto>) -> (f64, f64) {
    p.map_or((0.0, 0.0), |p| {
        (p.one_hour.unwrap_or(0.0), p.three_hours.unwrap_or(0.0))
    })
}

/// Zero visibility means "not reported".
fn visibility(v: Option<u32>) -> Option<u32> {
    v.filter(|v| *v > 0)
}

pub fn to_current_weather(response: CurrentWeatherResponse) -> OwmResult<CurrentWeather> {
    let main = response.main.ok_or_else(|| OwmError::InvalidResponse {
        message: "current weather has no 'main' block".to_string(),
    })?;
    let first = response.weather.first();
    let (snow_1h, snow_3h) = precipitation(response.snow.as_ref());
    let wind = response.wind.as_ref();

    Ok(CurrentWeather {
        temp: main.temp,
        temp_min: main.temp_min.unwrap_or(main.temp),
        temp_max: main.temp_max.unwrap_or(main.temp),
        feels_like: main.feels_like.unwrap_or(main.temp),
        wind_speed: wind.and_then(|w| w.speed).unwrap_or(0.0),
        wind_gust: wind.and_then(|w| w.gust).unwrap_or(0.0),
        snow_1h,
        snow_3h,
        visibility: visibility(response.visibility),
        condition: condition_of(first),
        description: first.and_then(|w| w.description.clone()),
        icon: first.and_then(|w| w.icon.clone()),
        weather_id: first.and_then(|w| w.id),
        humidity: main.humidity,
        observed_at: response.dt.and_then(|dt| DateTime::from_timestamp(dt, 0)),
    })
}

fn slot_timestamp(item: &ForecastItemDto) -> Option<NaiveDateTime> {
    item.dt_txt
        .as_deref()
        .and_then(|txt| NaiveDateTime::parse_from_str(txt, DT_TXT_FORMAT).ok())
        .or_else(|| {
            item.dt
                .and_then(|dt| DateTime::from_timestamp(dt, 0))
                .map(|dt| dt.naive_utc())
        })
}

/// Map forecast slots. Slots without a timestamp are skipped; a slot without
/// `main` is kept with no temperatures so its snow and wind still count.
pub fn to_forecast_slots(response: ForecastResponse) -> Vec<ForecastSlot> {
    let total = response.list.len();
    let slots: Vec<ForecastSlot> = response
        .list
        .into_iter()
        .filter_map(|item| {
            let timestamp = slot_timestamp(&item)?;
            let main = item.main.as_ref();
            let first = item.weather.first();
            let (_, snow_3h) = precipitation(item.snow.as_ref());
            let (_, rain_3h) = precipitation(item.rain.as_ref());
            Some(ForecastSlot {
                timestamp,
                temp: main.map(|m| m.temp),
                temp_min: main.map(|m| m.temp_min.unwrap_or(m.temp)),
                temp_max: main.map(|m| m.temp_max.unwrap_or(m.temp)),
                wind_speed: item.wind.as_ref().and_then(|w| w.speed).unwrap_or(0.0),
                snow_3h,
                rain_3h,
                visibility: visibility(item.visibility),
                condition: condition_of(first),
                description: first.and_then(|w| w.description.clone()),
                icon: first.and_then(|w| w.icon.clone()),
            })
        })
        .collect();

    if slots.len() < total {
        tracing::warn!(skipped = total - slots.len(), "skipped forecast slots without a timestamp");
    }
    slots
}

fn to_location(dto: GeocodingResultDto) -> LocationMatch {
    LocationMatch {
        id: dto.id,
        name: dto.name,
        latitude: dto.latitude,
        longitude: dto.longitude,
        country: dto.country,
        country_code: dto.country_code,
        admin1: dto.admin1,
        elevation: dto.elevation,
    }
}

pub fn to_locations(response: GeocodingResponse) -> Vec<LocationMatch> {
    response
        .results
        .unwrap_or_default()
        .into_iter()
        .map(to_location)
        .collect()
}
