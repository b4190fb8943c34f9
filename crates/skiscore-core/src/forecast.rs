//! Forecast aggregation over 3-hour slots.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::{DailyForecast, ForecastSlot};

/// Italian weekday name.
#[must_use]
pub const fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Lunedì",
        Weekday::Tue => "Martedì",
        Weekday::Wed => "Mercoledì",
        Weekday::Thu => "Giovedì",
        Weekday::Fri => "Venerdì",
        Weekday::Sat => "Sabato",
        Weekday::Sun => "Domenica",
    }
}

/// Group slots by calendar date, in the order dates first appear.
#[must_use]
pub fn aggregate_daily(slots: &[ForecastSlot]) -> Vec<DailyForecast> {
    let mut days: Vec<(NaiveDate, Vec<&ForecastSlot>)> = Vec::new();
    for slot in slots {
        let date = slot.date();
        match days.iter_mut().find(|(d, _)| *d == date) {
            Some((_, group)) => group.push(slot),
            None => days.push((date, vec![slot])),
        }
    }

    days.into_iter()
        .map(|(date, group)| summarize_day(date, &group))
        .collect()
}

fn summarize_day(date: NaiveDate, group: &[&ForecastSlot]) -> DailyForecast {
    let temp_min = group
        .iter()
        .filter_map(|s| s.temp_min)
        .reduce(f64::min)
        .unwrap_or(0.0);
    let temp_max = group
        .iter()
        .filter_map(|s| s.temp_max)
        .reduce(f64::max)
        .unwrap_or(0.0);
    let snowfall = group.iter().map(|s| s.snow_3h).sum();
    let wind_speed_max = group.iter().map(|s| s.wind_speed).fold(0.0, f64::max);
    let representative = group.iter().find(|s| s.condition.is_some());

    DailyForecast {
        date,
        day_name: day_name(date.weekday()).to_string(),
        temp_min,
        temp_max,
        snowfall,
        wind_speed_max,
        condition: representative.and_then(|s| s.condition.clone()),
        description: representative.and_then(|s| s.description.clone()),
        icon: representative.and_then(|s| s.icon.clone()),
    }
}

/// The 3-hour slots that fall on `date`, in order.
#[must_use]
pub fn slots_for_date(slots: &[ForecastSlot], date: NaiveDate) -> Vec<ForecastSlot> {
    slots.iter().filter(|s| s.date() == date).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WeatherCondition;
    use chrono::NaiveDateTime;

    fn slot(ts: &str, min: f64, max: f64, snow: f64, wind: f64, cond: Option<WeatherCondition>) -> ForecastSlot {
        ForecastSlot {
            timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
            temp: Some(f64::midpoint(min, max)),
            temp_min: Some(min),
            temp_max: Some(max),
            wind_speed: wind,
            snow_3h: snow,
            rain_3h: 0.0,
            visibility: None,
            description: cond.as_ref().map(|c| c.label().to_lowercase()),
            icon: cond.as_ref().map(|_| "13d".to_string()),
            condition: cond,
        }
    }

    fn sample() -> Vec<ForecastSlot> {
        vec![
            slot("2026-01-10 12:00:00", -4.0, -2.0, 0.0, 3.0, None),
            slot("2026-01-10 15:00:00", -6.0, -1.0, 1.5, 5.5, Some(WeatherCondition::Snow)),
            slot("2026-01-10 18:00:00", -8.0, -5.0, 2.5, 4.0, Some(WeatherCondition::Clouds)),
            slot("2026-01-11 00:00:00", -10.0, -7.0, 0.0, 1.0, Some(WeatherCondition::Clear)),
            slot("2026-01-11 03:00:00", -11.0, -9.0, 0.0, 2.0, Some(WeatherCondition::Clear)),
        ]
    }

    #[test]
    fn groups_by_date_in_order() {
        let days = aggregate_daily(&sample());
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
        assert_eq!(days[0].day_name, "Sabato");
        assert_eq!(days[1].day_name, "Domenica");
    }

    #[test]
    fn aggregates_extremes_and_totals() {
        let days = aggregate_daily(&sample());
        let first = &days[0];
        assert!((first.temp_min - -8.0).abs() < f64::EPSILON);
        assert!((first.temp_max - -1.0).abs() < f64::EPSILON);
        assert!((first.snowfall - 4.0).abs() < f64::EPSILON);
        assert!((first.wind_speed_max - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn condition_comes_from_first_slot_that_has_one() {
        let days = aggregate_daily(&sample());
        assert_eq!(days[0].condition, Some(WeatherCondition::Snow));
        assert_eq!(days[0].description.as_deref(), Some("neve"));
        assert_eq!(days[1].condition, Some(WeatherCondition::Clear));
    }

    #[test]
    fn slots_without_temperatures_still_count() {
        let mut slots = sample();
        let mut bare = slot("2026-01-10 21:00:00", 0.0, 0.0, 3.0, 9.0, None);
        bare.temp = None;
        bare.temp_min = None;
        bare.temp_max = None;
        slots.push(bare);

        let first = &aggregate_daily(&slots)[0];
        assert!((first.temp_min - -8.0).abs() < f64::EPSILON);
        assert!((first.temp_max - -1.0).abs() < f64::EPSILON);
        assert!((first.snowfall - 7.0).abs() < f64::EPSILON);
        assert!((first.wind_speed_max - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn day_without_any_temperature_reports_zero() {
        let mut bare = slot("2026-01-12 09:00:00", 0.0, 0.0, 1.0, 2.0, None);
        bare.temp_min = None;
        bare.temp_max = None;

        let day = &aggregate_daily(&[bare])[0];
        assert!(day.temp_min.abs() < f64::EPSILON);
        assert!(day.temp_max.abs() < f64::EPSILON);
        assert!((day.snowfall - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_yields_no_days() {
        assert!(aggregate_daily(&[]).is_empty());
    }

    #[test]
    fn slots_for_date_filters_one_day() {
        let slots = sample();
        let day = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
        let hourly = slots_for_date(&slots, day);
        assert_eq!(hourly.len(), 2);
        assert!(hourly.iter().all(|s| s.date() == day));

        let missing = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert!(slots_for_date(&slots, missing).is_empty());
    }
}
