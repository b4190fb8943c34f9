//! Forecast command handlers: daily table and 3-hour slots of one day.

use anyhow::Result;
use chrono::NaiveDate;

use skiscore_core::WeatherCondition;
use skiscore_core::scoring::score_daily;

use super::display_units;
use crate::bootstrap::CliContext;
use crate::commands::ResortArgs;
use crate::presentation::{print_separator, score_cell, truncate_string};

/// Daily forecast with a score per day.
pub async fn execute_daily(ctx: &CliContext, args: &ResortArgs) -> Result<()> {
    let units = display_units(ctx).await?;
    let resort = args.to_resort();
    let days = ctx
        .app()
        .resorts()
        .daily_forecast(resort.latitude, resort.longitude)
        .await?;

    if days.is_empty() {
        println!("No forecast available for {}.", resort.name);
        return Ok(());
    }

    println!("Previsioni per {}\n", resort.name);
    println!(
        "{:<10} {:<11} {:<16} {:>9} {:>9} {:>9} {:>12}  Score",
        "Giorno", "Data", "Condizioni", "Min", "Max", "Neve", "Vento max"
    );
    print_separator(100);

    for day in &days {
        let condition = day.condition.as_ref();
        let score = score_daily(day);
        println!(
            "{:<10} {:<11} {} {:<13} {:>9} {:>9} {:>9} {:>12}  {}",
            day.day_name,
            day.date.format("%Y-%m-%d"),
            WeatherCondition::emoji_or_default(condition),
            truncate_string(WeatherCondition::label_or_unknown(condition), 13),
            units.temperature(day.temp_min),
            units.temperature(day.temp_max),
            units.precipitation(day.snowfall),
            units.speed(day.wind_speed_max),
            score_cell(Some(&score)),
        );
    }
    Ok(())
}

/// 3-hour slots for one day.
pub async fn execute_hourly(ctx: &CliContext, lat: f64, lon: f64, date: NaiveDate) -> Result<()> {
    let units = display_units(ctx).await?;
    let slots = ctx.app().resorts().hourly_forecast(lat, lon, date).await?;

    if slots.is_empty() {
        println!("No forecast data for {date}.");
        return Ok(());
    }

    println!("{date}\n");
    println!(
        "{:<6} {:<18} {:>9} {:>12} {:>9} {:>9} {:>9}",
        "Ora", "Condizioni", "Temp", "Vento", "Neve", "Pioggia", "Visib."
    );
    print_separator(80);

    for slot in &slots {
        let condition = slot.condition.as_ref();
        println!(
            "{:<6} {} {:<15} {:>9} {:>12} {:>9} {:>9} {:>9}",
            slot.timestamp.format("%H:%M"),
            WeatherCondition::emoji_or_default(condition),
            truncate_string(WeatherCondition::label_or_unknown(condition), 15),
            slot.temp.map_or_else(|| "--".to_string(), |t| units.temperature(t)),
            units.speed(slot.wind_speed),
            units.precipitation(slot.snow_3h),
            units.precipitation(slot.rain_3h),
            units.visibility(slot.visibility),
        );
    }
    Ok(())
}
