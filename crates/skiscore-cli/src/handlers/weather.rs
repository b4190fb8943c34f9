//! Weather command handler: current conditions with score breakdown.

use anyhow::Result;

use skiscore_core::WeatherCondition;
use skiscore_core::domain::icon_url;

use super::display_units;
use crate::bootstrap::CliContext;
use crate::commands::ResortArgs;
use crate::presentation::print_score_breakdown;

pub async fn execute(ctx: &CliContext, args: &ResortArgs) -> Result<()> {
    let units = display_units(ctx).await?;
    let resort = args.to_resort();
    let scored = ctx.app().resorts().conditions(&resort).await?;

    let star = if scored.is_favorite { " ★" } else { "" };
    println!("{}{star}", scored.resort.name);

    if let Some(weather) = &scored.weather {
        let condition = weather.condition.as_ref();
        println!(
            "{} {} ({})",
            WeatherCondition::emoji_or_default(condition),
            WeatherCondition::label_or_unknown(condition),
            weather.description.as_deref().unwrap_or("--"),
        );
        println!(
            "Temperatura:  {} (min {}, max {}, percepita {})",
            units.temperature(weather.temp),
            units.temperature(weather.temp_min),
            units.temperature(weather.temp_max),
            units.temperature(weather.feels_like),
        );
        println!(
            "Vento:        {} (raffiche {})",
            units.speed(weather.wind_speed),
            units.speed(weather.wind_gust)
        );
        println!(
            "Neve:         {} ultima ora, {} ultime 3 ore",
            units.precipitation(weather.snow_1h),
            units.precipitation(weather.snow_3h)
        );
        println!("Visibilità:   {}", units.visibility(weather.visibility));
        if let Some(humidity) = weather.humidity {
            println!("Umidità:      {humidity}%");
        }
        if let Some(icon) = weather.icon.as_deref().filter(|i| !i.is_empty()) {
            println!("Icona:        {}", icon_url(icon));
        }
    }

    if let Some(score) = &scored.score {
        println!();
        print_score_breakdown(score);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::testing::test_context;

    fn args(lat: f64) -> ResortArgs {
        ResortArgs {
            lat,
            lon: 10.1,
            name: Some("Livigno".into()),
            country: None,
        }
    }

    #[tokio::test]
    async fn test_weather_ok() {
        let ctx = test_context().await;
        execute(&ctx, &args(46.5)).await.unwrap();
    }

    #[tokio::test]
    async fn test_weather_failure_propagates_core_error() {
        let ctx = test_context().await;
        let err = execute(&ctx, &args(-10.0)).await.unwrap_err();
        assert_eq!(crate::CliError::classify(&err).exit_code(), 69);
    }

    #[tokio::test]
    async fn test_invalid_coordinates() {
        let ctx = test_context().await;
        let err = execute(&ctx, &args(95.0)).await.unwrap_err();
        assert_eq!(crate::CliError::classify(&err).exit_code(), 2);
    }
}
