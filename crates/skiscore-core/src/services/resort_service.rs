//! Resort lookup, conditions and forecasts.

use std::sync::Arc;

use chrono::NaiveDate;
use futures_util::future::join_all;

use super::favorites_service::{validate_coordinates, validate_resort};
use crate::domain::{DailyForecast, ForecastSlot, LocationMatch, ScoredResort, SkiResort};
use crate::forecast::{aggregate_daily, slots_for_date};
use crate::ports::{CoreError, FavoritesRepository, SettingsRepository, WeatherPort};
use crate::scoring;

/// Service combining the weather provider with favourites.
pub struct ResortService {
    weather: Arc<dyn WeatherPort>,
    favorites: Arc<dyn FavoritesRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl ResortService {
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        favorites: Arc<dyn FavoritesRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            weather,
            favorites,
            settings,
        }
    }

    /// Search places by name.
    ///
    /// `count` defaults to the configured search result count.
    pub async fn search(&self, query: &str, count: Option<u32>) -> Result<Vec<LocationMatch>, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CoreError::Validation("search query cannot be empty".into()));
        }
        let count = match count {
            Some(count) => count,
            None => self.settings.load().await?.effective_search_result_count(),
        };
        if !(1..=100).contains(&count) {
            return Err(CoreError::Validation(format!(
                "result count must be between 1 and 100, got {count}"
            )));
        }
        let matches = self.weather.search_locations(query, count).await?;
        tracing::debug!(query, found = matches.len(), "location search");
        Ok(matches)
    }

    /// Current weather and score for a resort.
    pub async fn conditions(&self, resort: &SkiResort) -> Result<ScoredResort, CoreError> {
        validate_resort(resort)?;
        let is_favorite = self.favorites.contains(&resort.key()).await?;
        let weather = self.weather.current(resort.latitude, resort.longitude).await?;
        let score = scoring::calculate(&weather);
        Ok(ScoredResort {
            resort: resort.clone(),
            is_favorite,
            weather: Some(weather),
            score: Some(score),
        })
    }

    /// Forecast aggregated per day.
    pub async fn daily_forecast(&self, latitude: f64, longitude: f64) -> Result<Vec<DailyForecast>, CoreError> {
        validate_coordinates(latitude, longitude)?;
        let slots = self.weather.forecast(latitude, longitude).await?;
        Ok(aggregate_daily(&slots))
    }

    /// 3-hour slots for one day. Empty when the forecast does not cover it.
    pub async fn hourly_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
    ) -> Result<Vec<ForecastSlot>, CoreError> {
        validate_coordinates(latitude, longitude)?;
        let slots = self.weather.forecast(latitude, longitude).await?;
        Ok(slots_for_date(&slots, date))
    }

    /// Every favourite with its current conditions, fetched concurrently.
    ///
    /// A failed fetch leaves that resort unscored.
    pub async fn favorites_with_conditions(&self) -> Result<Vec<ScoredResort>, CoreError> {
        let favorites = self.favorites.list().await?;
        let fetches = favorites.into_iter().map(|resort| async move {
            match self.weather.current(resort.latitude, resort.longitude).await {
                Ok(weather) => {
                    let score = scoring::calculate(&weather);
                    ScoredResort {
                        resort,
                        is_favorite: true,
                        weather: Some(weather),
                        score: Some(score),
                    }
                }
                Err(e) => {
                    tracing::warn!(resort = %resort.name, error = %e, "failed to fetch conditions");
                    ScoredResort::unscored(resort, true)
                }
            }
        });
        Ok(join_all(fetches).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurrentWeather, WeatherCondition};
    use crate::ports::{WeatherPortError, WeatherPortResult};
    use crate::services::fakes::{InMemoryFavorites, InMemorySettings};
    use async_trait::async_trait;
    use chrono::NaiveDateTime;

    mockall::mock! {
        Weather {}

        #[async_trait]
        impl WeatherPort for Weather {
            async fn current(&self, latitude: f64, longitude: f64) -> WeatherPortResult<CurrentWeather>;
            async fn forecast(&self, latitude: f64, longitude: f64) -> WeatherPortResult<Vec<ForecastSlot>>;
            async fn search_locations(&self, query: &str, count: u32) -> WeatherPortResult<Vec<LocationMatch>>;
        }
    }

    fn snowy() -> CurrentWeather {
        CurrentWeather {
            temp: -4.0,
            wind_speed: 2.0,
            snow_1h: 3.0,
            visibility: Some(10_000),
            condition: Some(WeatherCondition::Snow),
            ..CurrentWeather::default()
        }
    }

    fn slot(ts: &str) -> ForecastSlot {
        ForecastSlot {
            timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
            temp: Some(-3.0),
            temp_min: Some(-5.0),
            temp_max: Some(-1.0),
            wind_speed: 4.0,
            snow_3h: 1.0,
            rain_3h: 0.0,
            visibility: None,
            condition: Some(WeatherCondition::Snow),
            description: None,
            icon: None,
        }
    }

    fn service(weather: MockWeather, favorites: Vec<SkiResort>) -> ResortService {
        ResortService::new(
            Arc::new(weather),
            Arc::new(InMemoryFavorites::with(favorites)),
            Arc::new(InMemorySettings::default()),
        )
    }

    #[tokio::test]
    async fn search_uses_configured_count() {
        let mut weather = MockWeather::new();
        weather
            .expect_search_locations()
            .withf(|query, count| query == "Livigno" && *count == 8)
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let matches = service(weather, vec![]).search("  Livigno ", None).await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn search_rejects_empty_query_and_bad_count() {
        let service = service(MockWeather::new(), vec![]);
        assert!(matches!(service.search("   ", None).await, Err(CoreError::Validation(_))));
        assert!(matches!(service.search("Livigno", Some(0)).await, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn conditions_include_score_and_favourite_flag() {
        let livigno = SkiResort::new("Livigno", None, 46.538, 10.135);
        let mut weather = MockWeather::new();
        weather.expect_current().returning(|_, _| Ok(snowy()));

        let scored = service(weather, vec![livigno.clone()])
            .conditions(&livigno)
            .await
            .unwrap();
        assert!(scored.is_favorite);
        assert_eq!(scored.score.map(|s| s.total), Some(85));
    }

    #[tokio::test]
    async fn forecast_errors_propagate() {
        let mut weather = MockWeather::new();
        weather
            .expect_forecast()
            .returning(|_, _| Err(WeatherPortError::Unauthorized));

        let result = service(weather, vec![]).daily_forecast(46.5, 10.2).await;
        assert!(matches!(
            result,
            Err(CoreError::Weather(WeatherPortError::Unauthorized))
        ));
    }

    #[tokio::test]
    async fn hourly_forecast_filters_by_day() {
        let mut weather = MockWeather::new();
        weather.expect_forecast().returning(|_, _| {
            Ok(vec![
                slot("2026-01-10 21:00:00"),
                slot("2026-01-11 00:00:00"),
                slot("2026-01-11 03:00:00"),
            ])
        });
        let service = service(weather, vec![]);

        let day = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
        assert_eq!(service.hourly_forecast(46.5, 10.2, day).await.unwrap().len(), 2);

        let days = service.daily_forecast(46.5, 10.2).await.unwrap();
        assert_eq!(days.len(), 2);
        assert!((days[1].snowfall - 2.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn failed_favourite_fetch_is_not_fatal() {
        let good = SkiResort::new("Livigno", None, 46.538, 10.135);
        let bad = SkiResort::new("Ortisei", None, 46.575, 11.672);
        let mut weather = MockWeather::new();
        weather.expect_current().returning(|lat, _| {
            if lat > 46.56 {
                Err(WeatherPortError::Network {
                    message: "timed out".into(),
                })
            } else {
                Ok(snowy())
            }
        });

        let scored = service(weather, vec![good, bad])
            .favorites_with_conditions()
            .await
            .unwrap();
        assert_eq!(scored.len(), 2);
        assert!(scored[0].score.is_some());
        assert!(scored[1].score.is_none());
        assert!(scored.iter().all(|s| s.is_favorite));
    }

    #[tokio::test]
    async fn invalid_coordinates_never_reach_provider() {
        let service = service(MockWeather::new(), vec![]);
        assert!(matches!(
            service.daily_forecast(120.0, 0.0).await,
            Err(CoreError::Validation(_))
        ));
    }
}
