//! Domain types for SkiScore.
//!
//! These types represent the core domain model, independent of any
//! infrastructure concerns (HTTP payloads, database rows, terminal output).

pub mod resort;
pub mod session;
pub mod weather;

pub use resort::{LocationMatch, ScoredResort, SkiResort};
pub use session::{NewSkiSession, SeasonStats, SkiSession};
pub use weather::{CurrentWeather, DailyForecast, ForecastSlot, WeatherCondition, icon_url};
