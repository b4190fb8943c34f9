//! Core domain for SkiScore: resorts, weather, the skiability score,
//! forecast aggregation, webcams, session tracking, ports and services.
//!
//! Adapter crates implement the ports (`skiscore-owm` for weather,
//! `skiscore-db` for storage) and the CLI wires them into [`AppCore`].
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod forecast;
pub mod paths;
pub mod ports;
pub mod scoring;
pub mod services;
pub mod settings;
pub mod tracker;
pub mod webcams;

pub use domain::{
    CurrentWeather, DailyForecast, ForecastSlot, LocationMatch, NewSkiSession, ScoredResort,
    SeasonStats, SkiResort, SkiSession, WeatherCondition,
};
pub use ports::{
    CoreError, FavoritesRepository, Repos, RepositoryError, SessionRepository, SettingsRepository,
    WeatherPort, WeatherPortError, WeatherPortResult,
};
pub use scoring::{ScoreCategory, ScoreRating, SkiScore};
pub use services::{AppCore, FavoritesService, ResortService, SessionService, SettingsService};
pub use settings::{Settings, SettingsError, SettingsUpdate, validate_settings};
pub use tracker::{LocationFix, SessionTracker, TrackerConfig, TrackerService, TrackingSnapshot};
pub use webcams::{StreamType, Webcam};

pub use paths::{PathError, ResolvedPaths, data_root, database_path, env_file_path, persist_env_value};
