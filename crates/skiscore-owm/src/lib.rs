//! HTTP client for OpenWeatherMap (current conditions and the 5-day/3-hour
//! forecast) and Open-Meteo geocoding.
//!
//! The client implements [`skiscore_core::WeatherPort`]; build one with
//! [`DefaultOwmClient::new`] and hand it to `AppCore` as a trait object.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultOwmClient is used through WeatherPort, not its generic structure.
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod mapping;
mod models;
mod port;
mod url;

pub use client::DefaultOwmClient;
pub use config::OwmClientConfig;
pub use error::OwmError;
