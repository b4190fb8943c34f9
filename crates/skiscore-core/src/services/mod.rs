//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They don't know
//! about concrete implementations.

mod app_core;
mod favorites_service;
mod resort_service;
mod session_service;
mod settings_service;

pub use app_core::AppCore;
pub use favorites_service::FavoritesService;
pub use resort_service::ResortService;
pub use session_service::SessionService;
pub use settings_service::SettingsService;

#[cfg(test)]
pub(crate) mod fakes;
