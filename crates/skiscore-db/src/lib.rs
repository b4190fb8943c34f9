//! `SQLite` storage for SkiScore: the session diary, favourite resorts and
//! settings.
//!
//! Entry points open the database with [`setup_database`] and turn the pool
//! into core repositories with [`CoreFactory::build_repos`].
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

pub use factory::CoreFactory;

pub use repositories::{
    SqliteFavoritesRepository, SqliteSessionRepository, SqliteSettingsRepository,
};

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
