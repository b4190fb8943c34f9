//! Repository implementations using `SQLite`.
//!
//! All SQL lives here. The `SqlitePool` never appears in port signatures.

mod row_mappers;
mod sqlite_favorites_repository;
mod sqlite_session_repository;
mod sqlite_settings_repository;

pub use sqlite_favorites_repository::SqliteFavoritesRepository;
pub use sqlite_session_repository::SqliteSessionRepository;
pub use sqlite_settings_repository::SqliteSettingsRepository;
