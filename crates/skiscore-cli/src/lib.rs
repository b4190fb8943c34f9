//! SkiScore command-line adapter.
//!
//! `main.rs` is the composition root; handlers reach core services through
//! [`CliContext`].
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use tempfile as _;

// Used by main.rs only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod config_commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::{Commands, DiaryCommand, FavoritesCommand, ResortArgs};
pub use config_commands::{ConfigCommand, SettingsCommand};
pub use error::CliError;
pub use parser::Cli;
