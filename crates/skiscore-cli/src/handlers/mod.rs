//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow the pattern `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`:
//! parse CLI-specific input, call core services, format output. They never
//! touch repositories or the database directly.

pub mod config;
pub mod diary;
pub mod favorites;
pub mod forecast;
pub mod paths;
pub mod search;
pub mod sos;
pub mod track;
pub mod weather;
pub mod webcams;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::Units;

/// Display units from the stored settings.
pub(crate) async fn display_units(ctx: &CliContext) -> Result<Units> {
    let settings = ctx.app().settings().get().await?;
    Ok(Units::from_setting(settings.effective_units()))
}
