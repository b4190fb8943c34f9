//! Paths command handler.
//!
//! Displays resolved paths for diagnostics.

use anyhow::Result;

use skiscore_core::paths::ResolvedPaths;

/// Print all paths in `key = value` format.
pub fn execute() -> Result<()> {
    let paths = ResolvedPaths::resolve()?;
    println!("{paths}");
    Ok(())
}
