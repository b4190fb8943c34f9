//! SOS command handler.

use anyhow::Result;

use skiscore_core::tracker::emergency_message;

use crate::utils::fixes::last_fix;

/// Print the emergency message, using the last fix of `file` as position.
pub async fn execute(file: Option<&str>) -> Result<()> {
    let fix = match file {
        Some(path) => last_fix(path).await?,
        None => None,
    };
    if file.is_some() && fix.is_none() {
        tracing::warn!("track contains no valid fix");
    }
    println!("{}", emergency_message(fix.as_ref()));
    Ok(())
}
