//! Search command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{format_optional, print_separator, truncate_string};

pub async fn execute(ctx: &CliContext, query: &str, count: Option<u32>) -> Result<()> {
    let matches = ctx.app().resorts().search(query, count).await?;

    if matches.is_empty() {
        println!("No places found for '{}'.", query.trim());
        return Ok(());
    }

    println!("Found {} place(s):\n", matches.len());
    println!("{:<3} {:<45} {:>10} {:>10} {:>8}", "#", "Name", "Lat", "Lon", "Elev m");
    print_separator(80);

    for (i, m) in matches.iter().enumerate() {
        println!(
            "{:<3} {:<45} {:>10.4} {:>10.4} {:>8}",
            i + 1,
            truncate_string(&m.display_name(), 44),
            m.latitude,
            m.longitude,
            format_optional(m.elevation.map(f64::round).as_ref(), "--"),
        );
    }

    if let Some(first) = matches.first() {
        println!(
            "\nConditions: skiscore weather {:.4} {:.4} --name \"{}\"",
            first.latitude, first.longitude, first.name
        );
    }
    Ok(())
}
