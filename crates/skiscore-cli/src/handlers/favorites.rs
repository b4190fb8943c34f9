//! Favourites command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::FavoritesCommand;
use crate::presentation::{print_separator, score_cell, truncate_string};

pub async fn execute(ctx: &CliContext, command: FavoritesCommand) -> Result<()> {
    match command {
        FavoritesCommand::List => list(ctx).await,
        FavoritesCommand::Add { resort } => {
            let resort = resort.to_resort();
            if ctx.app().favorites().add(&resort).await? {
                println!("★ {} added to favourites.", resort.name);
            } else {
                println!("{} is already a favourite.", resort.name);
            }
            Ok(())
        }
        FavoritesCommand::Remove { resort } => {
            let resort = resort.to_resort();
            if ctx.app().favorites().remove(&resort.key()).await? {
                println!("✓ {} removed from favourites.", resort.name);
            } else {
                println!("{} is not a favourite.", resort.name);
            }
            Ok(())
        }
        FavoritesCommand::Toggle { resort } => {
            let resort = resort.to_resort();
            if ctx.app().favorites().toggle(&resort).await? {
                println!("★ {} added to favourites.", resort.name);
            } else {
                println!("✓ {} removed from favourites.", resort.name);
            }
            Ok(())
        }
    }
}

async fn list(ctx: &CliContext) -> Result<()> {
    let favorites = ctx.app().resorts().favorites_with_conditions().await?;

    if favorites.is_empty() {
        println!("No favourites yet.");
        println!("Use 'skiscore favorites add <lat> <lon> --name <name>' to add one.");
        return Ok(());
    }

    println!("{:<36} {:>9} {:>9}  Score", "Resort", "Lat", "Lon");
    print_separator(75);
    for fav in &favorites {
        println!(
            "{:<36} {:>9.4} {:>9.4}  {}",
            truncate_string(&fav.resort.name, 35),
            fav.resort.latitude,
            fav.resort.longitude,
            score_cell(fav.score.as_ref()),
        );
    }
    if favorites.iter().any(|f| f.score.is_none()) {
        println!("\n-- conditions unavailable (see log with --verbose)");
    }
    Ok(())
}
