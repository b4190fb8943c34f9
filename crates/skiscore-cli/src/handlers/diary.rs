//! Diary command handler: recorded sessions and season statistics.

use anyhow::Result;

use skiscore_core::domain::session::format_duration;

use crate::bootstrap::CliContext;
use crate::commands::DiaryCommand;
use crate::presentation::print_separator;
use crate::utils::input::prompt_confirmation;

pub async fn execute(ctx: &CliContext, command: Option<DiaryCommand>, limit: Option<usize>) -> Result<()> {
    match command {
        Some(DiaryCommand::Delete { id, force }) => delete(ctx, id, force).await,
        None => list(ctx, limit).await,
    }
}

async fn list(ctx: &CliContext, limit: Option<usize>) -> Result<()> {
    let sessions = ctx.app().sessions().list(limit).await?;
    let stats = ctx.app().sessions().season_stats().await?;

    println!("Stagione");
    println!("  Distanza totale: {:.2} km", stats.total_distance_km);
    println!("  Velocità max:    {:.1} km/h", stats.max_speed_kmh);
    println!("  Giorni sciati:   {}", stats.days_skied);
    println!();

    if sessions.is_empty() {
        println!("No sessions recorded yet.");
        println!("Use 'skiscore track <file.csv>' to record one.");
        return Ok(());
    }

    println!(
        "{:<5} {:<17} {:>9} {:>10} {:>11} {:>11} {:>10}",
        "ID", "Data", "Durata", "Distanza", "Vel. max", "Vel. media", "Dislivello"
    );
    print_separator(80);
    for s in &sessions {
        println!(
            "{:<5} {:<17} {:>9} {:>7.2} km {:>6.1} km/h {:>6.1} km/h {:>8.0} m",
            s.id,
            s.recorded_at.format("%Y-%m-%d %H:%M"),
            format_duration(s.duration_ms),
            s.distance_km,
            s.max_speed_kmh,
            s.avg_speed_kmh,
            s.vertical_drop_m,
        );
    }
    Ok(())
}

async fn delete(ctx: &CliContext, id: i64, force: bool) -> Result<()> {
    if !force && !prompt_confirmation(&format!("Delete session {id}?"))? {
        println!("Delete cancelled.");
        return Ok(());
    }
    ctx.app().sessions().delete(id).await?;
    println!("✓ Session {id} deleted.");
    Ok(())
}
