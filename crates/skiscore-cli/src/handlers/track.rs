//! Track command handler: feed a CSV track through the tracker service.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use skiscore_core::domain::session::format_duration;
use skiscore_core::tracker::{DEFAULT_TICK, TimeSource};
use skiscore_core::{NewSkiSession, TrackerConfig, TrackingSnapshot};

use crate::bootstrap::CliContext;
use crate::utils::fixes::FixReader;

/// Options for the track command.
#[derive(Debug, Clone, Default)]
pub struct TrackOptions {
    pub follow: bool,
    pub live: bool,
    pub no_save: bool,
}

pub async fn execute(ctx: &CliContext, file: &str, options: TrackOptions) -> Result<()> {
    let mut reader = FixReader::open(file).await?;
    let time_source = if options.live {
        TimeSource::Wall
    } else {
        TimeSource::Fixes
    };
    let tracker = ctx
        .app()
        .start_tracking(TrackerConfig::default().with_time_source(time_source));
    let printer = options
        .follow
        .then(|| spawn_snapshot_printer(tracker.subscribe(), DEFAULT_TICK));

    let mut fixes = 0usize;
    loop {
        tokio::select! {
            next = reader.next_fix() => match next? {
                Some(fix) => {
                    tracker.submit(fix).await?;
                    fixes += 1;
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                println!("\nInterrupted, finishing session.");
                break;
            }
        }
    }

    let session = tracker.stop().await?;
    if let Some(printer) = printer {
        printer.await?;
    }

    if reader.skipped() > 0 {
        println!("Skipped {} malformed line(s).", reader.skipped());
    }
    if fixes == 0 {
        println!("No fixes read, nothing to record.");
        return Ok(());
    }

    print_summary(&session, fixes);

    if options.no_save {
        println!("\nSession not saved (--no-save).");
    } else {
        let stored = ctx.app().sessions().record(&session).await?;
        println!("\n✓ Session saved to diary (ID: {}).", stored.id);
    }
    Ok(())
}

/// Print the latest snapshot once per `period` until the tracker stops.
fn spawn_snapshot_printer(mut rx: watch::Receiver<TrackingSnapshot>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    println!("{}", snapshot_line(&rx.borrow()));
                }
            }
        }
    })
}

fn snapshot_line(s: &TrackingSnapshot) -> String {
    let lift = if s.riding_lift { " [impianto]" } else { "" };
    format!(
        "{} | {:>5.1} km/h | {:>6.2} km | max {:>5.1} km/h | {:>5.0} m{lift}",
        format_duration(s.elapsed_ms),
        s.speed_kmh,
        s.distance_km,
        s.max_speed_kmh,
        s.altitude_m,
    )
}

fn print_summary(session: &NewSkiSession, fixes: usize) {
    println!("\nSessione ({fixes} fix)");
    println!("  Durata:       {}", format_duration(session.duration_ms));
    println!("  Distanza:     {:.2} km", session.distance_km);
    println!("  Velocità max: {:.1} km/h", session.max_speed_kmh);
    println!("  Velocità media: {:.1} km/h", session.avg_speed_kmh);
    println!("  Dislivello:   {:.0} m", session.vertical_drop_m);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::testing::test_context;

    fn write_track(dir: &tempfile::TempDir, body: &str) -> String {
        let path = dir.path().join("track.csv");
        std::fs::write(&path, body).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn descent() -> String {
        let mut body = String::from("timestamp_ms,lat,lon,altitude_m,speed_mps\n");
        for i in 0..10_i32 {
            body.push_str(&format!(
                "{},{:.6},10.1,{:.1},\n",
                1_736_500_000_000_i64 + i64::from(i) * 3000,
                46.5 + f64::from(i) * 0.0002,
                2000.0 - f64::from(i) * 6.0,
            ));
        }
        body
    }

    #[tokio::test]
    async fn test_track_records_session() {
        let ctx = test_context().await;
        let dir = tempfile::tempdir().unwrap();
        let file = write_track(&dir, &descent());

        execute(&ctx, &file, TrackOptions::default()).await.unwrap();

        let sessions = ctx.app().sessions().list(None).await.unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].duration_ms, 27_000);
        assert!((sessions[0].vertical_drop_m - 54.0).abs() < 1e-6);
        assert!(sessions[0].distance_km > 0.19 && sessions[0].distance_km < 0.21);
    }

    #[tokio::test]
    async fn test_no_save_and_follow() {
        let ctx = test_context().await;
        let dir = tempfile::tempdir().unwrap();
        let file = write_track(&dir, &descent());

        let options = TrackOptions {
            follow: true,
            no_save: true,
            ..TrackOptions::default()
        };
        execute(&ctx, &file, options).await.unwrap();
        assert!(ctx.app().sessions().list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_finite_altitude_is_skipped() {
        let ctx = test_context().await;
        let dir = tempfile::tempdir().unwrap();
        let body = "\
1736500000000,46.5000,10.1,2000.0
1736500003000,46.5002,10.1,inf
1736500006000,46.5004,10.1,NaN
1736500009000,46.5006,10.1,1990.0
";
        let file = write_track(&dir, body);

        execute(&ctx, &file, TrackOptions::default()).await.unwrap();

        let sessions = ctx.app().sessions().list(None).await.unwrap();
        assert_eq!(sessions.len(), 1);
        assert!((sessions[0].vertical_drop_m - 10.0).abs() < 1e-6);
        assert_eq!(sessions[0].duration_ms, 9000);
    }

    #[tokio::test]
    async fn test_empty_track_is_not_recorded() {
        let ctx = test_context().await;
        let dir = tempfile::tempdir().unwrap();
        let file = write_track(&dir, "# nothing here\nbad,line\n");

        execute(&ctx, &file, TrackOptions::default()).await.unwrap();
        assert!(ctx.app().sessions().list(None).await.unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_line() {
        let line = snapshot_line(&TrackingSnapshot {
            speed_kmh: 32.4,
            distance_km: 1.5,
            elapsed_ms: 61_000,
            max_speed_kmh: 48.0,
            avg_speed_kmh: 25.0,
            riding_lift: true,
            altitude_m: 2105.0,
        });
        assert!(line.starts_with("00:01:01 |"));
        assert!(line.ends_with("[impianto]"));
    }
}
