//! Reading GPS fixes from CSV tracks.

use anyhow::{Context, Result};
use skiscore_core::LocationFix;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

type LineSource = Lines<BufReader<Box<dyn AsyncRead + Unpin + Send>>>;

/// Line-by-line fix reader over a file or stdin.
///
/// Malformed lines are logged and counted, not fatal.
pub struct FixReader {
    lines: LineSource,
    line_no: usize,
    skipped: usize,
}

impl FixReader {
    /// Open `path`, or stdin when `path` is `-`.
    pub async fn open(path: &str) -> Result<Self> {
        let source: Box<dyn AsyncRead + Unpin + Send> = if path == "-" {
            Box::new(tokio::io::stdin())
        } else {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open track file '{path}'"))?;
            Box::new(file)
        };
        Ok(Self::from_reader(source))
    }

    pub fn from_reader(source: Box<dyn AsyncRead + Unpin + Send>) -> Self {
        Self {
            lines: BufReader::new(source).lines(),
            line_no: 0,
            skipped: 0,
        }
    }

    /// Next valid fix, or `None` at end of input.
    pub async fn next_fix(&mut self) -> Result<Option<LocationFix>> {
        while let Some(line) = self
            .lines
            .next_line()
            .await
            .context("Failed to read track")?
        {
            self.line_no += 1;
            match LocationFix::parse_csv_line(&line) {
                None => {}
                Some(Ok(fix)) => return Ok(Some(fix)),
                Some(Err(reason)) => {
                    self.skipped += 1;
                    tracing::warn!(line = self.line_no, %reason, "skipping malformed fix");
                }
            }
        }
        Ok(None)
    }

    /// Number of malformed lines skipped so far.
    pub const fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Last valid fix of a track.
pub async fn last_fix(path: &str) -> Result<Option<LocationFix>> {
    let mut reader = FixReader::open(path).await?;
    let mut last = None;
    while let Some(fix) = reader.next_fix().await? {
        last = Some(fix);
    }
    Ok(last)
}
