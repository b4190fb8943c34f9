//! User input utilities for interactive prompts.

use anyhow::{Context, Result};
use std::io::{self, Write};

/// Ask a yes/no question. Only `y` or `yes` (any case) confirms.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;

    Ok(is_yes(&input))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
