//! Table formatting utilities for CLI output.

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// ```rust
/// use skiscore_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Livigno", 10), "Livigno");
/// assert_eq!(truncate_string("Cortina d'Ampezzo", 10), "Cortina...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<&T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_string("Mercoledì", 9), "Mercoledì");
        assert_eq!(truncate_string("Mercoledì sera", 9), "Mercol...");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(&1816.0), "--"), "1816");
        assert_eq!(format_optional::<f64>(None, "--"), "--");
    }
}
