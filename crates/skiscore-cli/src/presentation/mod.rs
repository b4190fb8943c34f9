//! Shared CLI presentation utilities.
//!
//! Format-only: no domain transforms here.

pub mod conditions;
pub mod tables;
pub mod units;

pub use conditions::{category_marker, print_score_breakdown, score_cell};
pub use tables::{format_optional, print_separator, truncate_string};
pub use units::Units;
