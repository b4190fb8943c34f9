//! Input helpers shared by handlers.

pub mod fixes;
pub mod input;
