//! Numeric scores for normalized specification strings.
//!
//! Each dimension has exactly one canonical scale: processor and graphics
//! scores live on a clamped [40,100] band once any tier is recognized, RAM
//! saturates at 100, and storage is an open-ended additive sum. Scores are
//! only comparable within their own dimension. Every scorer is a pure
//! function that returns 0 for empty or unrecognizable input and never
//! panics.

pub mod graphics;
pub mod memory;
pub mod processor;
pub mod storage;

pub use graphics::graphics_score;
pub use memory::ram_score;
pub use processor::processor_score;
pub use storage::storage_score;

/// Scans an ordered tier table and returns the value of the first entry
/// whose token occurs in the (lowercased) input. Table order encodes
/// precedence.
pub(crate) fn first_tier(table: &[(&str, f64)], lower: &str) -> Option<f64> {
    table.iter().find(|(token, _)| lower.contains(token)).map(|(_, score)| *score)
}
