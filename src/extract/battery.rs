//! Battery life extraction.

use crate::extract::{non_empty, patterns};

/// Extracts the claimed battery runtime as a display string like "18 hours".
///
/// The structured `batteries` detail is parsed leniently (it occasionally
/// carries an hours figure alongside the cell chemistry). Free text must
/// mention a battery; a bare hours figure in a title is usually a shipping
/// or warranty claim.
pub fn extract(detail: Option<&str>, title: &str, bullets: &str) -> Option<String> {
    non_empty(detail)
        .and_then(find_hours)
        .or_else(|| find_in_text(title))
        .or_else(|| find_in_text(bullets))
}

fn find_hours(text: &str) -> Option<String> {
    let caps = patterns::BATTERY_LIFE.captures(text)?;
    Some(format!("{} hours", &caps[1]))
}

fn find_in_text(text: &str) -> Option<String> {
    if !text.to_lowercase().contains("battery") {
        return None;
    }
    find_hours(text)
}
