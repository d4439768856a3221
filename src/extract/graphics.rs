//! Graphics extraction.

use crate::extract::{non_empty, patterns};
use crate::normalize;

/// Extracts the GPU with detail → title → bullets precedence. The
/// `graphics_coprocessor` detail field is taken as-is when present since
/// it is already a GPU name; free text goes through the pattern table.
pub fn extract(detail: Option<&str>, title: &str, bullets: &str) -> Option<String> {
    if let Some(detail) = non_empty(detail) {
        return Some(normalize::standardize_graphics(detail));
    }

    find(title).or_else(|| find(bullets))
}

fn find(text: &str) -> Option<String> {
    patterns::GRAPHICS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| normalize::standardize_graphics(m.as_str()))
}
