//! RAM extraction.

use crate::extract::{non_empty, patterns};
use crate::normalize;

/// Extracts RAM with detail → title → bullets precedence.
///
/// The structured detail field is parsed leniently (a bare "16 GB" counts);
/// free text must match the stricter typed/labeled patterns so storage
/// capacities are not mistaken for memory.
pub fn extract(detail: Option<&str>, title: &str, bullets: &str) -> Option<String> {
    if let Some(detail) = non_empty(detail) {
        if let Some(found) = find(detail) {
            return Some(found);
        }
        if patterns::BARE_CAPACITY.is_match(detail) {
            return Some(normalize::standardize_ram(detail));
        }
    }

    find(title).or_else(|| find(bullets))
}

fn find(text: &str) -> Option<String> {
    patterns::RAM
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| normalize::standardize_ram(m.as_str()))
}
