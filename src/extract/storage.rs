//! Storage extraction.

use crate::extract::{non_empty, patterns};
use crate::normalize;

/// Extracts storage with detail → title → bullets precedence.
///
/// The `hard_drive` detail field is parsed leniently (a bare "512 GB"
/// counts); free text must name a drive type or be explicitly labeled.
/// Plausibility checks (TB typos, RAM-sized values) happen downstream in
/// the validation step, not here.
pub fn extract(detail: Option<&str>, title: &str, bullets: &str) -> Option<String> {
    if let Some(detail) = non_empty(detail) {
        if let Some(found) = find(detail) {
            return Some(found);
        }
        if patterns::BARE_CAPACITY.is_match(detail) {
            return Some(normalize::standardize_storage(detail));
        }
    }

    find(title).or_else(|| find(bullets))
}

fn find(text: &str) -> Option<String> {
    patterns::STORAGE
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| normalize::standardize_storage(m.as_str()))
}
