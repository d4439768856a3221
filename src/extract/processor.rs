//! Processor extraction.

use crate::extract::{non_empty, patterns};
use crate::normalize;

/// Extracts the processor with the standard precedence: structured detail
/// field, then title, then bullet points. Returns `None` when no source
/// yields a recognizable CPU.
pub fn extract(detail: Option<&str>, title: &str, bullets: &str) -> Option<String> {
    if let Some(detail) = non_empty(detail) {
        if let Some(found) = find(detail) {
            return Some(found);
        }
        // Details like "2.4 GHz apple_m1 processor" carry no pattern match
        // but are still clearly CPU text; keep them rather than guessing
        // from the title.
        if looks_like_processor(detail) {
            return Some(normalize::standardize_processor(detail));
        }
    }

    find(title).or_else(|| find(bullets))
}

/// Runs the ordered processor pattern table; first match wins.
fn find(text: &str) -> Option<String> {
    patterns::PROCESSOR
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| normalize::standardize_processor(m.as_str()))
}

fn looks_like_processor(detail: &str) -> bool {
    let lower = detail.to_lowercase();
    ["ghz", "processor", "cpu", "core"].iter().any(|kw| lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_takes_precedence() {
        let result = extract(
            Some("AMD Ryzen 7 5800H"),
            "Laptop with Intel Core i5-1135G7",
            "",
        );
        assert_eq!(result.as_deref(), Some("AMD Ryzen 7 5800H"));
    }

    #[test]
    fn test_title_fallback() {
        let result = extract(None, "Gaming Laptop, Intel Core i7-12700H, 16GB", "");
        assert_eq!(result.as_deref(), Some("Intel Core i7-12700H"));
    }

    #[test]
    fn test_bullet_fallback() {
        let result = extract(None, "Some Gaming Laptop", "Powered by AMD Ryzen 5 5600H CPU");
        assert_eq!(result.as_deref(), Some("AMD Ryzen 5 5600H"));
    }

    #[test]
    fn test_unmatched_cpu_detail_kept() {
        let result = extract(Some("1.2 GHz something_unusual processor"), "Laptop", "");
        assert!(result.is_some());
    }

    #[test]
    fn test_garbage_detail_falls_through() {
        let result = extract(Some("see description"), "Laptop with Apple M2 chip", "");
        assert_eq!(result.as_deref(), Some("Apple M2"));
    }

    #[test]
    fn test_shorthand_expanded() {
        let result = extract(None, "Thin laptop i7-1270H 14 inch", "");
        assert_eq!(result.as_deref(), Some("Intel Core i7-1270H"));
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(extract(None, "Mystery Laptop 14 inch", ""), None);
        assert_eq!(extract(Some(""), "", ""), None);
    }
}
