//! Weight extraction.

use crate::extract::{non_empty, patterns};
use crate::validate;

const LBS_PER_KG: f64 = 2.20462;

/// Extracts the weight in pounds as a display string like "3.9 lbs".
///
/// Values outside the plausible window are treated as extraction failures
/// (shipping weights and package dimensions routinely pollute this field).
pub fn extract(
    detail: Option<&str>,
    title: &str,
    bullets: &str,
    min_lbs: f64,
    max_lbs: f64,
) -> Option<String> {
    non_empty(detail)
        .and_then(|d| find(d, min_lbs, max_lbs))
        .or_else(|| find(title, min_lbs, max_lbs))
        .or_else(|| find(bullets, min_lbs, max_lbs))
}

fn find(text: &str, min_lbs: f64, max_lbs: f64) -> Option<String> {
    let caps = patterns::WEIGHT.captures(text)?;
    let value: f64 = caps[1].parse().ok()?;

    let lbs = if caps[2].to_lowercase().starts_with('k') { value * LBS_PER_KG } else { value };

    if !validate::plausible_weight(lbs, min_lbs, max_lbs) {
        return None;
    }

    Some(format!("{} lbs", format_lbs(lbs)))
}

/// Rounds to two decimals and trims trailing zeros: 5.0 → "5", 5.07 → "5.07".
fn format_lbs(lbs: f64) -> String {
    let formatted = format!("{:.2}", lbs);
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{WEIGHT_MAX_LBS, WEIGHT_MIN_LBS};

    fn extract_default(detail: Option<&str>, title: &str, bullets: &str) -> Option<String> {
        extract(detail, title, bullets, WEIGHT_MIN_LBS, WEIGHT_MAX_LBS)
    }

    #[test]
    fn test_pounds_from_detail() {
        assert_eq!(extract_default(Some("5.07 pounds"), "", "").as_deref(), Some("5.07 lbs"));
        assert_eq!(extract_default(Some("4 lbs"), "", "").as_deref(), Some("4 lbs"));
    }

    #[test]
    fn test_kilograms_converted() {
        let result = extract_default(Some("1.8 kg"), "", "").unwrap();
        // 1.8 kg ≈ 3.97 lbs
        assert_eq!(result, "3.97 lbs");
    }

    #[test]
    fn test_title_fallback() {
        assert_eq!(
            extract_default(None, "Ultralight laptop only 2.2 pounds", "").as_deref(),
            Some("2.2 lbs")
        );
    }

    #[test]
    fn test_implausible_discarded() {
        // shipping weight of a pallet, not a laptop
        assert_eq!(extract_default(Some("55 pounds"), "", ""), None);
        assert_eq!(extract_default(Some("0.2 lbs"), "", ""), None);
    }

    #[test]
    fn test_implausible_detail_falls_through_to_title() {
        assert_eq!(
            extract_default(Some("55 pounds"), "laptop at 3.5 lbs", "").as_deref(),
            Some("3.5 lbs")
        );
    }

    #[test]
    fn test_none() {
        assert_eq!(extract_default(None, "Laptop", ""), None);
    }
}
