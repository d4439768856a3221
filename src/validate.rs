//! Plausibility checks for syntactically valid but suspicious values.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Warning attached when a storage value looks like a mislabeled RAM size.
pub const LIKELY_RAM: &str = "Likely RAM";

/// Warning attached when a TB-scale typo was rewritten to GB.
pub const CORRECTED_TB: &str = "Corrected from TB → GB";

/// Default lower bound of the plausible laptop weight window, in pounds.
pub const WEIGHT_MIN_LBS: f64 = 0.5;

/// Default upper bound of the plausible laptop weight window, in pounds.
pub const WEIGHT_MAX_LBS: f64 = 8.0;

// Laptops do not ship with hundreds of terabytes; these sizes are
// near-certain GB/TB typos.
static TB_TYPO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(128|256|512)\s*tb\b").unwrap());

// A bare capacity in a common RAM bucket, with no storage type mentioned.
static BARE_RAM_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(4|8|12|16|24|32|64)\s*gb\s*$").unwrap());

/// A value that passed through validation, possibly rewritten and possibly
/// carrying a warning annotation for the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedValue {
    pub value: String,
    pub warning: Option<&'static str>,
}

impl CheckedValue {
    fn accepted(value: impl Into<String>) -> Self {
        Self { value: value.into(), warning: None }
    }

    fn flagged(value: impl Into<String>, warning: &'static str) -> Self {
        Self { value: value.into(), warning: Some(warning) }
    }
}

/// Checks an extracted storage value for the two known failure modes:
/// a 128/256/512 TB unit typo (auto-corrected to GB) and a bare RAM-sized
/// "N GB" with no SSD mention (kept, but flagged).
pub fn check_storage(value: &str) -> CheckedValue {
    if TB_TYPO.is_match(value) {
        let corrected = TB_TYPO
            .replace_all(value, |caps: &regex_lite::Captures| format!("{}GB", &caps[1]))
            .into_owned();
        return CheckedValue::flagged(corrected, CORRECTED_TB);
    }

    if BARE_RAM_SIZE.is_match(value) && !value.to_lowercase().contains("ssd") {
        return CheckedValue::flagged(value, LIKELY_RAM);
    }

    CheckedValue::accepted(value)
}

/// Returns true when a weight in pounds falls inside the plausible window.
/// Implausible weights are treated as extraction failures, not displayed.
pub fn plausible_weight(lbs: f64, min_lbs: f64, max_lbs: f64) -> bool {
    lbs >= min_lbs && lbs <= max_lbs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tb_typo_corrected() {
        for (input, expected) in [
            ("512 TB SSD", "512GB SSD"),
            ("256TB", "256GB"),
            ("128 tb ssd", "128GB ssd"),
        ] {
            let checked = check_storage(input);
            assert_eq!(checked.value, expected);
            assert_eq!(checked.warning, Some(CORRECTED_TB));
        }
    }

    #[test]
    fn test_real_tb_sizes_untouched() {
        for input in ["1TB SSD", "2TB NVMe SSD", "4TB HDD"] {
            let checked = check_storage(input);
            assert_eq!(checked.value, input);
            assert!(checked.warning.is_none());
        }
    }

    #[test]
    fn test_bare_ram_size_flagged() {
        for input in ["16GB", "8 GB", "32GB"] {
            let checked = check_storage(input);
            assert_eq!(checked.value, input);
            assert_eq!(checked.warning, Some(LIKELY_RAM));
        }
    }

    #[test]
    fn test_ram_size_with_ssd_accepted() {
        let checked = check_storage("32GB SSD");
        assert!(checked.warning.is_none());
    }

    #[test]
    fn test_uncommon_bare_size_accepted() {
        // 512 is not a RAM bucket; a bare "512GB" is plausible storage
        let checked = check_storage("512GB");
        assert!(checked.warning.is_none());
    }

    #[test]
    fn test_corrected_value_not_reflagged() {
        // 256GB after correction is not a RAM bucket size
        let checked = check_storage("256TB");
        assert_eq!(checked.value, "256GB");
        assert_eq!(checked.warning, Some(CORRECTED_TB));
    }

    #[test]
    fn test_weight_window() {
        assert!(plausible_weight(3.9, WEIGHT_MIN_LBS, WEIGHT_MAX_LBS));
        assert!(plausible_weight(0.5, WEIGHT_MIN_LBS, WEIGHT_MAX_LBS));
        assert!(plausible_weight(8.0, WEIGHT_MIN_LBS, WEIGHT_MAX_LBS));
        assert!(!plausible_weight(0.2, WEIGHT_MIN_LBS, WEIGHT_MAX_LBS));
        assert!(!plausible_weight(55.0, WEIGHT_MIN_LBS, WEIGHT_MAX_LBS));
    }
}
