//! Processor scoring.

use crate::score::first_tier;
use regex_lite::Regex;
use std::sync::LazyLock;

// Base score per family tier, first match wins. Sibling Intel/AMD tiers
// share a base; Apple silicon sits between the i7 and i9 bands.
static TIERS: &[(&str, f64)] = &[
    ("m4", 92.0),
    ("m3", 88.0),
    ("m2", 82.0),
    ("m1", 76.0),
    ("i9", 88.0),
    ("ryzen 9", 88.0),
    ("i7", 78.0),
    ("ryzen 7", 78.0),
    ("i5", 66.0),
    ("ryzen 5", 66.0),
    ("i3", 52.0),
    ("ryzen 3", 52.0),
    ("pentium", 45.0),
    ("snapdragon", 50.0),
    ("octa-core", 50.0),
    ("mediatek", 45.0),
    ("celeron", 40.0),
];

static INTEL_MODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"i[3579][-\s](\d{4,5})").unwrap());

static RYZEN_MODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ryzen\s+[3579]\s+(\d{4})").unwrap());

static SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{3,5}(hx|hs|h)\b").unwrap());

/// Scores a normalized processor string on the canonical [40,100] scale.
///
/// Base score by tier, additive bonuses for a recent generation number and
/// performance suffix letters (H/HX). Returns 0 when no tier is recognized.
pub fn processor_score(value: &str) -> f64 {
    let lower = value.trim().to_lowercase();
    if lower.is_empty() {
        return 0.0;
    }

    let mut score = if lower.contains("core ultra") {
        // Core Ultra sits above the classic i-series bands
        if lower.contains("ultra 9") {
            96.0
        } else if lower.contains("ultra 7") {
            90.0
        } else {
            84.0
        }
    } else {
        match first_tier(TIERS, &lower) {
            Some(base) => base,
            None => return 0.0,
        }
    };

    score += generation_bonus(&lower);
    score += apple_variant_bonus(&lower);
    score += suffix_bonus(&lower);

    score.clamp(40.0, 100.0)
}

/// Bonus for newer silicon generations, capped so the tier still dominates.
fn generation_bonus(lower: &str) -> f64 {
    if let Some(caps) = INTEL_MODEL.captures(lower) {
        let digits = &caps[1];
        let gen = if digits.len() == 5 {
            digits[..2].parse::<u32>().unwrap_or(0)
        } else {
            // 4-digit models: 11xx-14xx carry a two-digit generation,
            // older 9xxx-style models a single leading digit
            let two: u32 = digits[..2].parse().unwrap_or(0);
            if (10..=14).contains(&two) { two } else { digits[..1].parse().unwrap_or(0) }
        };
        return ((gen.saturating_sub(8)) as f64 * 1.5).min(6.0);
    }

    if let Some(caps) = RYZEN_MODEL.captures(lower) {
        let series: u32 = caps[1][..1].parse().unwrap_or(0);
        return ((series.saturating_sub(4)) as f64).min(4.0);
    }

    0.0
}

fn apple_variant_bonus(lower: &str) -> f64 {
    if !lower.contains("m1") && !lower.contains("m2") && !lower.contains("m3") && !lower.contains("m4")
    {
        return 0.0;
    }
    if lower.contains("ultra") {
        9.0
    } else if lower.contains("max") {
        7.0
    } else if lower.contains("pro") {
        4.0
    } else {
        0.0
    }
}

fn suffix_bonus(lower: &str) -> f64 {
    match SUFFIX.captures(lower).map(|caps| caps[1].to_string()).as_deref() {
        Some("hx") => 5.0,
        Some("hs") => 4.0,
        Some("h") => 3.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(processor_score(""), 0.0);
        assert_eq!(processor_score("   "), 0.0);
        assert_eq!(processor_score("mystery chip"), 0.0);
    }

    #[test]
    fn test_clamped_range() {
        for value in [
            "Intel Core i3-1115G4",
            "Intel Core i9-13980HX",
            "Intel Celeron N4020",
            "Apple M3 Max",
            "Intel Core Ultra 9 185H",
        ] {
            let score = processor_score(value);
            assert!((40.0..=100.0).contains(&score), "{} scored {}", value, score);
        }
    }

    #[test]
    fn test_tier_ordering() {
        assert!(processor_score("Intel Core i9-12900H") > processor_score("Intel Core i7-12700H"));
        assert!(processor_score("Intel Core i7-12700H") > processor_score("Intel Core i5-1235U"));
        assert!(processor_score("AMD Ryzen 7 5800H") > processor_score("AMD Ryzen 5 5600H"));
        assert!(processor_score("Intel Pentium Gold") > processor_score("Intel Celeron N4500"));
    }

    #[test]
    fn test_apple_silicon_ordering() {
        // M3 ≥ M2 ≥ M1 for identical variant suffixes
        for variant in ["", " Pro", " Max", " Ultra"] {
            let m3 = processor_score(&format!("Apple M3{}", variant));
            let m2 = processor_score(&format!("Apple M2{}", variant));
            let m1 = processor_score(&format!("Apple M1{}", variant));
            assert!(m3 >= m2, "M3{v} < M2{v}", v = variant);
            assert!(m2 >= m1, "M2{v} < M1{v}", v = variant);
            assert!((40.0..=100.0).contains(&m3));
            assert!((40.0..=100.0).contains(&m1));
        }
    }

    #[test]
    fn test_core_ultra_tiers() {
        let u9 = processor_score("Intel Core Ultra 9 185H");
        let u7 = processor_score("Intel Core Ultra 7 155H");
        let u5 = processor_score("Intel Core Ultra 5 125H");
        assert!(u9 > u7);
        assert!(u7 > u5);
    }

    #[test]
    fn test_generation_bonus() {
        assert!(processor_score("Intel Core i7-13700H") > processor_score("Intel Core i7-9750H"));
        assert!(processor_score("AMD Ryzen 7 7840HS") > processor_score("AMD Ryzen 7 4800H"));
    }

    #[test]
    fn test_suffix_bonus() {
        assert!(
            processor_score("Intel Core i9-13980HX") >= processor_score("Intel Core i9-13900H")
        );
    }

    #[test]
    fn test_deterministic() {
        let a = processor_score("AMD Ryzen 9 6900HX");
        let b = processor_score("AMD Ryzen 9 6900HX");
        assert_eq!(a, b);
    }
}
