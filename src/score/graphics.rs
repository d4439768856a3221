//! Graphics scoring.

use crate::score::first_tier;
use regex_lite::Regex;
use std::sync::LazyLock;

// GPU family tiers, most specific token first. "rtx 40" must precede a
// hypothetical bare "rtx" entry; "iris xe" before "hd graphics"-style
// integrated parts.
static TIERS: &[(&str, f64)] = &[
    ("rtx 40", 86.0),
    ("rtx 30", 78.0),
    ("rtx 20", 70.0),
    ("gtx 16", 60.0),
    ("gtx 10", 52.0),
    ("rx 7", 82.0),
    ("rx 6", 74.0),
    ("rx 5", 60.0),
    ("radeon", 55.0),
    ("m3", 78.0),
    ("m2", 74.0),
    ("m1", 70.0),
    ("iris xe", 52.0),
    ("uhd", 44.0),
    ("hd graphics", 40.0),
    ("integrated", 42.0),
];

static MODEL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:rtx|gtx|rx)\s*(\d{3,4})").unwrap());

/// Scores a normalized graphics string on the canonical [40,100] scale.
///
/// Base score by family tier, refined by the model number's tens digit
/// (a 4070 outranks a 4050) and a Ti bump. Returns 0 when no tier is
/// recognized.
pub fn graphics_score(value: &str) -> f64 {
    let lower = value.trim().to_lowercase();
    if lower.is_empty() {
        return 0.0;
    }

    let Some(mut score) = first_tier(TIERS, &lower) else {
        return 0.0;
    };

    if let Some(model) = MODEL_NUMBER.captures(&lower).and_then(|c| c[1].parse::<u32>().ok()) {
        score += ((model / 10) % 10) as f64;
    }
    if lower.contains(" ti") || lower.ends_with("ti") {
        score += 2.0;
    }

    score.clamp(40.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(graphics_score(""), 0.0);
        assert_eq!(graphics_score("mystery pixels"), 0.0);
    }

    #[test]
    fn test_clamped_range() {
        for value in [
            "NVIDIA RTX 4090",
            "Intel HD Graphics 620",
            "Integrated Graphics",
            "Apple M3 GPU",
        ] {
            let score = graphics_score(value);
            assert!((40.0..=100.0).contains(&score), "{} scored {}", value, score);
        }
    }

    #[test]
    fn test_family_ordering() {
        assert!(graphics_score("NVIDIA RTX 4060") > graphics_score("NVIDIA RTX 3060"));
        assert!(graphics_score("NVIDIA RTX 3060") > graphics_score("NVIDIA GTX 1660"));
        assert!(graphics_score("AMD Radeon RX 7600") > graphics_score("AMD Radeon RX 6600"));
        assert!(graphics_score("Intel Iris Xe Graphics") > graphics_score("Intel UHD Graphics"));
    }

    #[test]
    fn test_model_refinement() {
        assert!(graphics_score("NVIDIA RTX 4070") > graphics_score("NVIDIA RTX 4050"));
        assert!(graphics_score("NVIDIA GTX 1660") > graphics_score("NVIDIA GTX 1650"));
    }

    #[test]
    fn test_ti_bonus() {
        assert!(graphics_score("NVIDIA RTX 3060 Ti") > graphics_score("NVIDIA RTX 3060"));
    }

    #[test]
    fn test_apple_ordering() {
        assert!(graphics_score("Apple M3 GPU") > graphics_score("Apple M2 GPU"));
        assert!(graphics_score("Apple M2 GPU") > graphics_score("Apple M1 GPU"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(graphics_score("NVIDIA RTX 4060"), graphics_score("NVIDIA RTX 4060"));
    }
}
