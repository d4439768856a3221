//! RAM scoring.

use regex_lite::Regex;
use std::sync::LazyLock;

static CAPACITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{1,3})\s*gb").unwrap());

static SPEED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})\s*(?:mhz|mt/s)").unwrap());

// Memory generation bonuses; LPDDR entries must precede their DDR
// substrings so the first match is the right one.
static GENERATIONS: &[(&str, f64)] = &[
    ("lpddr5", 7.0),
    ("lpddr4", 3.0),
    ("ddr5", 8.0),
    ("ddr4", 4.0),
    ("ddr3", 1.0),
];

/// Scores a normalized RAM string, saturating at 100.
///
/// Base score by capacity bucket, additive bonuses for memory generation
/// and a detected 4-digit transfer rate (`n × 0.1` points, which dominates
/// and saturates the clamp whenever a rate is listed). Returns 0 when no
/// capacity is found.
pub fn ram_score(value: &str) -> f64 {
    let lower = value.trim().to_lowercase();
    if lower.is_empty() {
        return 0.0;
    }

    let Some(gb) = CAPACITY.captures(&lower).and_then(|c| c[1].parse::<u32>().ok()) else {
        return 0.0;
    };

    let mut score = capacity_score(gb);

    if let Some((_, bonus)) = GENERATIONS.iter().find(|(token, _)| lower.contains(token)) {
        score += bonus;
    }

    if let Some(speed) = SPEED.captures(&lower).and_then(|c| c[1].parse::<f64>().ok()) {
        score += speed * 0.1;
    }

    score.min(100.0)
}

fn capacity_score(gb: u32) -> f64 {
    match gb {
        96.. => 95.0,
        64..=95 => 92.0,
        48..=63 => 88.0,
        32..=47 => 82.0,
        24..=31 => 76.0,
        16..=23 => 70.0,
        12..=15 => 62.0,
        8..=11 => 55.0,
        4..=7 => 30.0,
        _ => 15.0,
    }
}
