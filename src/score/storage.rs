//! Storage scoring.

use crate::score::first_tier;
use regex_lite::Regex;
use std::sync::LazyLock;

static CAPACITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(tb|gb)").unwrap());

// Interface/type points, fastest token first so "PCIe Gen4 NVMe SSD"
// takes the Gen4 score rather than the plain SSD one.
static TYPES: &[(&str, f64)] = &[
    ("gen4", 52.0),
    ("gen3", 48.0),
    ("pcie", 46.0),
    ("nvme", 45.0),
    ("m.2", 40.0),
    ("ssd", 35.0),
    ("emmc", 15.0),
    ("hdd", 10.0),
];

/// Scores a normalized storage string as an open-ended additive sum of
/// type points, capacity points, and a dual-drive bonus. Returns 0 when
/// neither a type nor a capacity is recognized.
pub fn storage_score(value: &str) -> f64 {
    let lower = value.trim().to_lowercase();
    if lower.is_empty() {
        return 0.0;
    }

    let type_score = first_tier(TYPES, &lower);
    let capacity = largest_capacity_gb(&lower);

    if type_score.is_none() && capacity.is_none() {
        return 0.0;
    }

    let mut score = type_score.unwrap_or(0.0) + capacity.map_or(0.0, capacity_score);

    if lower.contains('+') || (lower.contains("ssd") && lower.contains("hdd")) {
        score += 8.0;
    }

    score
}

/// Largest capacity mentioned, in GB (1 TB = 1000 GB). Dual-drive
/// listings score on the bigger drive.
fn largest_capacity_gb(lower: &str) -> Option<f64> {
    CAPACITY
        .captures_iter(lower)
        .filter_map(|caps| {
            let n: f64 = caps[1].parse().ok()?;
            Some(if &caps[2] == "tb" { n * 1000.0 } else { n })
        })
        .fold(None, |acc, gb| Some(acc.map_or(gb, |a: f64| a.max(gb))))
}

fn capacity_score(gb: f64) -> f64 {
    if gb >= 4000.0 {
        45.0
    } else if gb >= 2000.0 {
        40.0
    } else if gb >= 1000.0 {
        34.0
    } else if gb >= 512.0 {
        26.0
    } else if gb >= 256.0 {
        18.0
    } else if gb >= 128.0 {
        12.0
    } else if gb >= 64.0 {
        8.0
    } else if gb >= 32.0 {
        5.0
    } else {
        2.0
    }
}
