//! Pairwise specification comparisons.
//!
//! Each function judges two raw specification strings of the same field
//! and answers from the perspective of the first argument. No match on
//! either side yields [`Verdict::Unknown`], never `Equal`.

use regex_lite::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Outcome of comparing one field between two products, from the
/// perspective of the first product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Better,
    Worse,
    Equal,
    Unknown,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Better => "better",
            Verdict::Worse => "worse",
            Verdict::Equal => "equal",
            Verdict::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

impl Verdict {
    fn from_ordering(ord: std::cmp::Ordering) -> Self {
        match ord {
            std::cmp::Ordering::Greater => Verdict::Better,
            std::cmp::Ordering::Less => Verdict::Worse,
            std::cmp::Ordering::Equal => Verdict::Equal,
        }
    }

    /// Flips the perspective, so "lighter is better" comparisons can
    /// reuse the numeric helpers.
    fn invert(self) -> Self {
        match self {
            Verdict::Better => Verdict::Worse,
            Verdict::Worse => Verdict::Better,
            other => other,
        }
    }
}

// Processor families by relative rank, weakest first. The index in this
// table is the tier; Core Ultra is handled separately and outranks
// everything here.
static PROCESSOR_TIERS: &[&str] = &[
    "celeron", "pentium", "i3", "ryzen 3", "m1", "i5", "ryzen 5", "m2", "i7", "ryzen 7", "i9",
    "ryzen 9", "m3",
];

static ULTRA_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"ultra\s+(\d)").unwrap());

static GB_EQUIVALENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(tb|gb)").unwrap());

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)").unwrap());

// Display resolution tiers, lowest first. "hd+" and the 1080p aliases
// must be checked before bare "hd"; Retina panels sit at the QHD tier.
static RESOLUTION_TIERS: &[(&str, u8)] = &[
    ("4k", 5),
    ("uhd", 5),
    ("2160", 5),
    ("qhd", 4),
    ("1440", 4),
    ("retina", 4),
    ("full hd", 3),
    ("fhd", 3),
    ("1080", 3),
    ("hd+", 2),
    ("hd", 1),
];

/// Compares two processor strings.
///
/// Core Ultra outranks every classic tier; two Ultras compare on their
/// tier number. Otherwise both sides are ranked in the ordered family
/// table. No rank on either side is `unknown`; a single ranked side wins.
pub fn compare_processors(a: &str, b: &str) -> Verdict {
    let (la, lb) = (a.to_lowercase(), b.to_lowercase());

    let ultra_a = la.contains("core ultra");
    let ultra_b = lb.contains("core ultra");
    match (ultra_a, ultra_b) {
        (true, true) => {
            let na = ultra_number(&la);
            let nb = ultra_number(&lb);
            return match (na, nb) {
                (Some(na), Some(nb)) => Verdict::from_ordering(na.cmp(&nb)),
                _ => Verdict::Equal,
            };
        }
        (true, false) => return Verdict::Better,
        (false, true) => return Verdict::Worse,
        (false, false) => {}
    }

    let ta = processor_tier(&la);
    let tb = processor_tier(&lb);
    match (ta, tb) {
        (Some(ta), Some(tb)) => Verdict::from_ordering(ta.cmp(&tb)),
        (Some(_), None) => Verdict::Better,
        (None, Some(_)) => Verdict::Worse,
        (None, None) => Verdict::Unknown,
    }
}

fn ultra_number(lower: &str) -> Option<u32> {
    ULTRA_NUMBER.captures(lower).and_then(|c| c[1].parse().ok())
}

fn processor_tier(lower: &str) -> Option<usize> {
    // highest rank wins when several tokens occur ("Ryzen 9" also
    // contains no lower token, but titles sometimes list two chips)
    PROCESSOR_TIERS
        .iter()
        .enumerate()
        .filter(|(_, token)| lower.contains(*token))
        .map(|(rank, _)| rank)
        .max()
}

/// Compares two RAM strings by GB capacity. More is better.
pub fn compare_ram(a: &str, b: &str) -> Verdict {
    compare_gb_equivalent(a, b)
}

/// Compares two storage strings by GB-equivalent capacity (1 TB = 1000
/// GB). More is better.
pub fn compare_storage(a: &str, b: &str) -> Verdict {
    compare_gb_equivalent(a, b)
}

fn compare_gb_equivalent(a: &str, b: &str) -> Verdict {
    match (gb_equivalent(a), gb_equivalent(b)) {
        (Some(ga), Some(gb)) => Verdict::from_ordering(ga.total_cmp(&gb)),
        _ => Verdict::Unknown,
    }
}

fn gb_equivalent(value: &str) -> Option<f64> {
    GB_EQUIVALENT
        .captures_iter(&value.to_lowercase())
        .filter_map(|caps| {
            let n: f64 = caps[1].parse().ok()?;
            Some(if &caps[2] == "tb" { n * 1000.0 } else { n })
        })
        .fold(None, |acc, gb| Some(acc.map_or(gb, |a: f64| a.max(gb))))
}

/// Compares screen sizes. Larger is better.
pub fn compare_screen_size(a: &str, b: &str) -> Verdict {
    compare_leading_number(a, b)
}

/// Compares weights. Lighter is better.
pub fn compare_weight(a: &str, b: &str) -> Verdict {
    compare_leading_number(a, b).invert()
}

/// Compares battery life claims. Longer is better.
pub fn compare_battery_life(a: &str, b: &str) -> Verdict {
    compare_leading_number(a, b)
}

/// Compares refresh rates. Higher Hz is better.
pub fn compare_refresh_rate(a: &str, b: &str) -> Verdict {
    compare_leading_number(a, b)
}

fn compare_leading_number(a: &str, b: &str) -> Verdict {
    match (leading_number(a), leading_number(b)) {
        (Some(na), Some(nb)) => Verdict::from_ordering(na.total_cmp(&nb)),
        _ => Verdict::Unknown,
    }
}

fn leading_number(value: &str) -> Option<f64> {
    LEADING_NUMBER.captures(value).and_then(|c| c[1].parse().ok())
}

/// Compares prices. Lower is better.
pub fn compare_prices(a: Option<f64>, b: Option<f64>) -> Verdict {
    match (a, b) {
        (Some(a), Some(b)) => Verdict::from_ordering(a.total_cmp(&b)).invert(),
        _ => Verdict::Unknown,
    }
}

/// Compares display resolutions via the fixed tier table.
pub fn compare_resolutions(a: &str, b: &str) -> Verdict {
    match (resolution_tier(a), resolution_tier(b)) {
        (Some(ta), Some(tb)) => Verdict::from_ordering(ta.cmp(&tb)),
        _ => Verdict::Unknown,
    }
}

fn resolution_tier(value: &str) -> Option<u8> {
    let lower = value.to_lowercase();
    RESOLUTION_TIERS
        .iter()
        .find(|(token, _)| lower.contains(token))
        .map(|(_, tier)| *tier)
}

/// One field of a head-to-head product comparison.
#[derive(Debug, Clone, Serialize)]
pub struct FieldComparison {
    pub field: &'static str,
    pub left: Option<String>,
    pub right: Option<String>,
    pub verdict: Verdict,
}

/// Compares two extracted products field by field, from the first
/// product's perspective.
pub fn compare_products(
    a: &crate::product::Product,
    b: &crate::product::Product,
) -> Vec<FieldComparison> {
    fn field(
        name: &'static str,
        left: Option<&str>,
        right: Option<&str>,
        cmp: fn(&str, &str) -> Verdict,
    ) -> FieldComparison {
        let verdict = match (left, right) {
            (Some(l), Some(r)) => cmp(l, r),
            _ => Verdict::Unknown,
        };
        FieldComparison {
            field: name,
            left: left.map(str::to_string),
            right: right.map(str::to_string),
            verdict,
        }
    }

    vec![
        field("processor", a.processor.as_deref(), b.processor.as_deref(), compare_processors),
        field("ram", a.ram.as_deref(), b.ram.as_deref(), compare_ram),
        field("storage", a.storage.as_deref(), b.storage.as_deref(), compare_storage),
        field(
            "screen_size",
            a.screen_size.as_deref(),
            b.screen_size.as_deref(),
            compare_screen_size,
        ),
        field(
            "resolution",
            a.screen_resolution.as_deref(),
            b.screen_resolution.as_deref(),
            compare_resolutions,
        ),
        field("weight", a.weight.as_deref(), b.weight.as_deref(), compare_weight),
        field(
            "battery",
            a.battery_life.as_deref(),
            b.battery_life.as_deref(),
            compare_battery_life,
        ),
        field(
            "refresh_rate",
            a.refresh_rate.as_deref(),
            b.refresh_rate.as_deref(),
            compare_refresh_rate,
        ),
        FieldComparison {
            field: "price",
            left: a.price.map(|p| format!("${p:.2}")),
            right: b.price.map(|p| format!("${p:.2}")),
            verdict: compare_prices(a.price, b.price),
        },
    ]
}
