//! Ordered pattern tables for field extraction.
//!
//! This file contains every regex used to pull spec fields out of listing
//! text. Each table is evaluated front to back and the FIRST matching rule
//! wins; ordering encodes precedence, so append new vendor patterns with
//! care.
//!
//! **Update process**: when a listing fails to extract, capture the title,
//! add or reorder a pattern here, and add a test fixture.

use regex_lite::Regex;
use std::sync::LazyLock;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// Processor patterns, most specific vendor/family rules first.
pub static PROCESSOR: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        re(r"(?i)intel\s+core\s+ultra\s+[579](?:\s+\d{3}[a-z]{0,2})?"),
        re(r"(?i)intel\s+core\s+i[3579][\s-]\d{3,5}[a-z]{0,2}"),
        re(r"(?i)intel\s+core\s+i[3579]\b"),
        re(r"(?i)\bi[3579]-\d{3,5}[a-z]{0,2}\b"),
        re(r"(?i)amd\s+ryzen\s+[3579]\s+\d{3,4}[a-z]{0,3}\b"),
        re(r"(?i)amd\s+ryzen\s+[3579]\b"),
        re(r"(?i)\bryzen\s+[3579](?:\s+\d{3,4}[a-z]{0,3})?\b"),
        re(r"(?i)apple\s+m[1-4](?:\s+(?:pro|max|ultra))?\b"),
        re(r"(?i)\bm[1-4]\s+(?:pro|max|ultra)\b"),
        // bare M-token ("with M2 chip"); never fires on "M.2" storage
        re(r"(?i)\bm[1-4]\b"),
        re(r"(?i)intel\s+(?:celeron|pentium)(?:\s+[a-z]\d{3,5}[a-z]{0,2})?"),
        re(r"(?i)\b(?:celeron|pentium)\s+[a-z]\d{3,5}[a-z]{0,2}\b"),
        re(r"(?i)\b(?:mediatek|snapdragon)\s+[a-z0-9]+\b"),
        re(r"(?i)\bocta[\s-]core\b"),
    ]
});

/// RAM patterns. Typed mentions outrank bare "N GB RAM" mentions.
pub static RAM: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        re(r"(?i)\b\d{1,3}\s*gb\s+(?:of\s+)?(?:lp)?ddr\d[x]?(?:\s+(?:ram|memory))?(?:\s+\d{3,4}\s*(?:mhz|mt/s))?"),
        re(r"(?i)\b\d{1,3}\s*gb\s+(?:of\s+)?(?:ram|memory)\b"),
        re(r"(?i)\bram[:\s]\s*\d{1,3}\s*gb\b"),
    ]
});

/// Storage patterns. Dual configurations first, then typed single drives,
/// then labeled bare capacities.
pub static STORAGE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        re(r"(?i)\b\d+\s*[gt]b\s+ssd\s*\+\s*\d+\s*[gt]b\s+hdd\b"),
        re(r"(?i)\b\d+\s*tb\s+(?:pcie\s+)?(?:gen\s*\d\s+)?(?:nvme\s+)?(?:m\.2\s+)?ssd\b"),
        re(r"(?i)\b\d+\s*gb\s+(?:pcie\s+)?(?:gen\s*\d\s+)?(?:nvme\s+)?(?:m\.2\s+)?(?:ssd|emmc|hdd)\b"),
        re(r"(?i)\b\d+\s*tb\s+(?:hdd|hard\s+drive)\b"),
        re(r"(?i)\b(?:ssd|hdd)[:\s]\s*\d+\s*[gt]b\b"),
        re(r"(?i)\b\d+\s*[gt]b\s+storage\b"),
    ]
});

/// Graphics patterns. Discrete GPUs first, integrated tiers last.
pub static GRAPHICS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        re(r"(?i)(?:nvidia\s+)?(?:geforce\s+)?rtx\s*\d{4}(?:\s+ti)?\b"),
        re(r"(?i)(?:nvidia\s+)?(?:geforce\s+)?gtx\s*\d{3,4}(?:\s+ti)?\b"),
        re(r"(?i)(?:amd\s+)?radeon\s+(?:rx\s+)?\d{3,4}[a-z]{0,2}\b"),
        re(r"(?i)\brx\s*\d{4}[a-z]{0,2}\b"),
        re(r"(?i)apple\s+m[1-4]\s+(?:pro\s+|max\s+|ultra\s+)?gpu"),
        re(r"(?i)(?:intel\s+)?iris\s+xe(?:\s+graphics)?"),
        re(r"(?i)intel\s+uhd(?:\s+graphics)?(?:\s+\d{3})?"),
        re(r"(?i)intel\s+hd\s+graphics(?:\s+\d{3})?"),
        re(r"(?i)\bintegrated\s+graphics\b"),
    ]
});

/// Bare capacity with unit, for lenient structured-detail parsing only.
/// Title text never goes through this; it is too permissive.
pub static BARE_CAPACITY: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)\b\d+(?:\.\d+)?\s*[gt]b\b"));

/// Screen size in inches, decimals allowed: `15.6"`, "14 inch", "16in".
pub static SCREEN_SIZE: LazyLock<Regex> =
    LazyLock::new(|| re(r#"(?i)\b(\d{2}(?:\.\d)?)\s*(?:inches|inch|in\b|["”])"#));

/// Explicit pixel-dimension resolution: "1920 x 1080", "2560x1600".
pub static RESOLUTION_PIXELS: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)\b(\d{3,4})\s*[x×]\s*(\d{3,4})\b"));

/// Resolution marketing labels, ordered so that longer labels shadow their
/// substrings ("full hd" before "hd", "uhd" before "hd").
pub static RESOLUTION_LABELS: &[(&str, &str)] = &[
    ("4k", "4K"),
    ("uhd", "UHD"),
    ("2160p", "2160p"),
    ("qhd", "QHD"),
    ("1440p", "1440p"),
    ("retina", "Retina"),
    ("full hd", "Full HD"),
    ("fhd", "FHD"),
    ("1080p", "1080p"),
    ("hd+", "HD+"),
    ("hd", "HD"),
];

/// Battery life claim in hours: "up to 10 hours", "18.5 hrs".
pub static BATTERY_LIFE: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)\b(\d{1,2}(?:\.\d)?)\s*(?:hours|hour|hrs|hr)\b"));

/// Panel refresh rate: "144Hz", "300 Hz". Two digits minimum; the letter
/// prefix of "MHz"/"GHz" memory and radio specs blocks those matches.
pub static REFRESH_RATE: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)\b(\d{2,3})\s*hz\b"));

/// Weight with unit: "3.9 pounds", "1.8 kg", "4 lbs".
pub static WEIGHT: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)\b(\d+(?:\.\d+)?)\s*(pounds|pound|lbs|lb|kilograms|kgs|kg)\b"));

/// Tokens that mark a listing as touchscreen.
pub static TOUCHSCREEN_TOKENS: &[&str] =
    &["touchscreen", "touch screen", "touch-screen", "touch display", "2-in-1", "2 in 1"];
