//! Brand and model detection.
//!
//! Scraped brand metadata is unreliable; sellers must put recognizable
//! product names in the title to be findable, so the title is the
//! authoritative signal. An ordered brand vocabulary is scanned
//! brand-by-brand and the first brand with any matching pattern wins,
//! regardless of the stored brand field.

use regex_lite::Regex;
use std::sync::LazyLock;

/// Shown when neither the title nor the stored field identify a brand.
pub const UNKNOWN_BRAND: &str = "Unknown Brand";

// Brand → title vocabulary (brand name plus flagship product lines).
// Order matters: the first brand with a hit wins. Apple is first because
// "macbook"/"m2" listings often carry a reseller as the stored brand.
static BRAND_PATTERNS: &[(&str, &[&str])] = &[
    ("Apple", &["apple", "macbook", "mac book", "ipad", "m1", "m2", "m3"]),
    ("Lenovo", &["lenovo", "thinkpad", "thinkbook", "ideapad", "legion", "yoga"]),
    ("HP", &["hp", "spectre", "pavilion", "envy", "omen", "elitebook", "probook", "victus"]),
    ("Dell", &["dell", "xps", "inspiron", "latitude", "alienware", "precision", "vostro"]),
    ("ASUS", &["asus", "zenbook", "vivobook", "rog", "tuf", "proart"]),
    ("Acer", &["acer", "aspire", "predator", "nitro", "swift", "travelmate"]),
    ("MSI", &["msi", "katana", "raider", "stealth", "cyborg"]),
    ("Microsoft", &["microsoft", "surface"]),
    ("Samsung", &["samsung", "galaxy book"]),
    ("Razer", &["razer", "blade"]),
    ("LG", &["lg gram", "lg"]),
    ("Gigabyte", &["gigabyte", "aorus", "aero"]),
];

// Stored-brand capitalization fixes for brands without title vocabulary.
static KNOWN_BRANDS: &[(&str, &str)] = &[
    ("apple", "Apple"),
    ("lenovo", "Lenovo"),
    ("hp", "HP"),
    ("dell", "Dell"),
    ("asus", "ASUS"),
    ("acer", "Acer"),
    ("msi", "MSI"),
    ("microsoft", "Microsoft"),
    ("samsung", "Samsung"),
    ("razer", "Razer"),
    ("lg", "LG"),
    ("gigabyte", "Gigabyte"),
    ("toshiba", "Toshiba"),
    ("fujitsu", "Fujitsu"),
    ("huawei", "Huawei"),
    ("chuwi", "CHUWI"),
    ("jumper", "Jumper"),
];

// Brand-specific model patterns, tried before the generic heuristic.
static MODEL_PATTERNS: LazyLock<Vec<(&'static str, Vec<Regex>)>> = LazyLock::new(|| {
    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }
    vec![
        (
            "Apple",
            vec![re(r"(?i)\bmacbook\s+(?:air|pro)(?:\s+\d{2}(?:\.\d)?)?"), re(r"(?i)\bmacbook\b")],
        ),
        (
            "Dell",
            vec![re(
                r"(?i)\b(?:xps|inspiron|latitude|alienware|precision|vostro)\s*[a-z]?\d{2,4}[a-z0-9]{0,4}",
            )],
        ),
        (
            "Lenovo",
            vec![
                re(r"(?i)\bthinkpad\s+[a-z]\d{1,3}[a-z]?(?:\s+gen\s*\d)?"),
                re(r"(?i)\b(?:ideapad|legion|yoga|thinkbook)\s+[a-z0-9]+(?:\s+\d{2}[a-z0-9]{0,4})?"),
            ],
        ),
        (
            "HP",
            vec![re(
                r"(?i)\b(?:spectre|pavilion|envy|omen|elitebook|probook|victus)(?:\s+x360)?\s*(?:\d{2}[a-z0-9-]{0,6})?",
            )],
        ),
        (
            "ASUS",
            vec![
                re(r"(?i)\brog\s+(?:strix|zephyrus|flow)\s+[a-z]?\d{2}[a-z0-9]{0,4}"),
                re(r"(?i)\b(?:zenbook|vivobook|tuf)\s+[a-z0-9]+(?:\s+[a-z]\d{3}[a-z0-9]{0,4})?"),
            ],
        ),
        (
            "Acer",
            vec![re(r"(?i)\b(?:aspire|predator|nitro|swift|travelmate)\s+[a-z0-9]+(?:\s+[a-z0-9-]{2,8})?")],
        ),
        ("Microsoft", vec![re(r"(?i)\bsurface\s+(?:laptop|pro|go|book)(?:\s+\d{1,2})?")]),
    ]
});

// Noise tokens that end a generic model capture.
static MODEL_STOP_WORDS: &[&str] = &[
    "laptop", "notebook", "computer", "pc", "with", "gaming", "business", "thin", "slim",
    "newest", "new", "latest", "inch", "display", "screen",
];

/// Determines the authoritative brand for a listing.
///
/// Title vocabulary wins over the stored brand; a stored brand with no
/// title match is kept but capitalization-corrected; otherwise
/// "Unknown Brand".
pub fn detect_brand(title: &str, stored: Option<&str>) -> String {
    let lower = title.to_lowercase();

    for (brand, tokens) in BRAND_PATTERNS {
        if tokens.iter().any(|token| contains_word(&lower, token)) {
            return (*brand).to_string();
        }
    }

    if let Some(stored) = stored.map(str::trim).filter(|s| !s.is_empty()) {
        let stored_lower = stored.to_lowercase();
        if stored_lower == "unknown" {
            return UNKNOWN_BRAND.to_string();
        }
        for (known, canonical) in KNOWN_BRANDS {
            if stored_lower == *known {
                return (*canonical).to_string();
            }
        }
        return capitalize(stored);
    }

    UNKNOWN_BRAND.to_string()
}

/// Extracts the model name: brand-specific patterns first, then a generic
/// "tokens after the brand name" heuristic.
pub fn detect_model(title: &str, brand: &str) -> Option<String> {
    if let Some((_, patterns)) = MODEL_PATTERNS.iter().find(|(b, _)| *b == brand) {
        if let Some(m) = patterns.iter().find_map(|re| re.find(title)) {
            return Some(title_case(m.as_str().trim()));
        }
    }

    generic_model(title, brand)
}

/// Takes up to three clean tokens immediately following the brand name's
/// position in the title.
fn generic_model(title: &str, brand: &str) -> Option<String> {
    let lower = title.to_lowercase();
    let pos = lower.find(&brand.to_lowercase())?;
    let after = &title[pos + brand.len()..];

    let tokens: Vec<&str> = after
        .split_whitespace()
        .take_while(|t| {
            let clean = t.trim_matches(|c: char| !c.is_alphanumeric() && c != '.');
            !clean.is_empty()
                && !MODEL_STOP_WORDS.contains(&clean.to_lowercase().as_str())
                && !t.contains(',')
                // a decimal number after the model is a screen size
                && !(clean.contains('.') && clean.parse::<f64>().is_ok())
        })
        .take(3)
        .collect();

    if tokens.is_empty() {
        return None;
    }
    Some(tokens.join(" "))
}

/// Substring match bounded by non-alphanumeric characters on both sides,
/// so "hp" does not fire inside "sharp".
fn contains_word(haystack: &str, needle: &str) -> bool {
    let mut start = 0;
    while let Some(idx) = haystack[start..].find(needle) {
        let begin = start + idx;
        let end = begin + needle.len();
        let before_ok =
            begin == 0 || !haystack[..begin].chars().next_back().is_some_and(char::is_alphanumeric);
        let after_ok =
            end == haystack.len() || !haystack[end..].chars().next().is_some_and(char::is_alphanumeric);
        if before_ok && after_ok {
            return true;
        }
        start = end;
    }
    false
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace().map(capitalize_token).collect::<Vec<_>>().join(" ")
}

fn capitalize_token(token: &str) -> String {
    // Only all-lowercase alphabetic tokens are rewritten; anything already
    // cased ("XPS", "MacBook", "x360") keeps its familiar form
    if token.chars().all(|c| c.is_ascii_lowercase()) {
        return capitalize(token);
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_wins_over_stored_brand() {
        assert_eq!(detect_brand("ThinkPad X1 Carbon Gen 9", Some("Unknown")), "Lenovo");
        assert_eq!(detect_brand("2023 MacBook Air 13.6", Some("BestDeals Inc")), "Apple");
        assert_eq!(detect_brand("ASUS ROG Strix G15", Some("asus")), "ASUS");
    }

    #[test]
    fn test_product_line_vocabulary() {
        assert_eq!(detect_brand("Spectre x360 convertible", None), "HP");
        assert_eq!(detect_brand("XPS 13 Plus ultrabook", None), "Dell");
        assert_eq!(detect_brand("Predator Helios 300", None), "Acer");
        assert_eq!(detect_brand("Surface Laptop 5", None), "Microsoft");
    }

    #[test]
    fn test_stored_brand_capitalization_fallback() {
        assert_eq!(detect_brand("Some generic 15 inch laptop", Some("lenovo")), "Lenovo");
        assert_eq!(detect_brand("Some generic 15 inch laptop", Some("HP")), "HP");
        assert_eq!(detect_brand("Some generic 15 inch laptop", Some("chuwi")), "CHUWI");
    }

    #[test]
    fn test_unlisted_stored_brand_capitalized() {
        assert_eq!(detect_brand("A mystery machine", Some("framework")), "Framework");
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(detect_brand("A mystery machine", None), UNKNOWN_BRAND);
        assert_eq!(detect_brand("A mystery machine", Some("")), UNKNOWN_BRAND);
        assert_eq!(detect_brand("A mystery machine", Some("Unknown")), UNKNOWN_BRAND);
    }

    #[test]
    fn test_word_boundaries() {
        // "hp" must not fire inside "sharp"
        assert_eq!(detect_brand("Sharp-looking mystery laptop", None), UNKNOWN_BRAND);
        assert_eq!(detect_brand("HP 15 budget laptop", None), "HP");
    }

    #[test]
    fn test_model_brand_specific() {
        assert_eq!(
            detect_model("Dell XPS 9520 Touchscreen Laptop", "Dell").as_deref(),
            Some("XPS 9520")
        );
        assert_eq!(
            detect_model("Lenovo ThinkPad X1 Carbon", "Lenovo").as_deref(),
            Some("ThinkPad X1")
        );
        assert_eq!(
            detect_model("Apple MacBook Air 13.6 Laptop", "Apple").as_deref(),
            Some("MacBook Air 13.6")
        );
        assert_eq!(
            detect_model("Microsoft Surface Laptop 5", "Microsoft").as_deref(),
            Some("Surface Laptop 5")
        );
    }

    #[test]
    fn test_model_generic_fallback() {
        assert_eq!(
            detect_model("GIGABYTE G5 KF 15.6 inch", "Gigabyte").as_deref(),
            Some("G5 KF")
        );
    }

    #[test]
    fn test_model_none() {
        assert_eq!(detect_model("Mystery machine", "Unknown Brand"), None);
    }
}
