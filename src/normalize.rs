//! Canonical display forms for extracted specification strings.
//!
//! These are pure string-to-string rewrites: vendor casing, duplicate-prefix
//! collapse, trademark-glyph stripping, bare-shorthand expansion. They never
//! invent data not present in the input, and every function is idempotent so
//! re-normalizing stored values is safe.

use regex_lite::Regex;
use std::sync::LazyLock;

static CAPTURED_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[,(]|\b\d+\s*[gt]b\b").unwrap());

static DUP_INTEL_CORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(intel\s+core\s+)(?:intel\s+core\s+)+").unwrap());

static DUP_AMD_RYZEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(amd\s+ryzen\s+)(?:amd\s+ryzen\s+)+").unwrap());

static DUP_APPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(apple\s+)(?:apple\s+)+").unwrap());

static NUMBER_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*(gb|tb|mhz|hz)\b").unwrap());

static I_SERIES_SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^i[3579]([\s-]|$)").unwrap());

static M_SERIES_SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^M[1-4](\s|$)").unwrap());

/// Removes trademark glyphs (™, ®, ©) from a string.
pub fn strip_trademarks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\u{2122}' | '\u{00AE}' | '\u{00A9}')).collect()
}

/// Rewrites a raw processor string into its canonical display form,
/// e.g. "intel core i7-1270h™" → "Intel Core i7-1270H" and the bare
/// shorthand "i7-1270H" → "Intel Core i7-1270H".
pub fn standardize_processor(raw: &str) -> String {
    let cleaned = strip_trademarks(raw);
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return String::new();
    }

    // Drop RAM/storage text captured from neighboring title segments
    let head = match CAPTURED_TAIL.find(cleaned) {
        Some(m) => &cleaned[..m.start()],
        None => cleaned,
    };

    // Collapse duplicated vendor prefixes from earlier concatenation bugs
    let collapsed = DUP_INTEL_CORE.replace_all(head, "$1");
    let collapsed = DUP_AMD_RYZEN.replace_all(&collapsed, "$1");
    let collapsed = DUP_APPLE.replace_all(&collapsed, "$1");

    let recased: Vec<String> =
        collapsed.split_whitespace().map(recase_processor_token).collect();
    let mut result = recased.join(" ");

    // Expand bare shorthands when no vendor prefix is present
    let lower = result.to_lowercase();
    if I_SERIES_SHORTHAND.is_match(&result) && !lower.contains("intel") {
        result = format!("Intel Core {}", result);
    } else if result.starts_with("Ryzen") && !lower.contains("amd") {
        result = format!("AMD {}", result);
    } else if M_SERIES_SHORTHAND.is_match(&result) && !lower.contains("apple") {
        result = format!("Apple {}", result);
    }

    result
}

/// Rewrites a raw RAM string into its canonical form, e.g.
/// "16 gb of ddr5 ram" → "16GB DDR5".
pub fn standardize_ram(raw: &str) -> String {
    let cleaned = strip_trademarks(raw);
    let merged = merge_number_units(cleaned.trim());

    merged
        .split_whitespace()
        .filter(|t| !is_label(t) && !is_ram_filler(t))
        .map(recase_ram_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrites a raw storage string into its canonical form, e.g.
/// "512 gb nvme ssd" → "512GB NVMe SSD". Dual configurations like
/// "1TB SSD + 1TB HDD" keep their separator.
pub fn standardize_storage(raw: &str) -> String {
    let cleaned = strip_trademarks(raw);
    let merged = merge_number_units(cleaned.trim());

    merged
        .split_whitespace()
        .filter(|t| !is_label(t) && !t.eq_ignore_ascii_case("of"))
        .map(recase_storage_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrites a raw graphics string into its canonical form, e.g.
/// "nvidia geforce rtx 3070 ti" → "NVIDIA GeForce RTX 3070 Ti".
pub fn standardize_graphics(raw: &str) -> String {
    let cleaned = strip_trademarks(raw);

    cleaned
        .split_whitespace()
        .map(recase_graphics_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Glues "512 GB" / "5600 MHz" style pairs into "512GB" / "5600MHz".
fn merge_number_units(text: &str) -> String {
    NUMBER_UNIT
        .replace_all(text, |caps: &regex_lite::Captures| {
            format!("{}{}", &caps[1], canonical_unit(&caps[2]))
        })
        .into_owned()
}

fn canonical_unit(unit: &str) -> &'static str {
    match unit.to_ascii_lowercase().as_str() {
        "gb" => "GB",
        "tb" => "TB",
        "mhz" => "MHz",
        "hz" => "Hz",
        _ => "",
    }
}

fn is_ram_filler(token: &str) -> bool {
    matches!(token.to_ascii_lowercase().as_str(), "of" | "ram" | "memory")
}

// "RAM:" / "SSD:" label tokens from labeled detail scrapes
fn is_label(token: &str) -> bool {
    token.len() > 1 && token.ends_with(':')
}

fn recase_processor_token(token: &str) -> String {
    let lower = token.to_ascii_lowercase();
    match lower.as_str() {
        "intel" => return "Intel".to_string(),
        "core" => return "Core".to_string(),
        "ultra" => return "Ultra".to_string(),
        "amd" => return "AMD".to_string(),
        "ryzen" => return "Ryzen".to_string(),
        "apple" => return "Apple".to_string(),
        "celeron" => return "Celeron".to_string(),
        "pentium" => return "Pentium".to_string(),
        "pro" => return "Pro".to_string(),
        "max" => return "Max".to_string(),
        "mediatek" => return "MediaTek".to_string(),
        "snapdragon" => return "Snapdragon".to_string(),
        "octa-core" => return "Octa-Core".to_string(),
        "chip" => return "chip".to_string(),
        _ => {}
    }

    let bytes = lower.as_bytes();
    // i-series model: lowercase "i", uppercase suffix letters ("i7-1270h")
    if bytes.len() >= 2 && bytes[0] == b'i' && bytes[1].is_ascii_digit() {
        return format!("i{}", lower[1..].to_uppercase());
    }
    // Apple family token ("m2")
    if bytes.len() == 2 && bytes[0] == b'm' && bytes[1].is_ascii_digit() {
        return lower.to_uppercase();
    }
    // bare model number with suffix letters ("6900hx", "1165g7")
    if bytes[0].is_ascii_digit() {
        return lower.to_uppercase();
    }
    // Celeron/Pentium model token ("n4500", "j4125"): one letter then digits
    if bytes.len() >= 4
        && bytes[0].is_ascii_alphabetic()
        && bytes[1..4].iter().all(u8::is_ascii_digit)
        && bytes[1..].iter().all(u8::is_ascii_alphanumeric)
    {
        return lower.to_uppercase();
    }

    token.to_string()
}

fn recase_ram_token(token: &str) -> String {
    let lower = token.to_ascii_lowercase();
    if lower.starts_with("ddr") || lower.starts_with("lpddr") {
        return lower.to_uppercase();
    }
    token.to_string()
}

fn recase_storage_token(token: &str) -> String {
    match token.to_ascii_lowercase().as_str() {
        "ssd" => "SSD".to_string(),
        "hdd" => "HDD".to_string(),
        "nvme" => "NVMe".to_string(),
        "emmc" => "eMMC".to_string(),
        "pcie" => "PCIe".to_string(),
        "m.2" => "M.2".to_string(),
        "gen3" => "Gen3".to_string(),
        "gen4" => "Gen4".to_string(),
        "storage" => "storage".to_string(),
        _ => token.to_string(),
    }
}

fn recase_graphics_token(token: &str) -> String {
    let lower = token.to_ascii_lowercase();
    match lower.as_str() {
        "nvidia" => return "NVIDIA".to_string(),
        "geforce" => return "GeForce".to_string(),
        "rtx" => return "RTX".to_string(),
        "gtx" => return "GTX".to_string(),
        "amd" => return "AMD".to_string(),
        "radeon" => return "Radeon".to_string(),
        "rx" => return "RX".to_string(),
        "intel" => return "Intel".to_string(),
        "iris" => return "Iris".to_string(),
        "xe" => return "Xe".to_string(),
        "uhd" => return "UHD".to_string(),
        "graphics" => return "Graphics".to_string(),
        "apple" => return "Apple".to_string(),
        "gpu" => return "GPU".to_string(),
        "ti" => return "Ti".to_string(),
        "hd" => return "HD".to_string(),
        _ => {}
    }
    // Apple family token ("m2")
    let bytes = lower.as_bytes();
    if bytes.len() == 2 && bytes[0] == b'm' && bytes[1].is_ascii_digit() {
        return lower.to_uppercase();
    }
    token.to_string()
}
