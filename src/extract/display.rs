//! Screen size, resolution, and touchscreen extraction.

use crate::extract::{non_empty, patterns};

// Laptop panels live in a narrow band; anything outside is a false match
// (TV listings, package dimensions).
const MIN_SCREEN_INCHES: f64 = 9.0;
const MAX_SCREEN_INCHES: f64 = 20.0;

/// Extracts the screen size in inches as a display string like `15.6"`.
pub fn extract_screen_size(detail: Option<&str>, title: &str, bullets: &str) -> Option<String> {
    non_empty(detail)
        .and_then(find_size)
        .or_else(|| find_size(title))
        .or_else(|| find_size(bullets))
}

fn find_size(text: &str) -> Option<String> {
    let caps = patterns::SCREEN_SIZE.captures(text)?;
    let inches: f64 = caps[1].parse().ok()?;
    if !(MIN_SCREEN_INCHES..=MAX_SCREEN_INCHES).contains(&inches) {
        return None;
    }
    Some(format!("{}\"", &caps[1]))
}

/// Extracts the screen resolution, preferring explicit pixel dimensions
/// over marketing labels ("FHD", "4K", "Retina").
pub fn extract_resolution(detail: Option<&str>, title: &str, bullets: &str) -> Option<String> {
    non_empty(detail)
        .and_then(find_resolution)
        .or_else(|| find_resolution(title))
        .or_else(|| find_resolution(bullets))
}

fn find_resolution(text: &str) -> Option<String> {
    if let Some(caps) = patterns::RESOLUTION_PIXELS.captures(text) {
        return Some(format!("{} x {}", &caps[1], &caps[2]));
    }

    let lower = text.to_lowercase();
    patterns::RESOLUTION_LABELS
        .iter()
        .find(|(token, _)| lower.contains(token))
        .map(|(_, label)| (*label).to_string())
}

// Panel refresh rates sold today; anything outside is a mismatch.
const MIN_REFRESH_HZ: u32 = 60;
const MAX_REFRESH_HZ: u32 = 480;

/// Extracts the panel refresh rate as a display string like "144Hz". There
/// is no structured detail source; gaming listings put it in the title or
/// bullets.
pub fn extract_refresh_rate(title: &str, bullets: &str) -> Option<String> {
    find_refresh(title).or_else(|| find_refresh(bullets))
}

fn find_refresh(text: &str) -> Option<String> {
    let caps = patterns::REFRESH_RATE.captures(text)?;
    let hz: u32 = caps[1].parse().ok()?;
    if !(MIN_REFRESH_HZ..=MAX_REFRESH_HZ).contains(&hz) {
        return None;
    }
    Some(format!("{}Hz", hz))
}

/// Returns true when the title or bullets advertise a touchscreen. There is
/// no structured detail source for this field.
pub fn detect_touchscreen(title: &str, bullets: &str) -> bool {
    let haystack = format!("{} {}", title.to_lowercase(), bullets.to_lowercase());
    patterns::TOUCHSCREEN_TOKENS.iter().any(|token| haystack.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_size_from_detail() {
        assert_eq!(
            extract_screen_size(Some("15.6 Inches"), "", "").as_deref(),
            Some("15.6\"")
        );
    }

    #[test]
    fn test_screen_size_from_title() {
        assert_eq!(
            extract_screen_size(None, "Dell XPS 13.4\" FHD+ Laptop", "").as_deref(),
            Some("13.4\"")
        );
    }

    #[test]
    fn test_screen_size_implausible_rejected() {
        // package dimension, not a panel
        assert_eq!(extract_screen_size(Some("24 inches"), "", ""), None);
        assert_eq!(extract_screen_size(None, "55 inch TV", ""), None);
    }

    #[test]
    fn test_resolution_pixels_preferred() {
        assert_eq!(
            extract_resolution(None, "FHD Laptop 1920 x 1080 IPS", "").as_deref(),
            Some("1920 x 1080")
        );
    }

    #[test]
    fn test_resolution_labels() {
        assert_eq!(extract_resolution(None, "QHD gaming display", "").as_deref(), Some("QHD"));
        assert_eq!(extract_resolution(None, "Full HD panel", "").as_deref(), Some("Full HD"));
        // "UHD" must not resolve to bare "HD"
        assert_eq!(extract_resolution(None, "UHD brilliance", "").as_deref(), Some("UHD"));
        assert_eq!(extract_resolution(None, "Retina display", "").as_deref(), Some("Retina"));
    }

    #[test]
    fn test_resolution_none() {
        assert_eq!(extract_resolution(None, "Some Laptop", ""), None);
    }

    #[test]
    fn test_refresh_rate() {
        assert_eq!(
            extract_refresh_rate("Gaming Laptop 144Hz FHD", "").as_deref(),
            Some("144Hz")
        );
        assert_eq!(
            extract_refresh_rate("Gaming Laptop", "300 Hz esports display").as_deref(),
            Some("300Hz")
        );
        // power supply spec, not a panel
        assert_eq!(extract_refresh_rate("Adapter 50Hz input", ""), None);
        assert_eq!(extract_refresh_rate("Office Laptop", ""), None);
    }

    #[test]
    fn test_touchscreen() {
        assert!(detect_touchscreen("HP Spectre x360 2-in-1 Touchscreen", ""));
        assert!(detect_touchscreen("Convertible", "Vivid touch display with pen"));
        assert!(!detect_touchscreen("Plain clamshell laptop", "Matte display"));
    }
}
