//! Raw scraped product payloads and their heterogeneous field shapes.
//!
//! Marketplace scrape responses are inconsistent: bullet points arrive as a
//! string or an array, prices as numbers, currency strings, or nested
//! objects, ratings as numbers or "4.5 out of 5 stars" text. Everything here
//! deserializes tolerantly and exposes one ordered precedence accessor per
//! awkward field.

use serde::{Deserialize, Serialize};

/// A raw product record as delivered by the scraping API, already
/// deserialized from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProductPayload {
    /// Marketplace product identifier.
    #[serde(default)]
    pub asin: Option<String>,
    /// Listing title. The single most trustworthy text signal.
    #[serde(default)]
    pub title: String,
    /// Feature bullets; string or string array depending on scrape source.
    #[serde(default, alias = "feature_bullets")]
    pub bullet_points: Bullets,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Sparse structured detail fields.
    #[serde(default)]
    pub product_details: ProductDetails,
    /// Stored brand. Frequently wrong, missing, or badly cased.
    #[serde(default)]
    pub brand: Option<String>,
    /// Price in one of several shapes.
    #[serde(default)]
    pub price: Option<PriceField>,
    /// Rating in one of several shapes.
    #[serde(default)]
    pub rating: Option<RatingField>,
}

/// Bullet points that may arrive as one string or a list of strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bullets {
    One(String),
    Many(Vec<String>),
}

impl Default for Bullets {
    fn default() -> Self {
        Bullets::Many(Vec::new())
    }
}

impl Bullets {
    /// Returns all bullets joined into a single searchable string.
    pub fn joined(&self) -> String {
        match self {
            Bullets::One(s) => s.clone(),
            Bullets::Many(items) => items.join(" "),
        }
    }

    /// Returns true if there is no bullet text at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Bullets::One(s) => s.trim().is_empty(),
            Bullets::Many(items) => items.iter().all(|s| s.trim().is_empty()),
        }
    }
}

/// Structured detail fields. All optional; scrapes populate a subset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDetails {
    #[serde(default)]
    pub processor: Option<String>,
    #[serde(default)]
    pub ram: Option<String>,
    #[serde(default)]
    pub hard_drive: Option<String>,
    #[serde(default)]
    pub graphics_coprocessor: Option<String>,
    #[serde(default)]
    pub standing_screen_display_size: Option<String>,
    #[serde(default)]
    pub screen_resolution: Option<String>,
    #[serde(default)]
    pub item_weight: Option<String>,
    #[serde(default)]
    pub batteries: Option<String>,
}

impl ProductDetails {
    /// Returns true if every detail field is absent.
    pub fn is_empty(&self) -> bool {
        self.processor.is_none()
            && self.ram.is_none()
            && self.hard_drive.is_none()
            && self.graphics_coprocessor.is_none()
            && self.standing_screen_display_size.is_none()
            && self.screen_resolution.is_none()
            && self.item_weight.is_none()
            && self.batteries.is_none()
    }
}

/// Price as scraped: a bare number, a currency-formatted string, or a
/// nested object with alternative key names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Number(f64),
    Text(String),
    Detailed(DetailedPrice),
}

/// Nested price object shape. Key availability varies by scrape source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailedPrice {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub raw: Option<String>,
}

impl PriceField {
    /// Resolves the price amount with fixed precedence:
    /// number → object `value` → object `current_price` → object `raw` →
    /// text. Returns `None` when nothing parses.
    pub fn amount(&self) -> Option<f64> {
        match self {
            PriceField::Number(n) => Some(*n),
            PriceField::Detailed(d) => d
                .value
                .or(d.current_price)
                .or_else(|| d.raw.as_deref().and_then(parse_money)),
            PriceField::Text(s) => parse_money(s),
        }
    }
}

/// Rating as scraped: a number, a numeric string, "4.5 out of 5 stars"
/// text, or a nested object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingField {
    Number(f32),
    Text(String),
    Detailed(DetailedRating),
}

/// Nested rating object shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailedRating {
    #[serde(default)]
    pub value: Option<f32>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub raw: Option<String>,
}

impl RatingField {
    /// Resolves the star value with fixed precedence:
    /// number → object `value` → object `rating` → object `raw` → text.
    /// Results are clamped to the 0.0–5.0 star scale.
    pub fn stars(&self) -> Option<f32> {
        let stars = match self {
            RatingField::Number(n) => Some(*n),
            RatingField::Detailed(d) => d
                .value
                .or(d.rating)
                .or_else(|| d.raw.as_deref().and_then(parse_stars)),
            RatingField::Text(s) => parse_stars(s),
        };
        stars.map(|s| s.clamp(0.0, 5.0))
    }
}

/// Parses a money amount out of text like "$1,299.99" or "1299".
fn parse_money(text: &str) -> Option<f64> {
    let cleaned: String =
        text.chars().filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    // US-format thousands separators
    cleaned.replace(',', "").parse().ok()
}

/// Parses a star value out of text like "4.5 out of 5 stars" or "4,5".
fn parse_stars(text: &str) -> Option<f32> {
    let first = text.split_whitespace().next()?;
    first.replace(',', ".").parse().ok()
}
