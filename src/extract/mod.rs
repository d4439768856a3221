//! Specification extraction pipeline.
//!
//! Runs every field extractor over a raw payload with the fixed precedence
//! (structured detail field → title → bullet points → not found), applies
//! the validation pass, and assembles a normalized [`Product`].

pub mod battery;
pub mod display;
pub mod graphics;
pub mod memory;
pub mod patterns;
pub mod processor;
pub mod storage;
pub mod weight;

use crate::brand;
use crate::payload::RawProductPayload;
use crate::product::{ExtractionStats, Product};
use crate::validate;
use tracing::debug;

/// Returns the value only when it holds non-whitespace text.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Drives the per-field extractors over raw payloads.
///
/// Extraction is pure and deterministic: the same payload always produces
/// the same product. Stats are accumulated in a caller-owned
/// [`ExtractionStats`], never in hidden module state.
#[derive(Debug, Clone)]
pub struct Extractor {
    weight_min_lbs: f64,
    weight_max_lbs: f64,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            weight_min_lbs: validate::WEIGHT_MIN_LBS,
            weight_max_lbs: validate::WEIGHT_MAX_LBS,
        }
    }
}

impl Extractor {
    /// Creates an extractor with the default weight plausibility window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the plausible-weight window in pounds.
    pub fn with_weight_bounds(min_lbs: f64, max_lbs: f64) -> Self {
        Self { weight_min_lbs: min_lbs, weight_max_lbs: max_lbs }
    }

    /// Extracts a single product, discarding statistics.
    pub fn extract(&self, payload: &RawProductPayload) -> Product {
        let mut stats = ExtractionStats::new();
        self.extract_with_stats(payload, &mut stats)
    }

    /// Extracts a single product, recording field hits/misses and
    /// corrections into the caller's accumulator.
    pub fn extract_with_stats(
        &self,
        payload: &RawProductPayload,
        stats: &mut ExtractionStats,
    ) -> Product {
        let title = payload.title.as_str();
        let bullets = payload.bullet_points.joined();
        let details = &payload.product_details;

        let processor = processor::extract(details.processor.as_deref(), title, &bullets);
        let ram = memory::extract(details.ram.as_deref(), title, &bullets);
        let raw_storage = storage::extract(details.hard_drive.as_deref(), title, &bullets);
        let graphics = graphics::extract(details.graphics_coprocessor.as_deref(), title, &bullets);
        let screen_size = display::extract_screen_size(
            details.standing_screen_display_size.as_deref(),
            title,
            &bullets,
        );
        let screen_resolution =
            display::extract_resolution(details.screen_resolution.as_deref(), title, &bullets);
        let weight = weight::extract(
            details.item_weight.as_deref(),
            title,
            &bullets,
            self.weight_min_lbs,
            self.weight_max_lbs,
        );
        let battery_life = battery::extract(details.batteries.as_deref(), title, &bullets);
        let refresh_rate = display::extract_refresh_rate(title, &bullets);
        let touchscreen = display::detect_touchscreen(title, &bullets);

        let mut warnings = Vec::new();
        let storage = raw_storage.map(|value| {
            let checked = validate::check_storage(&value);
            if let Some(warning) = checked.warning {
                debug!("Storage value {:?} flagged: {}", value, warning);
                warnings.push(warning.to_string());
                stats.corrections += 1;
            }
            checked.value
        });

        for found in [
            processor.is_some(),
            ram.is_some(),
            storage.is_some(),
            graphics.is_some(),
            screen_size.is_some(),
            screen_resolution.is_some(),
            weight.is_some(),
            battery_life.is_some(),
            refresh_rate.is_some(),
        ] {
            stats.record_field(found);
        }
        stats.processed += 1;

        let brand = brand::detect_brand(title, payload.brand.as_deref());
        let model = brand::detect_model(title, &brand);

        debug!(
            "Extracted {}: brand={} processor={:?} ram={:?} storage={:?}",
            payload.asin.as_deref().unwrap_or("<no asin>"),
            brand,
            processor,
            ram,
            storage
        );

        Product {
            asin: payload.asin.clone(),
            title: payload.title.clone(),
            brand,
            model,
            processor,
            ram,
            storage,
            graphics,
            screen_size,
            screen_resolution,
            weight,
            battery_life,
            refresh_rate,
            touchscreen,
            price: payload.price.as_ref().and_then(|p| p.amount()),
            rating: payload.rating.as_ref().and_then(|r| r.stars()),
            warnings,
        }
    }

    /// Extracts a batch, returning the products and the batch statistics.
    pub fn extract_batch(&self, payloads: &[RawProductPayload]) -> (Vec<Product>, ExtractionStats) {
        let mut stats = ExtractionStats::new();
        let products =
            payloads.iter().map(|p| self.extract_with_stats(p, &mut stats)).collect();
        (products, stats)
    }
}
