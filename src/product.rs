//! Normalized product entity and batch extraction statistics.

use crate::score;
use serde::{Deserialize, Serialize};

/// A laptop with normalized, display-ready specification fields.
///
/// `None` means extraction failed with low confidence; callers display
/// "Not Specified" rather than treating it as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    /// Marketplace product identifier, when present in the payload.
    pub asin: Option<String>,
    /// Original listing title.
    pub title: String,
    /// Authoritative brand; "Unknown Brand" when nothing matched.
    pub brand: String,
    /// Model name, when detectable.
    pub model: Option<String>,
    /// e.g. "Intel Core i7-1270H"
    pub processor: Option<String>,
    /// e.g. "16GB DDR5"
    pub ram: Option<String>,
    /// e.g. "1TB SSD"
    pub storage: Option<String>,
    /// e.g. "NVIDIA GeForce RTX 3070"
    pub graphics: Option<String>,
    /// e.g. "15.6\""
    pub screen_size: Option<String>,
    /// e.g. "1920 x 1080" or "FHD"
    pub screen_resolution: Option<String>,
    /// e.g. "3.9 lbs"
    pub weight: Option<String>,
    /// e.g. "18 hours"
    pub battery_life: Option<String>,
    /// e.g. "144Hz"
    pub refresh_rate: Option<String>,
    /// Whether the listing advertises a touchscreen.
    pub touchscreen: bool,
    /// Resolved price, when any payload shape yielded one.
    pub price: Option<f64>,
    /// Resolved star rating.
    pub rating: Option<f32>,
    /// Correction/suspicion annotations, e.g. "Corrected from TB → GB".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Product {
    /// Processor score on the canonical [40,100] scale; 0 when unknown.
    pub fn processor_score(&self) -> f64 {
        score::processor_score(self.processor.as_deref().unwrap_or(""))
    }

    /// RAM score clamped to 100; 0 when unknown.
    pub fn ram_score(&self) -> f64 {
        score::ram_score(self.ram.as_deref().unwrap_or(""))
    }

    /// Additive storage score; 0 when unknown.
    pub fn storage_score(&self) -> f64 {
        score::storage_score(self.storage.as_deref().unwrap_or(""))
    }

    /// Graphics score on the canonical [40,100] scale; 0 when unknown.
    pub fn graphics_score(&self) -> f64 {
        score::graphics_score(self.graphics.as_deref().unwrap_or(""))
    }

    /// Returns true if any spec field carries a warning annotation.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Success/failure counters for a batch of extractions.
///
/// Owned by the caller and threaded through explicitly; the extraction
/// functions themselves hold no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Payloads processed.
    pub processed: u32,
    /// Spec fields successfully extracted.
    pub fields_found: u32,
    /// Spec fields where every source came up empty.
    pub fields_missed: u32,
    /// Values auto-corrected or flagged by validation.
    pub corrections: u32,
}

impl ExtractionStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one field extraction outcome.
    pub fn record_field(&mut self, found: bool) {
        if found {
            self.fields_found += 1;
        } else {
            self.fields_missed += 1;
        }
    }

    /// Folds another batch's counters into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.processed += other.processed;
        self.fields_found += other.fields_found;
        self.fields_missed += other.fields_missed;
        self.corrections += other.corrections;
    }

    /// Fraction of attempted fields that were found, 0.0 when nothing ran.
    pub fn hit_rate(&self) -> f64 {
        let attempted = self.fields_found + self.fields_missed;
        if attempted == 0 {
            0.0
        } else {
            f64::from(self.fields_found) / f64::from(attempted)
        }
    }
}
