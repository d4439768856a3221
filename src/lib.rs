//! laptop-specs - Laptop specification extraction and scoring
//!
//! Turns noisy scraped marketplace listings into normalized, comparable
//! laptop specification records: per-field extractors with fallback
//! chains, canonical text normalizers, brand/model detection, numeric
//! scoring, and pairwise better/worse/equal/unknown comparisons.

pub mod brand;
pub mod commands;
pub mod compare;
pub mod config;
pub mod extract;
pub mod format;
pub mod input;
pub mod normalize;
pub mod payload;
pub mod product;
pub mod score;
pub mod validate;

pub use compare::Verdict;
pub use config::Config;
pub use extract::Extractor;
pub use payload::RawProductPayload;
pub use product::{ExtractionStats, Product};
