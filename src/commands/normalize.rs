//! Normalize command implementation.

use crate::config::Config;
use crate::extract::Extractor;
use crate::format::Formatter;
use crate::input;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Extracts and normalizes products from a raw payload file.
pub struct NormalizeCommand {
    config: Config,
}

impl NormalizeCommand {
    /// Creates a new normalize command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs extraction over every payload in the file and formats the
    /// normalized products.
    pub fn execute(&self, path: &Path, show_stats: bool) -> Result<String> {
        let payloads = input::load_payloads(path)?;
        let extractor =
            Extractor::with_weight_bounds(self.config.weight_min_lbs, self.config.weight_max_lbs);
        let (products, stats) = extractor.extract_batch(&payloads);

        info!(
            "Extracted {} products, {}/{} fields found, {} corrections",
            stats.processed,
            stats.fields_found,
            stats.fields_found + stats.fields_missed,
            stats.corrections
        );

        let mut output = Formatter::new(self.config.format).format_products(&products);

        if show_stats {
            output.push_str(&format!(
                "\n\nProcessed:   {}\nFields:      {} found, {} missed ({:.0}% hit rate)\nCorrections: {}",
                stats.processed,
                stats.fields_found,
                stats.fields_missed,
                stats.hit_rate() * 100.0,
                stats.corrections
            ));
        }

        Ok(output)
    }
}
