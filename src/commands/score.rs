//! Score command implementation.

use crate::config::{Config, OutputFormat};
use crate::extract::Extractor;
use crate::product::Product;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// A product together with its per-dimension scores.
#[derive(Debug, Serialize)]
pub struct ScoredProduct {
    pub brand: String,
    pub model: Option<String>,
    pub title: String,
    pub processor_score: f64,
    pub ram_score: f64,
    pub storage_score: f64,
    pub graphics_score: f64,
}

impl ScoredProduct {
    fn from_product(product: &Product) -> Self {
        Self {
            brand: product.brand.clone(),
            model: product.model.clone(),
            title: product.title.clone(),
            processor_score: product.processor_score(),
            ram_score: product.ram_score(),
            storage_score: product.storage_score(),
            graphics_score: product.graphics_score(),
        }
    }
}

/// Computes per-dimension scores for products in a raw payload file.
pub struct ScoreCommand {
    config: Config,
}

impl ScoreCommand {
    /// Creates a new score command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Extracts every payload and formats the per-dimension scores.
    pub fn execute(&self, path: &Path) -> Result<String> {
        let payloads = crate::input::load_payloads(path)?;
        let extractor =
            Extractor::with_weight_bounds(self.config.weight_min_lbs, self.config.weight_max_lbs);
        let (products, _) = extractor.extract_batch(&payloads);

        let scored: Vec<ScoredProduct> = products.iter().map(ScoredProduct::from_product).collect();

        info!("Scored {} products", scored.len());

        Ok(match self.config.format {
            OutputFormat::Json => serde_json::to_string_pretty(&scored)?,
            OutputFormat::Markdown => format_markdown(&scored),
            OutputFormat::Csv => format_csv(&scored),
            OutputFormat::Table => format_table(&scored),
        })
    }
}

fn label(scored: &ScoredProduct) -> String {
    match &scored.model {
        Some(model) => format!("{} {}", scored.brand, model),
        None => scored.brand.clone(),
    }
}

fn format_table(scored: &[ScoredProduct]) -> String {
    if scored.is_empty() {
        return "No products found.".to_string();
    }

    let mut lines = Vec::new();

    lines.push(format!(
        "{:<30}  {:>9}  {:>6}  {:>7}  {:>8}",
        "Product", "Processor", "RAM", "Storage", "Graphics"
    ));
    lines.push(format!("{:-<30}  {:-<9}  {:-<6}  {:-<7}  {:-<8}", "", "", "", "", ""));

    for s in scored {
        let name = crate::format::truncate(&label(s), 30);
        lines.push(format!(
            "{:<30}  {:>9.1}  {:>6.1}  {:>7.1}  {:>8.1}",
            name, s.processor_score, s.ram_score, s.storage_score, s.graphics_score
        ));
    }

    lines.join("\n")
}

fn format_markdown(scored: &[ScoredProduct]) -> String {
    let mut lines = Vec::new();

    lines.push("| Product | Processor | RAM | Storage | Graphics |".to_string());
    lines.push("|---------|-----------|-----|---------|----------|".to_string());

    for s in scored {
        lines.push(format!(
            "| {} | {:.1} | {:.1} | {:.1} | {:.1} |",
            label(s),
            s.processor_score,
            s.ram_score,
            s.storage_score,
            s.graphics_score
        ));
    }

    lines.join("\n")
}

fn format_csv(scored: &[ScoredProduct]) -> String {
    let mut lines = Vec::new();
    lines.push("brand,model,processor_score,ram_score,storage_score,graphics_score".to_string());

    for s in scored {
        lines.push(format!(
            "{},{},{:.1},{:.1},{:.1},{:.1}",
            s.brand,
            s.model.as_deref().unwrap_or_default(),
            s.processor_score,
            s.ram_score,
            s.storage_score,
            s.graphics_score
        ));
    }

    lines.join("\n")
}
