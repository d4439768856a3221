//! Output formatting for products (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::product::Product;

/// Shown for any spec field whose extraction came up empty.
pub const NOT_SPECIFIED: &str = "Not Specified";

/// Formats products for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single product.
    pub fn format_product(&self, product: &Product) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(product),
            OutputFormat::Table => self.table_single(product),
            OutputFormat::Markdown => self.markdown_single(product),
            OutputFormat::Csv => self.csv_products(std::slice::from_ref(product)),
        }
    }

    /// Formats multiple products.
    pub fn format_products(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    // JSON formatting

    fn json_single(&self, product: &Product) -> String {
        serde_json::to_string_pretty(product).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_products(&self, products: &[Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_single(&self, product: &Product) -> String {
        fn spec(value: Option<&str>) -> &str {
            value.unwrap_or(NOT_SPECIFIED)
        }

        let mut lines = Vec::new();

        if let Some(asin) = &product.asin {
            lines.push(format!("ASIN:        {}", asin));
        }
        lines.push(format!("Title:       {}", product.title));
        lines.push(format!("Brand:       {}", product.brand));
        lines.push(format!("Model:       {}", spec(product.model.as_deref())));
        lines.push(format!("Processor:   {}", spec(product.processor.as_deref())));
        lines.push(format!("RAM:         {}", spec(product.ram.as_deref())));
        lines.push(format!("Storage:     {}", spec(product.storage.as_deref())));
        lines.push(format!("Graphics:    {}", spec(product.graphics.as_deref())));
        lines.push(format!("Screen:      {}", spec(product.screen_size.as_deref())));
        lines.push(format!("Resolution:  {}", spec(product.screen_resolution.as_deref())));
        lines.push(format!("Weight:      {}", spec(product.weight.as_deref())));
        lines.push(format!("Battery:     {}", spec(product.battery_life.as_deref())));
        lines.push(format!("Refresh:     {}", spec(product.refresh_rate.as_deref())));
        lines.push(format!("Touchscreen: {}", if product.touchscreen { "Yes" } else { "No" }));

        match product.price {
            Some(price) => lines.push(format!("Price:       ${:.2}", price)),
            None => lines.push(format!("Price:       {}", NOT_SPECIFIED)),
        }
        match product.rating {
            Some(rating) => lines.push(format!("Rating:      {:.1}/5", rating)),
            None => lines.push(format!("Rating:      {}", NOT_SPECIFIED)),
        }

        if product.has_warnings() {
            lines.push(format!("Warnings:    {}", product.warnings.join("; ")));
        }

        lines.join("\n")
    }

    fn table_products(&self, products: &[Product]) -> String {
        let brand_width = 10;
        let processor_width = 26;
        let ram_width = 12;
        let storage_width = 16;
        let price_width = 10;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<brand_width$}  {:<processor_width$}  {:<ram_width$}  {:<storage_width$}  {:<price_width$}  {}",
            "Brand", "Processor", "RAM", "Storage", "Price", "Model"
        ));
        lines.push(format!(
            "{:-<brand_width$}  {:-<processor_width$}  {:-<ram_width$}  {:-<storage_width$}  {:-<price_width$}  {:-<20}",
            "", "", "", "", "", ""
        ));

        for product in products {
            let processor = truncate(
                product.processor.as_deref().unwrap_or(NOT_SPECIFIED),
                processor_width,
            );
            let ram = truncate(product.ram.as_deref().unwrap_or(NOT_SPECIFIED), ram_width);
            let mut storage =
                truncate(product.storage.as_deref().unwrap_or(NOT_SPECIFIED), storage_width);
            if product.has_warnings() {
                storage.push_str(" *");
            }

            let price_str = match product.price {
                Some(p) => format!("{:.2}", p),
                None => "N/A".to_string(),
            };

            lines.push(format!(
                "{:<brand_width$}  {:<processor_width$}  {:<ram_width$}  {:<storage_width$}  {:>price_width$}  {}",
                truncate(&product.brand, brand_width),
                processor,
                ram,
                storage,
                price_str,
                product.model.as_deref().unwrap_or(NOT_SPECIFIED)
            ));
        }

        if products.iter().any(Product::has_warnings) {
            lines.push(String::new());
            lines.push("* value was corrected or flagged during validation".to_string());
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, product: &Product) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## {}", product.title));
        lines.push(String::new());

        if let Some(asin) = &product.asin {
            lines.push(format!("- **ASIN:** {}", asin));
        }
        lines.push(format!("- **Brand:** {}", product.brand));
        if let Some(model) = &product.model {
            lines.push(format!("- **Model:** {}", model));
        }

        for (label, value) in [
            ("Processor", &product.processor),
            ("RAM", &product.ram),
            ("Storage", &product.storage),
            ("Graphics", &product.graphics),
            ("Screen", &product.screen_size),
            ("Resolution", &product.screen_resolution),
            ("Weight", &product.weight),
            ("Battery", &product.battery_life),
            ("Refresh Rate", &product.refresh_rate),
        ] {
            lines.push(format!("- **{}:** {}", label, value.as_deref().unwrap_or(NOT_SPECIFIED)));
        }

        if product.touchscreen {
            lines.push("- **Touchscreen:** Yes".to_string());
        }
        if let Some(price) = product.price {
            lines.push(format!("- **Price:** ${:.2}", price));
        }
        if let Some(rating) = product.rating {
            lines.push(format!("- **Rating:** {:.1}/5", rating));
        }
        if product.has_warnings() {
            lines.push(format!("- **Warnings:** {}", product.warnings.join("; ")));
        }

        lines.join("\n")
    }

    fn markdown_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();

        lines.push("| Brand | Model | Processor | RAM | Storage | Price |".to_string());
        lines.push("|-------|-------|-----------|-----|---------|-------|".to_string());

        for product in products {
            let price_str = match product.price {
                Some(p) => format!("${:.2}", p),
                None => "N/A".to_string(),
            };

            lines.push(format!(
                "| {} | {} | {} | {} | {} | {} |",
                product.brand,
                product.model.as_deref().unwrap_or(NOT_SPECIFIED),
                product.processor.as_deref().unwrap_or(NOT_SPECIFIED),
                product.ram.as_deref().unwrap_or(NOT_SPECIFIED),
                product.storage.as_deref().unwrap_or(NOT_SPECIFIED),
                price_str
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", products.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "asin,title,brand,model,processor,ram,storage,graphics,screen_size,resolution,weight,battery_life,refresh_rate,touchscreen,price,rating,warnings"
            .to_string()
    }

    fn csv_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            fn cell(value: &Option<String>) -> String {
                value.as_deref().map(Formatter::csv_escape).unwrap_or_default()
            }

            let price = product.price.map(|p| p.to_string()).unwrap_or_default();
            let rating = product.rating.map(|r| r.to_string()).unwrap_or_default();
            let warnings = Self::csv_escape(&product.warnings.join("; "));

            lines.push(format!(
                "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
                product.asin.clone().unwrap_or_default(),
                Self::csv_escape(&product.title),
                Self::csv_escape(&product.brand),
                cell(&product.model),
                cell(&product.processor),
                cell(&product.ram),
                cell(&product.storage),
                cell(&product.graphics),
                cell(&product.screen_size),
                cell(&product.screen_resolution),
                cell(&product.weight),
                cell(&product.battery_life),
                cell(&product.refresh_rate),
                product.touchscreen,
                price,
                rating,
                warnings
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Shortens a value to at most `max` characters with a trailing ellipsis.
/// Counts chars, not bytes; titles carry multibyte glyphs like ™.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let head: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", head)
}
