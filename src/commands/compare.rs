//! Head-to-head comparison command implementation.

use crate::compare::{compare_products, FieldComparison, Verdict};
use crate::config::{Config, OutputFormat};
use crate::extract::Extractor;
use crate::input;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Compares exactly two products from a raw payload file, field by
/// field, from the first product's perspective.
pub fn execute(config: &Config, path: &Path) -> Result<String> {
    let (left, right) = input::load_comparison_pair(path)?;

    let extractor = Extractor::with_weight_bounds(config.weight_min_lbs, config.weight_max_lbs);
    let a = extractor.extract(&left);
    let b = extractor.extract(&right);

    let fields = compare_products(&a, &b);
    info!("Compared {:?} against {:?}", a.model, b.model);

    Ok(match config.format {
        OutputFormat::Json => serde_json::to_string_pretty(&fields)?,
        OutputFormat::Markdown => format_markdown(&a.title, &b.title, &fields),
        _ => format_table(&a.title, &b.title, &fields),
    })
}

fn format_table(left_title: &str, right_title: &str, fields: &[FieldComparison]) -> String {
    let mut lines = Vec::new();

    lines.push(format!("A: {}", left_title));
    lines.push(format!("B: {}", right_title));
    lines.push(String::new());
    lines.push(format!("{:<12} {:<26} {:<26} {}", "Field", "A", "B", "Verdict"));
    lines.push(format!("{:-<12} {:-<26} {:-<26} {:-<8}", "", "", "", ""));

    for f in fields {
        lines.push(format!(
            "{:<12} {:<26} {:<26} {}",
            f.field,
            cell(f.left.as_deref()),
            cell(f.right.as_deref()),
            marker(f.verdict)
        ));
    }

    lines.join("\n")
}

fn format_markdown(left_title: &str, right_title: &str, fields: &[FieldComparison]) -> String {
    let mut lines = Vec::new();

    lines.push(format!("## {} vs {}", left_title, right_title));
    lines.push(String::new());
    lines.push("| Field | A | B | Verdict |".to_string());
    lines.push("|-------|---|---|---------|".to_string());

    for f in fields {
        lines.push(format!(
            "| {} | {} | {} | {} |",
            f.field,
            cell(f.left.as_deref()),
            cell(f.right.as_deref()),
            f.verdict
        ));
    }

    lines.join("\n")
}

fn cell(value: Option<&str>) -> String {
    crate::format::truncate(value.unwrap_or(crate::format::NOT_SPECIFIED), 26)
}

fn marker(verdict: Verdict) -> String {
    match verdict {
        Verdict::Better => "better ↑".to_string(),
        Verdict::Worse => "worse ↓".to_string(),
        _ => verdict.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn pair_file() -> NamedTempFile {
        write_json(
            r#"[
                {"title": "ASUS ROG Strix G15, AMD Ryzen 9 6900HX, 16GB RAM, 1TB SSD", "price": 1399.99},
                {"title": "HP Pavilion 15, Intel Core i5-1235U, 8GB RAM, 512GB SSD", "price": 649.99}
            ]"#,
        )
    }

    #[test]
    fn test_compare_table_output() {
        let file = pair_file();
        let output = execute(&Config::default(), file.path()).unwrap();

        assert!(output.contains("processor"));
        assert!(output.contains("better"));
        assert!(output.contains("ASUS ROG Strix G15"));
    }

    #[test]
    fn test_compare_json_output() {
        let file = pair_file();
        let config = Config { format: OutputFormat::Json, ..Default::default() };
        let output = execute(&config, file.path()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let processor = parsed
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["field"] == "processor")
            .unwrap();
        assert_eq!(processor["verdict"], "better");

        let price = parsed.as_array().unwrap().iter().find(|f| f["field"] == "price").unwrap();
        assert_eq!(price["verdict"], "worse");
    }

    #[test]
    fn test_compare_requires_two_products() {
        let file = write_json(r#"[{"title": "Only one laptop"}]"#);
        let result = execute(&Config::default(), file.path());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exactly 2"));
    }

    #[test]
    fn test_cell_cuts_on_char_boundary() {
        let cut = cell(Some("Intel® Core™ i9-13980HX vPro Enterprise"));
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 26);
    }

    #[test]
    fn test_compare_unknown_fields() {
        let file = write_json(
            r#"[
                {"title": "Mystery machine A"},
                {"title": "Mystery machine B"}
            ]"#,
        );
        let config = Config { format: OutputFormat::Json, ..Default::default() };
        let output = execute(&config, file.path()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        for field in parsed.as_array().unwrap() {
            assert_eq!(field["verdict"], "unknown");
        }
    }
}
