//! Loading raw product payloads from JSON files.

use crate::payload::RawProductPayload;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors produced while loading raw payload files.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in input file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Comparison requires exactly 2 products, got {0}")]
    WrongArity(usize),
}

// Scrape dumps arrive either as one payload object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Box<RawProductPayload>),
    Many(Vec<RawProductPayload>),
}

/// Reads raw payloads from a JSON file holding either a single product
/// object or an array of them.
pub fn load_payloads(path: impl AsRef<Path>) -> Result<Vec<RawProductPayload>, InputError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|source| InputError::Read { path: path.to_path_buf(), source })?;

    let parsed: OneOrMany = serde_json::from_str(&content)
        .map_err(|source| InputError::Parse { path: path.to_path_buf(), source })?;

    let payloads = match parsed {
        OneOrMany::One(payload) => vec![*payload],
        OneOrMany::Many(payloads) => payloads,
    };

    debug!("Loaded {} payload(s) from {}", payloads.len(), path.display());
    Ok(payloads)
}

/// Reads exactly two payloads for a head-to-head comparison.
pub fn load_comparison_pair(
    path: impl AsRef<Path>,
) -> Result<(RawProductPayload, RawProductPayload), InputError> {
    let payloads = load_payloads(path)?;
    let [first, second]: [RawProductPayload; 2] =
        payloads.try_into().map_err(|v: Vec<_>| InputError::WrongArity(v.len()))?;
    Ok((first, second))
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

    #[test]
    fn test_load_single_object() {
        let file = write_json(r#"{"title": "HP Pavilion 15 Laptop"}"#);
        let payloads = load_payloads(file.path()).unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].title, "HP Pavilion 15 Laptop");
    }

    #[test]
    fn test_load_array() {
        let file = write_json(r#"[{"title": "Laptop A"}, {"title": "Laptop B"}]"#);
        let payloads = load_payloads(file.path()).unwrap();
        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[1].title, "Laptop B");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_payloads("/nonexistent/products.json").unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
        assert!(err.to_string().contains("Failed to read input file"));
    }

    #[test]
    fn test_load_invalid_json() {
        let file = write_json("not json at all");
        let err = load_payloads(file.path()).unwrap_err();
        assert!(matches!(err, InputError::Parse { .. }));
    }

    #[test]
    fn test_comparison_pair() {
        let file = write_json(r#"[{"title": "Laptop A"}, {"title": "Laptop B"}]"#);
        let (a, b) = load_comparison_pair(file.path()).unwrap();
        assert_eq!(a.title, "Laptop A");
        assert_eq!(b.title, "Laptop B");
    }

    #[test]
    fn test_comparison_pair_wrong_arity() {
        let file = write_json(r#"[{"title": "Laptop A"}]"#);
        let err = load_comparison_pair(file.path()).unwrap_err();
        assert!(matches!(err, InputError::WrongArity(1)));
        assert!(err.to_string().contains("exactly 2"));
    }
}
