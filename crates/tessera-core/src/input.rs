//! Reading rectangle sets from disk.
//!
//! JSON files (`.json`) hold an array of `{x, y, width, height}`
//! objects. Anything else is read as TOML with one `[[rect]]` table per
//! rectangle. File order is index order.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Rect;
use crate::analyzer::RectangleAnalyzer;
use crate::error::LoadError;

/// TOML layout: `[[rect]]` tables.
#[derive(Debug, Deserialize)]
struct RectsFile {
    #[serde(default)]
    rect: Vec<Rect>,
}

/// Parses a TOML rectangle set.
pub fn parse_toml(content: &str) -> Result<Vec<Rect>, String> {
    let file: RectsFile = toml::from_str(content).map_err(|e| e.to_string())?;
    Ok(file.rect)
}

/// Parses a JSON rectangle set.
pub fn parse_json(content: &str) -> Result<Vec<Rect>, String> {
    serde_json::from_str(content).map_err(|e| e.to_string())
}

/// Reads a rectangle set, choosing the format by file extension.
pub fn load_rects(path: &Path) -> Result<Vec<Rect>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = if is_json(path) {
        parse_json(&content)
    } else {
        parse_toml(&content)
    };
    parsed.map_err(|message| LoadError::Parse {
        path: PathBuf::from(path),
        message,
    })
}

/// Reads and validates a rectangle set in one step.
pub fn load_analyzer(path: &Path) -> Result<RectangleAnalyzer, LoadError> {
    let rects = load_rects(path)?;
    Ok(RectangleAnalyzer::new(rects)?)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
