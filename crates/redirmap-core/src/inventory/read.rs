//! Reading inventories and override lists.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::ManualOverride;

use super::{InventoryError, URL_COLUMN};

fn is_text_list(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}

fn header_matches(header: &str, name: &str) -> bool {
    header
        .trim_start_matches('\u{feff}')
        .trim()
        .eq_ignore_ascii_case(name)
}

fn column_index(
    headers: &csv::StringRecord,
    path: &Path,
    column: &'static str,
) -> Result<usize, InventoryError> {
    headers
        .iter()
        .position(|h| header_matches(h, column))
        .ok_or_else(|| InventoryError::MissingColumn {
            path: path.to_path_buf(),
            column,
        })
}

/// Reads URLs from a `url`-column CSV or a `.txt` list, in file order.
///
/// Values are trimmed; blank values and `#` comment lines (text lists) are
/// skipped. Fails if the CSV lacks a `url` column or nothing usable is found.
pub fn read_urls(path: &Path) -> Result<Vec<String>> {
    let urls = if is_text_list(path) {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read URL list {}", path.display()))?;
        data.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect::<Vec<_>>()
    } else {
        read_url_column(path)?
    };

    if urls.is_empty() {
        return Err(InventoryError::Empty {
            path: path.to_path_buf(),
        }
        .into());
    }
    tracing::debug!(count = urls.len(), "read inventory {}", path.display());
    Ok(urls)
}

fn read_url_column(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open inventory {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read header of {}", path.display()))?
        .clone();
    let col = column_index(&headers, path, URL_COLUMN)?;

    let mut urls = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("read row of {}", path.display()))?;
        if let Some(value) = row.get(col).map(str::trim).filter(|v| !v.is_empty()) {
            urls.push(value.to_string());
        }
    }
    Ok(urls)
}

/// Reads manual overrides from a CSV with `path` and `target` columns.
/// Rows with a blank path or target are skipped.
pub fn read_overrides(path: &Path) -> Result<Vec<ManualOverride>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open overrides {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read header of {}", path.display()))?
        .clone();
    let path_col = column_index(&headers, path, "path")?;
    let target_col = column_index(&headers, path, "target")?;

    let mut out = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("read row of {}", path.display()))?;
        let from = row.get(path_col).map(str::trim).unwrap_or_default();
        let to = row.get(target_col).map(str::trim).unwrap_or_default();
        if from.is_empty() || to.is_empty() {
            continue;
        }
        out.push(ManualOverride::new(from, to));
    }
    Ok(out)
}
