//! Batch planning and redirect CSV files.
//!
//! Bulk importers cap the number of rows per file, so the final redirect list
//! is split into consecutive fixed-size chunks written as `<prefix>_<n>.csv`,
//! numbered from 1. Concatenating the batches in order gives back the full
//! list.

use anyhow::{Context, Result};
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::redirects::RedirectRecord;

const HEADER: [&str; 2] = ["path", "target"];

/// Splits `total` records into consecutive ranges of at most `size`.
///
/// All ranges are full except possibly the last. Returns an empty vec if
/// `total` is 0 or `size` is 0.
pub fn plan_batches(total: usize, size: usize) -> Vec<Range<usize>> {
    if total == 0 || size == 0 {
        return Vec::new();
    }
    (0..total)
        .step_by(size)
        .map(|start| start..(start + size).min(total))
        .collect()
}

/// File name of the `n`th batch (1-based).
pub fn batch_file_name(prefix: &str, n: usize) -> String {
    format!("{prefix}_{n}.csv")
}

/// Writes `records` as a `path,target` CSV.
pub fn write_redirects_csv(path: &Path, records: &[RedirectRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer.write_record(HEADER)?;
    for r in records {
        writer.write_record([r.path.as_str(), r.target.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a `path,target` CSV written by [`write_redirects_csv`] (or by hand).
pub fn read_redirects_csv(path: &Path) -> Result<Vec<RedirectRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut out = Vec::new();
    for row in reader.deserialize() {
        let record: RedirectRecord =
            row.with_context(|| format!("read redirect row of {}", path.display()))?;
        out.push(record);
    }
    Ok(out)
}

/// Writes `records` into `dir` as numbered batch files; returns their paths in order.
pub fn write_batches(
    records: &[RedirectRecord],
    dir: &Path,
    prefix: &str,
    size: usize,
) -> Result<Vec<PathBuf>> {
    if size == 0 {
        anyhow::bail!("batch size must be at least 1");
    }
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;

    let mut written = Vec::new();
    for (i, range) in plan_batches(records.len(), size).into_iter().enumerate() {
        let path = dir.join(batch_file_name(prefix, i + 1));
        let len = range.len();
        write_redirects_csv(&path, &records[range])?;
        tracing::debug!(records = len, "wrote batch {}", path.display());
        written.push(path);
    }
    Ok(written)
}
