//! Sitemap ingestion: collect every `<loc>` URL under a directory.
//!
//! Handles plain and gzip-compressed documents, both `<urlset>` sitemaps and
//! `<sitemapindex>` files (their `<loc>` entries are collected as well). A
//! document that is not well-formed XML is scanned with a permissive regex
//! instead; one that yields nothing simply contributes no URLs.

mod parse;
mod read;
mod scan;

pub use parse::parse_locs;
pub use read::{is_sitemap_file, read_document};
pub use scan::scan_locs;

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// `<loc>` values from one document, via XML parsing with regex recovery.
pub fn extract_locs(data: &[u8]) -> Vec<String> {
    match parse_locs(data) {
        Ok(locs) => locs,
        Err(e) => {
            tracing::debug!("sitemap XML parse failed ({e:#}); scanning text for <loc>");
            scan_locs(data)
        }
    }
}

/// Sitemap files under `root`, recursively, sorted for stable processing order.
pub fn find_sitemaps(root: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries =
            fs::read_dir(&dir).with_context(|| format!("read directory {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if is_sitemap_file(&path) {
                out.push(path);
            }
        }
    }
    out.sort();
    Ok(out)
}

/// Result of scanning a directory tree.
#[derive(Debug, Default)]
pub struct Collected {
    /// Unique URLs, sorted.
    pub urls: BTreeSet<String>,
    pub documents: usize,
    /// Documents that could not be read (logged and skipped).
    pub unreadable: usize,
}

/// Collects unique `<loc>` URLs from every sitemap under `root`.
pub fn collect_dir(root: &Path) -> Result<Collected> {
    if root.is_file() {
        let mut collected = Collected::default();
        collect_file(root, &mut collected);
        return Ok(collected);
    }

    let mut collected = Collected::default();
    for path in find_sitemaps(root)? {
        collect_file(&path, &mut collected);
    }
    tracing::info!(
        documents = collected.documents,
        unreadable = collected.unreadable,
        urls = collected.urls.len(),
        "sitemaps collected from {}",
        root.display()
    );
    Ok(collected)
}

fn collect_file(path: &Path, collected: &mut Collected) {
    match read_document(path) {
        Ok(data) => {
            collected.documents += 1;
            let locs = extract_locs(&data);
            tracing::debug!(locs = locs.len(), "sitemap {}", path.display());
            collected
                .urls
                .extend(locs.into_iter().filter(|u| !u.is_empty()));
        }
        Err(e) => {
            collected.unreadable += 1;
            tracing::warn!("skipping unreadable sitemap {}: {e:#}", path.display());
        }
    }
}
