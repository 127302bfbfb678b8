//! Writing URL inventories (output of sitemap extraction).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::URL_COLUMN;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

/// Writes a single-column CSV with a `url` header.
pub fn write_url_csv<S: AsRef<str>>(path: &Path, urls: &[S]) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer.write_record([URL_COLUMN])?;
    for url in urls {
        writer.write_record([url.as_ref()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes one URL per line.
pub fn write_url_txt<S: AsRef<str>>(path: &Path, urls: &[S]) -> Result<()> {
    ensure_parent(path)?;
    let body = urls
        .iter()
        .map(|u| u.as_ref())
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(path, body).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::read_urls;

    #[test]
    fn csv_and_txt_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let urls = ["https://a.example/1", "https://a.example/x,y"];

        let csv_path = dir.path().join("out/all_urls.csv");
        write_url_csv(&csv_path, &urls).unwrap();
        assert_eq!(read_urls(&csv_path).unwrap(), urls);

        let txt_path = dir.path().join("all_urls.txt");
        write_url_txt(&txt_path, &urls).unwrap();
        assert_eq!(read_urls(&txt_path).unwrap(), urls);
    }
}
