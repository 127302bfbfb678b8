//! `redirmap extract <root>` – unify sitemap URLs into one inventory.

use anyhow::Result;
use redirmap_core::inventory;
use redirmap_core::sitemap;
use std::path::Path;

pub fn run_extract(root: &Path, out: &Path, txt: Option<&Path>) -> Result<()> {
    let collected = sitemap::collect_dir(root)?;
    let urls: Vec<String> = collected.urls.into_iter().collect();

    inventory::write_url_csv(out, &urls)?;
    if let Some(txt) = txt {
        inventory::write_url_txt(txt, &urls)?;
    }

    println!(
        "Collected {} unique URLs from {} sitemap(s) -> {}",
        urls.len(),
        collected.documents,
        out.display()
    );
    if collected.unreadable > 0 {
        println!("  ({} unreadable file(s) skipped; see log)", collected.unreadable);
    }
    Ok(())
}
