//! `redirmap analyze` – write per-URL match explanations.

use anyhow::Result;
use redirmap_core::analysis;
use redirmap_core::config::RedirmapConfig;
use redirmap_core::index::{CandidateIndex, Fallbacks};
use redirmap_core::inventory;
use redirmap_core::redirects::BuildSettings;
use std::path::Path;

pub fn run_analyze(
    cfg: &RedirmapConfig,
    old: &Path,
    new: &Path,
    limit: usize,
    out: &Path,
) -> Result<()> {
    let old_urls = inventory::read_urls(old)?;
    let new_urls = inventory::read_urls(new)?;
    let index = CandidateIndex::build(&new_urls, Fallbacks::from_config(cfg));
    let settings = BuildSettings::from_config(cfg);

    let rows = analysis::explain(&old_urls, &index, &settings, limit);
    analysis::write_explanations_csv(out, &rows)?;
    println!("Explained {} URL(s) -> {}", rows.len(), out.display());
    Ok(())
}
