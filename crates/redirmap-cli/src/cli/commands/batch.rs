//! `redirmap batch <input>` – split an existing redirect CSV into import files.

use anyhow::Result;
use redirmap_core::batch;
use redirmap_core::config::RedirmapConfig;
use redirmap_core::redirects;
use std::path::Path;

pub fn run_batch(
    cfg: &RedirmapConfig,
    input: &Path,
    out_dir: &Path,
    size: usize,
    prefix: &str,
    relative_targets: bool,
) -> Result<()> {
    let mut records = batch::read_redirects_csv(input)?;
    if relative_targets {
        records = redirects::with_relative_targets(&records, &cfg.new_origin);
    }
    let written = batch::write_batches(&records, out_dir, prefix, size)?;
    println!(
        "Split {} redirect(s) into {} file(s) of up to {} in {}",
        records.len(),
        written.len(),
        size,
        out_dir.display()
    );
    Ok(())
}
