//! `redirmap build` – match old URLs to new URLs and write redirect files.

use anyhow::{Context, Result};
use redirmap_core::batch;
use redirmap_core::config::RedirmapConfig;
use redirmap_core::index::{CandidateIndex, Fallbacks};
use redirmap_core::inventory;
use redirmap_core::redirects::{self, BuildSettings, RedirectBuilder};
use redirmap_core::report::Summary;
use std::fs;
use std::path::Path;

const REDIRECTS_FILE: &str = "redirects.csv";

pub struct BuildArgs<'a> {
    pub old: &'a Path,
    pub new: &'a Path,
    pub overrides: Option<&'a Path>,
    pub out_dir: &'a Path,
    pub relative_targets: bool,
    pub json: bool,
}

pub fn run_build(cfg: &RedirmapConfig, args: &BuildArgs<'_>) -> Result<()> {
    // Inventories are validated before any matching happens.
    let old_urls = inventory::read_urls(args.old)?;
    let new_urls = inventory::read_urls(args.new)?;

    let mut overrides = cfg.overrides.clone();
    if let Some(path) = args.overrides {
        overrides.extend(inventory::read_overrides(path)?);
    }

    let index = CandidateIndex::build(&new_urls, Fallbacks::from_config(cfg));
    let settings = BuildSettings::from_config(cfg);
    let outcome = RedirectBuilder::new(&index, &settings).build(&old_urls, &overrides);

    let records = if args.relative_targets {
        redirects::with_relative_targets(&outcome.records, &cfg.new_origin)
    } else {
        outcome.records
    };

    fs::create_dir_all(args.out_dir)
        .with_context(|| format!("create {}", args.out_dir.display()))?;
    let all_path = args.out_dir.join(REDIRECTS_FILE);
    batch::write_redirects_csv(&all_path, &records)?;
    let batches = batch::write_batches(&records, args.out_dir, &cfg.batch_prefix, cfg.batch_size)?;

    let summary = Summary::new(&outcome.stats, new_urls.len(), &records, cfg.batch_size, batches.len());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render());
        println!("\nWrote {}", all_path.display());
        for path in &batches {
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
