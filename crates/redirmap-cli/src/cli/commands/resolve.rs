//! `redirmap resolve <url>` – show how one old URL is matched.

use anyhow::Result;
use redirmap_core::config::RedirmapConfig;
use redirmap_core::index::{CandidateIndex, Fallbacks};
use redirmap_core::inventory;
use redirmap_core::matcher::Matcher;
use redirmap_core::url_model::{is_on_host, path_of, slug_of};
use std::path::Path;

pub fn run_resolve(cfg: &RedirmapConfig, url: &str, new: &Path) -> Result<()> {
    if is_on_host(url, &cfg.new_host()) {
        println!("{url} is already on {}; no redirect needed.", cfg.new_host());
        return Ok(());
    }
    let new_urls = inventory::read_urls(new)?;
    let index = CandidateIndex::build(&new_urls, Fallbacks::from_config(cfg));
    let (profile, found) = Matcher::new(&index).resolve_auto(url);

    println!("path:     {}", path_of(url, &cfg.old_origin));
    println!("slug:     {}", slug_of(url));
    println!("category: {}", found.category);
    println!("profile:  {profile}");
    println!("tier:     {}", found.tier);
    println!("target:   {}", found.target);
    Ok(())
}
