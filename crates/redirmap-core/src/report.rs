//! Run summary: counts per category, tier and profile, plus top targets.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::category::Category;
use crate::matcher::{MatchTier, Profile};
use crate::redirects::{BuildStats, RedirectRecord};

const TOP_TARGETS: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct TargetCount {
    pub target: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub old_urls: usize,
    pub new_urls: usize,
    pub skipped_new_host: usize,
    pub skipped_blank: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub by_tier: BTreeMap<MatchTier, usize>,
    pub by_profile: BTreeMap<Profile, usize>,
    pub duplicate_paths: usize,
    pub overrides_applied: usize,
    pub overrides_ignored: usize,
    pub redirects: usize,
    pub batch_size: usize,
    pub batches: usize,
    pub top_targets: Vec<TargetCount>,
}

impl Summary {
    pub fn new(
        stats: &BuildStats,
        new_urls: usize,
        records: &[RedirectRecord],
        batch_size: usize,
        batches: usize,
    ) -> Self {
        Self {
            old_urls: stats.old_total,
            new_urls,
            skipped_new_host: stats.skipped_new_host,
            skipped_blank: stats.skipped_blank,
            by_category: stats.by_category.clone(),
            by_tier: stats.by_tier.clone(),
            by_profile: stats.by_profile.clone(),
            duplicate_paths: stats.duplicate_paths,
            overrides_applied: stats.overrides_applied(),
            overrides_ignored: stats.overrides_ignored,
            redirects: records.len(),
            batch_size,
            batches,
            top_targets: top_targets(records, TOP_TARGETS),
        }
    }

    /// Plain-text rendering for the terminal.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== REDIRECT SUMMARY ===");
        let _ = writeln!(out, "Old URLs processed:   {}", self.old_urls);
        let _ = writeln!(out, "New URLs available:   {}", self.new_urls);
        let _ = writeln!(out, "Skipped (new host):   {}", self.skipped_new_host);
        if self.skipped_blank > 0 {
            let _ = writeln!(out, "Skipped (blank):      {}", self.skipped_blank);
        }
        let _ = writeln!(out, "Duplicate paths:      {}", self.duplicate_paths);
        let _ = writeln!(out, "Overrides applied:    {}", self.overrides_applied);
        if self.overrides_ignored > 0 {
            let _ = writeln!(out, "Overrides ignored:    {}", self.overrides_ignored);
        }
        let _ = writeln!(out, "Total redirects:      {}", self.redirects);
        let _ = writeln!(
            out,
            "Batch files:          {} (up to {} per file)",
            self.batches, self.batch_size
        );

        let _ = writeln!(out, "\nBy category:");
        for c in Category::ALL {
            let n = self.by_category.get(&c).copied().unwrap_or(0);
            let _ = writeln!(out, "  {:<10} {}", c.as_str(), n);
        }
        let _ = writeln!(out, "\nBy match tier:");
        for t in MatchTier::ALL {
            let n = self.by_tier.get(&t).copied().unwrap_or(0);
            let _ = writeln!(out, "  {:<10} {}", t.as_str(), n);
        }
        let _ = writeln!(out, "\nBy profile:");
        for p in Profile::ALL {
            let n = self.by_profile.get(&p).copied().unwrap_or(0);
            let _ = writeln!(out, "  {:<10} {}", p.as_str(), n);
        }

        if !self.top_targets.is_empty() {
            let _ = writeln!(out, "\nTop redirect targets:");
            for t in &self.top_targets {
                let _ = writeln!(out, "  {:>6}  {}", t.count, t.target);
            }
        }
        out
    }
}

/// Most frequent targets, count descending, ties by first appearance.
pub fn top_targets(records: &[RedirectRecord], limit: usize) -> Vec<TargetCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for r in records {
        *counts.entry(r.target.as_str()).or_default() += 1;
    }
    let mut ranked: Vec<(usize, &str, usize)> = counts
        .into_iter()
        .enumerate()
        .map(|(i, (target, count))| (i, target, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(_, target, count)| TargetCount {
            target: target.to_string(),
            count,
        })
        .collect()
}
