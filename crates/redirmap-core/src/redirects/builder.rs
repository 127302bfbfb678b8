//! Drives the matcher over the old inventory and merges the results.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::category::Category;
use crate::config::{ManualOverride, OverridePolicy, RedirmapConfig};
use crate::index::{CandidateIndex, Fallbacks};
use crate::matcher::{MatchTier, Matcher, Profile};
use crate::url_model::{is_on_host, path_of};

use super::{RedirectRecord, RedirectSet};

const PROGRESS_EVERY: usize = 500;

/// The slice of configuration the builder needs.
#[derive(Debug, Clone)]
pub struct BuildSettings {
    pub old_origin: String,
    pub new_host: String,
    pub override_policy: OverridePolicy,
}

impl BuildSettings {
    pub fn from_config(cfg: &RedirmapConfig) -> Self {
        Self {
            old_origin: cfg.old_origin.clone(),
            new_host: cfg.new_host(),
            override_policy: cfg.override_policy,
        }
    }
}

/// Counters collected while building.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub old_total: usize,
    pub skipped_new_host: usize,
    pub skipped_blank: usize,
    pub by_profile: BTreeMap<Profile, usize>,
    pub by_category: BTreeMap<Category, usize>,
    pub by_tier: BTreeMap<MatchTier, usize>,
    /// Computed records dropped because their path was already present.
    pub duplicate_paths: usize,
    pub overrides_appended: usize,
    pub overrides_replaced: usize,
    /// Overrides ignored under `fill-missing` because the path was computed.
    pub overrides_ignored: usize,
}

impl BuildStats {
    pub fn overrides_applied(&self) -> usize {
        self.overrides_appended + self.overrides_replaced
    }
}

#[derive(Debug, Clone)]
pub struct RedirectOutcome {
    pub records: Vec<RedirectRecord>,
    pub stats: BuildStats,
}

pub struct RedirectBuilder<'a> {
    matcher: Matcher<'a>,
    settings: &'a BuildSettings,
}

impl<'a> RedirectBuilder<'a> {
    pub fn new(index: &'a CandidateIndex, settings: &'a BuildSettings) -> Self {
        Self {
            matcher: Matcher::new(index),
            settings,
        }
    }

    /// Builds the deduplicated redirect list.
    ///
    /// Blog-profile records are merged ahead of general-profile records, each
    /// in input order, first path wins. Overrides are applied last according
    /// to the configured policy.
    pub fn build<I, S>(&self, old_urls: I, overrides: &[ManualOverride]) -> RedirectOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = BuildStats::default();
        let mut blog_records = Vec::new();
        let mut general_records = Vec::new();

        for (i, raw) in old_urls.into_iter().enumerate() {
            if i > 0 && i % PROGRESS_EVERY == 0 {
                tracing::debug!("processed {} old URLs", i);
            }
            stats.old_total += 1;
            let old_url = raw.as_ref().trim();
            if old_url.is_empty() {
                stats.skipped_blank += 1;
                continue;
            }
            if is_on_host(old_url, &self.settings.new_host) {
                stats.skipped_new_host += 1;
                continue;
            }

            let path = path_of(old_url, &self.settings.old_origin);
            let (profile, found) = self.matcher.resolve_auto(old_url);
            *stats.by_profile.entry(profile).or_default() += 1;
            *stats.by_category.entry(found.category).or_default() += 1;
            *stats.by_tier.entry(found.tier).or_default() += 1;

            let record = RedirectRecord::new(path, found.target);
            match profile {
                Profile::Blog => blog_records.push(record),
                Profile::General => general_records.push(record),
            }
        }

        let computed = blog_records.len() + general_records.len();
        let mut set = RedirectSet::new();
        let added = set.extend_first_wins(blog_records) + set.extend_first_wins(general_records);
        stats.duplicate_paths = computed - added;

        self.apply_overrides(&mut set, overrides, &mut stats);

        tracing::info!(
            old = stats.old_total,
            skipped = stats.skipped_new_host,
            redirects = set.len(),
            overrides = stats.overrides_applied(),
            "redirects built"
        );

        RedirectOutcome {
            records: set.into_records(),
            stats,
        }
    }

    fn apply_overrides(
        &self,
        set: &mut RedirectSet,
        overrides: &[ManualOverride],
        stats: &mut BuildStats,
    ) {
        for o in overrides {
            let record = RedirectRecord::new(o.path.trim(), o.target.trim());
            if record.path.is_empty() || record.target.is_empty() {
                tracing::warn!(path = %o.path, "ignoring incomplete manual override");
                continue;
            }
            match self.settings.override_policy {
                OverridePolicy::Replace => match set.replace(record) {
                    Some(previous) => {
                        tracing::debug!(path = %o.path, %previous, "override replaced computed target");
                        stats.overrides_replaced += 1;
                    }
                    None => stats.overrides_appended += 1,
                },
                OverridePolicy::FillMissing => {
                    if set.insert(record) {
                        stats.overrides_appended += 1;
                    } else {
                        stats.overrides_ignored += 1;
                    }
                }
            }
        }
    }
}

/// One-shot convenience: builds the index from `new_urls` and runs the builder.
pub fn build_redirects<S: AsRef<str>>(
    old_urls: &[S],
    new_urls: &[S],
    overrides: &[ManualOverride],
    cfg: &RedirmapConfig,
) -> RedirectOutcome {
    let index = CandidateIndex::build(new_urls, Fallbacks::from_config(cfg));
    let settings = BuildSettings::from_config(cfg);
    RedirectBuilder::new(&index, &settings).build(old_urls, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FallbackConfig;

    fn cfg() -> RedirmapConfig {
        RedirmapConfig {
            old_origin: "https://old.example".to_string(),
            new_origin: "https://new.example".to_string(),
            fallbacks: FallbackConfig {
                blog: "https://new.example/blogs/news".to_string(),
                product: "https://new.example/collections/all".to_string(),
                other: "https://new.example/".to_string(),
            },
            overrides: Vec::new(),
            ..RedirmapConfig::default()
        }
    }

    const NEW: &[&str] = &[
        "https://new.example/collections/wigs",
        "https://new.example/blogs/news/wig-care-guide",
        "https://new.example/products/silicone-forms",
    ];

    #[test]
    fn skips_new_host_and_blanks() {
        let old = [
            "https://new.example/collections/wigs",
            "   ",
            "https://old.example/wigs",
        ];
        let out = build_redirects(&old, NEW, &[], &cfg());
        assert_eq!(out.records, vec![RedirectRecord::new("/wigs", NEW[0])]);
        assert_eq!(out.stats.skipped_new_host, 1);
        assert_eq!(out.stats.skipped_blank, 1);
        assert_eq!(out.stats.old_total, 3);
    }

    #[test]
    fn blog_records_merge_ahead_of_general() {
        let old = [
            "https://old.example/wigs",
            "https://old.example/blog/wig-care-guide",
        ];
        let out = build_redirects(&old, NEW, &[], &cfg());
        let paths: Vec<_> = out.records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/blog/wig-care-guide", "/wigs"]);
        assert_eq!(out.stats.by_profile.get(&Profile::Blog), Some(&1));
        assert_eq!(out.stats.by_profile.get(&Profile::General), Some(&1));
    }

    #[test]
    fn duplicate_paths_keep_first() {
        let old = [
            "https://old.example/silicone-forms",
            "http://www.old.example/silicone-forms",
        ];
        let out = build_redirects(&old, NEW, &[], &cfg());
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.stats.duplicate_paths, 1);
    }

    #[test]
    fn override_replace_wins_in_place() {
        let mut c = cfg();
        c.override_policy = OverridePolicy::Replace;
        let old = ["https://old.example/wigs", "https://old.example/contact"];
        let overrides = [
            ManualOverride::new("/wigs", "https://new.example/collections/all-wigs"),
            ManualOverride::new("/extra", "https://new.example/"),
        ];
        let out = build_redirects(&old, NEW, &overrides, &c);
        assert_eq!(
            out.records,
            vec![
                RedirectRecord::new("/wigs", "https://new.example/collections/all-wigs"),
                RedirectRecord::new("/contact", "https://new.example/"),
                RedirectRecord::new("/extra", "https://new.example/"),
            ]
        );
        assert_eq!(out.stats.overrides_replaced, 1);
        assert_eq!(out.stats.overrides_appended, 1);
    }

    #[test]
    fn override_fill_missing_keeps_computed() {
        let c = cfg();
        assert_eq!(c.override_policy, OverridePolicy::FillMissing);
        let old = ["https://old.example/wigs"];
        let overrides = [
            ManualOverride::new("/wigs", "https://new.example/collections/all-wigs"),
            ManualOverride::new("/extra", "https://new.example/"),
        ];
        let out = build_redirects(&old, NEW, &overrides, &c);
        assert_eq!(out.records[0], RedirectRecord::new("/wigs", NEW[0]));
        assert_eq!(out.records[1], RedirectRecord::new("/extra", "https://new.example/"));
        assert_eq!(out.stats.overrides_ignored, 1);
    }

    #[test]
    fn default_config_keeps_computed_target_over_override() {
        let c = RedirmapConfig {
            old_origin: "https://old.example".to_string(),
            new_origin: "https://new.example".to_string(),
            ..RedirmapConfig::default()
        };
        let new = ["https://new.example/pages/contact"];
        let old = ["https://old.example/contact"];
        let overrides = [ManualOverride::new("/contact", "https://new.example/pages/other")];
        let out = build_redirects(&old, &new, &overrides, &c);
        let contact = out.records.iter().find(|r| r.path == "/contact").unwrap();
        assert_eq!(contact.target, "https://new.example/pages/contact");
        assert_eq!(out.stats.overrides_ignored, 1);
        assert_eq!(out.stats.overrides_replaced, 0);
    }

    #[test]
    fn empty_fallback_reports_its_key() {
        let mut c = cfg();
        c.fallbacks.other = String::new();
        assert_eq!(c.empty_fallback(), Some("other"));
    }

    #[test]
    fn tier_and_category_counts() {
        let old = [
            "https://old.example/wigs",
            "https://old.example/some-breast-form-xyz",
        ];
        let out = build_redirects(&old, NEW, &[], &cfg());
        assert_eq!(out.stats.by_tier.get(&MatchTier::Exact), Some(&1));
        assert_eq!(out.stats.by_tier.get(&MatchTier::Fallback), Some(&1));
        assert_eq!(out.stats.by_category.get(&Category::Product), Some(&2));
    }
}
