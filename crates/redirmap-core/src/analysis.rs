//! Per-URL match explanations, for spot-checking a run before import.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::category::Category;
use crate::index::CandidateIndex;
use crate::matcher::{MatchTier, Matcher, Profile};
use crate::redirects::BuildSettings;
use crate::url_model::{is_on_host, slug_of};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchExplanation {
    pub old_url: String,
    pub new_url: String,
    pub category: Category,
    pub profile: Profile,
    pub tier: MatchTier,
    pub old_slug: String,
    pub new_slug: String,
}

/// Explains the first `limit` old URLs that would receive a redirect.
pub fn explain<S: AsRef<str>>(
    old_urls: &[S],
    index: &CandidateIndex,
    settings: &BuildSettings,
    limit: usize,
) -> Vec<MatchExplanation> {
    let matcher = Matcher::new(index);
    old_urls
        .iter()
        .map(|u| u.as_ref().trim())
        .filter(|u| !u.is_empty() && !is_on_host(u, &settings.new_host))
        .take(limit)
        .map(|old_url| {
            let (profile, found) = matcher.resolve_auto(old_url);
            MatchExplanation {
                old_url: old_url.to_string(),
                old_slug: slug_of(old_url),
                new_slug: slug_of(&found.target),
                new_url: found.target,
                category: found.category,
                profile,
                tier: found.tier,
            }
        })
        .collect()
}

/// Writes explanations as CSV with a header row.
pub fn write_explanations_csv(path: &Path, rows: &[MatchExplanation]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverridePolicy;
    use crate::index::Fallbacks;

    fn settings() -> BuildSettings {
        BuildSettings {
            old_origin: "https://old.example".to_string(),
            new_host: "new.example".to_string(),
            override_policy: OverridePolicy::Replace,
        }
    }

    #[test]
    fn explains_limited_rows_and_skips_new_host() {
        let idx = CandidateIndex::build(
            ["https://new.example/collections/wigs"],
            Fallbacks::default(),
        );
        let old = [
            "https://new.example/collections/wigs",
            "https://old.example/wigs/",
            "https://old.example/contact",
            "https://old.example/about",
        ];
        let rows = explain(&old, &idx, &settings(), 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].old_slug, "wigs");
        assert_eq!(rows[0].new_slug, "wigs");
        assert_eq!(rows[0].tier, MatchTier::Exact);
        assert_eq!(rows[0].profile, Profile::General);
        assert_eq!(rows[1].tier, MatchTier::Fallback);
        assert_eq!(rows[1].category, Category::Other);
    }

    #[test]
    fn csv_has_header() {
        let idx = CandidateIndex::build(["https://new.example/collections/wigs"], Fallbacks::default());
        let rows = explain(&["https://old.example/wigs"], &idx, &settings(), 10);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.csv");
        write_explanations_csv(&path, &rows).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("old_url,new_url,category,profile,tier,old_slug,new_slug")
        );
        assert_eq!(
            lines.next(),
            Some("https://old.example/wigs,https://new.example/collections/wigs,product,general,exact,wigs,wigs")
        );
    }
}
