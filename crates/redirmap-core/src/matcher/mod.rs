//! Resolves one old URL to one new URL.
//!
//! Tiers, first success wins:
//! 1. exact slug match against the slug index
//! 2. partial slug match (symmetric containment, first hit in index order)
//! 3. keyword overlap against new blog URLs (blog profile only)
//! 4. category fallback (coarse for the general profile, per blog bucket
//!    for the blog profile)
//!
//! Tier 4 always yields a URL, so resolution never fails.

mod keyword;
mod tiers;

pub use keyword::keyword_tokens;

use serde::Serialize;
use std::fmt;

use crate::category::{blog_bucket, categorize, is_blog_content, Category};
use crate::index::CandidateIndex;
use crate::url_model::slug_of;

/// Which tier set to run for an old URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    General,
    Blog,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::General, Profile::Blog];

    /// Blog profile for editorial content, general for everything else.
    pub fn for_url(url: &str) -> Self {
        if is_blog_content(url) {
            Profile::Blog
        } else {
            Profile::General
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::General => "general",
            Profile::Blog => "blog",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Exact,
    Partial,
    Keyword,
    Fallback,
}

impl MatchTier {
    pub const ALL: [MatchTier; 4] = [
        MatchTier::Exact,
        MatchTier::Partial,
        MatchTier::Keyword,
        MatchTier::Fallback,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Partial => "partial",
            MatchTier::Keyword => "keyword",
            MatchTier::Fallback => "fallback",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of resolving one old URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub target: String,
    pub tier: MatchTier,
    /// Category of the old URL (drives the coarse fallback).
    pub category: Category,
}

/// Borrowing view over a built index; cheap to construct.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    index: &'a CandidateIndex,
}

impl<'a> Matcher<'a> {
    pub fn new(index: &'a CandidateIndex) -> Self {
        Self { index }
    }

    /// Resolves `old_url` with the given profile.
    pub fn resolve(&self, old_url: &str, profile: Profile) -> Match {
        let slug = slug_of(old_url);
        let category = categorize(old_url);

        let found = tiers::exact(self.index, &slug)
            .map(|t| (t, MatchTier::Exact))
            .or_else(|| tiers::partial(self.index, &slug).map(|t| (t, MatchTier::Partial)))
            .or_else(|| match profile {
                Profile::Blog => {
                    tiers::keyword_overlap(self.index, &slug).map(|t| (t, MatchTier::Keyword))
                }
                Profile::General => None,
            });

        if let Some((target, tier)) = found {
            return Match {
                target: target.to_string(),
                tier,
                category,
            };
        }

        let fallbacks = self.index.fallbacks();
        let target = match profile {
            Profile::General => fallbacks.for_category(category),
            Profile::Blog => fallbacks.for_blog_bucket(blog_bucket(old_url)),
        };
        Match {
            target: target.to_string(),
            tier: MatchTier::Fallback,
            category,
        }
    }

    /// Resolves `old_url` with the profile chosen by the blog-content predicate.
    pub fn resolve_auto(&self, old_url: &str) -> (Profile, Match) {
        let profile = Profile::for_url(old_url);
        (profile, self.resolve(old_url, profile))
    }

    /// Target URL for `old_url`; never empty as long as fallbacks are configured.
    pub fn match_url(&self, old_url: &str, profile: Profile) -> String {
        self.resolve(old_url, profile).target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::BlogBucket;
    use crate::index::Fallbacks;

    const HEELS: &str =
        "https://new.example/blogs/community-stories/crossdressing-101-how-to-walk-in-high-heels";

    fn index(urls: &[&str]) -> CandidateIndex {
        CandidateIndex::build(urls.iter().copied(), Fallbacks::default())
    }

    #[test]
    fn exact_slug_beats_everything() {
        let idx = index(&[
            "https://new.example/collections/silicone-breast-forms-extra",
            "https://new.example/products/silicone-breast-forms",
        ]);
        let m = Matcher::new(&idx);
        for profile in [Profile::General, Profile::Blog] {
            let r = m.resolve("https://old.example/shop/silicone-breast-forms/", profile);
            assert_eq!(r.tier, MatchTier::Exact);
            assert_eq!(r.target, "https://new.example/products/silicone-breast-forms");
        }
    }

    #[test]
    fn partial_match_contained_slug() {
        let idx = index(&["https://new.example/collections/shoes", HEELS]);
        let m = Matcher::new(&idx);
        let old = "https://old.example/blog/how-to-walk-in-high-heels/";
        let r = m.resolve(old, Profile::for_url(old));
        assert_eq!(r.tier, MatchTier::Partial);
        assert_eq!(r.target, HEELS);
    }

    #[test]
    fn heels_post_reached_by_keyword_overlap() {
        // "how-to-walk-in-heels" is not a substring of the new slug
        // ("...in-high-heels"), so the blog profile's token overlap finds it.
        let idx = index(&["https://new.example/collections/shoes", HEELS]);
        let m = Matcher::new(&idx);
        let old = "https://old.example/blog/how-to-walk-in-heels/";
        let (profile, r) = m.resolve_auto(old);
        assert_eq!(profile, Profile::Blog);
        assert_eq!(r.tier, MatchTier::Keyword);
        assert_eq!(r.target, HEELS);
    }

    #[test]
    fn partial_match_first_hit_in_index_order() {
        let idx = index(&[
            "https://new.example/products/wig-cap",
            "https://new.example/products/lace-wig-cap-deluxe",
        ]);
        let m = Matcher::new(&idx);
        // new slug "wig-cap" is contained in the old slug, and the old slug
        // is contained in nothing; the first entry wins
        let r = m.resolve("https://old.example/premium-wig-cap", Profile::General);
        assert_eq!(r.tier, MatchTier::Partial);
        assert_eq!(r.target, "https://new.example/products/wig-cap");
    }

    #[test]
    fn product_fallback_scenario() {
        let idx = index(&["https://new.example/blogs/news/unrelated-post"]);
        let m = Matcher::new(&idx);
        let r = m.resolve("https://old.example/some-breast-form-xyz", Profile::General);
        assert_eq!(r.tier, MatchTier::Fallback);
        assert_eq!(r.category, Category::Product);
        assert_eq!(r.target, Fallbacks::default().for_category(Category::Product));
    }

    #[test]
    fn empty_path_falls_back() {
        let idx = index(&["https://new.example/products/anything"]);
        let m = Matcher::new(&idx);
        let fb = Fallbacks::default();
        for url in ["https://old.example", "https://old.example/", "not a url"] {
            let (_, r) = m.resolve_auto(url);
            assert_eq!(r.tier, MatchTier::Fallback);
            assert!(fb.contains(&r.target), "{url} -> {}", r.target);
        }
    }

    #[test]
    fn keyword_overlap_only_for_blog_profile() {
        let idx = index(&[
            "https://new.example/blogs/news/choosing-your-first-wig",
            "https://new.example/blogs/news/first-time-out-dressed",
        ]);
        let m = Matcher::new(&idx);
        let old = "https://old.example/blog/my-first-time-dressed-up";

        let blog = m.resolve(old, Profile::Blog);
        assert_eq!(blog.tier, MatchTier::Keyword);
        assert_eq!(blog.target, "https://new.example/blogs/news/first-time-out-dressed");

        let general = m.resolve(old, Profile::General);
        assert_eq!(general.tier, MatchTier::Fallback);
        assert_eq!(general.target, Fallbacks::default().for_category(Category::Blog));
    }

    #[test]
    fn blog_profile_fine_fallback() {
        let idx = index(&["https://new.example/collections/wigs"]);
        let m = Matcher::new(&idx);
        let fb = Fallbacks::default();
        let r = m.resolve("https://old.example/blog/zzz-makeup-qqq", Profile::Blog);
        assert_eq!(r.tier, MatchTier::Fallback);
        assert_eq!(r.target, fb.for_blog_bucket(BlogBucket::Beauty));
    }

    #[test]
    fn match_url_is_deterministic() {
        let idx = index(&[HEELS, "https://new.example/collections/shoes"]);
        let m = Matcher::new(&idx);
        let a = m.match_url("https://old.example/tag/heels-guide", Profile::Blog);
        let b = m.match_url("https://old.example/tag/heels-guide", Profile::Blog);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }
}
