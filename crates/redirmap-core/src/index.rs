//! Candidate index over the new-site inventory.
//!
//! Built once per run and only borrowed afterwards. The slug index keeps
//! first-insertion order because the partial-match tier scans it and takes
//! the first hit.

use indexmap::IndexMap;
use std::collections::HashSet;

use crate::category::{categorize_new, BlogBucket, Category};
use crate::config::{BlogFallbackConfig, FallbackConfig, RedirmapConfig};
use crate::matcher::keyword_tokens;
use crate::url_model::slug_of;

/// Fixed fallback targets, used when no lexical match exists.
#[derive(Debug, Clone, Default)]
pub struct Fallbacks {
    pub coarse: FallbackConfig,
    pub blog: BlogFallbackConfig,
}

impl Fallbacks {
    pub fn from_config(cfg: &RedirmapConfig) -> Self {
        Self {
            coarse: cfg.fallbacks.clone(),
            blog: cfg.blog_fallbacks.clone(),
        }
    }

    pub fn for_category(&self, category: Category) -> &str {
        self.coarse.for_category(category)
    }

    pub fn for_blog_bucket(&self, bucket: BlogBucket) -> &str {
        self.blog.for_bucket(bucket)
    }

    /// True if `target` is one of the configured fallback URLs.
    pub fn contains(&self, target: &str) -> bool {
        Category::ALL
            .iter()
            .any(|c| self.for_category(*c) == target)
            || BlogBucket::ALL
                .iter()
                .any(|b| self.for_blog_bucket(*b) == target)
    }
}

/// A blog-bucket candidate with its precomputed slug tokens.
#[derive(Debug, Clone)]
pub(crate) struct BlogCandidate {
    pub url: String,
    pub tokens: HashSet<String>,
}

#[derive(Debug, Clone)]
pub struct CandidateIndex {
    slug_index: IndexMap<String, String>,
    blog: Vec<String>,
    product: Vec<String>,
    other: Vec<String>,
    blog_candidates: Vec<BlogCandidate>,
    fallbacks: Fallbacks,
}

impl CandidateIndex {
    /// Builds the index from the new inventory, in input order.
    pub fn build<I, S>(new_urls: I, fallbacks: Fallbacks) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut slug_index = IndexMap::new();
        let mut blog = Vec::new();
        let mut product = Vec::new();
        let mut other = Vec::new();
        let mut blog_candidates = Vec::new();

        for url in new_urls {
            let url = url.as_ref().trim();
            if url.is_empty() {
                continue;
            }
            let slug = slug_of(url);
            if !slug.is_empty() {
                slug_index.entry(slug.clone()).or_insert_with(|| url.to_string());
            }
            match categorize_new(url) {
                Category::Blog => {
                    blog.push(url.to_string());
                    blog_candidates.push(BlogCandidate {
                        url: url.to_string(),
                        tokens: keyword_tokens(&slug),
                    });
                }
                Category::Product => product.push(url.to_string()),
                Category::Other => other.push(url.to_string()),
            }
        }

        tracing::debug!(
            slugs = slug_index.len(),
            blog = blog.len(),
            product = product.len(),
            other = other.len(),
            "candidate index built"
        );

        Self {
            slug_index,
            blog,
            product,
            other,
            blog_candidates,
            fallbacks,
        }
    }

    /// First new URL seen for `slug`.
    pub fn lookup_slug(&self, slug: &str) -> Option<&str> {
        self.slug_index.get(slug).map(String::as_str)
    }

    /// `(slug, url)` pairs in first-insertion order.
    pub fn slugs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slug_index
            .iter()
            .map(|(slug, url)| (slug.as_str(), url.as_str()))
    }

    pub fn slug_count(&self) -> usize {
        self.slug_index.len()
    }

    /// New URLs of one category, in input order.
    pub fn by_category(&self, category: Category) -> &[String] {
        match category {
            Category::Blog => &self.blog,
            Category::Product => &self.product,
            Category::Other => &self.other,
        }
    }

    pub(crate) fn blog_candidates(&self) -> &[BlogCandidate] {
        &self.blog_candidates
    }

    pub fn fallbacks(&self) -> &Fallbacks {
        &self.fallbacks
    }
}
