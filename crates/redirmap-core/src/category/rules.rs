//! Ordered keyword rule sets.

use super::{BlogBucket, Category};

const BLOG_KEYWORDS: &[&str] = &[
    "blog",
    "tutorial",
    "how-to",
    "transgender",
    "feminization",
    "makeup",
    "beauty",
    "community",
    "coming-out",
    "gender",
    "/blog/",
    "/blogs/",
];

const PRODUCT_KEYWORDS: &[&str] = &[
    "breast-form",
    "bra",
    "wig",
    "shoe",
    "heel",
    "lingerie",
    "panty",
    "adhesive",
    "tape",
    "brand",
    "size",
    "style",
    "/collections/",
    "/products/",
];

/// Indicators that an old URL is editorial content (wider than `BLOG_KEYWORDS`).
const BLOG_CONTENT_INDICATORS: &[&str] = &[
    "/blog/",
    "crossdressing",
    "tutorial",
    "tips",
    "guide",
    "how-to",
    "transgender",
    "feminization",
    "makeup",
    "beauty",
    "story",
    "experience",
];

/// Checked in order; first bucket with a hit wins.
const BLOG_BUCKETS: &[(BlogBucket, &[&str])] = &[
    (BlogBucket::Beauty, &["beauty", "makeup", "feminine"]),
    (BlogBucket::Tips, &["tips", "crossdressing", "tutorial"]),
    (BlogBucket::Care, &["breast-form", "bra", "lingerie"]),
    (BlogBucket::BodyShaping, &["body", "shaping", "curve"]),
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Classifies an old-site URL. Blog rules are checked before Product rules.
pub fn categorize(url: &str) -> Category {
    let lower = url.to_lowercase();
    if contains_any(&lower, BLOG_KEYWORDS) {
        Category::Blog
    } else if contains_any(&lower, PRODUCT_KEYWORDS) {
        Category::Product
    } else {
        Category::Other
    }
}

/// Classifies a new-site URL by its path markers.
pub fn categorize_new(url: &str) -> Category {
    if url.contains("/blogs/") {
        Category::Blog
    } else if url.contains("/collections/") || url.contains("/products/") {
        Category::Product
    } else {
        Category::Other
    }
}

/// True if the old URL should be resolved with the blog profile.
pub fn is_blog_content(url: &str) -> bool {
    contains_any(&url.to_lowercase(), BLOG_CONTENT_INDICATORS)
}

/// Picks the blog fallback bucket for an old URL.
pub fn blog_bucket(url: &str) -> BlogBucket {
    let lower = url.to_lowercase();
    BLOG_BUCKETS
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(bucket, _)| *bucket)
        .unwrap_or(BlogBucket::Community)
}
