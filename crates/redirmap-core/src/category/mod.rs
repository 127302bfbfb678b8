//! Content categories and the keyword rules that derive them.
//!
//! Old-site URLs are classified by keyword sniffing on the lowercased URL
//! text; new-site URLs are structurally regular and are classified by path
//! markers instead. Blog content additionally gets a finer bucket used to
//! choose among several blog fallback targets.

mod rules;

pub use rules::{blog_bucket, categorize, categorize_new, is_blog_content};

use serde::Serialize;
use std::fmt;

/// Coarse content classification driving fallback behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Blog,
    Product,
    Other,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Blog, Category::Product, Category::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Blog => "blog",
            Category::Product => "product",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finer classification of blog content for the blog fallback tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlogBucket {
    Beauty,
    Tips,
    Care,
    BodyShaping,
    Community,
}

impl BlogBucket {
    pub const ALL: [BlogBucket; 5] = [
        BlogBucket::Beauty,
        BlogBucket::Tips,
        BlogBucket::Care,
        BlogBucket::BodyShaping,
        BlogBucket::Community,
    ];

    /// Key of this bucket in `[blog_fallbacks]`.
    pub fn config_key(self) -> &'static str {
        match self {
            BlogBucket::Beauty => "beauty",
            BlogBucket::Tips => "tips",
            BlogBucket::Care => "care",
            BlogBucket::BodyShaping => "body_shaping",
            BlogBucket::Community => "community",
        }
    }
}
