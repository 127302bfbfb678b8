//! Redirect building: profile dispatch, priority merge, overrides, dedup.

mod builder;
mod set;

pub use builder::{build_redirects, BuildSettings, BuildStats, RedirectBuilder, RedirectOutcome};
pub use set::RedirectSet;

use serde::{Deserialize, Serialize};

use crate::url_model::relative_target;

/// Final `path -> target` pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectRecord {
    pub path: String,
    pub target: String,
}

impl RedirectRecord {
    pub fn new(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: target.into(),
        }
    }
}

/// Copies `records` with targets on `new_origin` rewritten to paths,
/// for importers that expect site-relative targets.
pub fn with_relative_targets(records: &[RedirectRecord], new_origin: &str) -> Vec<RedirectRecord> {
    records
        .iter()
        .map(|r| RedirectRecord {
            path: r.path.clone(),
            target: relative_target(&r.target, new_origin),
        })
        .collect()
}
