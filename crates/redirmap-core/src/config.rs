use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::category::{BlogBucket, Category};

const DEFAULT_OLD_ORIGIN: &str = "https://thebreastformstore.com";
const DEFAULT_NEW_ORIGIN: &str = "https://tbfsna.myshopify.com";
const HEELS_POST: &str =
    "https://tbfsna.myshopify.com/blogs/community-stories/crossdressing-101-how-to-walk-in-high-heels";

/// Coarse per-category fallback targets (`[fallbacks]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackConfig {
    pub blog: String,
    pub product: String,
    pub other: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            blog: format!("{DEFAULT_NEW_ORIGIN}/blogs/community-stories"),
            product: format!("{DEFAULT_NEW_ORIGIN}/collections/breast-forms"),
            other: format!("{DEFAULT_NEW_ORIGIN}/"),
        }
    }
}

impl FallbackConfig {
    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::Blog => &self.blog,
            Category::Product => &self.product,
            Category::Other => &self.other,
        }
    }
}

/// Fine-grained fallback targets for blog content (`[blog_fallbacks]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogFallbackConfig {
    pub beauty: String,
    pub tips: String,
    pub care: String,
    pub body_shaping: String,
    pub community: String,
}

impl Default for BlogFallbackConfig {
    fn default() -> Self {
        Self {
            beauty: format!("{DEFAULT_NEW_ORIGIN}/blogs/beauty"),
            tips: format!("{DEFAULT_NEW_ORIGIN}/blogs/cd-tg-tips"),
            care: format!("{DEFAULT_NEW_ORIGIN}/blogs/breast-forms-breast-form-care"),
            body_shaping: format!("{DEFAULT_NEW_ORIGIN}/blogs/body-shaping"),
            community: format!("{DEFAULT_NEW_ORIGIN}/blogs/community-stories"),
        }
    }
}

impl BlogFallbackConfig {
    pub fn for_bucket(&self, bucket: BlogBucket) -> &str {
        match bucket {
            BlogBucket::Beauty => &self.beauty,
            BlogBucket::Tips => &self.tips,
            BlogBucket::Care => &self.care,
            BlogBucket::BodyShaping => &self.body_shaping,
            BlogBucket::Community => &self.community,
        }
    }
}

/// One manual `path -> target` pairing (`[[overrides]]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualOverride {
    pub path: String,
    pub target: String,
}

impl ManualOverride {
    pub fn new(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: target.into(),
        }
    }
}

/// How manual overrides interact with computed redirects for the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverridePolicy {
    /// Override is appended only when no computed redirect exists for its path.
    #[default]
    FillMissing,
    /// Override replaces a computed target in place; unknown paths are appended.
    Replace,
}

/// Global configuration loaded from `~/.config/redirmap/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirmapConfig {
    /// Scheme and host of the retiring site; stripped from old URLs to form redirect paths.
    pub old_origin: String,
    /// Scheme and host of the successor site. Old URLs already on this host are skipped.
    pub new_origin: String,
    /// Records per batch file.
    pub batch_size: usize,
    /// Batch file name prefix; files are `<prefix>_<n>.csv`.
    pub batch_prefix: String,
    /// Emit targets on the new origin as paths (`/collections/x`) instead of absolute URLs.
    #[serde(default)]
    pub relative_targets: bool,
    #[serde(default)]
    pub override_policy: OverridePolicy,
    #[serde(default)]
    pub fallbacks: FallbackConfig,
    #[serde(default)]
    pub blog_fallbacks: BlogFallbackConfig,
    /// Manual fixes applied after matching, in order.
    #[serde(default)]
    pub overrides: Vec<ManualOverride>,
}

impl Default for RedirmapConfig {
    fn default() -> Self {
        Self {
            old_origin: DEFAULT_OLD_ORIGIN.to_string(),
            new_origin: DEFAULT_NEW_ORIGIN.to_string(),
            batch_size: 250,
            batch_prefix: "redirects_batch".to_string(),
            relative_targets: false,
            override_policy: OverridePolicy::FillMissing,
            fallbacks: FallbackConfig::default(),
            blog_fallbacks: BlogFallbackConfig::default(),
            overrides: vec![
                ManualOverride::new("/crossdressing-101-how-to-walk-in-high-heels/", HEELS_POST),
                ManualOverride::new("/crossdressing-101-how-to-walk-in-high-heels", HEELS_POST),
                ManualOverride::new(
                    "/tag/crossdressing-101-how-to-walk-in-high-heels/",
                    HEELS_POST,
                ),
            ],
        }
    }
}

impl RedirmapConfig {
    /// Name of the first fallback target that is blank, if any.
    pub fn empty_fallback(&self) -> Option<&'static str> {
        let coarse = Category::ALL
            .into_iter()
            .map(|c| (c.as_str(), self.fallbacks.for_category(c)));
        let blog = BlogBucket::ALL
            .into_iter()
            .map(|b| (b.config_key(), self.blog_fallbacks.for_bucket(b)));
        coarse
            .chain(blog)
            .find(|(_, url)| url.trim().is_empty())
            .map(|(name, _)| name)
    }

    /// Host part of `new_origin` (e.g. `tbfsna.myshopify.com`).
    pub fn new_host(&self) -> String {
        url::Url::parse(&self.new_origin)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| {
                self.new_origin
                    .trim_start_matches("https://")
                    .trim_start_matches("http://")
                    .trim_end_matches('/')
                    .to_string()
            })
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("redirmap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file; the file must exist.
pub fn load_from_path(path: &Path) -> Result<RedirmapConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: RedirmapConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    if cfg.batch_size == 0 {
        anyhow::bail!("batch_size must be at least 1 ({})", path.display());
    }
    if let Some(name) = cfg.empty_fallback() {
        anyhow::bail!("fallback `{name}` must be a non-empty URL ({})", path.display());
    }
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RedirmapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RedirmapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}
