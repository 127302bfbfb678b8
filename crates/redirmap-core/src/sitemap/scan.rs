//! Permissive `<loc>` text scan for documents that are not well-formed XML.

use regex::bytes::Regex;
use std::sync::OnceLock;

fn loc_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is-u)<loc>(.*?)</loc>").expect("static regex"))
}

/// Every `<loc>...</loc>` body in `data`, trimmed. Non-UTF-8 bodies are skipped.
pub fn scan_locs(data: &[u8]) -> Vec<String> {
    loc_re()
        .captures_iter(data)
        .filter_map(|c| c.get(1))
        .filter_map(|m| std::str::from_utf8(m.as_bytes()).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
