//! Slug extraction from URL path.

/// Returns the last non-empty path segment of `url`.
///
/// Query and fragment are ignored. Returns an empty string if the URL cannot
/// be parsed or its path has no non-empty segment (e.g. a bare host).
pub fn slug_of(url: &str) -> String {
    let Ok(parsed) = url::Url::parse(url.trim()) else {
        return String::new();
    };
    parsed
        .path()
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .last()
        .unwrap_or_default()
        .to_string()
}
