//! Redirect path derivation and host checks.

/// Derives the redirect `path` for an old URL by stripping `old_origin`.
///
/// URLs that do not start with `old_origin` (a `www.` variant, plain http)
/// fall back to the parsed path plus query. Unparseable input is returned
/// trimmed. An empty result becomes `/`.
pub fn path_of(url: &str, old_origin: &str) -> String {
    let url = url.trim();
    let origin = old_origin.trim_end_matches('/');

    let path = match url.strip_prefix(origin) {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '?', '#']) => rest.to_string(),
        _ => match url::Url::parse(url) {
            Ok(parsed) => match parsed.query() {
                Some(q) => format!("{}?{}", parsed.path(), q),
                None => parsed.path().to_string(),
            },
            Err(_) => url.to_string(),
        },
    };

    if path.is_empty() {
        "/".to_string()
    } else {
        path
    }
}

/// True if `url` is hosted on `host` (case-insensitive).
///
/// Unparseable input falls back to a substring check so that a malformed
/// record mentioning the new host is still treated as already migrated.
pub fn is_on_host(url: &str, host: &str) -> bool {
    if host.is_empty() {
        return false;
    }
    match url::Url::parse(url.trim()) {
        Ok(parsed) => parsed
            .host_str()
            .is_some_and(|h| h.eq_ignore_ascii_case(host)),
        Err(_) => url.to_ascii_lowercase().contains(&host.to_ascii_lowercase()),
    }
}

/// Path form of a target on `new_origin` (`https://new.example/` becomes `/`).
/// Targets elsewhere are returned unchanged.
pub fn relative_target(target: &str, new_origin: &str) -> String {
    let origin = new_origin.trim_end_matches('/');
    match target.strip_prefix(origin) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => match url::Url::parse(target) {
            Ok(parsed) => parsed.path().to_string(),
            Err(_) => rest.to_string(),
        },
        _ => target.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLD: &str = "https://old.example";

    #[test]
    fn strips_origin() {
        assert_eq!(path_of("https://old.example/blog/post/", OLD), "/blog/post/");
        assert_eq!(path_of("https://old.example/shop?x=1", OLD), "/shop?x=1");
    }

    #[test]
    fn bare_origin_becomes_root() {
        assert_eq!(path_of("https://old.example", OLD), "/");
        assert_eq!(path_of("https://old.example/", OLD), "/");
    }

    #[test]
    fn other_origin_uses_parsed_path() {
        assert_eq!(path_of("http://www.old.example/a/b", OLD), "/a/b");
        assert_eq!(path_of("https://old.example.net/x", OLD), "/x");
    }

    #[test]
    fn unparseable_is_kept() {
        assert_eq!(path_of("  /already/a/path ", OLD), "/already/a/path");
    }

    #[test]
    fn host_check() {
        assert!(is_on_host("https://new.example/products/x", "new.example"));
        assert!(is_on_host("https://NEW.example/", "new.example"));
        assert!(!is_on_host("https://old.example/new.example", "new.example"));
        assert!(is_on_host("garbage new.example", "new.example"));
        assert!(!is_on_host("https://new.example/", ""));
    }

    #[test]
    fn relative_targets() {
        let origin = "https://new.example";
        assert_eq!(relative_target("https://new.example/", origin), "/");
        assert_eq!(relative_target("https://new.example", origin), "/");
        assert_eq!(
            relative_target("https://new.example/collections/wigs", origin),
            "/collections/wigs"
        );
        assert_eq!(
            relative_target("https://elsewhere.example/x", origin),
            "https://elsewhere.example/x"
        );
    }
}
