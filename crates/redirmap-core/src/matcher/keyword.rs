//! Slug tokenization for keyword-overlap scoring.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w+\b").expect("static regex"))
}

/// Lowercased word tokens of a slug, with `-` treated as a separator.
pub fn keyword_tokens(slug: &str) -> HashSet<String> {
    let spaced = slug.replace('-', " ").to_lowercase();
    word_re()
        .find_iter(&spaced)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_hyphens_and_punctuation() {
        let t = keyword_tokens("Crossdressing-101_tips.How-To");
        let mut v: Vec<_> = t.into_iter().collect();
        v.sort();
        // underscore is a word character
        assert_eq!(v, vec!["101_tips", "crossdressing", "how", "to"]);
    }

    #[test]
    fn empty_slug_has_no_tokens() {
        assert!(keyword_tokens("").is_empty());
        assert!(keyword_tokens("---").is_empty());
    }
}
