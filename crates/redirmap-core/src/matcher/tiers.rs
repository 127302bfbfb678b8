//! The lexical tiers. Each returns `None` for an empty slug.

use crate::index::CandidateIndex;

use super::keyword::keyword_tokens;

pub(super) fn exact<'a>(index: &'a CandidateIndex, slug: &str) -> Option<&'a str> {
    if slug.is_empty() {
        return None;
    }
    index.lookup_slug(slug)
}

/// First indexed URL whose slug contains `slug` or is contained in it.
pub(super) fn partial<'a>(index: &'a CandidateIndex, slug: &str) -> Option<&'a str> {
    if slug.is_empty() {
        return None;
    }
    index
        .slugs()
        .find(|(new_slug, _)| new_slug.contains(slug) || slug.contains(new_slug))
        .map(|(_, url)| url)
}

/// New blog URL sharing the most slug tokens with `slug`.
///
/// Only a strictly larger score replaces the current best, so ties go to
/// the earliest candidate. Zero overlap everywhere is no match.
pub(super) fn keyword_overlap<'a>(index: &'a CandidateIndex, slug: &str) -> Option<&'a str> {
    if slug.is_empty() {
        return None;
    }
    let tokens = keyword_tokens(slug);
    let mut best: Option<(&str, usize)> = None;
    for candidate in index.blog_candidates() {
        let score = candidate.tokens.intersection(&tokens).count();
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((candidate.url.as_str(), score));
        }
    }
    best.map(|(url, _)| url)
}
