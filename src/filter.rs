// Filter model — four independent predicates combined with logical AND.
//
// Pure over (posts, filter state): no side effects, safe to recompute on
// every change. An empty filter field is vacuously true.

use serde::{Deserialize, Serialize};

use crate::store::models::Post;

/// The user's active constraints. Empty string = no constraint.
/// Owned by the session, reset wholesale by the "clear" action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub hashtag: String,
    pub classification: String,
    /// Reserved — not consulted by any predicate yet.
    pub date_range: String,
    pub platform: String,
}

impl FilterState {
    /// Reset every field to unconstrained.
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }

    /// Human-readable summary of the active constraints, for display.
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if !self.search_term.is_empty() {
            parts.push(format!("search: {}", self.search_term));
        }
        if !self.classification.is_empty() {
            parts.push(format!("classification: {}", self.classification));
        }
        if !self.platform.is_empty() {
            parts.push(format!("platform: {}", self.platform));
        }
        if !self.hashtag.is_empty() {
            parts.push(format!("hashtag: {}", self.hashtag));
        }
        parts
    }
}

/// True when the post satisfies every active predicate.
pub fn matches(post: &Post, filters: &FilterState) -> bool {
    let matches_search = filters.search_term.is_empty() || {
        let term = filters.search_term.to_lowercase();
        post.content.to_lowercase().contains(&term)
            || post.author.to_lowercase().contains(&term)
            || post
                .hashtags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&term))
    };

    let matches_classification = filters.classification.is_empty()
        || post.classification.as_str() == filters.classification;

    // A post without a platform never matches a non-empty platform filter.
    let matches_platform =
        filters.platform.is_empty() || post.platform.as_deref() == Some(filters.platform.as_str());

    let matches_hashtag =
        filters.hashtag.is_empty() || post.hashtags.iter().any(|tag| tag == &filters.hashtag);

    matches_search && matches_classification && matches_platform && matches_hashtag
}

/// Order-preserving subset of `posts` satisfying `filters`.
pub fn filtered_view<'a>(posts: &'a [Post], filters: &FilterState) -> Vec<&'a Post> {
    posts.iter().filter(|post| matches(post, filters)).collect()
}

/// Distinct hashtags across all posts, sorted — the posts page's
/// hashtag dropdown.
pub fn all_hashtags(posts: &[Post]) -> Vec<String> {
    let mut tags: Vec<String> = posts
        .iter()
        .flat_map(|p| p.hashtags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Distinct platforms across posts that have one, sorted.
pub fn platforms(posts: &[Post]) -> Vec<String> {
    let mut names: Vec<String> = posts.iter().filter_map(|p| p.platform.clone()).collect();
    names.sort();
    names.dedup();
    names
}
