// Seed data — the hand-authored sample posts loaded at startup.
//
// The 12 posts live in data/seed_posts.json and are embedded at compile
// time, so the binary needs no data files at runtime. Classification on
// seed posts is a static label, not the output of any model.

use anyhow::{Context, Result};

use super::models::Post;

const SEED_JSON: &str = include_str!("../../data/seed_posts.json");

/// Deserialize the embedded seed set. Ordering in the file is
/// newest-first, matching the store's display convention.
pub fn seed_posts() -> Result<Vec<Post>> {
    serde_json::from_str(SEED_JSON).context("Failed to parse embedded seed posts")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::Classification;

    #[test]
    fn seed_set_has_twelve_posts() {
        let posts = seed_posts().unwrap();
        assert_eq!(posts.len(), 12);
    }

    #[test]
    fn seed_ids_are_unique_and_sequential() {
        let posts = seed_posts().unwrap();
        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<u64>>());
    }

    #[test]
    fn seed_high_risk_ids_match_sample_set() {
        let posts = seed_posts().unwrap();
        let high: Vec<u64> = posts
            .iter()
            .filter(|p| p.classification == Classification::HighlySuspicious)
            .map(|p| p.id)
            .collect();
        assert_eq!(high, vec![3, 5, 8, 10]);
    }

    #[test]
    fn every_seed_post_has_three_hashtags() {
        for post in seed_posts().unwrap() {
            assert_eq!(post.hashtags.len(), 3, "post {} hashtags", post.id);
        }
    }
}
