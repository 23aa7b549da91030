// Activity aggregations — distributions, the hourly histogram, engagement
// totals, and the hostile-hashtag leaderboard.

use chrono::Timelike;

use crate::store::models::{Classification, Engagement, Post, UNKNOWN_LOCATION};

/// How many hashtags the leaderboard keeps.
pub const TOP_HASHTAG_LIMIT: usize = 10;

/// Count occurrences of a key across posts, preserving first-seen order.
/// The linear scan is fine at dashboard scale and gives the deterministic
/// tie-break order the display relies on.
fn count_by<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(name, _)| name == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key.to_string(), 1)),
        }
    }
    counts
}

/// Posts per platform, first-seen order. Posts without a platform are
/// not counted.
pub fn platform_distribution(posts: &[Post]) -> Vec<(String, usize)> {
    count_by(posts.iter().filter_map(|p| p.platform.as_deref()))
}

/// Posts per location, first-seen order, excluding the Unknown sentinel.
pub fn location_distribution(posts: &[Post]) -> Vec<(String, usize)> {
    count_by(
        posts
            .iter()
            .map(|p| p.location.as_str())
            .filter(|l| !l.is_empty() && *l != UNKNOWN_LOCATION),
    )
}

/// Post counts per hour of day. Always exactly 24 buckets, zero-filled.
/// Buckets use the UTC hour so the histogram is timezone-independent.
pub fn hourly_activity(posts: &[Post]) -> [usize; 24] {
    let mut buckets = [0usize; 24];
    for post in posts {
        buckets[post.timestamp.hour() as usize] += 1;
    }
    buckets
}

/// Sum of likes, shares, and comments across posts that carry engagement.
pub fn total_engagement(posts: &[Post]) -> Engagement {
    let mut total = Engagement::default();
    for engagement in posts.iter().filter_map(|p| p.engagement) {
        total.likes += engagement.likes;
        total.shares += engagement.shares;
        total.comments += engagement.comments;
    }
    total
}

/// Hashtag occurrence counts over posts NOT classified Safe, descending,
/// capped at `TOP_HASHTAG_LIMIT`. The sort is stable, so count ties keep
/// first-seen order.
pub fn top_hostile_hashtags(posts: &[Post]) -> Vec<(String, usize)> {
    let mut counts = count_by(
        posts
            .iter()
            .filter(|p| p.classification != Classification::Safe)
            .flat_map(|p| p.hashtags.iter().map(String::as_str)),
    );
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_HASHTAG_LIMIT);
    counts
}
