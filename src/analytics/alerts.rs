// Alert-center aggregations over the high-risk subset.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::store::models::{Classification, Post, UNKNOWN_LOCATION};

/// Posts classified Highly Suspicious, sorted by timestamp descending.
/// The sort is stable, so equal timestamps keep their store order.
pub fn high_risk_posts(posts: &[Post]) -> Vec<&Post> {
    let mut subset: Vec<&Post> = posts
        .iter()
        .filter(|p| p.classification == Classification::HighlySuspicious)
        .collect();
    subset.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    subset
}

/// Headline numbers for the alert center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertStats {
    pub total_alerts: usize,
    /// High-risk posts whose timestamp falls within 24 hours of `now`.
    pub last_24h: usize,
    /// Distinct locations among high-risk posts, excluding "Unknown".
    pub affected_locations: usize,
    /// Distinct platforms among high-risk posts that name one.
    pub active_platforms: usize,
}

impl AlertStats {
    /// `now` is passed in rather than read from the clock so the
    /// last-24h window is testable.
    pub fn compute(posts: &[Post], now: DateTime<Utc>) -> Self {
        let high_risk = high_risk_posts(posts);
        let day_ago = now - Duration::hours(24);

        let last_24h = high_risk.iter().filter(|p| p.timestamp > day_ago).count();

        let locations: HashSet<&str> = high_risk
            .iter()
            .map(|p| p.location.as_str())
            .filter(|l| *l != UNKNOWN_LOCATION)
            .collect();

        let platforms: HashSet<&str> = high_risk
            .iter()
            .filter_map(|p| p.platform.as_deref())
            .collect();

        Self {
            total_alerts: high_risk.len(),
            last_24h,
            affected_locations: locations.len(),
            active_platforms: platforms.len(),
        }
    }
}

/// The location appearing most often in the high-risk subset.
/// Ties go to the location encountered first when iterating the subset.
pub fn most_active_location<'a>(high_risk: &[&'a Post]) -> Option<&'a str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for post in high_risk {
        match counts.iter_mut().find(|(name, _)| *name == post.location) {
            Some((_, count)) => *count += 1,
            None => counts.push((post.location.as_str(), 1)),
        }
    }
    // Stable sort: first-encountered order breaks count ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.first().map(|(name, _)| *name)
}
