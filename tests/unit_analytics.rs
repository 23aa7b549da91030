// Unit tests for the aggregation views, pinned against the 12-post seed set.

use chrono::{TimeZone, Utc};

use sentinel::analytics::activity::{
    hourly_activity, location_distribution, platform_distribution, top_hostile_hashtags,
    total_engagement,
};
use sentinel::analytics::alerts::{high_risk_posts, most_active_location, AlertStats};
use sentinel::analytics::overview::{ClassificationCounts, ThreatLevel};
use sentinel::store::models::{Classification, Post};
use sentinel::store::seed::seed_posts;

fn post_at(id: u64, hour: u32, classification: Classification, location: &str) -> Post {
    Post {
        id,
        author: format!("user_{id}"),
        avatar: String::new(),
        content: "content".to_string(),
        hashtags: vec![],
        timestamp: Utc.with_ymd_and_hms(2024, 8, 29, hour, 0, 0).unwrap(),
        classification,
        location: location.to_string(),
        platform: None,
        engagement: None,
    }
}

// ============================================================
// Classification counts and threat level
// ============================================================

#[test]
fn seed_counts_cover_all_three_labels() {
    let posts = seed_posts().unwrap();
    let counts = ClassificationCounts::compute(&posts);
    assert_eq!(counts.safe, 5);
    assert_eq!(counts.suspicious, 3);
    assert_eq!(counts.highly_suspicious, 4);
    assert_eq!(counts.total(), 12);
}

#[test]
fn counts_on_empty_input_are_zero_for_every_label() {
    let counts = ClassificationCounts::compute(&[]);
    assert_eq!(counts, ClassificationCounts::default());
    assert_eq!(ThreatLevel::from_counts(&counts), ThreatLevel::Low);
}

#[test]
fn seed_set_sits_below_both_thresholds() {
    // 4 highly suspicious <= 5 and 3 suspicious <= 10
    let posts = seed_posts().unwrap();
    let counts = ClassificationCounts::compute(&posts);
    assert_eq!(ThreatLevel::from_counts(&counts), ThreatLevel::Low);
}

#[test]
fn sixth_high_risk_post_tips_the_level_to_high() {
    let mut posts = seed_posts().unwrap();
    assert_eq!(
        ThreatLevel::from_counts(&ClassificationCounts::compute(&posts)),
        ThreatLevel::Low
    );
    for id in 100..102 {
        posts.push(post_at(id, 1, Classification::HighlySuspicious, "Unknown"));
    }
    // Now 6 highly suspicious > 5
    assert_eq!(
        ThreatLevel::from_counts(&ClassificationCounts::compute(&posts)),
        ThreatLevel::High
    );
}

// ============================================================
// High-risk subset and alert stats
// ============================================================

#[test]
fn high_risk_subset_matches_seed_ids_newest_first() {
    let posts = seed_posts().unwrap();
    let subset = high_risk_posts(&posts);
    let ids: Vec<u64> = subset.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 5, 8, 10]);
}

#[test]
fn last_24h_window_is_anchored_to_now() {
    let posts = seed_posts().unwrap();

    // Noon on the 29th: all four high-risk posts fall within 24h
    let noon_29th = Utc.with_ymd_and_hms(2024, 8, 29, 12, 0, 0).unwrap();
    let stats = AlertStats::compute(&posts, noon_29th);
    assert_eq!(stats.total_alerts, 4);
    assert_eq!(stats.last_24h, 4);

    // A day later the window has moved past all of them
    let noon_30th = Utc.with_ymd_and_hms(2024, 8, 30, 12, 0, 0).unwrap();
    let stats = AlertStats::compute(&posts, noon_30th);
    assert_eq!(stats.total_alerts, 4);
    assert_eq!(stats.last_24h, 0);
}

#[test]
fn alert_stats_exclude_unknown_from_locations_only() {
    let posts = seed_posts().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 8, 29, 12, 0, 0).unwrap();
    let stats = AlertStats::compute(&posts, now);
    // High-risk locations: Lahore, Unknown, Toronto, Unknown
    assert_eq!(stats.affected_locations, 2);
    // High-risk platforms: Twitter, Telegram, Twitter, Telegram
    assert_eq!(stats.active_platforms, 2);
}

#[test]
fn most_active_location_counts_the_high_risk_subset() {
    let posts = vec![
        post_at(1, 1, Classification::HighlySuspicious, "Delhi, India"),
        post_at(2, 2, Classification::HighlySuspicious, "Lahore, Pakistan"),
        post_at(3, 3, Classification::HighlySuspicious, "Delhi, India"),
        // Safe posts are invisible to the alert center
        post_at(4, 4, Classification::Safe, "Lahore, Pakistan"),
        post_at(5, 5, Classification::Safe, "Lahore, Pakistan"),
    ];
    let subset = high_risk_posts(&posts);
    assert_eq!(most_active_location(&subset), Some("Delhi, India"));
}

#[test]
fn most_active_location_tie_goes_to_first_encountered() {
    let posts = vec![
        post_at(1, 5, Classification::HighlySuspicious, "Toronto, Canada"),
        post_at(2, 4, Classification::HighlySuspicious, "Delhi, India"),
        post_at(3, 3, Classification::HighlySuspicious, "Toronto, Canada"),
        post_at(4, 2, Classification::HighlySuspicious, "Delhi, India"),
    ];
    // Both count 2; Toronto is encountered first in timestamp-desc order
    let subset = high_risk_posts(&posts);
    assert_eq!(most_active_location(&subset), Some("Toronto, Canada"));
}

// ============================================================
// Activity aggregations
// ============================================================

#[test]
fn histogram_always_has_24_buckets() {
    assert_eq!(hourly_activity(&[]).len(), 24);
    assert_eq!(hourly_activity(&seed_posts().unwrap()).len(), 24);
}

#[test]
fn histogram_totals_match_input_size() {
    let posts = seed_posts().unwrap();
    assert_eq!(hourly_activity(&posts).iter().sum::<usize>(), posts.len());
}

#[test]
fn platform_distribution_keeps_first_seen_order() {
    let posts = seed_posts().unwrap();
    let dist = platform_distribution(&posts);
    // First platforms encountered newest-first: Twitter, Facebook, LinkedIn...
    assert_eq!(dist[0].0, "Twitter");
    assert_eq!(dist[0].1, 4);
    let total: usize = dist.iter().map(|(_, c)| c).sum();
    assert_eq!(total, 12); // every seed post has a platform
}

#[test]
fn location_distribution_drops_the_unknown_sentinel() {
    let posts = seed_posts().unwrap();
    let dist = location_distribution(&posts);
    assert!(dist.iter().all(|(name, _)| name != "Unknown"));
    let total: usize = dist.iter().map(|(_, c)| c).sum();
    assert_eq!(total, 9); // 12 posts minus 3 Unknown
}

#[test]
fn safe_only_hashtags_are_excluded_from_hostile_top() {
    let posts = seed_posts().unwrap();
    let top = top_hostile_hashtags(&posts);
    // #IndiaRising appears only on a Safe post
    assert!(top.iter().all(|(tag, _)| tag != "#IndiaRising"));
    // #HumanRights appears on two non-Safe posts and leads the board
    assert_eq!(top[0], ("#HumanRights".to_string(), 2));
    assert!(top.len() <= 10);
}

#[test]
fn engagement_total_skips_posts_without_engagement() {
    let mut posts = seed_posts().unwrap();
    let before = total_engagement(&posts);
    posts.push(post_at(99, 0, Classification::Safe, "Unknown"));
    assert_eq!(total_engagement(&posts), before);
}
