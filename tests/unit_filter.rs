// Unit tests for the filter model.
//
// Exercises the four predicates in isolation and in combination:
// vacuous truth for empty fields, case-insensitive search across
// content/author/hashtags, exact matching for the rest, and graceful
// handling of absent optional fields.

use chrono::{TimeZone, Utc};

use sentinel::filter::{all_hashtags, filtered_view, matches, platforms, FilterState};
use sentinel::store::models::{Classification, Post};
use sentinel::store::seed::seed_posts;

fn make_post(id: u64) -> Post {
    Post {
        id,
        author: "TruthSeeker_999".to_string(),
        avatar: String::new(),
        content: "The mainstream media is hiding the real story".to_string(),
        hashtags: vec!["#MediaBias".to_string(), "#WakeUp".to_string()],
        timestamp: Utc.with_ymd_and_hms(2024, 8, 29, 9, 45, 0).unwrap(),
        classification: Classification::Suspicious,
        location: "Mumbai, India".to_string(),
        platform: Some("Facebook".to_string()),
        engagement: None,
    }
}

fn filter_with(f: impl FnOnce(&mut FilterState)) -> FilterState {
    let mut filters = FilterState::default();
    f(&mut filters);
    filters
}

// ============================================================
// Identity filter
// ============================================================

#[test]
fn empty_filter_matches_every_post() {
    for post in seed_posts().unwrap() {
        assert!(
            matches(&post, &FilterState::default()),
            "post {} should match the identity filter",
            post.id
        );
    }
}

#[test]
fn filtered_view_never_grows() {
    let posts = seed_posts().unwrap();
    let filters = [
        FilterState::default(),
        filter_with(|f| f.search_term = "india".to_string()),
        filter_with(|f| f.platform = "Telegram".to_string()),
        filter_with(|f| f.classification = "Safe".to_string()),
        filter_with(|f| f.hashtag = "#NoSuchTag".to_string()),
    ];
    for f in &filters {
        assert!(filtered_view(&posts, f).len() <= posts.len());
    }
}

// ============================================================
// Search predicate
// ============================================================

#[test]
fn search_matches_content_case_insensitively() {
    let post = make_post(1);
    let filters = filter_with(|f| f.search_term = "MAINSTREAM".to_string());
    assert!(matches(&post, &filters));
}

#[test]
fn search_matches_author_handle() {
    let post = make_post(1);
    let filters = filter_with(|f| f.search_term = "truthseeker".to_string());
    assert!(matches(&post, &filters));
}

#[test]
fn search_matches_any_hashtag() {
    let post = make_post(1);
    let filters = filter_with(|f| f.search_term = "#mediabias".to_string());
    assert!(matches(&post, &filters));
}

#[test]
fn search_rejects_when_no_field_contains_term() {
    let post = make_post(1);
    let filters = filter_with(|f| f.search_term = "cricket".to_string());
    assert!(!matches(&post, &filters));
}

// ============================================================
// Classification / platform / hashtag predicates
// ============================================================

#[test]
fn classification_requires_exact_match() {
    let post = make_post(1);
    assert!(matches(
        &post,
        &filter_with(|f| f.classification = "Suspicious".to_string())
    ));
    assert!(!matches(
        &post,
        &filter_with(|f| f.classification = "Highly Suspicious".to_string())
    ));
}

#[test]
fn missing_platform_never_matches_a_platform_filter() {
    let mut post = make_post(1);
    post.platform = None;
    let filters = filter_with(|f| f.platform = "Telegram".to_string());
    assert!(!matches(&post, &filters));
    // ...but it still matches when the platform filter is unset
    assert!(matches(&post, &FilterState::default()));
}

#[test]
fn hashtag_requires_exact_membership() {
    let post = make_post(1);
    assert!(matches(
        &post,
        &filter_with(|f| f.hashtag = "#WakeUp".to_string())
    ));
    // Substring of a tag is not membership
    assert!(!matches(
        &post,
        &filter_with(|f| f.hashtag = "#Wake".to_string())
    ));
}

#[test]
fn date_range_field_is_inert() {
    let post = make_post(1);
    let filters = filter_with(|f| f.date_range = "nonsense".to_string());
    assert!(matches(&post, &filters));
}

// ============================================================
// Conjunction
// ============================================================

#[test]
fn predicates_combine_with_and() {
    let posts = seed_posts().unwrap();
    let filters = filter_with(|f| {
        f.classification = "Highly Suspicious".to_string();
        f.platform = "Telegram".to_string();
    });
    let view = filtered_view(&posts, &filters);
    // Seed posts 5 and 10 are high-risk AND on Telegram
    let ids: Vec<u64> = view.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![5, 10]);
}

#[test]
fn one_failing_predicate_rejects_the_post() {
    let post = make_post(1);
    let filters = filter_with(|f| {
        f.search_term = "media".to_string(); // matches
        f.platform = "Twitter".to_string(); // does not
    });
    assert!(!matches(&post, &filters));
}

// ============================================================
// Dropdown helpers
// ============================================================

#[test]
fn all_hashtags_is_sorted_and_distinct() {
    let posts = seed_posts().unwrap();
    let tags = all_hashtags(&posts);
    let mut sorted = tags.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(tags, sorted);
    assert!(tags.contains(&"#HumanRights".to_string()));
}

#[test]
fn platforms_skips_posts_without_one() {
    let mut posts = seed_posts().unwrap();
    posts[0].platform = None;
    let names = platforms(&posts);
    assert!(!names.is_empty());
    assert!(names.iter().all(|n| !n.is_empty()));
}
