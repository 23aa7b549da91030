// Overview page — threat level banner, classification stats, and the
// most recent high-risk activity.

use colored::Colorize;

use crate::analytics::alerts::high_risk_posts;
use crate::analytics::overview::{ClassificationCounts, ThreatLevel};
use crate::output::terminal::{colorize_threat_level, display_stat};
use crate::output::truncate_chars;
use crate::store::models::Post;

/// Render the overview from a store snapshot. Read-only: this page never
/// mutates posts or filters.
pub fn render(posts: &[Post]) {
    let counts = ClassificationCounts::compute(posts);
    let level = ThreatLevel::from_counts(&counts);

    println!(
        "\n{}",
        format!("=== Current Threat Level: {} ===", level).bold()
    );
    println!("  {}  {}", colorize_threat_level(level), level.summary());
    println!();

    display_stat("Total Posts Analyzed", counts.total(), "");
    display_stat("Safe Content", counts.safe, "verified clean posts");
    display_stat("Suspicious Activity", counts.suspicious, "requires review");
    display_stat(
        "High-Risk Alerts",
        counts.highly_suspicious,
        "immediate action needed",
    );

    let high_risk = high_risk_posts(posts);
    if !high_risk.is_empty() {
        println!("\n{}", "Recent High-Risk Activity".bold());
        for post in high_risk.iter().take(3) {
            println!(
                "  @{:<24} {}  {}",
                post.author,
                truncate_chars(&post.content, 60).dimmed(),
                post.timestamp.format("%H:%M UTC"),
            );
        }
    }
}
