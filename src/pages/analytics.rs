// Analytics page — distributions, hourly histogram, hashtag leaderboard,
// and the synthetic 7-day trend table.

use colored::Colorize;
use rand::Rng;

use crate::analytics::activity::{
    hourly_activity, location_distribution, platform_distribution, top_hostile_hashtags,
    total_engagement,
};
use crate::analytics::trends::generate_chart_data;
use crate::output::terminal::{bar, display_stat};
use crate::store::models::Post;

pub fn render(posts: &[Post], rng: &mut impl Rng) {
    let platforms = platform_distribution(posts);
    let locations = location_distribution(posts);
    let hourly = hourly_activity(posts);
    let engagement = total_engagement(posts);

    println!("\n{}", "=== Advanced Analytics ===".bold());
    println!();

    let peak = hourly.iter().enumerate().max_by_key(|(_, c)| **c);
    display_stat("Total Engagement", engagement.likes, "likes across all posts");
    display_stat("Active Platforms", platforms.len(), "social networks monitored");
    display_stat("Geographic Spread", locations.len(), "unique locations");
    if let Some((hour, count)) = peak {
        display_stat(
            "Peak Activity",
            format!("{count} posts"),
            &format!("at {hour:02}:00 UTC"),
        );
    }

    if !platforms.is_empty() {
        println!("\n{}", "Platform Distribution".bold());
        let max = platforms.iter().map(|(_, c)| *c).max().unwrap_or(0);
        for (name, count) in &platforms {
            println!("  {:<18} {:>3}  {}", name, count, bar(*count, max, 24).cyan());
        }
    }

    println!("\n{}", "Activity Heatmap (24h, UTC)".bold());
    let max_hour = hourly.iter().copied().max().unwrap_or(0);
    for (hour, count) in hourly.iter().enumerate() {
        if *count > 0 {
            println!(
                "  {:02}:00 {:>3}  {}",
                hour,
                count,
                bar(*count, max_hour, 24).blue()
            );
        }
    }

    let hashtags = top_hostile_hashtags(posts);
    if !hashtags.is_empty() {
        println!("\n{}", "Top Hostile Hashtags".bold());
        let max = hashtags.iter().map(|(_, c)| *c).max().unwrap_or(0);
        for (tag, count) in &hashtags {
            println!("  {:<28} {:>3}  {}", tag, count, bar(*count, max, 16).red());
        }
    }

    if !locations.is_empty() {
        println!("\n{}", "Geographic Hotspots".bold());
        let mut ranked = locations.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        for (i, (name, count)) in ranked.iter().take(8).enumerate() {
            println!("  {:>2}. {:<24} {}", i + 1, name, count);
        }
    }

    println!("\n{}", "Classification Trends (7 days, simulated)".bold());
    println!(
        "  {:<12} {:>5} {:>11} {:>10} {:>7}",
        "Date".dimmed(),
        "Safe".dimmed(),
        "Suspicious".dimmed(),
        "High-Risk".dimmed(),
        "Threat".dimmed(),
    );
    for day in generate_chart_data(rng) {
        println!(
            "  {:<12} {:>5} {:>11} {:>10} {:>7.2}",
            day.date,
            day.safe,
            day.suspicious,
            day.highly_suspicious,
            day.threat_ratio(),
        );
    }
}
