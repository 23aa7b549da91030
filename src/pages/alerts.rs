// Alerts page — the high-risk subset with headline stats and an
// activity summary.

use chrono::Utc;
use colored::Colorize;

use crate::analytics::alerts::{high_risk_posts, most_active_location, AlertStats};
use crate::output::terminal::{display_alert_card, display_stat};
use crate::store::models::Post;

pub fn render(posts: &[Post]) {
    let stats = AlertStats::compute(posts, Utc::now());
    let high_risk = high_risk_posts(posts);

    println!("\n{}", "=== Security Alert Center ===".bold());
    println!("  Real-time monitoring of high-risk content and potential threats\n");

    display_stat("Total High-Risk Alerts", stats.total_alerts, "");
    display_stat("Alerts (Last 24h)", stats.last_24h, "");
    display_stat("Affected Locations", stats.affected_locations, "");
    display_stat("Active Platforms", stats.active_platforms, "");
    println!();

    if high_risk.is_empty() {
        println!("  {}", "No Active High-Risk Alerts".green().bold());
        println!("  The system is currently not detecting any high-risk content.");
        println!("  Monitoring continues in the background.");
        return;
    }

    println!(
        "{}",
        format!("Active High-Risk Alerts ({})", high_risk.len()).bold()
    );
    println!();
    for post in &high_risk {
        display_alert_card(post);
    }

    println!("{}", "Alert Activity Summary".bold());
    println!(
        "  Most recent alert:    {}",
        high_risk[0].timestamp.format("%Y-%m-%d %H:%M UTC")
    );
    println!(
        "  Most active location: {}",
        most_active_location(&high_risk).unwrap_or("Unknown")
    );
}
