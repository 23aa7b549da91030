// Colored terminal output for posts, alerts, and stat lines.
//
// This module handles all terminal-specific formatting: colors, cards,
// histogram bars. The page modules decide what to compute; this decides
// how it looks.

use colored::{ColoredString, Colorize};

use crate::analytics::overview::ThreatLevel;
use crate::notify::Severity;
use crate::store::models::{Classification, Post};

/// Colorize a classification label.
pub fn colorize_classification(classification: Classification) -> ColoredString {
    match classification {
        Classification::Safe => classification.as_str().green(),
        Classification::Suspicious => classification.as_str().yellow(),
        Classification::HighlySuspicious => classification.as_str().red().bold(),
    }
}

/// Colorize a threat level for the overview banner.
pub fn colorize_threat_level(level: ThreatLevel) -> ColoredString {
    match level {
        ThreatLevel::Low => level.as_str().green(),
        ThreatLevel::Medium => level.as_str().yellow().bold(),
        ThreatLevel::High => level.as_str().red().bold(),
    }
}

/// Colorize a notification severity tag.
pub fn colorize_severity(severity: Severity) -> ColoredString {
    match severity {
        Severity::Info => severity.as_str().normal(),
        Severity::Success => severity.as_str().green(),
        Severity::Warning => severity.as_str().yellow(),
        Severity::Error => severity.as_str().red(),
    }
}

/// Display one post as a card: author line, content, hashtags, engagement.
pub fn display_post_card(post: &Post) {
    println!(
        "  {} @{}  {}  {}",
        format!("#{}", post.id).dimmed(),
        post.author.bold(),
        colorize_classification(post.classification),
        post.platform.as_deref().unwrap_or("-").dimmed(),
    );
    println!(
        "     {} • {}",
        post.timestamp.format("%Y-%m-%d %H:%M UTC"),
        post.location.dimmed(),
    );
    println!("     {}", post.content);
    if !post.hashtags.is_empty() {
        println!("     {}", post.hashtags.join(" ").cyan());
    }
    if let Some(engagement) = post.engagement {
        println!(
            "     {} likes  {} shares  {} comments",
            engagement.likes, engagement.shares, engagement.comments
        );
    }
    println!();
}

/// Display a high-risk post in the alert center's louder framing.
pub fn display_alert_card(post: &Post) {
    println!(
        "  {} @{}  {}",
        "!!".red().bold(),
        post.author.bold(),
        "HIGH RISK".red().bold(),
    );
    println!(
        "     {} • {} • {}",
        post.timestamp.format("%Y-%m-%d %H:%M UTC"),
        post.location,
        post.platform.as_deref().unwrap_or("-"),
    );
    println!("     \"{}\"", post.content.red());
    if !post.hashtags.is_empty() {
        println!("     {}", post.hashtags.join(" ").dimmed());
    }
    println!();
}

/// One labelled stat line, dashboard-card style.
pub fn display_stat(label: &str, value: impl std::fmt::Display, detail: &str) {
    if detail.is_empty() {
        println!("  {:<28} {}", label.dimmed(), value.to_string().bold());
    } else {
        println!(
            "  {:<28} {}  {}",
            label.dimmed(),
            value.to_string().bold(),
            detail.dimmed()
        );
    }
}

/// A proportional ASCII bar for distribution rows.
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (count * width).div_ceil(max);
    "█".repeat(filled)
}
