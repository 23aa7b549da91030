// Data models — the records that flow through the dashboard.
//
// These are separate from the store itself so the filter and analytics
// modules can use them without depending on the mutation API.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity label assigned to a post. Exactly three values, always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Safe,
    Suspicious,
    #[serde(rename = "Highly Suspicious")]
    HighlySuspicious,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Safe => "Safe",
            Classification::Suspicious => "Suspicious",
            Classification::HighlySuspicious => "Highly Suspicious",
        }
    }

    /// All variants in severity order, for zero-filled groupings.
    pub fn all() -> [Classification; 3] {
        [
            Classification::Safe,
            Classification::Suspicious,
            Classification::HighlySuspicious,
        ]
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Classification {
    type Err = anyhow::Error;

    /// Case-insensitive parse. Accepts the display form plus the short
    /// aliases used on the CLI (`safe`, `suspicious`, `high`, `high-risk`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "safe" => Ok(Classification::Safe),
            "suspicious" => Ok(Classification::Suspicious),
            "highly suspicious" | "highly-suspicious" | "high" | "high-risk" => {
                Ok(Classification::HighlySuspicious)
            }
            other => anyhow::bail!(
                "Unknown classification '{other}'. Expected: Safe, Suspicious, Highly Suspicious"
            ),
        }
    }
}

/// Engagement counters. Unsigned by construction — negative counts
/// cannot be represented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u32,
    pub shares: u32,
    pub comments: u32,
}

/// One observed social-media item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique within the store. Seed posts use 1..=12; synthetic posts
    /// get ids from the store's monotonic counter.
    pub id: u64,
    pub author: String,
    /// Decorative avatar URI — carried for display, never fetched.
    pub avatar: String,
    pub content: String,
    /// Never null; empty is allowed. Insertion order is preserved for display.
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub classification: Classification,
    /// Free text. "Unknown" is the sentinel for an unresolved location.
    pub location: String,
    pub platform: Option<String>,
    pub engagement: Option<Engagement>,
}

/// The location sentinel excluded from geographic aggregations.
pub const UNKNOWN_LOCATION: &str = "Unknown";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_round_trips_through_serde() {
        let json = serde_json::to_string(&Classification::HighlySuspicious).unwrap();
        assert_eq!(json, "\"Highly Suspicious\"");
        let back: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Classification::HighlySuspicious);
    }

    #[test]
    fn classification_parses_cli_aliases() {
        assert_eq!(
            "high-risk".parse::<Classification>().unwrap(),
            Classification::HighlySuspicious
        );
        assert_eq!(
            "SAFE".parse::<Classification>().unwrap(),
            Classification::Safe
        );
        assert!("garbage".parse::<Classification>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        for c in Classification::all() {
            assert_eq!(c.to_string(), c.as_str());
        }
    }
}
