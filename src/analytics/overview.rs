// Overview statistics — classification counts and the session threat level.

use crate::store::models::{Classification, Post};

/// A highly-suspicious count above this raises the threat level to High.
pub const HIGH_RISK_THRESHOLD: usize = 5;
/// A suspicious count above this raises the threat level to Medium.
pub const SUSPICIOUS_THRESHOLD: usize = 10;

/// Count of posts per classification, always covering all three values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationCounts {
    pub safe: usize,
    pub suspicious: usize,
    pub highly_suspicious: usize,
}

impl ClassificationCounts {
    pub fn compute(posts: &[Post]) -> Self {
        let mut counts = Self::default();
        for post in posts {
            match post.classification {
                Classification::Safe => counts.safe += 1,
                Classification::Suspicious => counts.suspicious += 1,
                Classification::HighlySuspicious => counts.highly_suspicious += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.safe + self.suspicious + self.highly_suspicious
    }
}

/// Session-wide severity derived from the classification counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

impl ThreatLevel {
    pub fn from_counts(counts: &ClassificationCounts) -> Self {
        if counts.highly_suspicious > HIGH_RISK_THRESHOLD {
            ThreatLevel::High
        } else if counts.suspicious > SUSPICIOUS_THRESHOLD {
            ThreatLevel::Medium
        } else {
            ThreatLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Low => "Low",
            ThreatLevel::Medium => "Medium",
            ThreatLevel::High => "High",
        }
    }

    /// The overview banner's one-line assessment.
    pub fn summary(&self) -> &'static str {
        match self {
            ThreatLevel::High => "Multiple high-risk posts detected. Immediate attention required.",
            ThreatLevel::Medium => "Moderate suspicious activity. Continue monitoring.",
            ThreatLevel::Low => "Activity levels are normal. System operating optimally.",
        }
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
