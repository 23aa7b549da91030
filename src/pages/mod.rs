// Page router — selects which view is active and what it may touch.
//
// Each page's render function takes exactly the capabilities it needs
// (posts slice, filter state, rng) instead of one oversized bag of
// optional callbacks; the signatures are the contract.

pub mod alerts;
pub mod analytics;
pub mod overview;
pub mod posts;
pub mod settings;

use std::str::FromStr;

/// The five dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Posts,
    Alerts,
    Analytics,
    Settings,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Posts => "posts",
            Page::Alerts => "alerts",
            Page::Analytics => "analytics",
            Page::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview Dashboard",
            Page::Posts => "Posts Analysis",
            Page::Alerts => "Security Alerts",
            Page::Analytics => "Advanced Analytics",
            Page::Settings => "System Settings",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Page::Overview => "Real-time monitoring and threat assessment",
            Page::Posts => "Comprehensive social media post analysis",
            Page::Alerts => "Critical security alerts and high-risk content",
            Page::Analytics => "Detailed insights and trend analysis",
            Page::Settings => "System configuration and preferences",
        }
    }

    pub fn all() -> [Page; 5] {
        [
            Page::Overview,
            Page::Posts,
            Page::Alerts,
            Page::Analytics,
            Page::Settings,
        ]
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Page {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overview" => Ok(Page::Overview),
            "posts" => Ok(Page::Posts),
            "alerts" => Ok(Page::Alerts),
            "analytics" => Ok(Page::Analytics),
            "settings" => Ok(Page::Settings),
            other => anyhow::bail!("Unknown page '{other}'"),
        }
    }
}
