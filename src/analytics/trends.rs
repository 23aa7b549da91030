// Seven-day trend series — synthetic chart data regenerated per render.
//
// There is no stored history to chart, so the trend view fabricates a
// plausible week: mostly-safe traffic with a suspicious remainder. The
// rng is a parameter so tests can seed it.

use chrono::{Days, NaiveDate, Utc};
use rand::Rng;

/// One day of fabricated classification volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTrend {
    pub date: NaiveDate,
    pub safe: usize,
    pub suspicious: usize,
    pub highly_suspicious: usize,
    pub total: usize,
}

impl DayTrend {
    /// Severity-weighted ratio used by the analytics threat-trend chart:
    /// suspicious posts weigh 2, high-risk posts weigh 3.
    pub fn threat_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.suspicious * 2 + self.highly_suspicious * 3) as f64 / self.total as f64
    }
}

/// Fabricate the last 7 days (oldest first), ending today.
pub fn generate_chart_data(rng: &mut impl Rng) -> Vec<DayTrend> {
    let today = Utc::now().date_naive();
    (0..7)
        .rev()
        .map(|days_back| {
            let date = today - Days::new(days_back);
            let total: usize = rng.random_range(30..80);
            let safe = (total as f64 * rng.random_range(0.6..0.8)) as usize;
            let suspicious = ((total - safe) as f64 * rng.random_range(0.4..0.7)) as usize;
            DayTrend {
                date,
                safe,
                suspicious,
                highly_suspicious: total - safe - suspicious,
                total,
            }
        })
        .collect()
}
