use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Seconds between synthetic feed posts when the env var is unset.
pub const DEFAULT_FEED_INTERVAL_SECS: u64 = 15;
/// Milliseconds the simulated settings save takes when the env var is unset.
pub const DEFAULT_SAVE_DELAY_MS: u64 = 1000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Both
/// knobs have defaults, so Sentinel runs with no configuration at all.
pub struct Config {
    /// Period of the synthetic feed timer (SENTINEL_FEED_INTERVAL_SECS).
    pub feed_interval: Duration,
    /// Artificial delay for the simulated settings save (SENTINEL_SAVE_DELAY_MS).
    pub save_delay: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        let feed_secs = match env::var("SENTINEL_FEED_INTERVAL_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("SENTINEL_FEED_INTERVAL_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_FEED_INTERVAL_SECS,
        };

        let save_ms = match env::var("SENTINEL_SAVE_DELAY_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("SENTINEL_SAVE_DELAY_MS must be a whole number of milliseconds")?,
            Err(_) => DEFAULT_SAVE_DELAY_MS,
        };

        Ok(Self {
            feed_interval: Duration::from_secs(feed_secs),
            save_delay: Duration::from_millis(save_ms),
        })
    }
}
