// Sentinel: monitoring dashboard for social-media threat classification.
//
// This is the library root. Each module corresponds to a major subsystem
// of the dashboard: the post store, the synthetic feed, the filter model,
// the aggregation views, and the page layer on top.

pub mod analytics;
pub mod config;
pub mod feed;
pub mod filter;
pub mod notify;
pub mod output;
pub mod pages;
pub mod session;
pub mod store;
