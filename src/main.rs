use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sentinel::config::Config;
use sentinel::filter::FilterState;
use sentinel::notify::TerminalSink;
use sentinel::pages;
use sentinel::session::DashboardSession;
use sentinel::store::models::Classification;
use sentinel::store::{shared, PostStore};

/// Sentinel: monitoring dashboard for social-media threat classification.
///
/// Renders overview, posts, alerts, analytics, and settings views over an
/// in-memory post set. `watch` runs the live session with the synthetic
/// high-risk feed.
#[derive(Parser)]
#[command(name = "sentinel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Threat level and classification stats
    Overview,

    /// List posts, optionally filtered
    Posts {
        /// Case-insensitive match against content, author, or hashtags
        #[arg(long)]
        search: Option<String>,

        /// Exact classification (safe, suspicious, high-risk)
        #[arg(long)]
        classification: Option<String>,

        /// Exact platform name (e.g. Telegram)
        #[arg(long)]
        platform: Option<String>,

        /// Exact hashtag (e.g. '#HumanRights')
        #[arg(long)]
        hashtag: Option<String>,
    },

    /// High-risk posts and alert statistics
    Alerts,

    /// Distributions, hourly activity, and trend analysis
    Analytics,

    /// Show the dashboard preferences (session-scoped, never persisted)
    Settings,

    /// Run the live dashboard session with the synthetic feed
    Watch {
        /// Seconds between synthetic posts (overrides SENTINEL_FEED_INTERVAL_SECS)
        #[arg(long)]
        interval_secs: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sentinel=info")),
        )
        .init();

    let config = Config::load()?;
    let cli = Cli::parse();

    let sink = Arc::new(TerminalSink);
    let store = PostStore::with_seed(sink.clone())?;

    match cli.command {
        Commands::Overview => {
            pages::overview::render(store.snapshot());
        }

        Commands::Posts {
            search,
            classification,
            platform,
            hashtag,
        } => {
            let mut filters = FilterState {
                search_term: search.unwrap_or_default(),
                platform: platform.unwrap_or_default(),
                hashtag: hashtag.unwrap_or_default(),
                ..Default::default()
            };
            // Validate the label up front so a typo reports an error
            // instead of silently matching nothing
            if let Some(raw) = classification {
                let parsed: Classification = raw.parse()?;
                filters.classification = parsed.as_str().to_string();
            }
            pages::posts::render(store.snapshot(), &filters);
        }

        Commands::Alerts => {
            pages::alerts::render(store.snapshot());
        }

        Commands::Analytics => {
            let mut rng = rand::rng();
            pages::analytics::render(store.snapshot(), &mut rng);
        }

        Commands::Settings => {
            pages::settings::render(&Default::default());
        }

        Commands::Watch { interval_secs } => {
            let interval = interval_secs
                .map(Duration::from_secs)
                .unwrap_or(config.feed_interval);

            let mut session =
                DashboardSession::new(shared(store), sink.clone(), config.save_delay);
            session.run(interval).await?;
        }
    }

    Ok(())
}
