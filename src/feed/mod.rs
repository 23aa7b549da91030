// Synthetic feed generator — fabricates a new high-risk post on a fixed
// interval for the lifetime of the dashboard session.
//
// The feed talks to the store through the same mutation API as any other
// caller, so swapping it for a real ingestion source later means replacing
// this module, not the store.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::notify::{Notification, NotificationSink, Severity};
use crate::output::truncate_chars;
use crate::pages::Page;
use crate::store::models::{Classification, Engagement, Post};
use crate::store::SharedStore;

/// The fixed pool of hostile-sounding message templates.
pub const SUSPICIOUS_TEMPLATES: [&str; 4] = [
    "New evidence of systematic oppression discovered. The world must know the truth!",
    "Breaking: Leaked documents show the real agenda behind recent policies.",
    "They are trying to silence us, but we will not be stopped. #TruthWillPrevail",
    "International intervention is needed immediately. Human rights are under attack!",
];

/// Hashtags attached to every synthetic post.
pub const FEED_HASHTAGS: [&str; 3] = ["#Alert", "#Breaking", "#TruthWillPrevail"];

/// Characters of content carried in the alert notification preview.
pub const PREVIEW_CHARS: usize = 50;

/// Build one synthetic high-risk post. The id comes from the store's
/// monotonic counter; everything else follows the fixed recipe.
pub fn synthesize_post(id: u64, now: DateTime<Utc>, rng: &mut impl Rng) -> Post {
    let template = SUSPICIOUS_TEMPLATES[rng.random_range(0..SUSPICIOUS_TEMPLATES.len())];
    Post {
        id,
        author: format!("AlertBot_{}", rng.random_range(0..1000)),
        avatar: "https://api.dicebear.com/7.x/initials/svg?seed=Alert&backgroundColor=ef4444"
            .to_string(),
        content: template.to_string(),
        hashtags: FEED_HASHTAGS.iter().map(|t| t.to_string()).collect(),
        timestamp: now,
        classification: Classification::HighlySuspicious,
        location: "Unknown".to_string(),
        platform: Some("Telegram".to_string()),
        engagement: Some(Engagement {
            likes: rng.random_range(100..600),
            shares: rng.random_range(50..250),
            comments: rng.random_range(20..120),
        }),
    }
}

/// Handle to the running feed task. Dropping it without calling `stop`
/// leaks a recurring task that keeps mutating the store — always stop
/// the feed when the session ends.
pub struct FeedHandle {
    shutdown: watch::Sender<()>,
    task: JoinHandle<()>,
}

impl FeedHandle {
    /// Cancel the feed and wait for the task to wind down.
    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        let _ = self.task.await;
    }
}

/// Spawn the feed loop. The first synthetic post lands one full `period`
/// after launch; subsequent posts follow every `period`.
pub fn launch(store: SharedStore, sink: Arc<dyn NotificationSink>, period: Duration) -> FeedHandle {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(());

    let task = tokio::spawn(async move {
        info!(period_secs = period.as_secs_f64(), "Synthetic feed started");
        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately; consume it so the feed
        // waits a full period before its first post.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let mut guard = store.write().await;
                    let id = guard.allocate_id();
                    let post = {
                        let mut rng = rand::rng();
                        synthesize_post(id, Utc::now(), &mut rng)
                    };
                    let author = post.author.clone();
                    let preview = truncate_chars(&post.content, PREVIEW_CHARS);
                    guard.append(post);
                    drop(guard);

                    debug!(id, "Synthetic post generated");
                    sink.notify(
                        Notification::new(
                            Severity::Error,
                            "New High-Risk Post Detected!",
                            format!("@{author}: {preview}"),
                        )
                        .with_action(Page::Alerts),
                    );
                }
                _ = shutdown_rx.changed() => {
                    info!("Synthetic feed stopped");
                    break;
                }
            }
        }
    });

    FeedHandle {
        shutdown: shutdown_tx,
        task,
    }
}
