// Post store — the single source of truth for the dashboard session.
//
// All mutation goes through the explicit API here (`append`,
// `update_classification`). The filter and analytics layers only ever see
// snapshots, so swapping this in-memory store for a real backend later
// would not touch them.

pub mod models;
pub mod seed;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::info;

use crate::notify::{Notification, NotificationSink, Severity};
use models::{Classification, Post};

/// The store as shared by the session and the feed task. Every mutation
/// happens inside one lock guard, so two mutations never interleave.
pub type SharedStore = Arc<RwLock<PostStore>>;

/// Canonical ordered list of posts, newest first. Posts are never deleted.
pub struct PostStore {
    posts: Vec<Post>,
    /// Next id handed out to synthetic posts. Monotonic, initialized past
    /// the highest seed id, so synthetic ids can never collide with seed
    /// ids or with each other.
    next_id: u64,
    sink: Arc<dyn NotificationSink>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>, sink: Arc<dyn NotificationSink>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            posts,
            next_id,
            sink,
        }
    }

    /// Construct a store pre-loaded with the embedded seed set.
    pub fn with_seed(sink: Arc<dyn NotificationSink>) -> Result<Self> {
        Ok(Self::new(seed::seed_posts()?, sink))
    }

    /// Hand out the next synthetic post id.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert at the head of the sequence (newest-first display order).
    /// Id uniqueness is the caller's responsibility; use `allocate_id`.
    pub fn append(&mut self, post: Post) {
        info!(id = post.id, author = %post.author, "Post appended");
        self.posts.insert(0, post);
    }

    /// Rewrite the classification of the post with the given id.
    /// Unknown ids are silently ignored — no error, no mutation.
    /// Emits a success notification acknowledging the user action.
    pub fn update_classification(&mut self, id: u64, classification: Classification) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
            post.classification = classification;
            info!(id, classification = %classification, "Classification updated");
        }
        self.sink.notify(Notification::new(
            Severity::Success,
            "Classification updated",
            format!("Post classification updated to {classification}"),
        ));
    }

    /// The full current sequence, read-only.
    pub fn snapshot(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Wrap a store for sharing with the feed task.
pub fn shared(store: PostStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}
