// Notification sink — the dashboard's toast boundary.
//
// The store, feed, and settings page all talk to the UI through this
// trait. Implementations must not block the caller; the terminal sink
// just prints, the memory sink just pushes to a vec.

use std::sync::Mutex;

use colored::Colorize;

use crate::pages::Page;

/// How loudly to surface a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// One toast: severity, title, description, and an optional page the
/// user can jump to (e.g. the alerts view for a new high-risk post).
#[derive(Debug, Clone)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub action: Option<Page>,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, page: Page) -> Self {
        self.action = Some(page);
        self
    }
}

/// External collaborator invoked on synthetic post creation, manual
/// classification changes, and settings save/reset. Must not block.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Prints notifications as colored one-liners.
pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&self, n: Notification) {
        let title = match n.severity {
            Severity::Info => n.title.normal().bold(),
            Severity::Success => n.title.green().bold(),
            Severity::Warning => n.title.yellow().bold(),
            Severity::Error => n.title.red().bold(),
        };
        match n.action {
            Some(page) => println!(
                "  {} {} {}",
                title,
                n.description,
                format!("[view: {}]", page.as_str()).dimmed()
            ),
            None => println!("  {} {}", title, n.description),
        }
    }
}

/// Captures notifications in memory. Used by tests to assert on the
/// toast contract without a terminal.
#[derive(Default)]
pub struct MemorySink {
    captured: Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn captured(&self) -> Vec<Notification> {
        self.captured.lock().expect("sink lock poisoned").clone()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) {
        self.captured
            .lock()
            .expect("sink lock poisoned")
            .push(notification);
    }
}
