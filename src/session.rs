// Live dashboard session — the interactive loop behind `sentinel watch`.
//
// Owns the page selection, the filter state, and the settings state.
// The synthetic feed runs as a background task for exactly the lifetime
// of the session: launched on entry, cancelled on quit or Ctrl-C.

use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::feed;
use crate::filter::FilterState;
use crate::notify::NotificationSink;
use crate::pages::settings::SettingsState;
use crate::pages::{self, Page};
use crate::store::models::Classification;
use crate::store::SharedStore;

pub struct DashboardSession {
    store: SharedStore,
    sink: Arc<dyn NotificationSink>,
    page: Page,
    filters: FilterState,
    settings: SettingsState,
    save_delay: Duration,
}

impl DashboardSession {
    pub fn new(store: SharedStore, sink: Arc<dyn NotificationSink>, save_delay: Duration) -> Self {
        Self {
            store,
            sink,
            page: Page::Overview,
            filters: FilterState::default(),
            settings: SettingsState::default(),
            save_delay,
        }
    }

    /// Run the session until `quit`, EOF, or Ctrl-C. The feed timer is
    /// torn down before returning — no recurring task survives the session.
    pub async fn run(&mut self, feed_interval: Duration) -> Result<()> {
        let feed = feed::launch(self.store.clone(), self.sink.clone(), feed_interval);

        print_help();
        self.render_page().await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("{} ", "sentinel>".bold());
            std::io::stdout().flush()?;

            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(input) => {
                            if !self.handle_command(input.trim()).await {
                                break;
                            }
                        }
                        None => break, // stdin closed
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    break;
                }
            }
        }

        feed.stop().await;
        println!("Session ended. Feed stopped.");
        Ok(())
    }

    /// Dispatch one command. Returns false when the session should end.
    async fn handle_command(&mut self, input: &str) -> bool {
        if input.is_empty() {
            self.render_page().await;
            return true;
        }

        let (command, rest) = match input.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (input, ""),
        };

        match command {
            "quit" | "exit" => return false,
            "help" => print_help(),
            "status" => self.show_status().await,
            "classify" => self.classify(rest).await,
            "search" => {
                self.filters.search_term = rest.to_string();
                self.page = Page::Posts;
                self.render_page().await;
            }
            "platform" => {
                self.filters.platform = rest.to_string();
                self.page = Page::Posts;
                self.render_page().await;
            }
            "hashtag" => {
                self.filters.hashtag = rest.to_string();
                self.page = Page::Posts;
                self.render_page().await;
            }
            "classification" => match Classification::from_str(rest) {
                Ok(c) => {
                    self.filters.classification = c.as_str().to_string();
                    self.page = Page::Posts;
                    self.render_page().await;
                }
                Err(e) => println!("  {e}"),
            },
            "clear" => {
                self.filters.clear();
                println!("  Filters cleared.");
                self.render_page().await;
            }
            "save" => {
                self.settings
                    .save(self.save_delay, self.sink.as_ref())
                    .await;
            }
            "reset" => self.settings.reset(self.sink.as_ref()),
            other => match Page::from_str(other) {
                Ok(page) => {
                    self.page = page;
                    self.render_page().await;
                }
                Err(_) => {
                    warn!(command = other, "Unrecognized command");
                    println!("  Unknown command '{other}'. Type `help` for commands.");
                }
            },
        }

        true
    }

    /// Handle `classify <id> <classification>`.
    async fn classify(&mut self, args: &str) {
        let (id_raw, class_raw) = match args.split_once(' ') {
            Some(parts) => parts,
            None => {
                println!("  Usage: classify <id> <safe|suspicious|high-risk>");
                return;
            }
        };
        let id = match id_raw.parse::<u64>() {
            Ok(id) => id,
            Err(_) => {
                println!("  '{id_raw}' is not a post id");
                return;
            }
        };
        match Classification::from_str(class_raw.trim()) {
            Ok(classification) => {
                self.store
                    .write()
                    .await
                    .update_classification(id, classification);
            }
            Err(e) => println!("  {e}"),
        }
    }

    /// Sidebar-style summary: total posts and the high-risk badge count.
    async fn show_status(&self) {
        let store = self.store.read().await;
        let posts = store.snapshot();
        let alert_count = crate::analytics::alerts::high_risk_posts(posts).len();
        println!(
            "  {} posts analyzed, {} high-risk detected",
            posts.len(),
            alert_count
        );
        if !self.filters.is_empty() {
            println!("  Active filters: {}", self.filters.describe().join(", "));
        }
    }

    async fn render_page(&self) {
        let store = self.store.read().await;
        let posts = store.snapshot();

        println!(
            "\n{} — {}",
            self.page.title().bold(),
            self.page.description().dimmed()
        );

        match self.page {
            Page::Overview => pages::overview::render(posts),
            Page::Posts => pages::posts::render(posts, &self.filters),
            Page::Alerts => pages::alerts::render(posts),
            Page::Analytics => {
                let mut rng = rand::rng();
                pages::analytics::render(posts, &mut rng);
            }
            Page::Settings => pages::settings::render(&self.settings),
        }
    }
}

fn print_help() {
    println!("\n{}", "Commands".bold());
    println!("  overview | posts | alerts | analytics | settings   switch page");
    println!("  search <term> | platform <p> | hashtag <tag>       filter posts");
    println!("  classification <safe|suspicious|high-risk>         filter by label");
    println!("  classify <id> <safe|suspicious|high-risk>          relabel a post");
    println!("  clear | status | save | reset | help | quit");
}
