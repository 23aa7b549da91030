// Posts page — the filtered list view.
//
// Takes the snapshot and the filter state; classification updates flow
// through the session's store handle, not through this renderer.

use colored::Colorize;

use crate::filter::{filtered_view, FilterState};
use crate::output::terminal::display_post_card;
use crate::store::models::Post;

pub fn render(posts: &[Post], filters: &FilterState) {
    let view = filtered_view(posts, filters);

    println!("\n{}", "=== Social Media Posts Analysis ===".bold());
    println!("  Showing {} of {} posts", view.len(), posts.len());

    let active = filters.describe();
    if !active.is_empty() {
        println!("  Active filters: {}", active.join(", ").yellow());
    }
    println!();

    if view.is_empty() {
        println!("  No posts match your current filters.");
        println!("  {}", "Use `clear` to remove all filters.".dimmed());
        return;
    }

    for post in view {
        display_post_card(post);
    }
}
