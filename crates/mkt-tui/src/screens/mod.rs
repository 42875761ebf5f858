//! Terminal views mounted into the content region by the navigation shell.

pub mod accounts;
pub mod placeholder;

use ratatui::layout::Rect;
use ratatui::Frame;

use mkt_core::config::Config;
use mkt_core::types::{sample_accounts, NavigationEntry};
use mkt_core::View;

pub use accounts::AccountsScreen;
pub use placeholder::PlaceholderScreen;

/// A [`View`] that can draw itself into a ratatui frame.
pub trait Screen: View {
    fn render(&self, frame: &mut Frame, area: Rect);

    /// Move the list selection by `delta` rows, clamped to the list.
    fn move_selection(&mut self, _delta: isize) {}

    /// Select row `index`, clamped to the list.
    fn select(&mut self, _index: usize) {}

    fn selected(&self) -> Option<usize> {
        None
    }

    /// JSON description of the view for headless queries.
    fn snapshot(&self) -> serde_json::Value;
}

/// Build the screen for a navigation entry.
pub fn build(entry: &NavigationEntry, config: &Config) -> Box<dyn Screen> {
    match entry.id.as_str() {
        "account" => Box::new(AccountsScreen::new(
            sample_accounts(),
            config.receive.clone(),
            config.accounts.clone(),
        )),
        _ => Box::new(PlaceholderScreen::new(entry.label.clone())),
    }
}
