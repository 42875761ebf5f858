use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use mkt_core::{Region, View};

use super::Screen;

pub const UNDER_DEVELOPMENT: &str = "Feature under development...";

/// Stand-in for features that have no implementation yet.
#[derive(Debug, Clone)]
pub struct PlaceholderScreen {
    title: String,
    mounted: bool,
}

impl PlaceholderScreen {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mounted: false,
        }
    }
}

impl View for PlaceholderScreen {
    fn mount(&mut self, _region: Region) {
        self.mounted = true;
    }

    fn unmount(&mut self) {
        self.mounted = false;
    }
}

impl Screen for PlaceholderScreen {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let message = Paragraph::new(UNDER_DEVELOPMENT)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(message, rows[1]);
    }

    fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": "placeholder",
            "title": self.title,
            "mounted": self.mounted,
        })
    }
}
