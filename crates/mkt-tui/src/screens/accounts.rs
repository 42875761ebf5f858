use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use mkt_core::config::{AccountsConfig, ReceiveConfig};
use mkt_core::types::{AccountRecord, AccountStats, AccountStatus};
use mkt_core::{Region, View};

use super::Screen;

const COLUMNS: [&str; 10] = [
    "No",
    "Username",
    "Password",
    "Full name",
    "Status",
    "Gender",
    "Followers",
    "Following",
    "Proxy",
    "Last action",
];

/// Account management: receive settings on the left, account table on the right.
#[derive(Debug, Clone)]
pub struct AccountsScreen {
    accounts: Vec<AccountRecord>,
    settings: ReceiveConfig,
    categories: AccountsConfig,
    selected: usize,
    region: Option<Region>,
}

impl AccountsScreen {
    pub fn new(
        accounts: Vec<AccountRecord>,
        settings: ReceiveConfig,
        categories: AccountsConfig,
    ) -> Self {
        Self {
            accounts,
            settings,
            categories,
            selected: 0,
            region: None,
        }
    }

    pub fn stats(&self) -> AccountStats {
        AccountStats::from_records(&self.accounts)
    }

    fn render_settings(&self, frame: &mut Frame, area: Rect) {
        let s = &self.settings;
        let lines = vec![
            setting_line("Concurrent runs", s.concurrency.to_string(), ""),
            setting_line("Switch account after", s.switch_after.to_string(), "times"),
            setting_line("Open speed", s.open_speed.to_string(), "people"),
            setting_line("Interval", s.interval_secs.to_string(), "seconds"),
            setting_line(
                "Media per receive",
                format!("{} - {}", s.media_min, s.media_max),
                "photo/video",
            ),
            Line::from(""),
            setting_line("Receive from", s.source.label().to_string(), ""),
            checkbox_line("Avoid duplicate usernames", s.avoid_duplicate_usernames),
            checkbox_line("Check name and content", s.check_name_and_content),
            setting_line("Selected posts", s.selected_posts.to_string(), ""),
            checkbox_line("Allow receiving in posts", s.allow_in_posts),
            checkbox_line("Allow receiving in photo+video", s.allow_in_photo_video),
            setting_line("Pick posts", s.pick_order.label().to_string(), ""),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " START ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    " STOP ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Receive settings "),
        );
        frame.render_widget(paragraph, area);
    }

    fn category_line(&self) -> Line<'static> {
        let (category, style) = match &self.categories.category {
            Some(name) => (name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            None => (
                "Choose account category".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };
        Line::from(vec![
            Span::raw(" Category: "),
            Span::styled(format!("[{category} v]"), style),
            Span::raw(" "),
            Span::styled(
                " LOAD ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(Paragraph::new(self.category_line()), chunks[0]);

        let stats = self.stats();
        let counters = Line::from(vec![
            Span::raw(" Total: "),
            Span::styled(
                stats.total.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  Live: "),
            Span::styled(stats.live.to_string(), Style::default().fg(Color::Green)),
            Span::raw("  Die: "),
            Span::styled(stats.die.to_string(), Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(Paragraph::new(counters), chunks[1]);

        let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c))).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .accounts
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let status_color = match a.status {
                    AccountStatus::Live => Color::Green,
                    AccountStatus::Die => Color::Red,
                };
                Row::new(vec![
                    Cell::from((i + 1).to_string()),
                    Cell::from(a.username.as_str()),
                    Cell::from(a.password.as_str()),
                    Cell::from(a.full_name.as_str()),
                    Cell::from(a.status.label()).style(Style::default().fg(status_color)),
                    Cell::from(a.gender.as_str()),
                    Cell::from(a.followers.to_string()),
                    Cell::from(a.following.to_string()),
                    Cell::from(a.proxy.as_deref().unwrap_or("")),
                    Cell::from(a.last_action.as_deref().unwrap_or("")),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Min(16),
            Constraint::Length(15),
            Constraint::Length(12),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Min(12),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(" Accounts "))
            .row_highlight_style(Style::default().bg(Color::DarkGray));

        let mut state = TableState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(table, chunks[2], &mut state);
    }
}

fn checkbox_line(label: &str, checked: bool) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    Line::from(vec![
        Span::styled(format!(" {mark} "), Style::default().fg(Color::Cyan)),
        Span::raw(label.to_string()),
    ])
}

fn setting_line(label: &str, value: String, unit: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<22}", label), Style::default().fg(Color::Cyan)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(" {unit}")),
    ])
}

impl View for AccountsScreen {
    fn mount(&mut self, region: Region) {
        self.selected = 0;
        self.region = Some(region);
        tracing::debug!(
            accounts = self.accounts.len(),
            width = region.width,
            height = region.height,
            "accounts view mounted"
        );
    }

    fn unmount(&mut self) {
        self.region = None;
    }
}

impl Screen for AccountsScreen {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(42), Constraint::Min(0)])
            .split(area);

        self.render_settings(frame, chunks[0]);
        self.render_table(frame, chunks[1]);
    }

    fn move_selection(&mut self, delta: isize) {
        let max = self.accounts.len().saturating_sub(1) as isize;
        self.selected = (self.selected as isize + delta).clamp(0, max) as usize;
    }

    fn select(&mut self, index: usize) {
        self.selected = index.min(self.accounts.len().saturating_sub(1));
    }

    fn selected(&self) -> Option<usize> {
        if self.accounts.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": "accounts",
            "mounted": self.region.is_some(),
            "selected": self.selected(),
            "stats": self.stats(),
            "settings": self.settings,
            "category": self.categories.category,
            "categories": self.categories.categories,
            "accounts": self.accounts.iter().map(|a| serde_json::json!({
                "username": a.username,
                "status": a.status.label(),
                "followers": a.followers,
                "following": a.following,
            })).collect::<Vec<_>>(),
        })
    }
}
