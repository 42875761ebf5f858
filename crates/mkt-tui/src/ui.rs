use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use mkt_core::types::NavigationStyle;
use mkt_core::Region;

use crate::app::App;
use crate::widgets::{footer, help_modal};

const SIDEBAR_WIDTH: u16 = 26;

/// Master render function: header, navigation, content area, footer.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(0),    // navigation + content
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let content_area = match app.style {
        NavigationStyle::Tabs => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(0)])
                .split(chunks[1]);
            render_tab_bar(frame, app, rows[0]);
            rows[1]
        }
        NavigationStyle::Sidebar => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(chunks[1]);
            render_sidebar(frame, app, cols[0]);
            cols[1]
        }
    };

    app.shell
        .set_region(Region::new(content_area.width, content_area.height));
    render_content(frame, app, content_area);

    footer::render(frame, chunks[2], &app.config.footer);

    if app.show_help {
        help_modal::render(frame, app.shell.entries());
    }
    app.notices.render(frame, content_area);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let general = &app.config.general;
    let lines = vec![
        Line::from(Span::styled(
            format!("🔥 {}", general.app_name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            general.version_label.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(header, area);
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let show_icons = app.config.ui.show_icons;
    let titles: Vec<Line> = app
        .shell
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Line::from(vec![
                Span::styled(
                    format!("{}", i + 1),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(":"),
                Span::raw(entry.display_label(show_icons)),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(app.shell.active_position().unwrap_or(0))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw(" | "));

    frame.render_widget(tabs, area);
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let show_icons = app.config.ui.show_icons;
    // Borders and highlight symbol take 4 cells.
    let max_label = (area.width as usize).saturating_sub(4);

    let items: Vec<ListItem> = app
        .shell
        .entries()
        .iter()
        .map(|entry| ListItem::new(truncate(&entry.display_label(show_icons), max_label)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Menu "))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(app.shell.active_position());
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = &app.startup_error {
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                "Navigation could not be configured",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(message.as_str()),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Error "))
        .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(screen) = app.active_screen() {
        screen.render(frame, area);
    }
}

/// Cut `text` to at most `max` display cells, marking the cut with `~`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('~');
    out
}
