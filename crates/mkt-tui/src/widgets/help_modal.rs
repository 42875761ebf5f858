use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use mkt_core::NavigationEntry;

const KEYS: [(&str, &str); 5] = [
    ("Tab / S-Tab", "next / previous view"),
    ("j k / arrows", "move in list"),
    ("?  Esc", "close this help"),
    ("q", "quit"),
    ("Ctrl-c", "force quit"),
];

/// Help overlay listing the registered views with their jump keys, followed
/// by the fixed keys. Only the first nine views have a number key.
pub fn render(frame: &mut Frame, entries: &[NavigationEntry]) {
    let lines = help_lines(entries);
    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .saturating_add(4) as u16;
    let area = modal_area(frame.area(), width, lines.len() as u16 + 2);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn help_lines(entries: &[NavigationEntry]) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Cyan);

    let mut lines = vec![Line::from(Span::styled(" Views", heading))];
    for (i, entry) in entries.iter().enumerate() {
        let key = if i < 9 {
            (i + 1).to_string()
        } else {
            "-".to_string()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {key:>3}  "), key_style),
            Span::raw(entry.label.clone()),
        ]));
    }
    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "      none registered",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Keys", heading)));
    for (key, desc) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!(" {key:<13}"), key_style),
            Span::raw(desc),
        ]));
    }
    lines
}

/// A `width` x `height` rect centered in `outer`, shrunk to fit.
pub fn modal_area(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect::new(
        outer.x + (outer.width - width) / 2,
        outer.y + (outer.height - height) / 2,
        width,
        height,
    )
}
