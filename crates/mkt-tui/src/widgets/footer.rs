use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use mkt_core::config::FooterConfig;

/// Render the bottom bar: key hints and slogan on the left, website and
/// clock on the right.
pub fn render(frame: &mut Frame, area: Rect, footer: &FooterConfig) {
    let now = Local::now().format("%Y-%m-%d %H:%M");

    let left = vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("[q]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit  "),
        Span::styled(
            footer.slogan.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];
    let right_text = format!("{}  {}", footer.website, now);

    // Ratatui has no split alignment inside one Paragraph, so pad the middle.
    let left_width: usize = left.iter().map(|s| s.content.width()).sum();
    let right_width = right_text.width();
    let total_width = area.width as usize;
    let padding = if total_width > left_width + right_width {
        total_width - left_width - right_width
    } else {
        1
    };

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(right_text, Style::default().fg(Color::LightBlue)));

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(bar, area);
}
