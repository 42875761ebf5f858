//! Short-lived notices drawn over the bottom of the content region.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use mkt_core::NavigationError;

/// What a notice reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Navigation or configuration could not be set up.
    Setup,
    /// An activation request was dropped; the selection did not change.
    Ignored,
}

impl NoticeKind {
    fn color(self) -> Color {
        match self {
            NoticeKind::Setup => Color::Red,
            NoticeKind::Ignored => Color::Yellow,
        }
    }

    fn title(self) -> &'static str {
        match self {
            NoticeKind::Setup => " Setup error ",
            NoticeKind::Ignored => " Ignored ",
        }
    }

    fn ttl(self) -> Duration {
        match self {
            NoticeKind::Setup => Duration::from_secs(10),
            NoticeKind::Ignored => Duration::from_secs(3),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    shown_at: Instant,
    ttl: Duration,
}

impl Notice {
    fn new(message: String, kind: NoticeKind) -> Self {
        Self {
            message,
            kind,
            shown_at: Instant::now(),
            ttl: kind.ttl(),
        }
    }

    pub fn setup(message: impl Into<String>) -> Self {
        Self::new(message.into(), NoticeKind::Setup)
    }

    pub fn ignored(message: impl Into<String>) -> Self {
        Self::new(message.into(), NoticeKind::Ignored)
    }

    /// The notice a navigation failure shows to the user.
    pub fn from_error(err: &NavigationError) -> Self {
        match err {
            NavigationError::Configuration(_) => {
                Self::setup(format!("Navigation setup failed: {err}"))
            }
            NavigationError::UnknownView(id) => Self::ignored(format!("No such view: {id}")),
        }
    }

    #[cfg(test)]
    fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.ttl
    }
}

const MAX_NOTICES: usize = 3;
const NOTICE_HEIGHT: u16 = 3;
const MAX_WIDTH: u16 = 56;

/// Stack of visible notices, newest last.
#[derive(Debug, Default)]
pub struct Notices {
    queue: VecDeque<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notice`. Repeating the newest message restarts its timer
    /// instead of stacking a copy.
    pub fn push(&mut self, notice: Notice) {
        if let Some(last) = self.queue.back_mut() {
            if last.kind == notice.kind && last.message == notice.message {
                last.shown_at = notice.shown_at;
                return;
            }
        }
        self.queue.push_back(notice);
        while self.queue.len() > MAX_NOTICES {
            self.queue.pop_front();
        }
    }

    /// Drop expired notices.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.queue.retain(|n| !n.expired(now));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.queue.back()
    }

    /// Draw the stack bottom-right in `area`, newest at the bottom.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.is_empty() {
            return;
        }
        let mut bottom = area.y + area.height;
        for notice in self.queue.iter().rev() {
            if bottom < area.y + NOTICE_HEIGHT {
                break;
            }
            let wanted = (notice.message.width() as u16)
                .max(notice.kind.title().width() as u16)
                .saturating_add(4);
            let width = wanted.min(MAX_WIDTH).min(area.width);
            let rect = Rect::new(
                area.x + area.width - width,
                bottom - NOTICE_HEIGHT,
                width,
                NOTICE_HEIGHT,
            );
            bottom -= NOTICE_HEIGHT;

            let color = notice.kind.color();
            let block = Block::default()
                .borders(Borders::ALL)
                .title(notice.kind.title())
                .border_style(Style::default().fg(color));
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(format!(" {}", notice.message)).block(block),
                rect,
            );
        }
    }
}
