//! Render tests for the shell chrome and each kind of view.
//!
//! The UI is drawn into a ratatui `TestBackend` and the buffer is flattened
//! to text, so the assertions read like what a user would see.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use mkt_core::config::Config;
use mkt_core::presets::Preset;
use mkt_core::types::{NavigationEntry, NavigationStyle};

// Include binary-crate modules via path for testing.
#[path = "../src/app.rs"]
mod app;
#[path = "../src/screens/mod.rs"]
mod screens;
#[path = "../src/ui.rs"]
mod ui;
#[path = "../src/widgets/mod.rs"]
mod widgets;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Standard terminal size for render tests: 120 cols x 40 rows.
const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn render_sized(app: &mut app::App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    let buf = terminal.backend().buffer().clone();
    buffer_to_string(&buf)
}

fn render_to_string(app: &mut app::App) -> String {
    render_sized(app, WIDTH, HEIGHT)
}

/// Convert a ratatui Buffer to a readable string (rows joined by newlines).
fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            let cell = &buf[(x, y)];
            line.push_str(cell.symbol());
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn tabs_config() -> Config {
    let mut config = Config::default();
    config.navigation.style = NavigationStyle::Tabs;
    config.navigation.preset = Preset::Compact;
    config
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

#[test]
fn test_header_and_footer() {
    let mut app = app::App::new(Config::default());
    let output = render_to_string(&mut app);

    assert!(output.contains("MKT INSTA"), "header title missing");
    assert!(output.contains("Version 2.0"), "version label missing");
    assert!(
        output.contains("Effective - Fast - Easy to use"),
        "footer slogan missing"
    );
    assert!(output.contains("phanmemmkt.vn"), "footer website missing");
}

#[test]
fn test_sidebar_lists_every_entry() {
    let mut app = app::App::new(Config::default());
    let output = render_to_string(&mut app);

    assert!(output.contains(" Menu "));
    for label in [
        "Accounts",
        "Content",
        "Messages",
        "Interactions",
        "Follow",
        "Reels",
        "Scanner",
        "Proxy",
    ] {
        assert!(output.contains(label), "sidebar missing {label}");
    }
    assert!(output.contains("> "), "active marker missing");
}

#[test]
fn test_tab_bar_style() {
    let mut app = app::App::new(tabs_config());
    let output = render_to_string(&mut app);

    assert!(!output.contains(" Menu "), "sidebar should not render");
    assert!(output.contains("1:"));
    assert!(output.contains("4:"));
    assert!(output.contains("Scanner"));
    assert!(output.contains(" | "));
}

#[test]
fn test_icons_can_be_hidden() {
    let mut config = tabs_config();
    config.ui.show_icons = false;
    let mut app = app::App::new(config);
    let output = render_to_string(&mut app);

    assert!(output.contains("1:Accounts"));
    assert!(!output.contains("🌐"));
}

#[test]
fn test_render_records_content_region() {
    let mut app = app::App::new(tabs_config());
    render_to_string(&mut app);

    // Header 3 rows, tab bar 2 rows, footer 1 row.
    let region = app.shell.region();
    assert_eq!(region.width, WIDTH);
    assert_eq!(region.height, HEIGHT - 6);
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[test]
fn test_accounts_view() {
    let mut app = app::App::new(tabs_config());
    let output = render_sized(&mut app, 200, HEIGHT);

    assert!(output.contains("Receive settings"));
    assert!(output.contains("START"));
    assert!(output.contains("STOP"));
    assert!(output.contains("Receive from"));
    assert!(output.contains("Username list"));
    assert!(output.contains("[ ] Avoid duplicate usernames"));
    assert!(output.contains("[ ] Allow receiving in photo+video"));
    assert!(output.contains("Selected posts"));
    assert!(output.contains("Choose account category"));
    assert!(output.contains("LOAD"));
    assert!(output.contains("Total: 5"));
    assert!(output.contains("Live: 4"));
    assert!(output.contains("Die: 1"));
    assert!(output.contains("Username"));
    assert!(output.contains("isulieuhphuong"));
    assert!(output.contains("jacqueochad4"));
}

#[test]
fn test_placeholder_views() {
    let mut app = app::App::new(Config::default());
    for (c, title) in [('2', "Content"), ('7', "Scanner"), ('8', "Proxy")] {
        app.on_key(key(KeyCode::Char(c)));
        let output = render_to_string(&mut app);
        assert!(
            output.contains("Feature under development..."),
            "{title} should show the placeholder"
        );
        assert!(output.contains(&format!(" {title} ")));
        assert!(!output.contains("Receive settings"));
    }
}

#[test]
fn test_help_overlay() {
    let mut app = app::App::new(Config::default());
    app.on_key(key(KeyCode::Char('?')));
    let output = render_to_string(&mut app);

    // Built from the registered views, numbered by jump key.
    assert!(output.contains(" Help "));
    assert!(output.contains("1  Accounts"));
    assert!(output.contains("8  Proxy"));
    assert!(output.contains("next / previous view"));
}

#[test]
fn test_help_overlay_follows_preset() {
    let mut app = app::App::new(tabs_config());
    app.on_key(key(KeyCode::Char('?')));
    let output = render_to_string(&mut app);

    assert!(output.contains("4  Proxy"));
    assert!(!output.contains("8  Proxy"));
    assert!(!output.contains("Reels"));
}

#[test]
fn test_ignored_activation_notice() {
    let mut app = app::App::new(Config::default());
    let _ = app.request_activation("dashboard");
    let output = render_to_string(&mut app);

    assert!(output.contains(" Ignored "));
    assert!(output.contains("No such view: dashboard"));
}

#[test]
fn test_startup_error_panel() {
    let mut config = Config::default();
    config.navigation.entries = vec![
        NavigationEntry::new("proxy", "Proxy"),
        NavigationEntry::new("proxy", "Proxy"),
    ];
    let mut app = app::App::new(config);
    let output = render_to_string(&mut app);

    // Chrome still renders around the error.
    assert!(output.contains("MKT INSTA"));
    assert!(output.contains(" Error "));
    assert!(output.contains("Navigation could not be configured"));
    assert!(output.contains("duplicate view id 'proxy'"));
    assert!(output.contains(" Setup error "));
}

#[test]
fn test_accounts_view_shows_configured_form() {
    let mut config = tabs_config();
    config.receive.avoid_duplicate_usernames = true;
    config.receive.selected_posts = 12;
    config.accounts.category = Some("TK 2".into());
    let mut app = app::App::new(config);
    let output = render_sized(&mut app, 200, HEIGHT);

    assert!(output.contains("[x] Avoid duplicate usernames"));
    assert!(output.contains("12"));
    assert!(output.contains("[TK 2 v]"));
    assert!(!output.contains("Choose account category"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = app::App::new(Config::default());
    app.on_key(key(KeyCode::Char('?')));
    let _ = render_sized(&mut app, 20, 8);

    let mut app = app::App::new(tabs_config());
    let _ = render_sized(&mut app, 1, 1);
}
