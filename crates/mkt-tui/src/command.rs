//! Command system for driving the shell without a keyboard.
//!
//! Two input forms are accepted:
//! - **Text commands**: `:` prefixed, e.g. `:view proxy`, `:tab 2`, `:query state`.
//! - **JSON commands**: `{"cmd":"activate","args":["proxy"]}`.
//!
//! Query commands return serialized state as JSON so that scripts can inspect
//! the shell without direct struct access.

use serde_json::json;

use mkt_core::{NavigationError, ViewId};

use crate::app::App;

// ---------------------------------------------------------------------------
// AppCommand enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Navigation
    Activate(String),
    /// 1-based position, as shown in the tab bar.
    Tab(usize),
    Next,
    Prev,

    // Selection inside the active view
    Up,
    Down,
    Select(usize),

    // Queries
    QueryState,
    QueryNav,
    QueryView,

    // System
    Help,
    Quit,
}

// ---------------------------------------------------------------------------
// Text command parser  (`:` prefixed)
// ---------------------------------------------------------------------------

/// Parse a `:` prefixed command string.
pub fn parse_command(input: &str) -> Option<AppCommand> {
    let input = input.trim().strip_prefix(':')?;
    let mut parts = input.splitn(2, ' ');
    let verb = parts.next()?.trim();
    let arg = parts.next().map(str::trim).filter(|s| !s.is_empty());

    match verb {
        "view" | "activate" | "open" => Some(AppCommand::Activate(arg?.to_string())),
        "tab" => Some(AppCommand::Tab(arg?.parse().ok()?)),
        "next" => Some(AppCommand::Next),
        "prev" => Some(AppCommand::Prev),
        "up" | "k" => Some(AppCommand::Up),
        "down" | "j" => Some(AppCommand::Down),
        "select" | "sel" => Some(AppCommand::Select(arg?.parse().ok()?)),
        "query" => match arg? {
            "state" => Some(AppCommand::QueryState),
            "nav" => Some(AppCommand::QueryNav),
            "view" => Some(AppCommand::QueryView),
            _ => None,
        },
        "help" | "?" => Some(AppCommand::Help),
        "quit" | "q" => Some(AppCommand::Quit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// JSON command parser
// ---------------------------------------------------------------------------

/// Parse a JSON command: `{"cmd":"tab","args":[3]}` or `{"cmd":"query_state"}`.
pub fn parse_json_command(input: &str) -> Option<AppCommand> {
    let v: serde_json::Value = serde_json::from_str(input).ok()?;
    let cmd = v.get("cmd")?.as_str()?;
    let args = v.get("args");

    let arg_usize =
        |idx: usize| -> Option<usize> { args?.as_array()?.get(idx)?.as_u64().map(|n| n as usize) };
    let arg_str = |idx: usize| -> Option<&str> { args?.as_array()?.get(idx)?.as_str() };

    match cmd {
        "activate" | "view" => Some(AppCommand::Activate(arg_str(0)?.to_string())),
        "tab" => Some(AppCommand::Tab(arg_usize(0)?)),
        "next" => Some(AppCommand::Next),
        "prev" => Some(AppCommand::Prev),
        "up" => Some(AppCommand::Up),
        "down" => Some(AppCommand::Down),
        "select" => Some(AppCommand::Select(arg_usize(0)?)),
        "query_state" => Some(AppCommand::QueryState),
        "query_nav" => Some(AppCommand::QueryNav),
        "query_view" => Some(AppCommand::QueryView),
        "help" => Some(AppCommand::Help),
        "quit" => Some(AppCommand::Quit),
        _ => None,
    }
}

/// Parse either form.
pub fn parse(input: &str) -> Option<AppCommand> {
    parse_json_command(input).or_else(|| parse_command(input))
}

// ---------------------------------------------------------------------------
// Command execution
// ---------------------------------------------------------------------------

/// Outcome of a command: a query payload, or nothing to report.
pub type CommandResult = Result<Option<serde_json::Value>, NavigationError>;

/// Execute a command against the application state.
pub fn execute_command(app: &mut App, cmd: AppCommand) -> CommandResult {
    match cmd {
        AppCommand::Activate(id) => app.request_activation(&id).map(|_| None),
        AppCommand::Tab(position) => match position.checked_sub(1) {
            Some(index) => app.activate_index(index).map(|_| None),
            None => Err(NavigationError::UnknownView(ViewId::from("#0"))),
        },
        AppCommand::Next => {
            app.next_view();
            Ok(None)
        }
        AppCommand::Prev => {
            app.prev_view();
            Ok(None)
        }
        AppCommand::Up => {
            if let Some(screen) = app.active_screen_mut() {
                screen.move_selection(-1);
            }
            Ok(None)
        }
        AppCommand::Down => {
            if let Some(screen) = app.active_screen_mut() {
                screen.move_selection(1);
            }
            Ok(None)
        }
        AppCommand::Select(index) => {
            if let Some(screen) = app.active_screen_mut() {
                screen.select(index);
            }
            Ok(None)
        }
        AppCommand::QueryState => Ok(Some(state_json(app))),
        AppCommand::QueryNav => Ok(Some(json!({
            "style": app.style.as_str(),
            "entries": app.shell.entries(),
        }))),
        AppCommand::QueryView => Ok(Some(match app.active_screen() {
            Some(screen) => screen.snapshot(),
            None => serde_json::Value::Null,
        })),
        AppCommand::Help => {
            app.show_help = true;
            Ok(None)
        }
        AppCommand::Quit => {
            app.should_quit = true;
            Ok(None)
        }
    }
}

fn state_json(app: &App) -> serde_json::Value {
    json!({
        "configured": app.shell.is_configured(),
        "active": app.shell.current(),
        "active_label": app.active_label(),
        "position": app.shell.active_position(),
        "views": app.shell.entries().len(),
        "selected": app.active_screen().and_then(|s| s.selected()),
        "startup_error": app.startup_error,
        "notice": app.notices.latest().map(|n| n.message.as_str()),
        "notices": app.notices.len(),
        "show_help": app.show_help,
    })
}
