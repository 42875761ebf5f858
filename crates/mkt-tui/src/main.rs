mod app;
mod command;
mod screens;
mod ui;
mod widgets;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use mkt_core::config::Config;
use mkt_core::presets::Preset;
use mkt_core::types::NavigationStyle;
use mkt_core::NavigationEvent;

use crate::app::App;

/// Command-line options (simple, no clap dependency).
#[derive(Debug, Default)]
struct Options {
    headless: bool,
    json_logs: bool,
    config: Option<PathBuf>,
    preset: Option<String>,
    style: Option<NavigationStyle>,
}

impl Options {
    fn parse(args: &[String]) -> Self {
        let value_after = |flag: &str| {
            args.iter()
                .position(|a| a == flag)
                .and_then(|i| args.get(i + 1))
                .cloned()
        };
        let style = if args.iter().any(|a| a == "--tabs") {
            Some(NavigationStyle::Tabs)
        } else if args.iter().any(|a| a == "--sidebar") {
            Some(NavigationStyle::Sidebar)
        } else {
            None
        };
        Self {
            headless: args.iter().any(|a| a == "--headless"),
            json_logs: args.iter().any(|a| a == "--json-logs"),
            config: value_after("--config").map(PathBuf::from),
            preset: value_after("--preset"),
            style,
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let opts = Options::parse(&args);

    let (config, config_error) = load_config(&opts);
    let level = config.general.log_level.clone();

    if opts.headless {
        if opts.json_logs {
            mkt_telemetry::logging::init_logging_json("mkt-tui", &level);
        } else {
            mkt_telemetry::logging::init_logging("mkt-tui", &level);
        }
    } else if let Err(e) =
        mkt_telemetry::logging::init_file_logging("mkt-tui", &level, &config.general.log_path())
    {
        eprintln!("warning: file logging disabled: {e}");
    }
    if let Some(e) = &config_error {
        tracing::error!(error = %e, "config could not be loaded, using defaults");
    }

    let mut app = App::new(config);
    if let Some(e) = config_error {
        app.notices.push(widgets::notice::Notice::setup(format!(
            "Config error, using defaults: {e}"
        )));
    }

    if opts.headless {
        return run_headless(app);
    }

    // Set up panic hook to restore terminal on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run(app);

    restore_terminal()?;
    result
}

/// Load configuration and apply command-line overrides. A broken config file
/// falls back to defaults; the error is returned for reporting.
fn load_config(opts: &Options) -> (Config, Option<String>) {
    let loaded = match &opts.config {
        Some(path) => Config::load_from(path.clone()),
        None => Config::load(),
    };
    let (mut config, error) = match loaded {
        Ok(cfg) => (cfg, None),
        Err(e) => (Config::default(), Some(e.to_string())),
    };

    if let Some(name) = &opts.preset {
        match Preset::parse(name) {
            Some(preset) => {
                config.navigation.preset = preset;
                config.navigation.entries.clear();
            }
            None => eprintln!("warning: unknown preset '{name}', keeping configured navigation"),
        }
    }
    if let Some(style) = opts.style {
        config.navigation.style = style;
    }
    (config, error)
}

/// Run the interactive TUI with the standard crossterm backend.
fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(app.config.ui.tick_rate_ms);

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &mut app);
        })?;

        if ct_event::poll(tick_rate)? {
            if let Event::Key(key) = ct_event::read()? {
                app.on_key(key);
            }
        }
        app.tick();

        if app.should_quit {
            break;
        }
    }

    tracing::info!("shutting down");
    Ok(())
}

/// Headless mode: reads commands from stdin, outputs JSON lines to stdout.
/// No terminal rendering, so the shell can be scripted and tested.
///
/// Usage: `echo '{"cmd":"query_state"}' | mkt-tui --headless`
fn run_headless(app: App) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve_headless(app, stdin.lock(), stdout.lock())
}

/// Process one command per input line until `quit` or end of input.
///
/// Lines are decoded lossily, so bytes that are not UTF-8 produce an
/// `error` event for that line and the session continues.
fn serve_headless(mut app: App, mut input: impl BufRead, mut out: impl Write) -> Result<()> {
    emit_event(
        &mut out,
        &serde_json::json!({
            "event": "started",
            "views": app.shell.entries().len(),
            "active": app.shell.current(),
            "style": app.style.as_str(),
            "startup_error": app.startup_error,
        }),
    )?;
    // The initial registration is already reported by `started`.
    app.drain_events();

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim();
        if line.is_empty() {
            continue;
        }

        match command::parse(line) {
            Some(cmd) => {
                let result = command::execute_command(&mut app, cmd);

                for event in app.drain_events() {
                    emit_event(&mut out, &navigation_event_json(&event))?;
                }

                let reply = match result {
                    Ok(Some(payload)) => payload,
                    Ok(None) => serde_json::json!({"event": "ok"}),
                    Err(e) => serde_json::json!({
                        "event": "error",
                        "message": e.to_string(),
                        "active": app.shell.current(),
                    }),
                };
                emit_event(&mut out, &reply)?;
            }
            None => {
                tracing::warn!(input = line, "unknown headless command");
                emit_event(
                    &mut out,
                    &serde_json::json!({
                        "event": "error",
                        "message": format!("unknown command: {line}"),
                        "active": app.shell.current(),
                    }),
                )?;
            }
        }

        if app.should_quit {
            emit_event(&mut out, &serde_json::json!({"event": "quit"}))?;
            break;
        }
    }

    Ok(())
}

fn navigation_event_json(event: &NavigationEvent) -> serde_json::Value {
    match event {
        NavigationEvent::Registered { active, entries } => serde_json::json!({
            "event": "registered",
            "active": active,
            "views": entries,
        }),
        NavigationEvent::Activated { from, to } => serde_json::json!({
            "event": "view_changed",
            "from": from,
            "to": to,
        }),
    }
}

fn emit_event(out: &mut impl Write, value: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    out.write_all(b"\n")?;
    out.flush()
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
