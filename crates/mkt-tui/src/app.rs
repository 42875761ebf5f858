use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use mkt_core::config::Config;
use mkt_core::types::{NavigationStyle, ViewId};
use mkt_core::{NavigationError, NavigationEvent, NavigationShell};

use crate::screens::{self, Screen};
use crate::widgets::notice::{Notice, Notices};

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub config: Config,
    pub shell: NavigationShell<dyn Screen>,
    pub style: NavigationStyle,
    /// Set when the navigation could not be registered. The chrome still
    /// renders and the content region shows this message.
    pub startup_error: Option<String>,
    pub should_quit: bool,
    pub show_help: bool,
    pub notices: Notices,
    events: flume::Receiver<NavigationEvent>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut shell: NavigationShell<dyn Screen> = NavigationShell::new();
        let events = shell.subscribe();
        let style = config.navigation.style;

        let mut app = Self {
            config,
            shell,
            style,
            startup_error: None,
            should_quit: false,
            show_help: false,
            notices: Notices::new(),
            events,
        };
        app.configure();
        app
    }

    /// Register the configured navigation and attach a screen per entry.
    fn configure(&mut self) {
        let entries = self.config.navigation_entries();
        if let Err(e) = self.shell.register(entries.clone()) {
            tracing::error!(error = %e, "navigation setup failed");
            self.notices.push(Notice::from_error(&e));
            self.startup_error = Some(e.to_string());
            return;
        }

        for entry in &entries {
            let screen = screens::build(entry, &self.config);
            if let Err(e) = self.shell.attach(entry.id.as_str(), screen) {
                tracing::error!(error = %e, view = %entry.id, "attaching view failed");
            }
        }
        tracing::info!(
            views = entries.len(),
            style = self.style.as_str(),
            "navigation ready"
        );
    }

    /// Activation callback for the navigation controls.
    ///
    /// Unknown ids are logged and shown as an ignored notice; the selection stays.
    pub fn request_activation(&mut self, id: &str) -> Result<(), NavigationError> {
        match self.shell.activate(id) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!(view = id, error = %e, "activation ignored");
                self.notices.push(Notice::from_error(&e));
                Err(e)
            }
        }
    }

    /// Activate the entry at display position `index` (0-based).
    pub fn activate_index(&mut self, index: usize) -> Result<(), NavigationError> {
        let Some(id) = self.shell.entries().get(index).map(|e| e.id.to_string()) else {
            tracing::warn!(index, "activation ignored: no view at position");
            return Err(NavigationError::UnknownView(ViewId::from(format!(
                "#{}",
                index.saturating_add(1)
            ))));
        };
        self.request_activation(&id)
    }

    pub fn next_view(&mut self) {
        self.step_view(1);
    }

    pub fn prev_view(&mut self) {
        self.step_view(-1);
    }

    fn step_view(&mut self, step: isize) {
        if let Some(id) = self.shell.neighbor(step).map(|id| id.to_string()) {
            let _ = self.request_activation(&id);
        }
    }

    pub fn active_screen(&self) -> Option<&(dyn Screen + 'static)> {
        self.shell.active_view()
    }

    pub fn active_screen_mut(&mut self) -> Option<&mut (dyn Screen + 'static)> {
        self.shell.active_view_mut()
    }

    /// Label of the active entry, for titles and headless output.
    pub fn active_label(&self) -> Option<&str> {
        let id = self.shell.current()?;
        self.shell.entry(id.as_str()).map(|e| e.label.as_str())
    }

    /// Drain navigation events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<NavigationEvent> {
        self.events.try_iter().collect()
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Help modal intercepts Esc and ?
        if self.show_help {
            match key.code {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }

            // View switching: 1-9
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as usize) - ('1' as usize);
                if idx < self.shell.entries().len() {
                    let _ = self.activate_index(idx);
                }
            }
            KeyCode::Tab => self.next_view(),
            KeyCode::BackTab => self.prev_view(),

            // List navigation inside the active view
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(screen) = self.active_screen_mut() {
                    screen.move_selection(1);
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(screen) = self.active_screen_mut() {
                    screen.move_selection(-1);
                }
            }

            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
    }

    /// Called once per loop iteration.
    pub fn tick(&mut self) {
        self.notices.tick();
        for event in self.drain_events() {
            tracing::debug!(?event, "navigation event");
        }
    }
}
