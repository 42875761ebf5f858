//! View registry and single active selection for the application shell.
//!
//! The shell owns an ordered list of [`NavigationEntry`] values, the views
//! attached to them, and exactly one active [`ViewId`] once configured.
//! Activation calls `unmount` on the outgoing view before `mount` on the
//! incoming one, so a view never observes an active sibling.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::types::{NavigationEntry, Region, ViewId};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Malformed entry set. Fatal to shell setup.
    #[error("configuration: {0}")]
    Configuration(String),
    /// Activation requested for an id that is not registered.
    #[error("unknown view: {0}")]
    UnknownView(ViewId),
}

impl NavigationError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, NavigationError::Configuration(_))
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Lifecycle contract for a unit of screen content.
pub trait View {
    /// Called when the view becomes the active one.
    fn mount(&mut self, _region: Region) {}

    /// Called on the outgoing view before the next one is mounted.
    fn unmount(&mut self) {}
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Emitted to subscribers whenever the rendered region has to be swapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Registered { active: ViewId, entries: usize },
    Activated { from: ViewId, to: ViewId },
}

// ---------------------------------------------------------------------------
// NavigationShell
// ---------------------------------------------------------------------------

pub struct NavigationShell<V: ?Sized = dyn View> {
    entries: Vec<NavigationEntry>,
    views: HashMap<ViewId, Box<V>>,
    active: Option<ViewId>,
    region: Region,
    observers: Vec<flume::Sender<NavigationEvent>>,
}

impl<V: ?Sized> fmt::Debug for NavigationShell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut attached: Vec<&str> = self.views.keys().map(ViewId::as_str).collect();
        attached.sort_unstable();
        f.debug_struct("NavigationShell")
            .field("entries", &self.entries)
            .field("attached", &attached)
            .field("active", &self.active)
            .field("region", &self.region)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<V: ?Sized> Default for NavigationShell<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            views: HashMap::new(),
            active: None,
            region: Region::default(),
            observers: Vec::new(),
        }
    }
}

impl<V: View + ?Sized> NavigationShell<V> {
    /// An unconfigured shell. Call [`register`](Self::register) before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor: a new shell with `entries` registered.
    pub fn with_entries(entries: Vec<NavigationEntry>) -> Result<Self, NavigationError> {
        let mut shell = Self::new();
        shell.register(entries)?;
        Ok(shell)
    }

    /// Replace the registry and reset the selection to the first entry.
    ///
    /// On error the previous registry and selection are left untouched.
    pub fn register(&mut self, entries: Vec<NavigationEntry>) -> Result<(), NavigationError> {
        validate_entries(&entries)?;

        if let Some(view) = self.active_view_mut() {
            view.unmount();
        }

        let mut entries = entries;
        for (position, entry) in entries.iter_mut().enumerate() {
            entry.order = position;
        }

        let keep: HashSet<&ViewId> = entries.iter().map(|e| &e.id).collect();
        self.views.retain(|id, _| keep.contains(id));

        let first = entries[0].id.clone();
        let count = entries.len();
        self.entries = entries;
        self.active = Some(first.clone());

        let region = self.region;
        if let Some(view) = self.views.get_mut(&first) {
            view.mount(region);
        }

        tracing::debug!(active = %first, entries = count, "navigation registered");
        self.emit(NavigationEvent::Registered {
            active: first,
            entries: count,
        });
        Ok(())
    }

    /// Make `id` the active view.
    ///
    /// Activating the already-active id succeeds without side effects.
    pub fn activate(&mut self, id: &str) -> Result<(), NavigationError> {
        let next = match self.entry(id) {
            Some(entry) => entry.id.clone(),
            None => return Err(NavigationError::UnknownView(ViewId::from(id))),
        };

        let previous = match self.active.take() {
            Some(previous) if previous == next => {
                self.active = Some(previous);
                return Ok(());
            }
            Some(previous) => previous,
            // Unreachable once configured: an entry exists so register ran.
            None => {
                self.active = Some(next);
                return Ok(());
            }
        };

        if let Some(view) = self.views.get_mut(&previous) {
            view.unmount();
        }
        let region = self.region;
        if let Some(view) = self.views.get_mut(&next) {
            view.mount(region);
        }
        self.active = Some(next.clone());

        tracing::debug!(from = %previous, to = %next, "view activated");
        self.emit(NavigationEvent::Activated {
            from: previous,
            to: next,
        });
        Ok(())
    }

    /// The active view id, `None` while unconfigured.
    pub fn current(&self) -> Option<&ViewId> {
        self.active.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.active.is_some()
    }

    /// Hand the implementation for a registered id to the shell.
    ///
    /// Replaces any previous view for the id. If the id is active the old
    /// view is unmounted and the new one mounted immediately.
    pub fn attach(&mut self, id: &str, view: Box<V>) -> Result<(), NavigationError> {
        let key = match self.entry(id) {
            Some(entry) => entry.id.clone(),
            None => return Err(NavigationError::UnknownView(ViewId::from(id))),
        };
        let is_active = self.active.as_ref() == Some(&key);
        let region = self.region;

        if let Some(mut old) = self.views.insert(key.clone(), view) {
            if is_active {
                old.unmount();
            }
        }
        if is_active {
            if let Some(view) = self.views.get_mut(&key) {
                view.mount(region);
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&NavigationEntry> {
        self.entries.iter().find(|e| e.id.as_str() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id.as_str() == id)
    }

    /// Position of the active entry.
    pub fn active_position(&self) -> Option<usize> {
        self.active.as_ref().and_then(|id| self.position(id.as_str()))
    }

    /// The entry `step` places away from the active one, wrapping around.
    pub fn neighbor(&self, step: isize) -> Option<&ViewId> {
        let len = self.entries.len() as isize;
        let current = self.active_position()? as isize;
        let idx = (current + step).rem_euclid(len) as usize;
        self.entries.get(idx).map(|e| &e.id)
    }

    pub fn active_view(&self) -> Option<&V> {
        let id = self.active.as_ref()?;
        self.views.get(id).map(|view| &**view)
    }

    pub fn active_view_mut(&mut self) -> Option<&mut V> {
        let id = self.active.as_ref()?;
        self.views.get_mut(id).map(|view| &mut **view)
    }

    pub fn view(&self, id: &str) -> Option<&V> {
        self.views.get(id).map(|view| &**view)
    }

    /// Record the display region used for subsequent mounts.
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Receive [`NavigationEvent`]s for every registration and activation.
    pub fn subscribe(&mut self) -> flume::Receiver<NavigationEvent> {
        let (tx, rx) = flume::unbounded();
        self.observers.push(tx);
        rx
    }

    fn emit(&mut self, event: NavigationEvent) {
        self.observers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

/// Check an entry sequence for emptiness, blank ids and duplicates.
pub fn validate_entries(entries: &[NavigationEntry]) -> Result<(), NavigationError> {
    if entries.is_empty() {
        return Err(NavigationError::Configuration(
            "navigation requires at least one entry".into(),
        ));
    }
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.id.as_str().trim().is_empty() {
            return Err(NavigationError::Configuration(format!(
                "entry '{}' has an empty view id",
                entry.label
            )));
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(NavigationError::Configuration(format!(
                "duplicate view id '{}'",
                entry.id
            )));
        }
    }
    Ok(())
}
