//! Core of the MKT INSTA shell: view identifiers, the navigation registry
//! with its single active selection, built-in layouts, and configuration.

pub mod config;
pub mod navigation;
pub mod presets;
pub mod types;

pub use navigation::{NavigationError, NavigationEvent, NavigationShell, View};
pub use types::{NavigationEntry, NavigationStyle, Region, ViewId};
