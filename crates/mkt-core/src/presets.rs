use serde::{Deserialize, Serialize};

use crate::types::NavigationEntry;

/// Built-in navigation layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Every feature of the sidebar layout.
    #[default]
    Full,
    /// The four-tab layout: accounts, messages, scanner, proxy.
    Compact,
}

impl Preset {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "full" => Some(Preset::Full),
            "compact" => Some(Preset::Compact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Full => "full",
            Preset::Compact => "compact",
        }
    }

    pub fn entries(&self) -> Vec<NavigationEntry> {
        match self {
            Preset::Full => full_entries(),
            Preset::Compact => compact_entries(),
        }
    }
}

fn full_entries() -> Vec<NavigationEntry> {
    [
        ("account", "Accounts", "📊"),
        ("content", "Content", "📝"),
        ("message", "Messages", "💬"),
        ("interact", "Interactions", "🔍"),
        ("follow", "Follow", "👥"),
        ("reels", "Reels", "🎬"),
        ("scanner", "Scanner", "📈"),
        ("proxy", "Proxy", "🌐"),
    ]
    .into_iter()
    .enumerate()
    .map(|(order, (id, label, icon))| {
        NavigationEntry::new(id, label)
            .with_icon(icon)
            .with_order(order)
    })
    .collect()
}

fn compact_entries() -> Vec<NavigationEntry> {
    [
        ("account", "Accounts", "👥"),
        ("message", "Messages", "📝"),
        ("scanner", "Scanner", "🔍"),
        ("proxy", "Proxy", "🌐"),
    ]
    .into_iter()
    .enumerate()
    .map(|(order, (id, label, icon))| {
        NavigationEntry::new(id, label)
            .with_icon(icon)
            .with_order(order)
    })
    .collect()
}
