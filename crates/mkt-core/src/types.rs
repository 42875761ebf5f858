use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ViewId
// ---------------------------------------------------------------------------

/// Stable identifier of a view (`"account"`, `"scanner"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ViewId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ViewId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ViewId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for ViewId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ViewId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ---------------------------------------------------------------------------
// NavigationEntry
// ---------------------------------------------------------------------------

/// One selectable view in the navigation control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub id: ViewId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display position. Reassigned from the sequence position on register.
    #[serde(default)]
    pub order: usize,
}

impl NavigationEntry {
    pub fn new(id: impl Into<ViewId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            order: 0,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Label prefixed with the icon glyph when present.
    pub fn display_label(&self, show_icon: bool) -> String {
        match (&self.icon, show_icon) {
            (Some(icon), true) => format!("{icon} {}", self.label),
            _ => self.label.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// NavigationStyle
// ---------------------------------------------------------------------------

/// How the navigation control is laid out around the content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationStyle {
    /// Horizontal tab bar under the header.
    Tabs,
    /// Vertical menu left of the content region.
    #[default]
    Sidebar,
}

impl NavigationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationStyle::Tabs => "tabs",
            NavigationStyle::Sidebar => "sidebar",
        }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// Display area a view is mounted into, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Region {
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Live,
    Die,
}

impl AccountStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Live => "Live",
            AccountStatus::Die => "Die",
        }
    }
}

/// One row of the account management table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub full_name: String,
    pub status: AccountStatus,
    #[serde(default)]
    pub gender: String,
    pub followers: u64,
    pub following: u64,
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default)]
    pub last_action: Option<String>,
}

impl AccountRecord {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        status: AccountStatus,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            full_name: String::new(),
            status,
            gender: String::new(),
            followers: 0,
            following: 0,
            proxy: None,
            last_action: None,
        }
    }
}

/// Total / live / dead counters shown above the account table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AccountStats {
    pub total: usize,
    pub live: usize,
    pub die: usize,
}

impl AccountStats {
    pub fn from_records(records: &[AccountRecord]) -> Self {
        let live = records
            .iter()
            .filter(|r| r.status == AccountStatus::Live)
            .count();
        Self {
            total: records.len(),
            live,
            die: records.len() - live,
        }
    }
}

/// Sample rows shipped with the account view.
pub fn sample_accounts() -> Vec<AccountRecord> {
    vec![
        AccountRecord::new("isulieuhphuong", "xhYGYTInwlZd4", AccountStatus::Live),
        AccountRecord::new("isumanahy", "RlnzTKIkdLQ", AccountStatus::Die),
        AccountRecord::new("lychichen", "BQRshNczMekR", AccountStatus::Live),
        AccountRecord::new("hasonnet4", "LLYKSpTgzUa", AccountStatus::Live),
        AccountRecord::new("jacqueochad4", "KCLym3ZS50k", AccountStatus::Live),
    ]
}
