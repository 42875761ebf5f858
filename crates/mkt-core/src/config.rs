use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::presets::Preset;
use crate::types::{NavigationEntry, NavigationStyle};

/// Top-level configuration loaded from `~/.mkt-insta/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub footer: FooterConfig,
    #[serde(default)]
    pub receive: ReceiveConfig,
    #[serde(default)]
    pub accounts: AccountsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load config from `~/.mkt-insta/config.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(path)
        } else {
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Semantic validation for settings that are not fully expressible via type checks.
    ///
    /// Navigation entries are not checked here; a malformed entry set is
    /// reported when the shell registers it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.receive.validate()?;
        self.accounts.validate()?;
        self.ui.validate()?;
        Ok(())
    }

    /// Entries the shell should register: the explicit list sorted by
    /// `order`, or the preset when no explicit list is given.
    pub fn navigation_entries(&self) -> Vec<NavigationEntry> {
        if self.navigation.entries.is_empty() {
            return self.navigation.preset.entries();
        }
        let mut entries = self.navigation.entries.clone();
        entries.sort_by_key(|e| e.order);
        entries
    }

    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mkt-insta")
    }

    fn default_path() -> PathBuf {
        Self::default_dir().join("config.toml")
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_version_label")]
    pub version_label: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file for the interactive terminal. Defaults to
    /// `~/.mkt-insta/mkt-tui.log`.
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            version_label: default_version_label(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl GeneralConfig {
    pub fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(path) => PathBuf::from(path),
            None => Config::default_dir().join("mkt-tui.log"),
        }
    }
}

fn default_app_name() -> String {
    "MKT INSTA".into()
}
fn default_version_label() -> String {
    "Version 2.0 - Update 19/06/2025".into()
}
fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default)]
    pub style: NavigationStyle,
    #[serde(default)]
    pub preset: Preset,
    /// Explicit entries. When non-empty they replace the preset.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<NavigationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterConfig {
    #[serde(default = "default_slogan")]
    pub slogan: String,
    #[serde(default = "default_website")]
    pub website: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            slogan: default_slogan(),
            website: default_website(),
        }
    }
}

fn default_slogan() -> String {
    "Effective - Fast - Easy to use".into()
}
fn default_website() -> String {
    "phanmemmkt.vn".into()
}

/// Where a receive run takes its targets from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiveSource {
    #[default]
    Usernames,
    Followers,
    Following,
    Posts,
}

impl ReceiveSource {
    pub fn label(&self) -> &'static str {
        match self {
            ReceiveSource::Usernames => "Username list",
            ReceiveSource::Followers => "Followers",
            ReceiveSource::Following => "Following",
            ReceiveSource::Posts => "Posts and videos",
        }
    }
}

/// Order in which selected posts are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickOrder {
    #[default]
    Random,
    Sequential,
}

impl PickOrder {
    pub fn label(&self) -> &'static str {
        match self {
            PickOrder::Random => "Random",
            PickOrder::Sequential => "In order",
        }
    }
}

/// Defaults for the "receive settings" form of the account view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveConfig {
    #[serde(default = "default_concurrency")]
    pub concurrency: u32,
    #[serde(default = "default_switch_after")]
    pub switch_after: u32,
    #[serde(default = "default_open_speed")]
    pub open_speed: u32,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u32,
    #[serde(default = "default_media_min")]
    pub media_min: u32,
    #[serde(default = "default_media_max")]
    pub media_max: u32,
    #[serde(default)]
    pub source: ReceiveSource,
    /// Accounts never receive the same username twice.
    #[serde(default)]
    pub avoid_duplicate_usernames: bool,
    #[serde(default)]
    pub check_name_and_content: bool,
    /// Number of posts picked for a posts-based run.
    #[serde(default)]
    pub selected_posts: u32,
    #[serde(default)]
    pub allow_in_posts: bool,
    #[serde(default)]
    pub allow_in_photo_video: bool,
    #[serde(default)]
    pub pick_order: PickOrder,
}

impl Default for ReceiveConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            switch_after: default_switch_after(),
            open_speed: default_open_speed(),
            interval_secs: default_interval_secs(),
            media_min: default_media_min(),
            media_max: default_media_max(),
            source: ReceiveSource::default(),
            avoid_duplicate_usernames: false,
            check_name_and_content: false,
            selected_posts: 0,
            allow_in_posts: false,
            allow_in_photo_video: false,
            pick_order: PickOrder::default(),
        }
    }
}

impl ReceiveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("receive.concurrency", self.concurrency, 1, 10)?;
        check_range("receive.switch_after", self.switch_after, 1, 100)?;
        check_range("receive.open_speed", self.open_speed, 1, 20)?;
        check_range("receive.interval_secs", self.interval_secs, 5, 60)?;
        check_range("receive.media_min", self.media_min, 1, 100)?;
        check_range("receive.media_max", self.media_max, 1, 100)?;
        if self.media_min > self.media_max {
            return Err(ConfigError::Validation(format!(
                "receive.media_min ({}) must not exceed receive.media_max ({})",
                self.media_min, self.media_max
            )));
        }
        Ok(())
    }
}

fn check_range(field: &str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{field} must be between {min} and {max}, got {value}"
        )))
    }
}

fn default_concurrency() -> u32 {
    5
}
fn default_switch_after() -> u32 {
    3
}
fn default_open_speed() -> u32 {
    3
}
fn default_interval_secs() -> u32 {
    15
}
fn default_media_min() -> u32 {
    1
}
fn default_media_max() -> u32 {
    3
}

/// Account categories offered by the selector above the account table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsConfig {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// Selected category. `None` shows the selector prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            category: None,
        }
    }
}

impl AccountsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(category) = &self.category {
            if !self.categories.iter().any(|c| c == category) {
                return Err(ConfigError::Validation(format!(
                    "accounts.category '{category}' is not one of accounts.categories"
                )));
            }
        }
        Ok(())
    }
}

fn default_categories() -> Vec<String> {
    vec!["TK 1".into(), "TK 2".into(), "TK 3".into()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_true")]
    pub show_icons: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_icons: true,
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}
fn default_true() -> bool {
    true
}
