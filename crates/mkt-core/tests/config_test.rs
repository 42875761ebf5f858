use std::io::Write;

use mkt_core::config::{Config, ConfigError, PickOrder, ReceiveSource};
use mkt_core::presets::Preset;
use mkt_core::types::NavigationStyle;

#[test]
fn default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.general.app_name, "MKT INSTA");
    assert_eq!(cfg.general.log_level, "info");
    assert_eq!(cfg.navigation.style, NavigationStyle::Sidebar);
    assert_eq!(cfg.navigation.preset, Preset::Full);
    assert!(cfg.navigation.entries.is_empty());
    assert_eq!(cfg.footer.website, "phanmemmkt.vn");
    assert_eq!(cfg.receive.concurrency, 5);
    assert_eq!(cfg.receive.switch_after, 3);
    assert_eq!(cfg.receive.open_speed, 3);
    assert_eq!(cfg.receive.interval_secs, 15);
    assert_eq!(cfg.receive.media_min, 1);
    assert_eq!(cfg.receive.media_max, 3);
    assert_eq!(cfg.receive.source, ReceiveSource::Usernames);
    assert!(!cfg.receive.avoid_duplicate_usernames);
    assert_eq!(cfg.receive.selected_posts, 0);
    assert_eq!(cfg.accounts.categories, vec!["TK 1", "TK 2", "TK 3"]);
    assert!(cfg.accounts.category.is_none());
    assert_eq!(cfg.ui.tick_rate_ms, 250);
    assert!(cfg.ui.show_icons);
    cfg.validate().expect("defaults validate");
}

#[test]
fn config_roundtrip() {
    let cfg = Config::default();
    let toml_str = cfg.to_toml().expect("serialize to toml");
    assert!(toml_str.contains("MKT INSTA"));

    let parsed: Config = toml::from_str(&toml_str).expect("parse toml back");
    assert_eq!(parsed.general.app_name, cfg.general.app_name);
    assert_eq!(parsed.navigation.style, cfg.navigation.style);
    assert_eq!(parsed.receive, cfg.receive);
    parsed.validate().expect("config validates");
}

#[test]
fn config_partial_toml() {
    let partial = r#"
[navigation]
style = "tabs"
preset = "compact"

[receive]
concurrency = 8
"#;
    let cfg: Config = toml::from_str(partial).expect("parse partial");
    assert_eq!(cfg.navigation.style, NavigationStyle::Tabs);
    assert_eq!(cfg.navigation.preset, Preset::Compact);
    assert_eq!(cfg.receive.concurrency, 8);
    // defaults should fill in the rest
    assert_eq!(cfg.receive.interval_secs, 15);
    assert_eq!(cfg.general.app_name, "MKT INSTA");
    assert_eq!(cfg.navigation_entries().len(), 4);
}

#[test]
fn explicit_entries_sorted_by_order() {
    let text = r#"
[[navigation.entries]]
id = "proxy"
label = "Proxy"
order = 2

[[navigation.entries]]
id = "account"
label = "Accounts"
icon = "👥"
order = 0

[[navigation.entries]]
id = "scanner"
label = "Scanner"
order = 1
"#;
    let cfg: Config = toml::from_str(text).expect("parse entries");
    let ids: Vec<String> = cfg
        .navigation_entries()
        .iter()
        .map(|e| e.id.to_string())
        .collect();
    assert_eq!(ids, vec!["account", "scanner", "proxy"]);
    assert_eq!(cfg.navigation_entries()[0].icon.as_deref(), Some("👥"));
}

#[test]
fn duplicate_entries_load_but_fail_registration() {
    let text = r#"
[[navigation.entries]]
id = "scanner"
label = "Scanner"

[[navigation.entries]]
id = "scanner"
label = "Scanner 2"
"#;
    let cfg: Config = toml::from_str(text).expect("parse entries");
    cfg.validate().expect("navigation is validated by the shell");

    let mut shell: mkt_core::NavigationShell = mkt_core::NavigationShell::new();
    let err = shell.register(cfg.navigation_entries()).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn out_of_range_receive_settings_fail_validation() {
    let mut cfg = Config::default();
    cfg.receive.concurrency = 11;
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("receive.concurrency"));

    let mut cfg = Config::default();
    cfg.receive.interval_secs = 4;
    assert!(cfg.validate().is_err());
}

#[test]
fn media_range_must_be_ordered() {
    let mut cfg = Config::default();
    cfg.receive.media_min = 5;
    cfg.receive.media_max = 2;
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("media_min"));
}

#[test]
fn zero_tick_rate_rejected() {
    let mut cfg = Config::default();
    cfg.ui.tick_rate_ms = 0;
    assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "[general]\napp_name = \"ABCDBET\"\n\n[navigation]\nstyle = \"tabs\""
    )
    .unwrap();

    let cfg = Config::load_from(file.path()).expect("load config");
    assert_eq!(cfg.general.app_name, "ABCDBET");
    assert_eq!(cfg.navigation.style, NavigationStyle::Tabs);
}

#[test]
fn load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Config::load_from(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn invalid_style_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[navigation]\nstyle = \"ribbon\"").unwrap();
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn receive_form_options_parse() {
    let text = r#"
[receive]
source = "posts"
avoid_duplicate_usernames = true
check_name_and_content = true
selected_posts = 12
allow_in_posts = true
allow_in_photo_video = true
pick_order = "sequential"

[accounts]
categories = ["Main", "Backup"]
category = "Backup"
"#;
    let cfg: Config = toml::from_str(text).expect("parse receive form");
    cfg.validate().expect("form validates");
    assert_eq!(cfg.receive.source, ReceiveSource::Posts);
    assert!(cfg.receive.avoid_duplicate_usernames);
    assert!(cfg.receive.check_name_and_content);
    assert_eq!(cfg.receive.selected_posts, 12);
    assert!(cfg.receive.allow_in_posts);
    assert!(cfg.receive.allow_in_photo_video);
    assert_eq!(cfg.receive.pick_order, PickOrder::Sequential);
    assert_eq!(cfg.accounts.category.as_deref(), Some("Backup"));
    // Untouched numbers keep their defaults.
    assert_eq!(cfg.receive.concurrency, 5);
}

#[test]
fn unknown_account_category_fails_validation() {
    let mut cfg = Config::default();
    cfg.accounts.category = Some("TK 9".into());
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("accounts.category"));

    cfg.accounts.category = Some("TK 2".into());
    cfg.validate().expect("listed category validates");
}
