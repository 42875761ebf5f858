use mkt_core::navigation::{NavigationError, NavigationShell};
use mkt_core::types::{NavigationEntry, ViewId};

fn feature_entries() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::new("account", "Accounts"),
        NavigationEntry::new("scanner", "Scanner"),
        NavigationEntry::new("proxy", "Proxy"),
    ]
}

fn shell() -> NavigationShell {
    NavigationShell::with_entries(feature_entries()).expect("register feature entries")
}

#[test]
fn register_selects_first_entry() {
    let sequences: Vec<Vec<&str>> = vec![
        vec!["account"],
        vec!["scanner", "account"],
        vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"],
    ];
    for ids in sequences {
        let entries = ids.iter().map(|id| NavigationEntry::new(*id, *id)).collect();
        let mut shell: NavigationShell = NavigationShell::new();
        shell.register(entries).expect("register");
        assert_eq!(shell.current().unwrap(), ids[0]);
    }
}

#[test]
fn activate_every_registered_id() {
    let mut shell = shell();
    for id in ["proxy", "account", "scanner", "scanner"] {
        shell.activate(id).expect("activate registered id");
        assert_eq!(shell.current().unwrap(), id);
    }
}

#[test]
fn activate_unknown_keeps_selection() {
    let mut shell = shell();
    shell.activate("scanner").unwrap();
    let err = shell.activate("missing").unwrap_err();
    assert_eq!(err, NavigationError::UnknownView(ViewId::from("missing")));
    assert_eq!(shell.current().unwrap(), "scanner");
}

#[test]
fn duplicate_ids_rejected_and_prior_registry_kept() {
    let mut shell = shell();
    shell.activate("proxy").unwrap();

    let err = shell
        .register(vec![
            NavigationEntry::new("scanner", "Scanner"),
            NavigationEntry::new("scanner", "Scanner again"),
        ])
        .unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("scanner"));

    assert_eq!(shell.entries().len(), 3);
    assert_eq!(shell.current().unwrap(), "proxy");
}

#[test]
fn empty_registration_rejected() {
    let mut shell: NavigationShell = NavigationShell::new();
    let err = shell.register(Vec::new()).unwrap_err();
    assert!(matches!(err, NavigationError::Configuration(_)));
    assert!(!shell.is_configured());
}

#[test]
fn unconfigured_shell_rejects_activation() {
    let mut shell: NavigationShell = NavigationShell::new();
    assert!(matches!(
        shell.activate("account"),
        Err(NavigationError::UnknownView(_))
    ));
    assert!(shell.current().is_none());
}

#[test]
fn account_scanner_proxy_scenario() {
    let mut shell = shell();
    assert_eq!(shell.current().unwrap(), "account");

    shell.activate("proxy").unwrap();
    assert_eq!(shell.current().unwrap(), "proxy");

    assert!(shell.activate("missing").is_err());
    assert_eq!(shell.current().unwrap(), "proxy");
}

#[test]
fn entries_expose_labels_in_display_order() {
    let shell = shell();
    let labels: Vec<&str> = shell.entries().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Accounts", "Scanner", "Proxy"]);
    assert_eq!(shell.position("proxy"), Some(2));
    assert_eq!(shell.active_position(), Some(0));
}
