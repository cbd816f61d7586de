//! Integration tests for the template registry public API.

use create_smithery::config::{PackageManager, ResolvedConfig, Transport};
use create_smithery::registry::{lookup, TemplateKey, TEMPLATE_REPOSITORY};

fn config(transport: Transport, gpt: bool) -> ResolvedConfig {
    ResolvedConfig {
        project_name: "demo".into(),
        transport,
        package_manager: PackageManager::Npm,
        gpt,
        beta_warning: None,
    }
}

#[test]
fn every_key_has_a_descriptor() {
    for key in TemplateKey::all() {
        let descriptor = key.descriptor();
        assert_eq!(descriptor.key, key);
        assert_eq!(descriptor.repository_url, TEMPLATE_REPOSITORY);
        assert!(descriptor.extract_path().is_some());
    }
}

#[test]
fn lookup_is_pure() {
    let cfg = config(Transport::Stdio, false);
    assert!(std::ptr::eq(lookup(&cfg), lookup(&cfg)));
}

#[test]
fn gpt_wins_over_transport() {
    let descriptor = lookup(&config(Transport::Http, true));
    assert_eq!(descriptor.key, TemplateKey::Gpt);
    assert!(descriptor.beta_warning.is_some());
}

#[test]
fn transport_selects_template() {
    assert_eq!(
        lookup(&config(Transport::Http, false)).subdirectory,
        "examples/basic-server"
    );
    assert_eq!(
        lookup(&config(Transport::Stdio, false)).subdirectory,
        "examples/local-filesystem"
    );
}

#[test]
fn unknown_transport_strings_fall_back_to_http() {
    let transport = Transport::from_str_lossy("carrier-pigeon");
    assert_eq!(lookup(&config(transport, false)).key, TemplateKey::Http);
}
