//! End-to-end compose rendering contract.

mod common;

use common::web_compose;
use umbrelfab::{
    ComposeDescriptor, ComposeOptions, Environment, QuotingProfile, ServiceRecord, render_compose,
};

fn render_strict(descriptor: &ComposeDescriptor) -> String {
    render_compose(descriptor, &ComposeOptions::default()).unwrap()
}

#[test]
fn filled_descriptor_renders_byte_stable_document() {
    let expected = "\
version: \"3.7\"
services:
  app_proxy:
    environment:
      APP_HOST: web
      APP_PORT: \"3000\"
      PROXY_AUTH_WHITELIST: \"/api/*\"
  web:
    image: nginx:1.25
    restart: on-failure
    ports:
    - \"8080:8080\"
    volumes:
    - ${APP_DATA_DIR}/data:/data
    environment:
      TZ: UTC
";
    assert_eq!(render_strict(&web_compose()), expected);
}

#[test]
fn output_round_trips_through_a_yaml_parser() {
    let output = render_strict(&web_compose());
    let parsed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
    assert_eq!(parsed["version"].as_str(), Some("3.7"));
    assert_eq!(parsed["services"]["web"]["ports"][0].as_str(), Some("8080:8080"));
    assert_eq!(
        parsed["services"]["app_proxy"]["environment"]["APP_PORT"].as_str(),
        Some("3000")
    );
}

#[test]
fn rendering_is_idempotent() {
    let descriptor = web_compose();
    assert_eq!(render_strict(&descriptor), render_strict(&descriptor));
}

#[test]
fn minimal_profile_leaves_port_shorthand_bare() {
    let descriptor = web_compose();
    let output =
        render_compose(&descriptor, &ComposeOptions { quoting: QuotingProfile::Minimal }).unwrap();
    assert!(output.contains("- 8080:8080\n"), "{output}");
    assert!(output.contains("PROXY_AUTH_WHITELIST: /api/*\n"));
    // The dumper's own quoting still applies under the minimal profile.
    assert!(output.contains("version: \"3.7\"\n"));
}

#[test]
fn app_proxy_port_value_is_not_subject_to_ports_pass() {
    let mut descriptor = web_compose();
    descriptor.app_proxy.app_port = "8080:8080".into();
    let output = render_strict(&descriptor);
    // Still quoted, but by the env pass; the parsed value is unchanged.
    let parsed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
    assert_eq!(
        parsed["services"]["app_proxy"]["environment"]["APP_PORT"].as_str(),
        Some("8080:8080")
    );
}

#[test]
fn nameless_service_is_absent_from_output() {
    let mut descriptor = web_compose();
    descriptor.services.push(ServiceRecord {
        id: "service-2".into(),
        image: "ghost:latest".into(),
        ..ServiceRecord::default()
    });
    let output = render_strict(&descriptor);
    assert!(!output.contains("ghost"));
}

#[test]
fn environment_array_drops_blank_entries() {
    let mut descriptor = web_compose();
    descriptor.services[0].environment =
        Environment::Lines(vec!["KEY=value".into(), "".into(), "  ".into()]);
    let output = render_strict(&descriptor);
    let parsed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
    let environment = parsed["services"]["web"]["environment"].as_sequence().unwrap();
    assert_eq!(environment.len(), 1);
    assert_eq!(environment[0].as_str(), Some("KEY=value"));
}

#[test]
fn services_preserve_descriptor_order() {
    let mut descriptor = web_compose();
    descriptor.app_proxy.enabled = false;
    descriptor.services.push(ServiceRecord {
        id: "service-2".into(),
        name: "db".into(),
        image: "postgres:16".into(),
        restart: None,
        ..ServiceRecord::default()
    });
    let output = render_strict(&descriptor);
    assert!(output.find("  web:").unwrap() < output.find("  db:").unwrap(), "{output}");
}
