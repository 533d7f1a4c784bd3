//! Renders a [`ComposeDescriptor`] into orchestration-file text.
//!
//! Follows the same dump-then-patch approach as the manifest renderer. The
//! strict quoting profile additionally forces double quotes onto the proxy
//! port/whitelist/blacklist values and onto port-mapping shorthands inside
//! every `ports:` sequence outside the `app_proxy` service.

use serde_yaml::{Mapping, Value};

use super::text;
use crate::domain::{AppProxy, ComposeDescriptor, Environment, ServiceRecord};
use crate::error::AppError;

/// Post-processing profile, both observed in the wild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuotingProfile {
    /// Force-quote proxy variables and port-mapping shorthands.
    #[default]
    Strict,
    /// Trust the dumper's own quoting decisions.
    Minimal,
}

/// Product-configuration switches for compose rendering.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    pub quoting: QuotingProfile,
}

/// Render the orchestration file for a descriptor.
///
/// Services without a name are silently dropped; there is no other
/// validation at this layer.
pub fn render_compose(
    descriptor: &ComposeDescriptor,
    options: &ComposeOptions,
) -> Result<String, AppError> {
    let mut services = Mapping::new();

    if descriptor.app_proxy.enabled {
        let environment = app_proxy_environment(&descriptor.app_proxy);
        if !environment.is_empty() {
            let mut entry = Mapping::new();
            entry.insert("environment".into(), Value::Mapping(environment));
            services.insert("app_proxy".into(), Value::Mapping(entry));
        }
    }

    for service in &descriptor.services {
        if service.name.is_empty() {
            continue;
        }
        services
            .insert(Value::String(service.name.clone()), Value::Mapping(service_entry(service)));
    }

    let mut root = Mapping::new();
    root.insert("version".into(), descriptor.version.clone().into());
    root.insert("services".into(), Value::Mapping(services));

    let dumped = serde_yaml::to_string(&Value::Mapping(root))?;
    let mut lines: Vec<String> = dumped.lines().map(str::to_string).collect();
    text::apply_double_quote_preference(&mut lines);

    if options.quoting == QuotingProfile::Strict {
        for line in lines.iter_mut() {
            for key in ["APP_PORT", "PROXY_AUTH_WHITELIST", "PROXY_AUTH_BLACKLIST"] {
                quote_env_value(line, key);
            }
        }
        quote_port_sequences(&mut lines);
    }

    let mut output = lines.join("\n");
    output.push('\n');
    Ok(output)
}

/// Proxy environment variables, in their fixed output order.
fn app_proxy_environment(proxy: &AppProxy) -> Mapping {
    let mut environment = Mapping::new();
    let mut insert = |key: &str, value: &str| {
        if !value.is_empty() {
            environment.insert(key.into(), value.into());
        }
    };
    insert("APP_HOST", &proxy.app_host);
    insert("APP_PORT", &proxy.app_port);
    insert("PROXY_AUTH_ADD", proxy.proxy_auth_add.as_deref().unwrap_or(""));
    insert("PROXY_AUTH_WHITELIST", proxy.proxy_auth_whitelist.as_deref().unwrap_or(""));
    insert("PROXY_AUTH_BLACKLIST", proxy.proxy_auth_blacklist.as_deref().unwrap_or(""));
    environment
}

fn service_entry(service: &ServiceRecord) -> Mapping {
    let mut entry = Mapping::new();
    if !service.image.is_empty() {
        entry.insert("image".into(), service.image.clone().into());
    }
    if let Some(policy) = service.restart {
        entry.insert("restart".into(), policy.as_str().into());
    }
    insert_filtered_list(&mut entry, "ports", &service.ports);
    insert_filtered_list(&mut entry, "volumes", &service.volumes);

    match &service.environment {
        Environment::Mapping(vars) if !vars.is_empty() => {
            let mut environment = Mapping::new();
            for (key, value) in vars {
                environment.insert(key.clone().into(), value.clone().into());
            }
            entry.insert("environment".into(), Value::Mapping(environment));
        }
        Environment::Lines(lines) => {
            let cleaned: Vec<Value> = lines
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .map(|line| Value::String(line.to_string()))
                .collect();
            if !cleaned.is_empty() {
                entry.insert("environment".into(), Value::Sequence(cleaned));
            }
        }
        Environment::Mapping(_) => {}
    }
    entry
}

/// Blank entries are dropped; an all-blank list is omitted entirely. Entries
/// keep their original (untrimmed) text.
fn insert_filtered_list(entry: &mut Mapping, key: &str, items: &[String]) {
    let kept: Vec<Value> = items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .map(|item| Value::String(item.clone()))
        .collect();
    if !kept.is_empty() {
        entry.insert(key.into(), Value::Sequence(kept));
    }
}

/// Force double quotes onto an indented `KEY: value` line when the dumper
/// left the value bare.
fn quote_env_value(line: &mut String, key: &str) {
    let Some(indent) = text::indent_of(line) else {
        return;
    };
    if indent == 0 {
        return;
    }
    let prefix = format!("{key}: ");
    if let Some(value) = line[indent..].strip_prefix(&prefix) {
        if !value.is_empty() && !value.starts_with('"') && !value.starts_with('\'') {
            *line = format!("{}{prefix}\"{value}\"", " ".repeat(indent));
        }
    }
}

/// Force double quotes onto bare port-mapping shorthands inside `ports:`
/// sequences, everywhere except the `app_proxy` service.
///
/// Tracks the current service and the `ports:` key's indentation; a ports
/// section ends at the first line indented at or above the key that is not a
/// sequence item.
fn quote_port_sequences(lines: &mut [String]) {
    let mut in_ports = false;
    let mut ports_indent = 0;
    let mut current_service = String::new();

    for line in lines.iter_mut() {
        let indent = text::indent_of(line);
        if let Some(name) = service_key(line) {
            current_service = name.to_string();
        }

        if line.trim() == "ports:" && indent.is_some_and(|column| column > 0) {
            in_ports = true;
            ports_indent = indent.unwrap_or(0);
            continue;
        }
        if in_ports {
            if let Some(column) = indent {
                if column <= ports_indent && !line.trim_start().starts_with('-') {
                    in_ports = false;
                }
            }
        }

        if in_ports && current_service != "app_proxy" {
            if let Some(column) = indent {
                if let Some(item) = line[column..].strip_prefix("- ") {
                    let value = item.trim_start();
                    if text::is_port_shorthand(value) {
                        *line = format!("{}- \"{value}\"", " ".repeat(column));
                    }
                }
            }
        }
    }
}

/// A service mapping key sits exactly one level under `services:`.
fn service_key(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("  ")?;
    if rest.starts_with(' ') {
        return None;
    }
    let name = rest.strip_suffix(':')?;
    let valid = !name.is_empty()
        && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-');
    valid.then_some(name)
}
