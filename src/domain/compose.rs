use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Recognized bind-mount path-variable prefixes.
///
/// Advisory only: the form layer suggests these for volume entries, the
/// renderer passes volume strings through untouched.
pub const VOLUME_PATH_PREFIXES: [&str; 2] = ["${APP_DATA_DIR}", "${APP_LIGHTNING_NODE_DATA_DIR}"];

/// Container restart policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    No,
    Always,
    #[default]
    OnFailure,
    UnlessStopped,
}

impl RestartPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            RestartPolicy::No => "no",
            RestartPolicy::Always => "always",
            RestartPolicy::OnFailure => "on-failure",
            RestartPolicy::UnlessStopped => "unless-stopped",
        }
    }
}

/// The reverse-proxy/auth-gateway entry that may front the app.
///
/// Field names mirror the environment variables the platform's proxy reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppProxy {
    pub enabled: bool,
    #[serde(rename = "APP_HOST")]
    pub app_host: String,
    #[serde(rename = "APP_PORT")]
    pub app_port: String,
    #[serde(rename = "PROXY_AUTH_ADD")]
    pub proxy_auth_add: Option<String>,
    #[serde(rename = "PROXY_AUTH_WHITELIST")]
    pub proxy_auth_whitelist: Option<String>,
    #[serde(rename = "PROXY_AUTH_BLACKLIST")]
    pub proxy_auth_blacklist: Option<String>,
}

impl Default for AppProxy {
    fn default() -> Self {
        Self {
            enabled: true,
            app_host: String::new(),
            app_port: String::new(),
            proxy_auth_add: None,
            proxy_auth_whitelist: None,
            proxy_auth_blacklist: None,
        }
    }
}

/// Environment variables for one service, in exactly one of the two compose
/// shapes: a key-ordered mapping or flat `KEY=value` lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Environment {
    /// `KEY: value` mapping, emitted in key order.
    Mapping(BTreeMap<String, String>),
    /// `KEY=value` lines, emitted in list order.
    Lines(Vec<String>),
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Mapping(BTreeMap::new())
    }
}

impl Environment {
    pub fn is_empty(&self) -> bool {
        match self {
            Environment::Mapping(vars) => vars.is_empty(),
            Environment::Lines(lines) => lines.is_empty(),
        }
    }
}

/// One service in the orchestration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceRecord {
    /// Synthetic list key for the form layer; never rendered.
    pub id: String,
    /// Output mapping key; a record with an empty name is dropped at render.
    pub name: String,
    pub image: String,
    pub restart: Option<RestartPolicy>,
    pub ports: Vec<String>,
    pub volumes: Vec<String>,
    pub environment: Environment,
}

impl Default for ServiceRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            image: String::new(),
            restart: Some(RestartPolicy::OnFailure),
            ports: Vec::new(),
            volumes: Vec::new(),
            environment: Environment::default(),
        }
    }
}

/// A container-orchestration file: format version, optional app proxy, and
/// an ordered list of services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeDescriptor {
    pub version: String,
    pub app_proxy: AppProxy,
    pub services: Vec<ServiceRecord>,
}

impl Default for ComposeDescriptor {
    fn default() -> Self {
        Self { version: "3.7".to_string(), app_proxy: AppProxy::default(), services: Vec::new() }
    }
}

impl ComposeDescriptor {
    /// Append a blank service with a freshly generated synthetic id.
    pub fn push_service(&mut self) -> &mut ServiceRecord {
        self.services.push(ServiceRecord { id: next_service_id(), ..ServiceRecord::default() });
        self.services.last_mut().expect("just pushed")
    }

    /// Splice out the service with the given synthetic id.
    pub fn remove_service(&mut self, id: &str) -> Option<ServiceRecord> {
        let index = self.services.iter().position(|service| service.id == id)?;
        Some(self.services.remove(index))
    }
}

fn next_service_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    format!("service-{}", COUNTER.fetch_add(1, Ordering::Relaxed))
}
