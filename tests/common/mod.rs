//! Shared descriptor fixtures for integration tests.

use std::collections::BTreeMap;

use umbrelfab::{
    AppCategory, AppProxy, ComposeDescriptor, Environment, Gallery, ManifestDescriptor,
    ManifestVersion, RestartPolicy, ServiceRecord,
};

/// A fully filled manifest descriptor modeled on a real store listing.
#[allow(dead_code)]
pub fn explorer_manifest() -> ManifestDescriptor {
    ManifestDescriptor {
        manifest_version: ManifestVersion::V1_1,
        id: "btc-rpc-explorer".into(),
        category: AppCategory::Bitcoin,
        name: "BTC RPC Explorer".into(),
        version: "3.3.0".into(),
        tagline: "Simple, database-free blockchain explorer".into(),
        description: "BTC RPC Explorer is a database-free explorer.\n\nFeatures:\n- Browse blocks\n- View transactions".into(),
        developer: "Dan Janosik".into(),
        website: "https://explorer.btc21.org".into(),
        dependencies: "bitcoin, electrs".into(),
        repo: "https://github.com/janoside/btc-rpc-explorer".into(),
        support: "https://github.com/janoside/btc-rpc-explorer/discussions".into(),
        port: "3002".into(),
        gallery: Gallery::ScreenshotCount(3),
        submitter: "Umbrel".into(),
        submission: "https://github.com/getumbrel/umbrel/pull/334".into(),
        default_password: "$APP_PASSWORD".into(),
        ..ManifestDescriptor::default()
    }
}

/// A proxy-fronted single-service compose descriptor.
#[allow(dead_code)]
pub fn web_compose() -> ComposeDescriptor {
    let mut environment = BTreeMap::new();
    environment.insert("TZ".to_string(), "UTC".to_string());

    ComposeDescriptor {
        version: "3.7".into(),
        app_proxy: AppProxy {
            enabled: true,
            app_host: "web".into(),
            app_port: "3000".into(),
            proxy_auth_whitelist: Some("/api/*".into()),
            ..AppProxy::default()
        },
        services: vec![ServiceRecord {
            id: "service-1".into(),
            name: "web".into(),
            image: "nginx:1.25".into(),
            restart: Some(RestartPolicy::OnFailure),
            ports: vec!["8080:8080".into()],
            volumes: vec!["${APP_DATA_DIR}/data:/data".into()],
            environment: Environment::Mapping(environment),
        }],
    }
}
