//! umbrelfab: deterministic rendering of Umbrel app manifests and
//! docker-compose files from typed descriptors.
//!
//! Two independent renderers share nothing but the line-level text helpers:
//! [`render_manifest`] turns a [`ManifestDescriptor`] into `umbrel-app.yml`
//! text, [`render_compose`] turns a [`ComposeDescriptor`] into
//! `docker-compose.yml` text. Both are pure functions of their input and
//! produce byte-identical output for identical descriptors.
//! [`validate_manifest`] reports missing required fields without blocking
//! either renderer.

pub mod domain;
pub mod error;
pub mod generator;

pub use domain::{
    AppCategory, AppProxy, ComposeDescriptor, Environment, Gallery, ManifestDescriptor,
    ManifestVersion, RestartPolicy, ServiceRecord, VOLUME_PATH_PREFIXES, ValidationResult,
    validate_manifest,
};
pub use error::AppError;
pub use generator::{
    ComposeOptions, ManifestOptions, QuotingProfile, render_compose, render_manifest,
};
