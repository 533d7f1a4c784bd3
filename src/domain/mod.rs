pub mod compose;
pub mod manifest;
pub mod validation;

pub use compose::{
    AppProxy, ComposeDescriptor, Environment, RestartPolicy, ServiceRecord, VOLUME_PATH_PREFIXES,
};
pub use manifest::{AppCategory, Gallery, ManifestDescriptor, ManifestVersion};
pub use validation::{ValidationResult, validate_manifest};
