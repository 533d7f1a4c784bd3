use serde::{Deserialize, Serialize};

/// Manifest schema version understood by the host platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManifestVersion {
    /// Original schema.
    #[default]
    #[serde(rename = "1")]
    V1,
    /// Adds deterministic password support.
    #[serde(rename = "1.1")]
    V1_1,
}

/// App store category of the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    Files,
    Bitcoin,
    Media,
    Networking,
    Social,
    #[default]
    Automation,
    Finance,
    Ai,
    Developer,
}

impl AppCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            AppCategory::Files => "files",
            AppCategory::Bitcoin => "bitcoin",
            AppCategory::Media => "media",
            AppCategory::Networking => "networking",
            AppCategory::Social => "social",
            AppCategory::Automation => "automation",
            AppCategory::Finance => "finance",
            AppCategory::Ai => "ai",
            AppCategory::Developer => "developer",
        }
    }
}

/// Screenshot gallery input, in either of its two historical modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gallery {
    /// Numbered screenshots: renders as `1.jpg` .. `{n}.jpg`.
    ScreenshotCount(u32),
    /// Raw comma-separated image URL list, split and trimmed at render time.
    Urls(String),
}

impl Default for Gallery {
    fn default() -> Self {
        Gallery::ScreenshotCount(0)
    }
}

/// One application's store listing and runtime descriptor.
///
/// All fields start empty and are filled in piecemeal by the form layer; the
/// renderer treats the value as read-only. The `id` is expected to be a slug
/// (lowercase letters, digits, hyphens) but that is enforced at input time,
/// not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestDescriptor {
    pub manifest_version: ManifestVersion,
    pub id: String,
    pub category: AppCategory,
    pub name: String,
    /// Semantic version of the packaged release, kept as text so values like
    /// `1.0` survive rendering without becoming floats.
    pub version: String,
    pub tagline: String,
    pub description: String,
    pub release_notes: String,
    pub developer: String,
    pub website: String,
    /// Comma-separated app ids this app depends on.
    pub dependencies: String,
    pub repo: String,
    pub support: String,
    /// Numeric port, kept as the raw text input.
    pub port: String,
    pub gallery: Gallery,
    /// Comma-separated permission names.
    pub permissions: String,
    /// Optional URL path suffix the app is served under.
    pub path: String,
    pub default_username: String,
    /// Mutually exclusive with `deterministic_password` in the rendered
    /// output; both may be populated here and rendering picks one.
    pub default_password: String,
    pub deterministic_password: bool,
    pub submitter: String,
    pub submission: String,
}
