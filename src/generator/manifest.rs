//! Renders a [`ManifestDescriptor`] into manifest text.
//!
//! The output contract is byte-stable: a fixed key order, empty-but-present
//! defaults for a fixed set of fields, forced double quoting for the version
//! and credential fields, and folded block scalars for the multi-line text
//! fields. The dump primitive cannot express the quoting and block styles
//! directly, so rendering dumps the value tree first and then patches the
//! text line by line.

use serde_yaml::{Mapping, Value};

use super::text;
use crate::domain::{Gallery, ManifestDescriptor, ManifestVersion};
use crate::error::AppError;

/// Product-configuration switches for manifest rendering.
#[derive(Debug, Clone, Default)]
pub struct ManifestOptions {
    /// Render this release value as `version` regardless of the descriptor
    /// (the variant where the version field is not user-editable).
    pub pinned_version: Option<String>,
}

/// Render the manifest for a descriptor.
///
/// Never fails for well-formed descriptors; missing fields are omitted or
/// rendered with empty defaults, per the contract. Validation is a separate
/// concern, see [`crate::domain::validate_manifest`].
pub fn render_manifest(
    descriptor: &ManifestDescriptor,
    options: &ManifestOptions,
) -> Result<String, AppError> {
    let version = options.pinned_version.as_deref().unwrap_or(&descriptor.version);

    let mut root = Mapping::new();
    root.insert("manifestVersion".into(), manifest_version_number(descriptor.manifest_version));
    insert_if_set(&mut root, "id", &descriptor.id);
    root.insert("category".into(), descriptor.category.as_str().into());
    insert_if_set(&mut root, "name", &descriptor.name);
    insert_if_set(&mut root, "version", version);
    insert_if_set(&mut root, "tagline", &descriptor.tagline);
    insert_if_set(&mut root, "description", &descriptor.description);
    insert_if_set(&mut root, "developer", &descriptor.developer);
    insert_if_set(&mut root, "website", &descriptor.website);
    insert_if_set(&mut root, "repo", &descriptor.repo);
    insert_if_set(&mut root, "support", &descriptor.support);
    if !descriptor.port.is_empty() {
        root.insert("port".into(), port_number(&descriptor.port));
    }
    insert_if_set(&mut root, "submitter", &descriptor.submitter);
    insert_if_set(&mut root, "submission", &descriptor.submission);

    // These keys always appear, empty-string or empty-list when unset.
    root.insert("releaseNotes".into(), descriptor.release_notes.clone().into());
    root.insert("dependencies".into(), comma_list(&descriptor.dependencies));
    root.insert("gallery".into(), gallery_sequence(&descriptor.gallery));
    root.insert("permissions".into(), comma_list(&descriptor.permissions));
    root.insert("path".into(), descriptor.path.clone().into());
    root.insert("defaultUsername".into(), descriptor.default_username.clone().into());
    if descriptor.deterministic_password {
        root.insert("deterministicPassword".into(), true.into());
    } else {
        root.insert("defaultPassword".into(), descriptor.default_password.clone().into());
    }

    let dumped = serde_yaml::to_string(&Value::Mapping(root))?;
    Ok(patch_output(dumped, descriptor, version))
}

fn manifest_version_number(version: ManifestVersion) -> Value {
    match version {
        ManifestVersion::V1 => Value::from(1),
        ManifestVersion::V1_1 => Value::from(1.1),
    }
}

fn insert_if_set(root: &mut Mapping, key: &str, value: &str) {
    if !value.is_empty() {
        root.insert(key.into(), value.into());
    }
}

/// The port is numeric-as-text input; non-numeric text coerces to NaN, which
/// the dump primitive spells `.nan`.
fn port_number(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(integer) = trimmed.parse::<i64>() {
        Value::from(integer)
    } else if let Ok(float) = trimmed.parse::<f64>() {
        Value::from(float)
    } else {
        Value::from(f64::NAN)
    }
}

fn comma_list(input: &str) -> Value {
    Value::Sequence(text::split_csv(input).into_iter().map(Value::String).collect())
}

fn gallery_sequence(gallery: &Gallery) -> Value {
    match gallery {
        Gallery::ScreenshotCount(count) => Value::Sequence(
            (1..=*count).map(|index| Value::String(format!("{index}.jpg"))).collect(),
        ),
        Gallery::Urls(raw) => comma_list(raw),
    }
}

/// The string-level pass over the dumped text: double-quote preference,
/// forced quoting, and folded block scalars.
fn patch_output(dumped: String, descriptor: &ManifestDescriptor, version: &str) -> String {
    let mut lines: Vec<String> = dumped.lines().map(str::to_string).collect();

    text::apply_double_quote_preference(&mut lines);

    // Version strings like "1.0" must never render as a bare float.
    if !version.is_empty() {
        force_double_quote(&mut lines, "version");
    }
    if !descriptor.path.is_empty() {
        force_double_quote(&mut lines, "path");
    }
    if !descriptor.default_username.is_empty() {
        force_double_quote(&mut lines, "defaultUsername");
    }
    if !descriptor.deterministic_password && !descriptor.default_password.is_empty() {
        force_double_quote(&mut lines, "defaultPassword");
    }

    if !descriptor.description.is_empty() {
        splice_folded(&mut lines, "description", &descriptor.description);
    }
    if !descriptor.release_notes.is_empty() {
        splice_folded(&mut lines, "releaseNotes", &descriptor.release_notes);
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Force the first top-level `key: value` line into double-quoted form,
/// stripping whatever quoting the dumper chose.
fn force_double_quote(lines: &mut [String], key: &str) {
    let prefix = format!("{key}: ");
    for line in lines.iter_mut() {
        if let Some(value) = line.strip_prefix(&prefix) {
            if !value.is_empty() {
                *line = format!("{prefix}\"{}\"", text::strip_quotes(value));
            }
            return;
        }
    }
}

/// Replace the dumper's rendering of a multi-line field, continuation lines
/// included, with a strip-chomped folded block scalar.
fn splice_folded(lines: &mut Vec<String>, key: &str, value: &str) {
    let prefix = format!("{key}:");
    let Some(start) = lines.iter().position(|line| line.starts_with(&prefix)) else {
        return;
    };
    let mut end = start + 1;
    while end < lines.len() && text::indent_of(&lines[end]) != Some(0) {
        end += 1;
    }
    lines.splice(start..end, text::fold_block_scalar(key, value));
}
