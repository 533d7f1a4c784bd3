use serde::Serialize;

use super::manifest::ManifestDescriptor;

/// Outcome of the required-field presence check.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Display labels of the missing fields, in check order.
    pub missing_fields: Vec<String>,
}

/// Required manifest fields with their display labels, in the order they are
/// reported back to the user.
const REQUIRED_FIELDS: [(&str, fn(&ManifestDescriptor) -> &str); 12] = [
    ("ID", |d| &d.id),
    ("Name", |d| &d.name),
    ("Version", |d| &d.version),
    ("Tagline", |d| &d.tagline),
    ("Description", |d| &d.description),
    ("Developer", |d| &d.developer),
    ("Website", |d| &d.website),
    ("Repository", |d| &d.repo),
    ("Support", |d| &d.support),
    ("Port", |d| &d.port),
    ("Submitter", |d| &d.submitter),
    ("Submission", |d| &d.submission),
];

/// Check that every required manifest field is present and non-blank.
///
/// Pure presence check; it never inspects field contents beyond trimming.
pub fn validate_manifest(descriptor: &ManifestDescriptor) -> ValidationResult {
    let missing_fields: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|(_, field)| field(descriptor).trim().is_empty())
        .map(|(label, _)| (*label).to_string())
        .collect();

    ValidationResult { is_valid: missing_fields.is_empty(), missing_fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_descriptor() -> ManifestDescriptor {
        ManifestDescriptor {
            id: "hello-world".into(),
            name: "Hello World".into(),
            version: "1.0.0".into(),
            tagline: "Say hello".into(),
            description: "A demo app.".into(),
            developer: "Example Dev".into(),
            website: "https://example.com".into(),
            repo: "https://github.com/example/hello-world".into(),
            support: "https://github.com/example/hello-world/issues".into(),
            port: "3000".into(),
            submitter: "Example Dev".into(),
            submission: "https://github.com/getumbrel/umbrel/pull/1".into(),
            ..ManifestDescriptor::default()
        }
    }

    #[test]
    fn fully_filled_descriptor_is_valid() {
        let result = validate_manifest(&filled_descriptor());
        assert!(result.is_valid);
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn empty_descriptor_reports_all_labels_in_order() {
        let result = validate_manifest(&ManifestDescriptor::default());
        assert!(!result.is_valid);
        assert_eq!(
            result.missing_fields,
            vec![
                "ID",
                "Name",
                "Version",
                "Tagline",
                "Description",
                "Developer",
                "Website",
                "Repository",
                "Support",
                "Port",
                "Submitter",
                "Submission"
            ]
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut descriptor = filled_descriptor();
        descriptor.tagline = "   ".into();
        let result = validate_manifest(&descriptor);
        assert_eq!(result.missing_fields, vec!["Tagline"]);
    }

    #[test]
    fn name_and_port_only_leaves_ten_missing() {
        let descriptor = ManifestDescriptor {
            name: "Hello".into(),
            port: "3000".into(),
            ..ManifestDescriptor::default()
        };
        let result = validate_manifest(&descriptor);
        assert!(!result.is_valid);
        assert_eq!(result.missing_fields.len(), 10);
        assert!(!result.missing_fields.contains(&"Name".to_string()));
        assert!(!result.missing_fields.contains(&"Port".to_string()));
    }
}
