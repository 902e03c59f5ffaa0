//! Placeholder substitution for the compose template.
//!
//! Placeholders are literal `${NAME}` markers. Substitution is a single
//! left-to-right pass over the template: no escapes, no nesting, no
//! expression syntax. Substituted values are never scanned again, so a value
//! that itself looks like a marker is written out as-is. Markers without a
//! value are left in the output untouched.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Component, Configuration};
use crate::error::{ManagerError, Result};

/// Ordered placeholder-name to value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    entries: Vec<(String, String)>,
}

impl Substitutions {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any earlier value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Value for `name`, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(name, value)` pairs in replacement order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// QEMU then GNS3 server versions, resolved from the config.
    pub fn for_components(config: &Configuration) -> Self {
        [Component::Qemu, Component::Gns3Server]
            .into_iter()
            .fold(Self::new(), |subs, component| {
                subs.with(component.placeholder(), config.resolved_version(component))
            })
    }
}

/// The literal marker for a placeholder name.
pub fn placeholder_token(name: &str) -> String {
    format!("${{{}}}", name)
}

/// Replace every `${NAME}` whose name is in `substitutions`.
pub fn render_str(template: &str, substitutions: &Substitutions) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            rest = &rest[start..];
            break;
        };

        let name = &after[..end];
        if name.contains("${") {
            // Only the innermost `${` can open a marker.
            out.push_str("${");
            rest = after;
            continue;
        }

        match substitutions.get(name) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Names of all `${NAME}` markers in `text`.
///
/// A `${` with no closing brace is not a marker.
pub fn extract_placeholders(text: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut rest = text;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                if !name.is_empty() && !name.contains("${") {
                    names.insert(name.to_string());
                }
                rest = &after[end + 1..];
            }
            None => break,
        }
    }

    names
}

/// Outcome of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Where the output was written.
    pub output_path: PathBuf,
    /// Values that were substituted, for confirmation display.
    pub substitutions: Substitutions,
    /// Markers still present in the output.
    pub unresolved: BTreeSet<String>,
}

/// Render `template_path` into `output_path`.
///
/// The template is read fresh every call. Nothing is written when the
/// template is missing.
///
/// # Errors
///
/// Returns `TemplateNotFound` if the template doesn't exist.
pub fn render(
    template_path: &Path,
    output_path: &Path,
    substitutions: &Substitutions,
) -> Result<RenderedFile> {
    let template = fs::read_to_string(template_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManagerError::TemplateNotFound {
                path: template_path.to_path_buf(),
            }
        } else {
            ManagerError::Io(e)
        }
    })?;

    let content = render_str(&template, substitutions);
    let unresolved = extract_placeholders(&content);
    if !unresolved.is_empty() {
        tracing::warn!(
            "Placeholders left unreplaced in {}: {}",
            output_path.display(),
            unresolved.iter().cloned().collect::<Vec<_>>().join(", ")
        );
    }

    fs::write(output_path, content)?;
    tracing::info!(
        "Rendered {} from {}",
        output_path.display(),
        template_path.display()
    );

    Ok(RenderedFile {
        output_path: output_path.to_path_buf(),
        substitutions: substitutions.clone(),
        unresolved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn unmatched_placeholder_is_left_verbatim() {
        let subs = Substitutions::new().with("A", "1");
        assert_eq!(render_str("X=${A} Y=${B}", &subs), "X=1 Y=${B}");
    }

    #[test]
    fn replaces_every_occurrence() {
        let subs = Substitutions::new().with("V", "9");
        assert_eq!(render_str("${V}-${V}-${V}", &subs), "9-9-9");
    }

    #[test]
    fn replacement_is_literal_not_pattern() {
        let subs = Substitutions::new().with("A.B", "x");
        assert_eq!(render_str("${A.B} ${AxB}", &subs), "x ${AxB}");
    }

    #[test]
    fn substituted_values_are_not_expanded_again() {
        let subs = Substitutions::new()
            .with("QEMU_VERSION", "${GNS3_SERVER_VERSION}")
            .with("GNS3_SERVER_VERSION", "2.2.40");
        assert_eq!(
            render_str("${QEMU_VERSION}/${GNS3_SERVER_VERSION}", &subs),
            "${GNS3_SERVER_VERSION}/2.2.40"
        );
    }

    #[test]
    fn unterminated_and_nested_markers() {
        let subs = Substitutions::new().with("B", "2");
        assert_eq!(render_str("a ${A${B} ${tail", &subs), "a ${A2 ${tail");
    }

    #[test]
    fn bare_names_are_not_placeholders() {
        let subs = Substitutions::new().with("QEMU_VERSION", "4.2.1");
        assert_eq!(
            render_str("QEMU_VERSION=${QEMU_VERSION} $QEMU_VERSION", &subs),
            "QEMU_VERSION=4.2.1 $QEMU_VERSION"
        );
    }

    #[test]
    fn insert_overwrites_existing_name() {
        let mut subs = Substitutions::new();
        subs.insert("A", "1");
        subs.insert("A", "2");
        assert_eq!(subs.len(), 1);
        assert_eq!(subs.get("A"), Some("2"));
    }

    #[test]
    fn for_components_uses_fallbacks() {
        let subs = Substitutions::for_components(&Configuration::default());
        assert_eq!(subs.get("QEMU_VERSION"), Some("4.2.1"));
        assert_eq!(subs.get("GNS3_SERVER_VERSION"), Some("2.2.40"));
    }

    #[test]
    fn for_components_uses_pinned_values() {
        let mut config = Configuration::default();
        config
            .defaults
            .insert("gns3_server_version".into(), "2.2.44".into());
        let subs = Substitutions::for_components(&config);
        assert_eq!(subs.get("GNS3_SERVER_VERSION"), Some("2.2.44"));
        assert_eq!(subs.get("QEMU_VERSION"), Some("4.2.1"));
    }

    #[test]
    fn extract_finds_names() {
        let names = extract_placeholders("a ${ONE} b ${TWO} c ${ONE} ${ unterminated");
        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["ONE".to_string(), "TWO".to_string()]
        );
    }

    #[test]
    fn extract_ignores_empty_braces() {
        assert!(extract_placeholders("${} $ {X}").is_empty());
    }

    #[test]
    fn render_writes_output_and_reports_values() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("docker-compose.template.yml");
        let output = temp.path().join("docker-compose.yml");
        fs::write(
            &template,
            "image: gns3-qemu:${QEMU_VERSION}-server-${GNS3_SERVER_VERSION}\n",
        )
        .unwrap();

        let subs = Substitutions::new()
            .with("QEMU_VERSION", "6.2.0")
            .with("GNS3_SERVER_VERSION", "2.2.44");
        let rendered = render(&template, &output, &subs).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "image: gns3-qemu:6.2.0-server-2.2.44\n"
        );
        assert_eq!(rendered.output_path, output);
        assert_eq!(rendered.substitutions, subs);
        assert!(rendered.unresolved.is_empty());
    }

    #[test]
    fn render_reports_leftover_markers() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("t.yml");
        let output = temp.path().join("o.yml");
        fs::write(&template, "X=${A} Y=${B}").unwrap();

        let rendered = render(&template, &output, &Substitutions::new().with("A", "1")).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "X=1 Y=${B}");
        assert!(rendered.unresolved.contains("B"));
    }

    #[test]
    fn render_truncates_previous_output() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("t.yml");
        let output = temp.path().join("o.yml");
        fs::write(&template, "short").unwrap();
        fs::write(&output, "a much longer previous rendering").unwrap();

        render(&template, &output, &Substitutions::new()).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "short");
    }

    #[test]
    fn missing_template_leaves_output_untouched() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("missing.yml");
        let output = temp.path().join("docker-compose.yml");
        fs::write(&output, "previous").unwrap();

        let result = render(&template, &output, &Substitutions::new().with("A", "1"));

        assert!(matches!(result, Err(ManagerError::TemplateNotFound { .. })));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn missing_template_does_not_create_output() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("docker-compose.yml");

        let result = render(&temp.path().join("nope"), &output, &Substitutions::new());

        assert!(result.is_err());
        assert!(!output.exists());
    }
}
