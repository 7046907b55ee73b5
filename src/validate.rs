//! Opt-in data-shape validation.
//!
//! The manifest itself never rejects data (placeholder and malformed
//! entries pass through construction and deserialization untouched). The
//! checks a consuming router or registry is expected to run live here as an
//! explicit operation on enabled groups.

use std::collections::HashSet;

use tracing::warn;

use crate::{path, RouteManifest};

/// Validation failure for a manifest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifestError {
    /// An enabled group has an empty `dir`.
    #[error("enabled group #{0} has an empty dir")]
    EmptyDir(usize),

    /// An enabled group has no entries.
    #[error("group '{0}' has an empty route list")]
    EmptyGroup(String),

    /// An entry path is not in canonical form.
    #[error("group '{dir}': path '{path}' is not a canonical route path")]
    InvalidPath { dir: String, path: String },

    /// An entry has no display title.
    #[error("group '{dir}': entry '{path}' has an empty title")]
    EmptyTitle { dir: String, path: String },

    /// A component name is empty or not a PascalCase identifier.
    #[error("group '{dir}': component name '{name}' is not PascalCase")]
    InvalidComponentName { dir: String, name: String },

    /// The same path appears more than once across enabled groups.
    #[error("duplicate route path '{0}'")]
    DuplicatePath(String),
}

/// Checks whether a string is a PascalCase-style identifier.
///
/// Leading ASCII uppercase letter, ASCII alphanumerics after it.
///
/// # Examples
///
/// ```
/// use canvas_routes::is_pascal_case;
///
/// assert!(is_pascal_case("Snake"));
/// assert!(is_pascal_case("Panzoom"));
/// assert!(!is_pascal_case(""));
/// assert!(!is_pascal_case("snake"));
/// assert!(!is_pascal_case("Snake-Game"));
/// ```
pub fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

impl RouteManifest {
    /// Validates the data shape of all enabled groups.
    ///
    /// Checks, in order:
    /// - every enabled group has a non-empty `dir` and a non-empty list,
    /// - every entry has a canonical path, a non-empty title, and a
    ///   PascalCase component name,
    /// - path values are pairwise distinct across enabled groups.
    ///
    /// Disabled groups are scaffolding and are not checked. Every finding
    /// is logged at `warn` level; the first one is returned as the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use canvas_routes::RouteManifest;
    ///
    /// assert!(RouteManifest::builtin().validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut findings = Vec::new();
        let mut seen = HashSet::new();

        for (index, group) in self.groups().enumerate() {
            if group.dir.is_empty() {
                findings.push(ManifestError::EmptyDir(index));
            }
            if group.list.is_empty() {
                findings.push(ManifestError::EmptyGroup(group.dir.clone()));
            }

            for entry in &group.list {
                if !path::is_valid_path(&entry.path) {
                    findings.push(ManifestError::InvalidPath {
                        dir: group.dir.clone(),
                        path: entry.path.clone(),
                    });
                }
                if entry.title.is_empty() {
                    findings.push(ManifestError::EmptyTitle {
                        dir: group.dir.clone(),
                        path: entry.path.clone(),
                    });
                }
                if !is_pascal_case(&entry.component_name) {
                    findings.push(ManifestError::InvalidComponentName {
                        dir: group.dir.clone(),
                        name: entry.component_name.clone(),
                    });
                }
                if !seen.insert(entry.path.clone()) {
                    findings.push(ManifestError::DuplicatePath(entry.path.clone()));
                }
            }
        }

        for finding in &findings {
            warn!(%finding, "manifest validation finding");
        }
        match findings.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(()),
        }
    }
}
