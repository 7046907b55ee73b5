//! Manifest file IO.
//!
//! The manifest round-trips through TOML and JSON so a build pipeline or an
//! external router builder can consume the same data outside this process.
//! Parsing never validates; callers opt in via `RouteManifest::validate`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::RouteManifest;

impl RouteManifest {
    /// Loads a manifest from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest file: {:?}", path))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse manifest file: {:?}", path))
    }

    /// Parses a manifest from TOML text.
    ///
    /// # Examples
    ///
    /// ```
    /// use canvas_routes::RouteManifest;
    ///
    /// let manifest = RouteManifest::from_toml_str(
    ///     r#"
    ///     [[groups]]
    ///     dir = "basic"
    ///
    ///     [[groups.list]]
    ///     path = "/clock"
    ///     title = "时钟"
    ///     componentName = "Clock"
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(manifest.find("/clock").unwrap().component_name, "Clock");
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid manifest TOML")
    }

    /// Parses a manifest from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid manifest JSON")
    }

    /// Serializes the manifest to TOML, disabled groups included.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize manifest to TOML")
    }

    /// Serializes the manifest to JSON, disabled groups included.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toml_round_trip() {
        let manifest = RouteManifest::builtin();
        let toml = manifest.to_toml_string().unwrap();
        let parsed = RouteManifest::from_toml_str(&toml).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_json_round_trip() {
        let manifest = RouteManifest::builtin();
        let json = manifest.to_json_string().unwrap();
        let parsed = RouteManifest::from_json_str(&json).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_json_wire_shape_is_camel_case() {
        let json = RouteManifest::builtin().to_json_string().unwrap();
        assert!(json.contains("\"componentName\""));
        assert!(!json.contains("component_name"));
    }

    #[test]
    fn test_enabled_defaults_to_true() {
        let manifest = RouteManifest::from_json_str(
            r#"{"groups": [{"dir": "basic", "list": [
                {"path": "/ball", "title": "跳动小球", "componentName": "Ball"}
            ]}]}"#,
        )
        .unwrap();
        assert!(manifest.raw_groups()[0].enabled);
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn test_missing_file_error_carries_path() {
        let err = RouteManifest::from_toml_file("does-not-exist.toml").unwrap_err();
        assert!(format!("{:?}", err).contains("does-not-exist.toml"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(RouteManifest::from_toml_str("groups = 3").is_err());
    }
}
