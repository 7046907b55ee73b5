//! # Canvas Routes
//!
//! A static route manifest for the canvas demo showcase: named groups of
//! route descriptors mapping URL paths to display titles and component
//! names. Consumers (a router builder, a navigation menu renderer) iterate
//! the groups in order and register each active entry.
//!
//! The manifest is plain immutable data:
//! - **No matching logic** beyond exact path lookup
//! - **No validation on construction**; malformed entries pass through
//!   unchanged and [`RouteManifest::validate`] is opt-in
//! - **Deterministic ordering**: insertion order is display order
//!
//! ## Disabled groups
//!
//! A [`RouteGroup`] carries an explicit `enabled` flag. Disabled groups stay
//! in the raw data (and round-trip through serde) but are excluded from
//! enumeration, flattening, and lookup.
//!
//! ## Example
//!
//! ```
//! use canvas_routes::RouteManifest;
//!
//! let manifest = RouteManifest::builtin();
//!
//! let entry = manifest.find("/snake").unwrap();
//! assert_eq!(entry.title, "贪吃蛇");
//! assert_eq!(entry.component_name, "Snake");
//!
//! assert!(manifest.find("/nonexistent").is_none());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Module Declarations
// ============================================================================

mod catalog;
mod manifest_io;
pub mod path;
mod validate;

pub use path::{is_valid_path, normalize_path};
pub use validate::{is_pascal_case, ManifestError};

// ============================================================================
// Core Types
// ============================================================================

/// A single route descriptor: one navigable demo.
///
/// Serializes with `componentName` on the wire, matching the shape consumed
/// by the showcase frontend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    /// URL path fragment, e.g. `/snake`. Empty for placeholder entries.
    pub path: String,
    /// Human-readable display label.
    pub title: String,
    /// Logical identifier expected to resolve in a component registry.
    pub component_name: String,
}

/// A named ordered collection of route descriptors.
///
/// `dir` names a directory-like grouping (`basic`, `optimization`). The
/// `enabled` flag replaces the upstream habit of commenting groups out of
/// the exported list: disabled groups remain in the data but are invisible
/// to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGroup {
    /// Logical grouping name.
    pub dir: String,
    /// Whether this group is part of the exported manifest.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Route descriptors, in display order.
    pub list: Vec<RouteEntry>,
}

/// The full ordered collection of groups exposed to consumers.
///
/// Constructed once, never mutated afterwards. Equality and cloning derive,
/// so alternate manifests can be injected in tests instead of relying on
/// the built-in catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    /// All groups, enabled and disabled, in insertion order.
    #[serde(default)]
    pub groups: Vec<RouteGroup>,
}

fn default_enabled() -> bool {
    true
}

// ============================================================================
// RouteEntry Implementation
// ============================================================================

impl RouteEntry {
    /// Creates a route entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use canvas_routes::RouteEntry;
    ///
    /// let entry = RouteEntry::new("/clock", "时钟", "Clock");
    /// assert_eq!(entry.path, "/clock");
    /// assert!(entry.is_active());
    /// ```
    pub fn new(
        path: impl Into<String>,
        title: impl Into<String>,
        component_name: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            component_name: component_name.into(),
        }
    }

    /// Creates an all-empty placeholder entry.
    ///
    /// Placeholders are scaffolding for groups that have no content yet.
    /// They are never active.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Whether a consumer should register this entry.
    ///
    /// An entry with an empty `path` or empty `component_name` means
    /// "inactive / do not register".
    ///
    /// # Examples
    ///
    /// ```
    /// use canvas_routes::RouteEntry;
    ///
    /// assert!(RouteEntry::new("/ball", "跳动小球", "Ball").is_active());
    /// assert!(!RouteEntry::placeholder().is_active());
    /// assert!(!RouteEntry::new("", "orphan title", "").is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        !self.path.is_empty() && !self.component_name.is_empty()
    }
}

// ============================================================================
// RouteGroup Implementation
// ============================================================================

impl RouteGroup {
    /// Creates an empty, enabled group.
    pub fn new(dir: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            enabled: true,
            list: Vec::new(),
        }
    }

    /// Appends an entry (immutable builder).
    ///
    /// # Examples
    ///
    /// ```
    /// use canvas_routes::{RouteEntry, RouteGroup};
    ///
    /// let group = RouteGroup::new("basic")
    ///     .with_entry(RouteEntry::new("/ball", "跳动小球", "Ball"))
    ///     .with_entry(RouteEntry::new("/clock", "时钟", "Clock"));
    /// assert_eq!(group.list.len(), 2);
    /// ```
    pub fn with_entry(mut self, entry: RouteEntry) -> Self {
        self.list.push(entry);
        self
    }

    /// Appends multiple entries (immutable builder).
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = RouteEntry>,
    {
        self.list.extend(entries);
        self
    }

    /// Marks the group as excluded from the exported manifest.
    ///
    /// # Examples
    ///
    /// ```
    /// use canvas_routes::RouteGroup;
    ///
    /// let group = RouteGroup::new("optimization").disabled();
    /// assert!(!group.enabled);
    /// ```
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Entries a consumer should register: active entries only.
    pub fn active_entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.list.iter().filter(|e| e.is_active())
    }
}

// ============================================================================
// RouteManifest Implementation
// ============================================================================

impl RouteManifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group (immutable builder).
    ///
    /// # Examples
    ///
    /// ```
    /// use canvas_routes::{RouteEntry, RouteGroup, RouteManifest};
    ///
    /// let manifest = RouteManifest::new().with_group(
    ///     RouteGroup::new("basic")
    ///         .with_entry(RouteEntry::new("/solar", "太阳系", "Solar")),
    /// );
    /// assert_eq!(manifest.len(), 1);
    /// ```
    pub fn with_group(mut self, group: RouteGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Enabled groups, in insertion order.
    ///
    /// This is the manifest as consumers see it; disabled groups are
    /// skipped.
    pub fn groups(&self) -> impl Iterator<Item = &RouteGroup> {
        self.groups.iter().filter(|g| g.enabled)
    }

    /// All groups including disabled ones, in insertion order.
    pub fn raw_groups(&self) -> &[RouteGroup] {
        &self.groups
    }

    /// Number of enabled groups.
    pub fn len(&self) -> usize {
        self.groups().count()
    }

    /// Whether the manifest exposes no enabled groups.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Active entries across all enabled groups, in display order.
    ///
    /// This is the source for a flattened path → component mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use canvas_routes::RouteManifest;
    ///
    /// let manifest = RouteManifest::builtin();
    /// let paths: Vec<&str> = manifest
    ///     .flatten()
    ///     .iter()
    ///     .map(|e| e.path.as_str())
    ///     .collect();
    /// assert_eq!(paths.len(), 19);
    /// assert_eq!(paths[0], "/ball");
    /// ```
    pub fn flatten(&self) -> Vec<&RouteEntry> {
        self.groups().flat_map(RouteGroup::active_entries).collect()
    }

    /// Looks up an active entry by path.
    ///
    /// The query path is normalized first, so `/snake/` and `//snake` still
    /// resolve to `/snake`. Returns `None` on a miss; placeholder entries
    /// never match.
    ///
    /// # Examples
    ///
    /// ```
    /// use canvas_routes::RouteManifest;
    ///
    /// let manifest = RouteManifest::builtin();
    /// assert_eq!(manifest.find("/snake").unwrap().component_name, "Snake");
    /// assert_eq!(manifest.find("/snake/").unwrap().component_name, "Snake");
    /// assert!(manifest.find("/nonexistent").is_none());
    /// ```
    pub fn find(&self, path: &str) -> Option<&RouteEntry> {
        let path = path::normalize_path(path);
        let found = self
            .groups()
            .flat_map(RouteGroup::active_entries)
            .find(|e| e.path == *path);
        if found.is_none() {
            tracing::debug!(path = %path, "no manifest entry for path");
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_group_manifest() -> RouteManifest {
        RouteManifest::new()
            .with_group(
                RouteGroup::new("basic")
                    .with_entry(RouteEntry::new("/ball", "跳动小球", "Ball"))
                    .with_entry(RouteEntry::new("/clock", "时钟", "Clock")),
            )
            .with_group(
                RouteGroup::new("optimization")
                    .disabled()
                    .with_entry(RouteEntry::placeholder()),
            )
    }

    #[test]
    fn test_enabled_groups_only() {
        let manifest = two_group_manifest();
        assert_eq!(manifest.raw_groups().len(), 2);
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.groups().next().unwrap().dir, "basic");
    }

    #[test]
    fn test_flatten_skips_disabled_and_placeholder() {
        let manifest = two_group_manifest();
        let flat = manifest.flatten();
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].path, "/ball");
        assert_eq!(flat[1].path, "/clock");
    }

    #[test]
    fn test_find_normalizes_query() {
        let manifest = two_group_manifest();
        assert_eq!(manifest.find("/clock").unwrap().title, "时钟");
        assert_eq!(manifest.find("/clock/").unwrap().title, "时钟");
        assert_eq!(manifest.find("//clock").unwrap().title, "时钟");
        assert!(manifest.find("/missing").is_none());
    }

    #[test]
    fn test_find_never_returns_placeholder() {
        let manifest = two_group_manifest();
        // The placeholder path is "", which normalizes to "/".
        assert!(manifest.find("").is_none());
        assert!(manifest.find("/").is_none());
    }

    #[test]
    fn test_entry_activity() {
        assert!(RouteEntry::new("/svg", "绘制SVG内容", "Svg").is_active());
        assert!(!RouteEntry::new("/svg", "绘制SVG内容", "").is_active());
        assert!(!RouteEntry::new("", "", "Svg").is_active());
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = RouteManifest::new();
        assert!(manifest.is_empty());
        assert!(manifest.flatten().is_empty());
        assert!(manifest.find("/anything").is_none());
    }
}
