/// Path utilities for validation and normalization.
///
/// All functions are **pure**: same input, same output, no side effects.
use std::borrow::Cow;

/// Validates if a route path is in canonical form.
///
/// Manifest entries store paths in this form; [`normalize_path`] brings
/// query paths into it before lookup.
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use canvas_routes::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/snake"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("snake")); // Missing leading /
/// assert!(!is_valid_path("/snake/")); // Trailing /
/// assert!(!is_valid_path("/snake//x")); // Double //
/// ```
pub fn is_valid_path(path: &str) -> bool {
    match path {
        "" => false,
        "/" => true,
        p => {
            p.starts_with('/') && !p.ends_with('/') && !p.contains("//") && !p.contains('\\')
        }
    }
}

/// Normalizes a route path to canonical form.
///
/// Zero-copy via `Cow::Borrowed` when the input is already canonical; a
/// single allocation otherwise. Empty segments (trailing or repeated
/// slashes) are dropped and backslashes are treated as separators.
///
/// # Examples
///
/// ```
/// use canvas_routes::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/snake");
/// assert!(matches!(path, Cow::Borrowed("/snake")));
///
/// assert_eq!(normalize_path("/snake/"), "/snake");
/// assert_eq!(normalize_path("//snake"), "/snake");
/// assert_eq!(normalize_path("\\snake"), "/snake");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in path.split(['/', '\\']).filter(|s| !s.is_empty()) {
        normalized.push('/');
        normalized.push_str(segment);
    }

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_path() {
        assert!(is_valid_path("/"));
        assert!(is_valid_path("/ball"));
        assert!(is_valid_path("/basic/panzoom"));

        assert!(!is_valid_path(""));
        assert!(!is_valid_path("ball"));
        assert!(!is_valid_path("/ball/"));
        assert!(!is_valid_path("/ball//x"));
        assert!(!is_valid_path("/ball\\x"));
    }

    #[test]
    fn test_normalize_valid_is_borrowed() {
        assert!(matches!(normalize_path("/ball"), Cow::Borrowed("/ball")));
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(normalize_path("/ball/"), "/ball");
        assert_eq!(normalize_path("/basic/panzoom/"), "/basic/panzoom");
    }

    #[test]
    fn test_normalize_repeated_slashes() {
        assert_eq!(normalize_path("//ball"), "/ball");
        assert_eq!(normalize_path("/a///b"), "/a/b");
    }

    #[test]
    fn test_normalize_backslashes() {
        assert_eq!(normalize_path("\\ball"), "/ball");
        assert_eq!(normalize_path("/a\\b"), "/a/b");
        assert_eq!(normalize_path("\\a\\b\\"), "/a/b");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_normalize_missing_leading_slash() {
        assert_eq!(normalize_path("ball"), "/ball");
        assert_eq!(normalize_path("a/b"), "/a/b");
    }
}
