//! Path helpers shared by the loader, adapters and skill sync.
//!
//! All output-relative map keys use forward slashes so that reports and
//! tests read identically across platforms.

use std::path::{Component, Path, PathBuf};

/// Express `path` relative to the directory `base`.
///
/// Walks off the common prefix and prepends one `..` per remaining `base`
/// component. Returns `None` when the two paths do not share a root (for
/// example different drive prefixes), in which case callers fall back to
/// the absolute path.
pub fn relative_from(path: &Path, base: &Path) -> Option<PathBuf> {
    let path = normalize_lexically(path);
    let base = normalize_lexically(base);

    if path.is_absolute() != base.is_absolute() {
        return None;
    }

    let mut path_parts = path.components().peekable();
    let mut base_parts = base.components().peekable();

    // Skip the shared prefix.
    while let (Some(a), Some(b)) = (path_parts.peek(), base_parts.peek()) {
        if a != b {
            break;
        }
        path_parts.next();
        base_parts.next();
    }

    // Differing prefixes (Windows drives) mean no relative form exists.
    if base_parts
        .peek()
        .is_some_and(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
    {
        return None;
    }

    let mut relative = PathBuf::new();
    for _ in base_parts {
        relative.push("..");
    }
    for part in path_parts {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Some(relative)
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// Unlike `canonicalize` this works for paths whose target no longer
/// exists, which the stale-symlink pruning relies on.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Key a path relative to the output root, falling back to the absolute
/// path when the file lives outside the root.
pub fn root_relative_key(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    slash_string(rel)
}

/// Render a path with forward slashes regardless of platform.
pub fn slash_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_relative_sibling() {
        let rel = relative_from(Path::new("/a/b/rules/style.mdc"), Path::new("/a/b/.cursor/rules"));
        assert_eq!(rel.unwrap(), PathBuf::from("../../rules/style.mdc"));
    }

    #[test]
    fn test_relative_same_dir() {
        let rel = relative_from(Path::new("/a/b"), Path::new("/a"));
        assert_eq!(rel.unwrap(), PathBuf::from("b"));
    }

    #[test]
    fn test_relative_identical() {
        let rel = relative_from(Path::new("/a/b"), Path::new("/a/b"));
        assert_eq!(rel.unwrap(), PathBuf::from("."));
    }

    #[test]
    fn test_mixed_absolute_and_relative() {
        assert!(relative_from(Path::new("/a/b"), Path::new("a")).is_none());
    }

    #[test]
    fn test_normalize_removes_dots() {
        let out = normalize_lexically(Path::new("/a/b/../c/./d"));
        assert_eq!(out, PathBuf::from("/a/c/d"));
    }

    #[test]
    fn test_root_relative_key_inside_and_outside() {
        let root = Path::new("/repo");
        assert_eq!(root_relative_key(Path::new("/repo/CLAUDE.md"), root), "CLAUDE.md");
        assert_eq!(root_relative_key(Path::new("/elsewhere/x.md"), root), "/elsewhere/x.md");
    }
}
