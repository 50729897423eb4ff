//! Reference-token scanning.
//!
//! Rule bodies may embed `@path/to/file.ext` tokens meaning "inline that
//! file's content here". Some tools expand these natively; the symlink-
//! forest adapters materialize a copy instead. Extraction is a single
//! regex pass over the raw text.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"@([\w\-./]+\.\w+)").expect("reference pattern is valid"))
}

/// All `@path.ext` tokens in a rule body, in order of appearance.
pub fn extract_references(body: &str) -> Vec<String> {
    reference_pattern()
        .captures_iter(body)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Read a referenced file, resolved against the referencing document's
/// directory. A missing or unreadable target is a warning, not an error.
pub fn read_reference(base_dir: &Path, reference: &str) -> Option<String> {
    let target = base_dir.join(reference);
    if !target.exists() {
        tracing::warn!(
            "Referenced file {} not found in {}",
            reference,
            base_dir.display()
        );
        return None;
    }
    match fs::read_to_string(&target) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", target.display(), e);
            None
        }
    }
}

/// Turn a reference path into a filename-safe stem: the extension is
/// dropped and both `/` and `.` become `-`, so `docs/setup.md` yields
/// `docs-setup`. Callers prefix a location-derived disambiguator when the
/// resulting file lands in a shared directory.
pub fn sanitize_reference(reference: &str) -> String {
    let stem = match reference.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => reference,
    };
    stem.replace(['/', '.'], "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_extract_simple_and_pathed_references() {
        let body = "See @README.md and also @docs/setup.md for details.";
        assert_eq!(extract_references(body), vec!["README.md", "docs/setup.md"]);
    }

    #[test]
    fn test_extract_requires_extension() {
        assert!(extract_references("email me @alice or @bob").is_empty());
    }

    #[test]
    fn test_extract_relative_parent_reference() {
        assert_eq!(extract_references("use @../shared/conventions.md"), vec![
            "../shared/conventions.md"
        ]);
    }

    #[test]
    fn test_sanitize_drops_extension_and_separators() {
        assert_eq!(sanitize_reference("docs/setup.md"), "docs-setup");
        assert_eq!(sanitize_reference("README.md"), "README");
        assert_eq!(sanitize_reference("a.b/c.d.md"), "a-b-c-d");
    }

    #[test]
    fn test_read_reference_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_reference(dir.path(), "missing.md").is_none());
    }

    #[test]
    fn test_read_reference_reads_relative_to_base() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/setup.md"), "setup text").unwrap();

        let content = read_reference(dir.path(), "docs/setup.md").unwrap();
        assert_eq!(content, "setup text");
    }
}
