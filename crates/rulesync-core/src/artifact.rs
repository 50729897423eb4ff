//! Generated-file map returned by adapters and skill sync.

use std::collections::BTreeMap;
use std::fmt;

/// One generated output entry: literal file content, or a symbolic link
/// to a target path (relative where possible, absolute otherwise).
///
/// The `Display` form renders symlinks with a `SYMLINK->` marker so the
/// two cases stay distinguishable in flat textual reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    File(String),
    Symlink(String),
}

impl Artifact {
    pub fn kind(&self) -> &'static str {
        match self {
            Artifact::File(_) => "file",
            Artifact::Symlink(_) => "symlink",
        }
    }

    pub fn is_symlink(&self) -> bool {
        matches!(self, Artifact::Symlink(_))
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::File(content) => f.write_str(content),
            Artifact::Symlink(target) => write!(f, "SYMLINK->{target}"),
        }
    }
}

/// Map of output-root-relative path to generated artifact.
///
/// A `BTreeMap` keeps reporting order deterministic between runs, which
/// the dry-run-equivalence guarantee leans on.
pub type FileMap = BTreeMap<String, Artifact>;
