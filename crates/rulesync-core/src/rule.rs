//! Rule model: a single parsed rule document and the per-run aggregate.

use crate::error::{Error, Result};
use crate::frontmatter::{Frontmatter, parse_frontmatter};
use std::fs;
use std::path::{Path, PathBuf};

/// Rule category, deciding both discovery source and projection shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Always active across all contexts.
    Auto,
    /// Loaded on demand based on topical relevance.
    Contextual,
    /// Directory-scoped AGENTS context file discovered anywhere in the tree.
    Agents,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Auto => "auto",
            RuleKind::Contextual => "contextual",
            RuleKind::Agents => "agents",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed rule document. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Identifier derived from the filename stem. Unique across
    /// auto/contextual rules; AGENTS files all share a name and are keyed
    /// by path instead.
    pub name: String,
    pub kind: RuleKind,
    /// Full path to the source file.
    pub path: PathBuf,
    pub frontmatter: Frontmatter,
    /// Markdown body after the frontmatter block.
    pub content: String,
}

impl Rule {
    /// Title from the first content line, heading markers stripped.
    pub fn title(&self) -> &str {
        self.content
            .lines()
            .next()
            .unwrap_or("")
            .trim_start_matches('#')
            .trim()
    }

    /// Frontmatter description, empty string when absent.
    pub fn description(&self) -> &str {
        self.frontmatter.description.as_deref().unwrap_or("")
    }

    /// Whether this rule is always active. Defaults to false.
    pub fn always_apply(&self) -> bool {
        self.frontmatter.always_apply.unwrap_or(false)
    }

    /// Normalized glob pattern list.
    pub fn globs(&self) -> Vec<String> {
        self.frontmatter.globs.patterns()
    }
}

/// Parse a rule file into a [`Rule`].
pub fn load_rule(path: &Path, kind: RuleKind) -> Result<Rule> {
    if !path.exists() {
        return Err(Error::RuleNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path).map_err(|source| Error::RuleRead {
        path: path.to_path_buf(),
        source,
    })?;

    let (frontmatter, content) = parse_frontmatter(&text);

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Rule {
        name,
        kind,
        path: path.to_path_buf(),
        frontmatter,
        content,
    })
}

/// The complete set of rules for one generation run.
///
/// Assembled once by the loader and then flows read-only through the
/// validator and every adapter.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub auto: Vec<Rule>,
    pub contextual: Vec<Rule>,
    pub agents: Vec<Rule>,
}

impl RuleSet {
    /// All rules in the fixed auto, contextual, agents order.
    pub fn all_rules(&self) -> impl Iterator<Item = &Rule> {
        self.auto
            .iter()
            .chain(self.contextual.iter())
            .chain(self.agents.iter())
    }

    pub fn len(&self) -> usize {
        self.auto.len() + self.contextual.len() + self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
