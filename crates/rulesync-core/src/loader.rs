//! Rule discovery from the filesystem.
//!
//! Loading is partial-failure tolerant: a file that cannot be read or
//! decoded is logged and skipped so one bad document never aborts the run.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::rule::{Rule, RuleKind, RuleSet, load_rule};
use std::path::{Path, PathBuf};

/// Loads rules from the filesystem based on configuration.
pub struct RuleLoader<'a> {
    config: &'a Config,
    input_root: PathBuf,
}

impl<'a> RuleLoader<'a> {
    pub fn new(config: &'a Config, input_root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            input_root: input_root.into(),
        }
    }

    /// Expand the auto-rules glob under the input root.
    pub fn load_auto_rules(&self) -> Result<Vec<Rule>> {
        self.load_globbed(&self.config.auto_rules_glob, RuleKind::Auto)
    }

    /// Expand the contextual-rules glob under the input root.
    pub fn load_contextual_rules(&self) -> Result<Vec<Rule>> {
        self.load_globbed(&self.config.contextual_rules_glob, RuleKind::Contextual)
    }

    fn load_globbed(&self, pattern: &str, kind: RuleKind) -> Result<Vec<Rule>> {
        let full_pattern = self.input_root.join(pattern);
        let mut paths = expand_glob(&full_pattern.to_string_lossy())?;
        paths.sort();

        let mut rules = Vec::new();
        for path in paths {
            if !path.is_file() {
                continue;
            }
            match load_rule(&path, kind) {
                Ok(rule) => rules.push(rule),
                Err(e) => {
                    tracing::warn!("Failed to load {} rule {}: {}", kind, path.display(), e);
                }
            }
        }
        Ok(rules)
    }

    /// Discover AGENTS files anywhere under the output root.
    ///
    /// The agents glob may carry one brace-alternation group, which POSIX
    /// glob matching does not understand; it is expanded into literal
    /// patterns first. Candidates inside ignored directories are dropped.
    pub fn load_agents_files(&self, output_root: &Path) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();

        for pattern in expand_braces(&self.config.agents_glob) {
            let full_pattern = output_root.join(&pattern);
            for path in expand_glob(&full_pattern.to_string_lossy())? {
                if self.is_ignored(&path, output_root) || !path.is_file() {
                    continue;
                }
                match load_rule(&path, RuleKind::Agents) {
                    Ok(rule) => rules.push(rule),
                    Err(e) => {
                        tracing::warn!("Failed to load AGENTS file {}: {}", path.display(), e);
                    }
                }
            }
        }

        rules.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(rules)
    }

    /// Load everything: globbed auto/contextual rules, discovered AGENTS
    /// files, and explicitly included rule paths.
    ///
    /// Included paths are tried against the input root first, then the
    /// output root. Their kind is inferred from the rules area named in
    /// the path, which is fragile for paths that mention those directory
    /// names incidentally, but matches what downstream configs rely on.
    pub fn load_all_rules(&self, output_root: &Path) -> Result<RuleSet> {
        let mut auto = self.load_auto_rules()?;
        let mut contextual = self.load_contextual_rules()?;
        let agents = self.load_agents_files(output_root)?;

        for included in &self.config.included_rules {
            let mut path = self.input_root.join(included);
            if !path.exists() {
                path = output_root.join(included);
            }
            if !path.exists() {
                tracing::warn!("Included rule not found: {included}");
                continue;
            }

            let path_str = path.to_string_lossy();
            let kind = if path_str.contains("auto-rules") {
                RuleKind::Auto
            } else if path_str.contains("contextual-rules") {
                RuleKind::Contextual
            } else {
                tracing::warn!(
                    "Included rule {} is neither in an auto-rules nor a contextual-rules area, skipping",
                    path.display()
                );
                continue;
            };

            match load_rule(&path, kind) {
                Ok(rule) => match kind {
                    RuleKind::Auto => auto.push(rule),
                    RuleKind::Contextual => contextual.push(rule),
                    RuleKind::Agents => unreachable!("included rules are never agents files"),
                },
                Err(e) => {
                    tracing::warn!("Failed to load included rule {}: {}", path.display(), e);
                }
            }
        }

        Ok(RuleSet {
            auto,
            contextual,
            agents,
        })
    }

    /// Whether any component of `path` (relative to `base`) matches a
    /// configured ignored directory by exact name, prefix, or wildcard.
    fn is_ignored(&self, path: &Path, base: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(base) else {
            return false;
        };

        for ignored in &self.config.ignored_directories {
            let name = ignored.trim_end_matches(['/', '*']);
            if name.is_empty() {
                continue;
            }
            let wildcard = name
                .contains('*')
                .then(|| glob::Pattern::new(name).ok())
                .flatten();

            for component in relative.components() {
                let part = component.as_os_str().to_string_lossy();
                if part == name || part.starts_with(name) {
                    return true;
                }
                if let Some(pattern) = &wildcard {
                    if pattern.matches(&part) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// Run one glob pattern, keeping readable matches.
fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => {
                tracing::warn!("Skipping unreadable glob match: {e}");
            }
        }
    }
    Ok(paths)
}

/// Expand the first `{a,b,...}` alternation group into literal patterns.
///
/// Glob matchers commonly lack brace support, so `**/AGENTS.{md,mdc}`
/// becomes `**/AGENTS.md` and `**/AGENTS.mdc` before matching. A pattern
/// without a well-formed group passes through unchanged.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let (Some(start), Some(end)) = (pattern.find('{'), pattern.find('}')) else {
        return vec![pattern.to_string()];
    };
    if end < start {
        return vec![pattern.to_string()];
    }

    let prefix = &pattern[..start];
    let suffix = &pattern[end + 1..];
    pattern[start + 1..end]
        .split(',')
        .map(|option| format!("{prefix}{}{suffix}", option.trim()))
        .collect()
}
