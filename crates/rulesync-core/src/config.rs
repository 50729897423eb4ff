//! Configuration loading and validation.
//!
//! The configuration is a single YAML file. Scalar and list fields get
//! serde defaults; structural problems are collected by [`Config::validate`]
//! and reported together, with `WARNING:`-prefixed entries treated as
//! non-fatal.

use crate::error::{Error, Result};
use crate::vendor::Vendor;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const SUPPORTED_VERSION: f64 = 1.0;

fn default_vendor() -> String {
    "all".to_string()
}

fn default_vendors() -> Vec<Vendor> {
    vec![Vendor::Cursor, Vendor::Claude, Vendor::Continue, Vendor::Copilot]
}

fn default_auto_rules_glob() -> String {
    "rules/auto-rules/**/*.mdc".to_string()
}

fn default_contextual_rules_glob() -> String {
    "rules/contextual-rules/**/*.mdc".to_string()
}

fn default_agents_glob() -> String {
    "**/AGENTS.{md,mdc}".to_string()
}

/// Shared-skill sync settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillsConfig {
    /// Directory whose immediate subdirectories are the shared skills.
    /// Empty disables skill sync.
    #[serde(default)]
    pub shared_path: String,
    /// Where each vendor expects skills to appear, relative to the
    /// output root.
    #[serde(default)]
    pub vendor_destinations: BTreeMap<Vendor, String>,
}

/// Parsed rulesync configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub version: f64,

    /// Vendor output locations. Must name at least cursor and claude.
    #[serde(default)]
    pub vendor_files: BTreeMap<Vendor, String>,

    #[serde(default = "default_vendor")]
    pub default_vendor: String,

    /// Vendors generated when the caller asks for "all".
    #[serde(default = "default_vendors")]
    pub default_vendors: Vec<Vendor>,

    #[serde(default = "default_auto_rules_glob")]
    pub auto_rules_glob: String,

    #[serde(default = "default_contextual_rules_glob")]
    pub contextual_rules_glob: String,

    /// May contain one `{a,b}` alternation group.
    #[serde(default = "default_agents_glob")]
    pub agents_glob: String,

    /// Directory names (or shell wildcards) excluded from AGENTS discovery.
    #[serde(default)]
    pub ignored_directories: Vec<String>,

    /// Extra rule paths pulled in beyond the glob patterns.
    #[serde(default)]
    pub included_rules: Vec<String>,

    #[serde(default)]
    pub skills: SkillsConfig,
}

impl Config {
    /// Parse and validate configuration from YAML text.
    ///
    /// Hard validation issues abort with [`Error::ConfigInvalid`];
    /// `WARNING:` issues are logged and tolerated.
    pub fn parse(text: &str) -> Result<Config> {
        let config: Config = serde_yaml::from_str(text)?;

        if config.version != SUPPORTED_VERSION {
            return Err(Error::UnsupportedVersion {
                version: config.version,
            });
        }

        let issues = config.validate();
        let errors: Vec<&String> = issues.iter().filter(|i| !i.starts_with("WARNING:")).collect();
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(|e| format!("  - {e}"))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(Error::ConfigInvalid { issues: joined });
        }

        for warning in issues.iter().filter(|i| i.starts_with("WARNING:")) {
            tracing::warn!("{warning}");
        }

        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Structural checks beyond what deserialization enforces.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.vendor_files.contains_key(&Vendor::Cursor) {
            issues.push("Missing 'cursor' in vendor_files configuration".to_string());
        }
        if !self.vendor_files.contains_key(&Vendor::Claude) {
            issues.push("Missing 'claude' in vendor_files configuration".to_string());
        }

        if self.auto_rules_glob.is_empty() {
            issues.push("WARNING: No auto_rules_glob pattern specified".to_string());
        }
        if self.contextual_rules_glob.is_empty() {
            issues.push("WARNING: No contextual_rules_glob pattern specified".to_string());
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = "\
version: 1.0
vendor_files:
  cursor: .cursor/rules
  claude: CLAUDE.md
";

    #[test]
    fn test_parse_minimal_with_defaults() {
        let config = Config::parse(MINIMAL).unwrap();
        assert_eq!(config.default_vendor, "all");
        assert_eq!(
            config.default_vendors,
            vec![Vendor::Cursor, Vendor::Claude, Vendor::Continue, Vendor::Copilot]
        );
        assert_eq!(config.auto_rules_glob, "rules/auto-rules/**/*.mdc");
        assert_eq!(config.agents_glob, "**/AGENTS.{md,mdc}");
        assert!(config.ignored_directories.is_empty());
        assert!(config.skills.shared_path.is_empty());
    }

    #[test]
    fn test_missing_version_rejected() {
        let err = Config::parse("vendor_files:\n  cursor: a\n  claude: b\n").unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion { .. }));
    }

    #[test]
    fn test_wrong_version_rejected() {
        let err = Config::parse("version: 2.0\nvendor_files:\n  cursor: a\n  claude: b\n")
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion { version } if version == 2.0));
    }

    #[test]
    fn test_missing_required_vendor_files() {
        let err = Config::parse("version: 1.0\nvendor_files:\n  cursor: a\n").unwrap_err();
        match err {
            Error::ConfigInvalid { issues } => {
                assert!(issues.contains("Missing 'claude' in vendor_files"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_vendor_is_parse_error() {
        let text = "version: 1.0\nvendor_files:\n  cursor: a\n  claude: b\ndefault_vendors: [vim]\n";
        assert!(matches!(Config::parse(text), Err(Error::Yaml(_))));
    }

    #[test]
    fn test_empty_glob_is_soft_warning() {
        let text = "version: 1.0\nvendor_files:\n  cursor: a\n  claude: b\nauto_rules_glob: \"\"\n";
        let config = Config::parse(text).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].starts_with("WARNING:"));
    }

    #[test]
    fn test_skills_section() {
        let text = "\
version: 1.0
vendor_files:
  cursor: a
  claude: b
skills:
  shared_path: skills
  vendor_destinations:
    claude: .claude/skills
    cursor: .cursor/skills
";
        let config = Config::parse(text).unwrap();
        assert_eq!(config.skills.shared_path, "skills");
        assert_eq!(
            config.skills.vendor_destinations.get(&Vendor::Claude).unwrap(),
            ".claude/skills"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }
}
