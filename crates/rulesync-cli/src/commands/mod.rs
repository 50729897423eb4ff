//! Command implementations.

mod generate;
mod list;
mod validate;

pub use generate::run_generate;
pub use list::run_list;
pub use validate::run_validate;

use crate::error::Result;
use rulesync_core::Config;
use std::path::Path;

/// Fallback configuration shipped with the binary.
const DEFAULT_CONFIG: &str = include_str!("../../resources/default-config.yaml");

/// Resolve the configuration for a command: an explicit `--config-path`
/// wins, then `{input}/resources/default-config.yaml`, then the packaged
/// default.
pub(crate) fn resolve_config(input: &Path, config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Ok(Config::load(path)?),
        None => {
            let candidate = input.join("resources").join("default-config.yaml");
            if candidate.is_file() {
                Ok(Config::load(&candidate)?)
            } else {
                Ok(Config::parse(DEFAULT_CONFIG)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_packaged_default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.agents_glob, "**/AGENTS.{md,mdc}");
    }

    #[test]
    fn test_input_local_config_preferred() {
        let dir = TempDir::new().unwrap();
        let resources = dir.path().join("resources");
        fs::create_dir_all(&resources).unwrap();
        fs::write(
            resources.join("default-config.yaml"),
            "version: 1.0\nvendor_files:\n  cursor: a\n  claude: b\nauto_rules_glob: custom/**/*.mdc\n",
        )
        .unwrap();

        let config = resolve_config(dir.path(), None).unwrap();
        assert_eq!(config.auto_rules_glob, "custom/**/*.mdc");
    }

    #[test]
    fn test_explicit_config_path_missing_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yaml");
        let result = resolve_config(dir.path(), Some(missing.as_path()));
        assert!(result.is_err());
    }
}
