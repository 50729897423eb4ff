//! The `validate` command: structural checks over auto and contextual
//! rules. AGENTS files are discovery-time artifacts of the output tree
//! and are excluded here.

use crate::error::{CliError, Result};
use colored::Colorize;
use rulesync_core::{RuleLoader, RuleSet, validate_ruleset};
use std::path::Path;

pub fn run_validate(input: &Path, config_path: Option<&Path>) -> Result<()> {
    println!("{}", "Validating rules...".yellow());
    println!();

    let config = super::resolve_config(input, config_path)?;

    let loader = RuleLoader::new(&config, input);
    let auto = loader.load_auto_rules()?;
    let contextual = loader.load_contextual_rules()?;

    println!("  Loaded {} auto-rule(s)", auto.len());
    println!("  Loaded {} contextual rule(s)", contextual.len());
    println!();

    let ruleset = RuleSet {
        auto,
        contextual,
        agents: vec![],
    };
    let issues = validate_ruleset(&ruleset);

    if issues.is_empty() {
        println!("{}", "Validation complete. No issues found.".green());
        return Ok(());
    }

    let errors: Vec<&String> = issues.iter().filter(|i| !i.starts_with("INFO:")).collect();
    let infos: Vec<&String> = issues.iter().filter(|i| i.starts_with("INFO:")).collect();

    if !errors.is_empty() {
        println!("{}", "Validation errors found:".red());
        println!();
        for error in &errors {
            println!("  - {error}");
        }
        println!();
    }

    if !infos.is_empty() {
        println!("{}", "Information:".cyan());
        println!();
        for info in &infos {
            println!("  - {}", info.trim_start_matches("INFO:").trim_start());
        }
        println!();
    }

    if errors.is_empty() {
        println!("{}", "No errors found".green());
        Ok(())
    } else {
        Err(CliError::message(format!(
            "{} validation error(s) found",
            errors.len()
        )))
    }
}
