//! The `generate` command: load, validate, project, report.

use crate::error::{CliError, Result};
use crate::report;
use colored::Colorize;
use rulesync_core::{FileMap, RuleLoader, Vendor, validate_ruleset};
use rulesync_vendors::{GenerateContext, adapter_for, sync_skills};
use std::path::Path;

pub fn run_generate(
    input: &Path,
    output: &Path,
    vendor: Option<Vendor>,
    dry_run: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    println!("{}", "rulesync generate".blue().bold());
    println!();

    let config = super::resolve_config(input, config_path)?;

    println!("{}", "Configuration:".cyan());
    println!("  Input:   {}", input.display());
    println!("  Output:  {}", output.display());
    match vendor {
        Some(vendor) => println!("  Vendor:  {vendor}"),
        None => println!("  Vendor:  all"),
    }
    println!("  Dry run: {}", if dry_run { "yes" } else { "no" });
    println!();

    println!("{}", "Loading rules...".cyan());
    let loader = RuleLoader::new(&config, input);
    let ruleset = loader.load_all_rules(output)?;
    println!("  {} auto-rule(s)", ruleset.auto.len());
    println!("  {} contextual rule(s)", ruleset.contextual.len());
    println!("  {} AGENTS file(s)", ruleset.agents.len());
    println!();

    println!("{}", "Validating rules...".cyan());
    let issues = validate_ruleset(&ruleset);
    let errors: Vec<&String> = issues.iter().filter(|i| !i.starts_with("INFO:")).collect();
    let infos: Vec<&String> = issues.iter().filter(|i| i.starts_with("INFO:")).collect();

    for info in &infos {
        println!("  {}", info.dimmed());
    }
    if !errors.is_empty() {
        println!("{}", "Validation errors:".red());
        for error in &errors {
            println!("  - {error}");
        }
        return Err(CliError::message(format!(
            "{} validation error(s) found",
            errors.len()
        )));
    }
    println!("  All rules valid");
    println!();

    let vendors: Vec<Vendor> = match vendor {
        Some(vendor) => vec![vendor],
        None => config.default_vendors.clone(),
    };

    let ctx = GenerateContext::new(output, input).with_dry_run(dry_run);
    let mut all_files = FileMap::new();

    for vendor in &vendors {
        println!("{}", format!("Generating {vendor} configuration...").cyan());
        let files = adapter_for(*vendor)
            .generate(&ruleset, &ctx)
            .map_err(|e| {
                CliError::message(format!("failed to generate {vendor} configuration: {e}"))
            })?;
        println!("  {} file(s)", files.len());
        all_files.extend(files);
    }

    let skill_links = sync_skills(&config, output, &vendors, dry_run)?;
    if !skill_links.is_empty() {
        println!("  {} skill symlink(s)", skill_links.len());
    }
    all_files.extend(skill_links);
    println!();

    if dry_run {
        println!("{}", "Dry run results (no files created):".yellow());
    } else {
        println!("{}", "Generated files:".green());
    }
    println!();
    report::print_file_table(&all_files);

    Ok(())
}
