//! The `list` command: show configured auto and contextual rules.

use crate::error::Result;
use crate::report;
use colored::Colorize;
use rulesync_core::RuleLoader;
use std::path::Path;

pub fn run_list(input: &Path, config_path: Option<&Path>) -> Result<()> {
    println!("{}", "Configured Rules".blue().bold());
    println!();

    let config = super::resolve_config(input, config_path)?;

    let loader = RuleLoader::new(&config, input);
    let auto = loader.load_auto_rules()?;
    let contextual = loader.load_contextual_rules()?;

    if !auto.is_empty() {
        report::print_rules_table("Auto-Rules (always apply):", &auto);
    }
    if !contextual.is_empty() {
        report::print_rules_table("Contextual Rules (load on-demand):", &contextual);
    }

    println!(
        "{}",
        format!(
            "Total: {} auto-rules, {} contextual rules",
            auto.len(),
            contextual.len()
        )
        .dimmed()
    );

    Ok(())
}
