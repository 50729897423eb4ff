//! GitHub Copilot adapter.
//!
//! Split-concern projection: auto-rule bodies aggregate into one
//! repository-wide `.github/copilot-instructions.md`; each contextual
//! rule becomes a path-scoped `.github/instructions/*.instructions.md`
//! with an `applyTo` header derived from its globs. Copilot reads AGENTS
//! files natively, so those only get an informational summary file. Owns
//! the instructions file, the instructions directory, and the summary.

use crate::adapter::{GenerateContext, VendorAdapter};
use crate::error::Result;
use crate::fsutil;
use rulesync_core::paths::{root_relative_key, slash_string};
use rulesync_core::{Artifact, FileMap, Rule, RuleSet, Vendor};
use std::path::Path;

const INSTRUCTIONS_FILE: &str = "copilot-instructions.md";
const INSTRUCTIONS_DIR: &str = "instructions";
const AGENTS_SUMMARY_FILE: &str = "_COPILOT_AGENTS_INFO.md";

pub struct CopilotAdapter;

impl VendorAdapter for CopilotAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Copilot
    }

    fn generate(&self, ruleset: &RuleSet, ctx: &GenerateContext) -> Result<FileMap> {
        let mut files = FileMap::new();
        let github_dir = ctx.output_root.join(".github");

        if !ctx.dry_run {
            cleanup_copilot_files(&github_dir, &ctx.output_root);
        }

        if !ruleset.auto.is_empty() {
            let path = github_dir.join(INSTRUCTIONS_FILE);
            let content = render_instructions(&ruleset.auto);
            files.insert(
                root_relative_key(&path, &ctx.output_root),
                Artifact::File(content.clone()),
            );
            if !ctx.dry_run {
                fsutil::write_text(&path, &content)?;
            }
        }

        for rule in &ruleset.contextual {
            let path = github_dir
                .join(INSTRUCTIONS_DIR)
                .join(format!("{}.instructions.md", rule.name));
            let content = render_instruction_file(rule);
            files.insert(
                root_relative_key(&path, &ctx.output_root),
                Artifact::File(content.clone()),
            );
            if !ctx.dry_run {
                fsutil::write_text(&path, &content)?;
            }
        }

        if !ruleset.agents.is_empty() {
            let path = ctx.output_root.join(AGENTS_SUMMARY_FILE);
            let content = render_agents_summary(&ruleset.agents, &ctx.output_root);
            files.insert(
                root_relative_key(&path, &ctx.output_root),
                Artifact::File(content.clone()),
            );
            if !ctx.dry_run {
                fsutil::write_text(&path, &content)?;
            }
        }

        Ok(files)
    }
}

fn cleanup_copilot_files(github_dir: &Path, output_root: &Path) {
    fsutil::remove_file_logged(&github_dir.join(INSTRUCTIONS_FILE));
    fsutil::remove_dir_logged(&github_dir.join(INSTRUCTIONS_DIR));
    fsutil::remove_file_logged(&output_root.join(AGENTS_SUMMARY_FILE));
}

/// Repository-wide instructions: every auto-rule body under its own
/// heading, separated by horizontal rules.
fn render_instructions(auto_rules: &[Rule]) -> String {
    let mut lines: Vec<String> = vec![
        "# GitHub Copilot Repository Instructions".to_string(),
        String::new(),
        "This repository uses AI-assisted development with structured behavioral rules.".to_string(),
        "These instructions apply repository-wide to all Copilot Chat conversations and coding agent tasks.".to_string(),
        String::new(),
        "---".to_string(),
        String::new(),
    ];

    for rule in auto_rules {
        let title = if rule.title().is_empty() {
            rule.name.clone()
        } else {
            rule.title().to_string()
        };
        lines.push(format!("## {title}"));
        lines.push(String::new());
        lines.push(rule.content.clone());
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());
    }

    lines.push("## Additional Context".to_string());
    lines.push(String::new());
    lines.push(
        "- **Path-specific instructions**: See `.github/instructions/` for domain-specific guidance"
            .to_string(),
    );
    lines.push(
        "- **Local context**: AGENTS.md files throughout the repository provide directory-specific context"
            .to_string(),
    );
    lines.push(String::new());

    lines.join("\n")
}

/// One path-scoped instruction file for a contextual rule.
fn render_instruction_file(rule: &Rule) -> String {
    let globs = rule.globs();
    let apply_to = match globs.as_slice() {
        [] => "applyTo: \"**\"".to_string(),
        [only] => format!("applyTo: \"{only}\""),
        many => {
            let joined = many
                .iter()
                .map(|glob| format!("\"{glob}\""))
                .collect::<Vec<_>>()
                .join(", ");
            format!("applyTo: {joined}")
        }
    };

    let title = if rule.title().is_empty() {
        rule.name.clone()
    } else {
        rule.title().to_string()
    };

    [
        "---".to_string(),
        apply_to,
        "---".to_string(),
        String::new(),
        format!("# {title}"),
        String::new(),
        rule.content.clone(),
        String::new(),
    ]
    .join("\n")
}

/// Informational list of discovered AGENTS files; Copilot consumes them
/// natively, so nothing else is generated for them.
fn render_agents_summary(agents: &[Rule], output_root: &Path) -> String {
    let mut lines: Vec<String> = vec![
        "# GitHub Copilot Native AGENTS.md Support".to_string(),
        String::new(),
        "GitHub Copilot natively supports AGENTS.md files throughout the repository.".to_string(),
        format!("Discovered {} AGENTS.md file(s):", agents.len()),
        String::new(),
    ];

    let mut sorted: Vec<&Rule> = agents.iter().collect();
    sorted.sort_by_key(|rule| rule.path.clone());

    for rule in sorted.iter().take(10) {
        let rel = rule.path.strip_prefix(output_root).unwrap_or(&rule.path);
        lines.push(format!("- {}", slash_string(rel)));
    }
    if sorted.len() > 10 {
        lines.push(format!("- ... and {} more", sorted.len() - 10));
    }

    lines.push(String::new());
    lines.push("These files are automatically read by the Copilot coding agent.".to_string());
    lines.push("No additional generation or configuration required.".to_string());

    lines.join("\n")
}
