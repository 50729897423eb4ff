//! Reference-manifest projection shared by the Claude and Gemini
//! adapters.
//!
//! Both tools auto-expand `@path` references from a root context file and
//! auto-load a same-named file per directory, so their projections differ
//! only in naming. The rendering here is stateless; each adapter remains
//! the sole owner of its manifest filename, including cleanup.

use crate::adapter::GenerateContext;
use crate::error::Result;
use crate::fsutil;
use rulesync_core::paths::root_relative_key;
use rulesync_core::{Artifact, FileMap, Rule, RuleSet};
use std::path::Path;
use walkdir::WalkDir;

/// Naming for one reference-manifest vendor.
pub(crate) struct ManifestStyle {
    /// Manifest filename, e.g. `CLAUDE.md`.
    pub file_name: &'static str,
    /// Top-level heading of the root manifest.
    pub heading: &'static str,
    /// Tool name used in the auto-loading hint line.
    pub loader_name: &'static str,
}

/// Full generation flow for a reference-manifest vendor.
pub(crate) fn generate(
    style: &ManifestStyle,
    ruleset: &RuleSet,
    ctx: &GenerateContext,
) -> Result<FileMap> {
    let mut files = FileMap::new();

    if !ctx.dry_run {
        cleanup_manifests(style, &ctx.output_root);
    }

    let root_manifest = ctx.output_root.join(style.file_name);
    let content = render_root_manifest(style, ruleset, &ctx.output_root);
    files.insert(
        root_relative_key(&root_manifest, &ctx.output_root),
        Artifact::File(content.clone()),
    );
    if !ctx.dry_run {
        fsutil::write_text(&root_manifest, &content)?;
    }

    generate_sibling_manifests(style, &ruleset.agents, ctx, &mut files)?;

    Ok(files)
}

/// Delete every manifest file anywhere under the output root. They are
/// all generated, so a full-tree sweep is what makes removal of a source
/// rule stick.
fn cleanup_manifests(style: &ManifestStyle, output_root: &Path) {
    for entry in WalkDir::new(output_root)
        .into_iter()
        .filter_map(|entry| entry.ok())
    {
        if entry.file_name() == style.file_name && !entry.file_type().is_dir() {
            fsutil::remove_file_logged(entry.path());
        }
    }
}

fn render_root_manifest(style: &ManifestStyle, ruleset: &RuleSet, output_root: &Path) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut push = |line: &str| lines.push(line.to_string());

    push(&format!("# {}", style.heading));
    push("");
    push("This repository uses AI-assisted development with structured behavioral rules.");
    push("");

    // Auto-rules, pulled in via @ references the tool expands itself.
    push("## Auto-Rules");
    push("");
    push("The following rules are automatically applied across all contexts:");
    push("");

    let root_agents = ["AGENTS.md", "AGENTS.mdc"]
        .iter()
        .map(|name| output_root.join(name))
        .find(|path| path.exists());

    if let Some(root_agents) = &root_agents {
        push(&format!(
            "- @{}",
            root_agents.file_name().unwrap_or_default().to_string_lossy()
        ));
    }
    for rule in &ruleset.auto {
        push(&format!("- @{}", root_relative_key(&rule.path, output_root)));
    }
    if ruleset.auto.is_empty() && root_agents.is_none() {
        push("No auto-rules configured.");
    }
    push("");

    // Contextual rules are described, not auto-loaded.
    push("## Contextual Rules");
    push("");
    push("The following rules apply to specific contexts. Load them when working in the relevant domain:");
    push("");

    if ruleset.contextual.is_empty() {
        push("No contextual rules configured.");
    } else {
        for rule in &ruleset.contextual {
            push(&format!(
                "- `{}`: {}",
                root_relative_key(&rule.path, output_root),
                rule.description()
            ));
        }
    }
    push("");

    push("## Local Context (AGENTS files)");
    push("");
    push("This repository has AGENTS.{md,mdc} files co-located with code throughout the codebase.");
    push("These provide directory-specific context and guidelines.");
    push("");

    if ruleset.agents.is_empty() {
        push("No AGENTS files discovered.");
    } else {
        push(&format!(
            "Found {} AGENTS file(s) throughout the codebase.",
            ruleset.agents.len()
        ));
        push(&format!(
            "{} automatically loads {} files when entering directories.",
            style.loader_name, style.file_name
        ));
        push("");

        let non_root: Vec<&Rule> = ruleset
            .agents
            .iter()
            .filter(|rule| rule.path.parent() != Some(output_root))
            .collect();

        if !non_root.is_empty() {
            push("AGENTS files in subdirectories:");
            for rule in non_root.iter().take(5) {
                push(&format!("- `{}`", root_relative_key(&rule.path, output_root)));
            }
            if non_root.len() > 5 {
                push(&format!("- ... and {} more", non_root.len() - 5));
            }
        }
    }
    push("");

    push("## Usage");
    push("");
    push("- **Auto-rules** above (including root AGENTS.md) are always active");
    push("- **Contextual rules** can be loaded on-demand if their description matches the context you're working in/on");
    push(&format!(
        "- **AGENTS files** in subdirectories are auto-loaded via {} when you enter those directories",
        style.file_name
    ));
    push("");

    lines.join("\n")
}

/// One-line manifest next to every non-root AGENTS file, so the tool's
/// per-directory auto-loading picks the AGENTS content up.
fn generate_sibling_manifests(
    style: &ManifestStyle,
    agents: &[Rule],
    ctx: &GenerateContext,
    files: &mut FileMap,
) -> Result<()> {
    let root_manifest = ctx.output_root.join(style.file_name);

    for rule in agents {
        let Some(parent) = rule.path.parent() else {
            continue;
        };
        let sibling = parent.join(style.file_name);
        if sibling == root_manifest {
            continue;
        }

        let content = format!(
            "@{}\n",
            rule.path.file_name().unwrap_or_default().to_string_lossy()
        );
        files.insert(
            root_relative_key(&sibling, &ctx.output_root),
            Artifact::File(content.clone()),
        );
        if !ctx.dry_run {
            fsutil::write_text(&sibling, &content)?;
        }
    }
    Ok(())
}
