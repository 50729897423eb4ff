//! Continue.dev adapter.
//!
//! Same symlink-forest philosophy as Cursor, but Continue only reads one
//! central `.continue/rules/` directory. AGENTS files therefore cannot be
//! read in place: each one is projected into the central directory as a
//! markdown rule scoped to its source directory via a glob, and its `@`
//! references are materialized alongside with path-prefixed names to stay
//! collision-free. Owns the contents of `.continue/rules/`.

use crate::adapter::{GenerateContext, VendorAdapter};
use crate::error::Result;
use crate::fsutil;
use crate::refs::{extract_references, read_reference, sanitize_reference};
use rulesync_core::paths::{relative_from, root_relative_key, slash_string};
use rulesync_core::{Artifact, FileMap, Rule, RuleSet, Vendor};
use std::path::{Component, Path};

pub struct ContinueAdapter;

impl VendorAdapter for ContinueAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Continue
    }

    fn generate(&self, ruleset: &RuleSet, ctx: &GenerateContext) -> Result<FileMap> {
        let mut files = FileMap::new();
        let rules_dir = ctx.output_root.join(".continue").join("rules");

        if !ctx.dry_run {
            std::fs::create_dir_all(&rules_dir)?;
            fsutil::clear_dir_logged(&rules_dir);
        }

        for rule in &ruleset.auto {
            link_rule(rule, "auto", &rules_dir, ctx, &mut files)?;
        }
        for rule in &ruleset.contextual {
            link_rule(rule, "contextual", &rules_dir, ctx, &mut files)?;
        }

        for rule in &ruleset.agents {
            project_agents_file(rule, &rules_dir, ctx, &mut files)?;
            embed_agents_references(rule, &rules_dir, ctx, &mut files)?;
        }

        Ok(files)
    }
}

fn link_rule(
    rule: &Rule,
    prefix: &str,
    rules_dir: &Path,
    ctx: &GenerateContext,
    files: &mut FileMap,
) -> Result<()> {
    let link_path = rules_dir.join(format!("{prefix}-{}.md", rule.name));
    let target = match relative_from(&rule.path, rules_dir) {
        Some(relative) => slash_string(&relative),
        None => slash_string(&rule.path),
    };

    files.insert(
        root_relative_key(&link_path, &ctx.output_root),
        Artifact::Symlink(target.clone()),
    );
    if !ctx.dry_run {
        fsutil::replace_symlink(&link_path, &target)?;
    }
    Ok(())
}

/// Directory path of an AGENTS file relative to the output root, as
/// dash-joined parts. Empty for the root AGENTS file.
fn agents_dir_parts(rule: &Rule, output_root: &Path) -> Option<Vec<String>> {
    let relative = rule.path.strip_prefix(output_root).ok()?;
    let parent = relative.parent()?;
    Some(
        parent
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect(),
    )
}

/// Project one AGENTS file into the central rules directory, scoped to
/// its source directory by glob.
fn project_agents_file(
    rule: &Rule,
    rules_dir: &Path,
    ctx: &GenerateContext,
    files: &mut FileMap,
) -> Result<()> {
    let Some(parts) = agents_dir_parts(rule, &ctx.output_root) else {
        tracing::warn!(
            "AGENTS file {} not under output directory, skipping",
            rule.path.display()
        );
        return Ok(());
    };

    let (file_name, glob_pattern) = if parts.is_empty() {
        ("agents-root.md".to_string(), "**/*".to_string())
    } else {
        (
            format!("agents-{}.md", parts.join("-")),
            format!("{}/**/*", parts.join("/")),
        )
    };

    let dir_name = rule
        .path
        .parent()
        .and_then(|parent| parent.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let description = if rule.description().is_empty() {
        format!("Directory-specific context for {dir_name}")
    } else {
        rule.description().replace('"', "\\\"")
    };

    let content = [
        "---".to_string(),
        format!("name: Local context for {dir_name}"),
        format!("description: \"{description}\""),
        format!("globs: {glob_pattern}"),
        "alwaysApply: false".to_string(),
        "---".to_string(),
        String::new(),
        rule.content.clone(),
    ]
    .join("\n");

    let path = rules_dir.join(file_name);
    files.insert(
        root_relative_key(&path, &ctx.output_root),
        Artifact::File(content.clone()),
    );
    if !ctx.dry_run {
        fsutil::write_text(&path, &content)?;
    }
    Ok(())
}

/// Materialize `@` references from an AGENTS file into the central rules
/// directory. The source-directory prefix keeps same-named references
/// from different directories apart.
fn embed_agents_references(
    rule: &Rule,
    rules_dir: &Path,
    ctx: &GenerateContext,
    files: &mut FileMap,
) -> Result<()> {
    let references = extract_references(&rule.content);
    if references.is_empty() {
        return Ok(());
    }
    let Some(agents_dir) = rule.path.parent() else {
        return Ok(());
    };

    let (prefix, glob_pattern) = match agents_dir_parts(rule, &ctx.output_root) {
        Some(parts) if parts.is_empty() => ("root".to_string(), "**/*".to_string()),
        Some(parts) => (parts.join("-"), format!("{}/**/*", parts.join("/"))),
        None => ("external".to_string(), "**/*".to_string()),
    };

    for reference in references {
        let Some(referenced) = read_reference(agents_dir, &reference) else {
            continue;
        };

        let file_name = format!("ref-{prefix}-{}.md", sanitize_reference(&reference));
        let path = rules_dir.join(file_name);

        let content = [
            "---".to_string(),
            format!("name: Referenced content from {prefix}/{reference}"),
            "description: \"Embedded copy of a file referenced from an AGENTS file\"".to_string(),
            format!("globs: {glob_pattern}"),
            "alwaysApply: false".to_string(),
            "---".to_string(),
            String::new(),
            format!("# Referenced: {reference}"),
            String::new(),
            "This file carries the full content of the referenced file because".to_string(),
            "@ references are not expanded automatically. Always edit the source".to_string(),
            "file; this copy is regenerated on every sync.".to_string(),
            String::new(),
            "---".to_string(),
            String::new(),
            referenced,
        ]
        .join("\n");

        files.insert(
            root_relative_key(&path, &ctx.output_root),
            Artifact::File(content.clone()),
        );
        if !ctx.dry_run {
            fsutil::write_text(&path, &content)?;
        }
    }
    Ok(())
}
