//! Cursor adapter.
//!
//! Projects rules as a symlink forest under `.cursor/rules/`: one link
//! per auto/contextual rule pointing back at the canonical source file,
//! so editing through the link edits the real rule. Cursor reads AGENTS
//! files natively, but it does not expand `@` references inside rule or
//! AGENTS bodies; those are materialized as `ref-*.mdc` files carrying
//! the referenced content. Owns the root `.cursor/rules/` directory and
//! every distributed `.cursor/rules/` directory in the tree.

use crate::adapter::{GenerateContext, VendorAdapter};
use crate::error::Result;
use crate::fsutil;
use crate::refs::{extract_references, read_reference, sanitize_reference};
use rulesync_core::frontmatter::GlobsField;
use rulesync_core::paths::{relative_from, root_relative_key, slash_string};
use rulesync_core::{Artifact, FileMap, Rule, RuleSet, Vendor};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct CursorAdapter;

impl VendorAdapter for CursorAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Cursor
    }

    fn generate(&self, ruleset: &RuleSet, ctx: &GenerateContext) -> Result<FileMap> {
        let mut files = FileMap::new();
        let rules_dir = ctx.output_root.join(".cursor").join("rules");

        if !ctx.dry_run {
            std::fs::create_dir_all(&rules_dir)?;
            cleanup_cursor_rules(&rules_dir, &ctx.output_root);
        }

        for rule in &ruleset.auto {
            link_rule(rule, "auto", &rules_dir, ctx, &mut files)?;
            embed_rule_references(rule, &rules_dir, ctx, &mut files)?;
        }
        for rule in &ruleset.contextual {
            link_rule(rule, "contextual", &rules_dir, ctx, &mut files)?;
            embed_rule_references(rule, &rules_dir, ctx, &mut files)?;
        }

        // AGENTS files themselves need no projection (Cursor reads them
        // in place), only their references do.
        for rule in &ruleset.agents {
            embed_agents_references(rule, ctx, &mut files)?;
        }

        Ok(files)
    }
}

/// Symlink one rule into the forest as `{prefix}-{name}.mdc`.
fn link_rule(
    rule: &Rule,
    prefix: &str,
    rules_dir: &Path,
    ctx: &GenerateContext,
    files: &mut FileMap,
) -> Result<()> {
    let link_path = rules_dir.join(format!("{prefix}-{}.mdc", rule.name));
    let target = symlink_target(&rule.path, rules_dir);

    files.insert(
        root_relative_key(&link_path, &ctx.output_root),
        Artifact::Symlink(target.clone()),
    );
    if !ctx.dry_run {
        fsutil::replace_symlink(&link_path, &target)?;
    }
    Ok(())
}

/// Relative link target from the forest back to the source, absolute
/// when the two share no root.
fn symlink_target(source: &Path, rules_dir: &Path) -> String {
    match relative_from(source, rules_dir) {
        Some(relative) => slash_string(&relative),
        None => slash_string(source),
    }
}

/// Materialize `@` references found in an auto/contextual rule body as
/// `ref-{rule}-{sanitized}.mdc` files in the root forest, inheriting the
/// parent rule's scoping.
fn embed_rule_references(
    rule: &Rule,
    rules_dir: &Path,
    ctx: &GenerateContext,
    files: &mut FileMap,
) -> Result<()> {
    let references = extract_references(&rule.content);
    if references.is_empty() {
        return Ok(());
    }
    let Some(rule_dir) = rule.path.parent() else {
        return Ok(());
    };

    for reference in references {
        let Some(referenced) = read_reference(rule_dir, &reference) else {
            continue;
        };

        // The rule name disambiguates: two rules may reference files
        // with identical names from different directories.
        let file_name = format!("ref-{}-{}.mdc", rule.name, sanitize_reference(&reference));
        let ref_path = rules_dir.join(file_name);

        let content = embedded_reference_content(
            &reference,
            &format!("rule '{}'", rule.name),
            &globs_yaml(&rule.frontmatter.globs),
            rule.always_apply(),
            &referenced,
        );

        files.insert(
            root_relative_key(&ref_path, &ctx.output_root),
            Artifact::File(content.clone()),
        );
        if !ctx.dry_run {
            fsutil::write_text(&ref_path, &content)?;
        }
    }
    Ok(())
}

/// Materialize `@` references found in an AGENTS file into a distributed
/// `.cursor/rules/` directory next to it, always-on for that subtree.
fn embed_agents_references(
    rule: &Rule,
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
    let local_rules_dir = agents_dir.join(".cursor").join("rules");

    for reference in references {
        let Some(referenced) = read_reference(agents_dir, &reference) else {
            continue;
        };

        let file_name = format!("ref-{}.mdc", sanitize_reference(&reference));
        let ref_path = local_rules_dir.join(file_name);

        let content = embedded_reference_content(
            &reference,
            &rule.path.file_name().unwrap_or_default().to_string_lossy(),
            "",
            true,
            &referenced,
        );

        files.insert(
            root_relative_key(&ref_path, &ctx.output_root),
            Artifact::File(content.clone()),
        );
        if !ctx.dry_run {
            fsutil::write_text(&ref_path, &content)?;
        }
    }
    Ok(())
}

/// Render an inherited `globs` frontmatter value.
fn globs_yaml(globs: &GlobsField) -> String {
    match globs {
        GlobsField::One(glob) => glob.clone(),
        GlobsField::Many(globs) => format!("[{}]", globs.join(", ")),
        _ => "[]".to_string(),
    }
}

fn embedded_reference_content(
    reference: &str,
    source: &str,
    globs: &str,
    always_apply: bool,
    referenced: &str,
) -> String {
    [
        "---".to_string(),
        format!("description: Embedded content of {reference} referenced by {source}"),
        format!("globs: {globs}"),
        format!("alwaysApply: {always_apply}"),
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
        referenced.to_string(),
    ]
    .join("\n")
}

/// Remove everything this adapter owns: the root forest's entries and
/// every distributed `.cursor/rules/` directory in the tree.
fn cleanup_cursor_rules(rules_dir: &Path, output_root: &Path) {
    fsutil::clear_dir_logged(rules_dir);

    let distributed: Vec<PathBuf> = WalkDir::new(output_root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_dir()
                && entry.file_name() == "rules"
                && entry.path() != rules_dir
                && entry
                    .path()
                    .parent()
                    .and_then(|parent| parent.file_name())
                    .is_some_and(|name| name == ".cursor")
        })
        .map(|entry| entry.into_path())
        .collect();

    for dir in distributed {
        fsutil::remove_dir_logged(&dir);
    }
}
