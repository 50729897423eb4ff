//! Structural validation over a loaded [`RuleSet`].

use crate::frontmatter::GlobsField;
use crate::rule::{Rule, RuleKind, RuleSet};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Check one rule against the per-kind invariants.
///
/// Returns error strings; empty means valid.
pub fn validate_rule(rule: &Rule) -> Vec<String> {
    let mut errors = Vec::new();

    // AGENTS files may carry no frontmatter at all.
    if rule.kind != RuleKind::Agents && rule.description().is_empty() {
        errors.push(format!(
            "Rule '{}' missing required 'description' in frontmatter",
            rule.name
        ));
    }

    if matches!(rule.kind, RuleKind::Auto | RuleKind::Contextual) {
        match rule.frontmatter.globs {
            GlobsField::Absent => errors.push(format!(
                "Rule '{}' missing 'globs' field in frontmatter (required for Cursor)",
                rule.name
            )),
            GlobsField::Invalid => errors.push(format!(
                "Rule '{}' has invalid 'globs' field (must be string, list, or empty)",
                rule.name
            )),
            _ => {}
        }
    }

    if rule.kind == RuleKind::Auto {
        if !rule.always_apply() {
            errors.push(format!(
                "Auto-rule '{}' must have 'alwaysApply: true' in frontmatter",
                rule.name
            ));
        }
        if rule.frontmatter.always_apply.is_none() {
            errors.push(format!(
                "Auto-rule '{}' missing 'alwaysApply' field in frontmatter",
                rule.name
            ));
        }
    }

    if rule.kind == RuleKind::Contextual && rule.always_apply() {
        errors.push(format!(
            "Contextual rule '{}' should have 'alwaysApply: false' in frontmatter",
            rule.name
        ));
    }

    // AGENTS files are scoped by directory and need no globs, but a
    // present value still has to be well-typed.
    if rule.kind == RuleKind::Agents && rule.frontmatter.globs == GlobsField::Invalid {
        errors.push(format!(
            "Rule '{}' has invalid 'globs' field (must be string or list)",
            rule.name
        ));
    }

    errors
}

/// Validate a complete ruleset: per-rule checks in iteration order, then
/// a collision scan over the type-dependent key (full path for AGENTS
/// files, name otherwise).
pub fn validate_ruleset(ruleset: &RuleSet) -> Vec<String> {
    let mut issues = Vec::new();

    for rule in ruleset.all_rules() {
        issues.extend(validate_rule(rule));
    }

    let mut seen: HashMap<String, RuleKind> = HashMap::new();
    for rule in ruleset.all_rules() {
        let key = match rule.kind {
            RuleKind::Agents => rule.path.to_string_lossy().into_owned(),
            _ => rule.name.clone(),
        };

        match seen.entry(key) {
            Entry::Occupied(existing) => issues.push(format!(
                "CONFLICT: Rule name '{}' exists in both {} and {}",
                rule.name,
                existing.get(),
                rule.kind
            )),
            Entry::Vacant(slot) => {
                slot.insert(rule.kind);
            }
        }
    }

    issues
}
