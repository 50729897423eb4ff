//! End-to-end pipeline tests: loader -> validator -> adapters over a
//! real temp directory, checking the cross-cutting guarantees
//! (idempotence, dry-run transparency, regeneration after deletion).

use pretty_assertions::assert_eq;
use rulesync_core::{Config, FileMap, RuleLoader, RuleSet, Vendor, validate_ruleset};
use rulesync_vendors::{GenerateContext, adapter_for};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = "\
version: 1.0
vendor_files:
  cursor: .cursor/rules
  claude: CLAUDE.md
ignored_directories:
  - node_modules
";

fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

/// A repository whose rule source lives inside the output root, the way
/// a real deployment co-locates them.
fn setup_fixture() -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        root,
        "rules/auto-rules/style.mdc",
        "---\ndescription: Style\nalwaysApply: true\nglobs: []\n---\n# Style\nUse tabs.",
    );
    write(
        root,
        "rules/contextual-rules/python.mdc",
        "---\ndescription: Python conventions\nglobs: \"*.py\"\n---\n# Python\nUse type hints.",
    );
    write(root, "svc/api/README.md", "api readme");
    write(root, "svc/api/AGENTS.md", "Start with @README.md.");

    (dir, Config::parse(CONFIG).unwrap())
}

fn load(config: &Config, root: &Path) -> RuleSet {
    RuleLoader::new(config, root).load_all_rules(root).unwrap()
}

fn generate_all(ruleset: &RuleSet, ctx: &GenerateContext) -> FileMap {
    let mut all = FileMap::new();
    for vendor in Vendor::ALL {
        all.extend(adapter_for(vendor).generate(ruleset, ctx).unwrap());
    }
    all
}

#[test]
fn test_fixture_loads_and_validates_clean() {
    let (dir, config) = setup_fixture();
    let ruleset = load(&config, dir.path());

    assert_eq!(ruleset.auto.len(), 1);
    assert_eq!(ruleset.contextual.len(), 1);
    assert_eq!(ruleset.agents.len(), 1);
    assert!(validate_ruleset(&ruleset).is_empty());
}

#[test]
fn test_claude_manifest_references_auto_rule() {
    let (dir, config) = setup_fixture();
    let root = dir.path();
    let ruleset = load(&config, root);

    let ctx = GenerateContext::new(root, root);
    adapter_for(Vendor::Claude).generate(&ruleset, &ctx).unwrap();

    let manifest = fs::read_to_string(root.join("CLAUDE.md")).unwrap();
    assert!(manifest.contains("- @rules/auto-rules/style.mdc"));
    assert!(manifest.contains("- `rules/contextual-rules/python.mdc`: Python conventions"));
    // The AGENTS file gets a sibling manifest for directory auto-loading.
    assert_eq!(
        fs::read_to_string(root.join("svc/api/CLAUDE.md")).unwrap(),
        "@AGENTS.md\n"
    );
}

#[test]
fn test_copilot_instructions_heading() {
    let (dir, config) = setup_fixture();
    let root = dir.path();
    let ruleset = load(&config, root);

    let ctx = GenerateContext::new(root, root);
    adapter_for(Vendor::Copilot).generate(&ruleset, &ctx).unwrap();

    let instructions = fs::read_to_string(root.join(".github/copilot-instructions.md")).unwrap();
    assert!(instructions.contains("## Style"));
    assert!(instructions.contains("Use tabs."));

    let python = fs::read_to_string(root.join(".github/instructions/python.instructions.md")).unwrap();
    assert!(python.contains("applyTo: \"*.py\""));
}

#[test]
fn test_generation_is_idempotent() {
    let (dir, config) = setup_fixture();
    let root = dir.path();
    let ctx = GenerateContext::new(root, root);

    let first = generate_all(&load(&config, root), &ctx);
    let second = generate_all(&load(&config, root), &ctx);

    assert_eq!(first, second);
}

#[test]
fn test_dry_run_matches_real_run_and_mutates_nothing() {
    let (dir, config) = setup_fixture();
    let root = dir.path();
    let ruleset = load(&config, root);

    let dry_ctx = GenerateContext::new(root, root).with_dry_run(true);
    let dry = generate_all(&ruleset, &dry_ctx);

    // Nothing appeared on disk during the dry run.
    assert!(!root.join("CLAUDE.md").exists());
    assert!(!root.join(".cursor").exists());
    assert!(!root.join(".continue").exists());
    assert!(!root.join(".github").exists());

    let real_ctx = GenerateContext::new(root, root);
    let real = generate_all(&ruleset, &real_ctx);

    let dry_keys: Vec<&String> = dry.keys().collect();
    let real_keys: Vec<&String> = real.keys().collect();
    assert_eq!(dry_keys, real_keys);
}

#[test]
fn test_removed_rule_disappears_from_output() {
    let (dir, config) = setup_fixture();
    let root = dir.path();
    let ctx = GenerateContext::new(root, root);

    let files = adapter_for(Vendor::Cursor)
        .generate(&load(&config, root), &ctx)
        .unwrap();
    assert!(files.contains_key(".cursor/rules/contextual-python.mdc"));
    assert!(
        root.join(".cursor/rules/contextual-python.mdc")
            .symlink_metadata()
            .is_ok()
    );

    fs::remove_file(root.join("rules/contextual-rules/python.mdc")).unwrap();

    let files = adapter_for(Vendor::Cursor)
        .generate(&load(&config, root), &ctx)
        .unwrap();
    assert!(!files.contains_key(".cursor/rules/contextual-python.mdc"));
    assert!(
        root.join(".cursor/rules/contextual-python.mdc")
            .symlink_metadata()
            .is_err()
    );
    // The surviving rule is still projected.
    assert!(files.contains_key(".cursor/rules/auto-style.mdc"));
}

#[test]
fn test_agents_reference_materialized_for_symlink_forest_vendors() {
    let (dir, config) = setup_fixture();
    let root = dir.path();
    let ruleset = load(&config, root);
    let ctx = GenerateContext::new(root, root);

    let cursor = adapter_for(Vendor::Cursor).generate(&ruleset, &ctx).unwrap();
    let cursor_ref = cursor.get("svc/api/.cursor/rules/ref-README.mdc").unwrap();
    assert!(cursor_ref.to_string().contains("api readme"));

    let continue_files = adapter_for(Vendor::Continue).generate(&ruleset, &ctx).unwrap();
    let continue_ref = continue_files
        .get(".continue/rules/ref-svc-api-README.md")
        .unwrap();
    assert!(continue_ref.to_string().contains("api readme"));
    assert!(continue_ref.to_string().contains("globs: svc/api/**/*"));
}

#[test]
fn test_vendors_own_disjoint_subtrees() {
    let (dir, config) = setup_fixture();
    let root = dir.path();
    let ruleset = load(&config, root);
    let ctx = GenerateContext::new(root, root);

    let maps: Vec<FileMap> = Vendor::ALL
        .iter()
        .map(|vendor| adapter_for(*vendor).generate(&ruleset, &ctx).unwrap())
        .collect();

    // No two adapters claim the same output path.
    for (i, a) in maps.iter().enumerate() {
        for b in maps.iter().skip(i + 1) {
            for key in a.keys() {
                assert!(!b.contains_key(key), "path generated twice: {key}");
            }
        }
    }

    // Regenerating one vendor must not disturb another's artifacts.
    adapter_for(Vendor::Claude).generate(&ruleset, &ctx).unwrap();
    assert!(root.join(".cursor/rules/auto-style.mdc").symlink_metadata().is_ok());
    assert!(root.join(".github/copilot-instructions.md").exists());
}
