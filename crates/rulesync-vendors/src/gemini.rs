//! Gemini CLI adapter.
//!
//! Same `@path` reference format as Claude, projected into `GEMINI.md`
//! files. Owns every `GEMINI.md` under the output root.

use crate::adapter::{GenerateContext, VendorAdapter};
use crate::error::Result;
use crate::manifest::{self, ManifestStyle};
use rulesync_core::{FileMap, RuleSet, Vendor};

const STYLE: ManifestStyle = ManifestStyle {
    file_name: "GEMINI.md",
    heading: "Gemini CLI Context",
    loader_name: "Gemini CLI",
};

pub struct GeminiAdapter;

impl VendorAdapter for GeminiAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Gemini
    }

    fn generate(&self, ruleset: &RuleSet, ctx: &GenerateContext) -> Result<FileMap> {
        manifest::generate(&STYLE, ruleset, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulesync_core::frontmatter::parse_frontmatter;
    use rulesync_core::{Rule, RuleKind};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generates_gemini_md_and_siblings() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("svc")).unwrap();
        fs::write(root.join("svc/AGENTS.md"), "svc context").unwrap();

        let (frontmatter, content) = parse_frontmatter("svc context");
        let ruleset = RuleSet {
            auto: vec![],
            contextual: vec![],
            agents: vec![Rule {
                name: "AGENTS".to_string(),
                kind: RuleKind::Agents,
                path: root.join("svc/AGENTS.md"),
                frontmatter,
                content,
            }],
        };

        let ctx = GenerateContext::new(root, root.join("input"));
        let files = GeminiAdapter.generate(&ruleset, &ctx).unwrap();

        assert!(files.contains_key("GEMINI.md"));
        assert!(files.contains_key("svc/GEMINI.md"));
        assert_eq!(
            fs::read_to_string(root.join("svc/GEMINI.md")).unwrap(),
            "@AGENTS.md\n"
        );
        let root_manifest = fs::read_to_string(root.join("GEMINI.md")).unwrap();
        assert!(root_manifest.contains("# Gemini CLI Context"));
        assert!(root_manifest.contains("Gemini CLI automatically loads GEMINI.md files"));
    }
}
