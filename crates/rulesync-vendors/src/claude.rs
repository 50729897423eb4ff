//! Claude Code adapter.
//!
//! Projects the ruleset as a root `CLAUDE.md` manifest using `@path`
//! references (expanded by Claude itself) plus a one-line sibling
//! `CLAUDE.md` next to every non-root AGENTS file. Owns every `CLAUDE.md`
//! under the output root.

use crate::adapter::{GenerateContext, VendorAdapter};
use crate::error::Result;
use crate::manifest::{self, ManifestStyle};
use rulesync_core::{FileMap, RuleSet, Vendor};

const STYLE: ManifestStyle = ManifestStyle {
    file_name: "CLAUDE.md",
    heading: "AI Agent Context",
    loader_name: "Claude",
};

pub struct ClaudeAdapter;

impl VendorAdapter for ClaudeAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Claude
    }

    fn generate(&self, ruleset: &RuleSet, ctx: &GenerateContext) -> Result<FileMap> {
        manifest::generate(&STYLE, ruleset, ctx)
    }
}
