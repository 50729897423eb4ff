//! The common adapter contract and the vendor dispatch.

use crate::claude::ClaudeAdapter;
use crate::continue_dev::ContinueAdapter;
use crate::copilot::CopilotAdapter;
use crate::cursor::CursorAdapter;
use crate::error::Result;
use crate::gemini::GeminiAdapter;
use rulesync_core::{FileMap, RuleSet, Vendor};
use std::path::PathBuf;

/// Context for one generation run, shared read-only by every adapter.
#[derive(Debug, Clone)]
pub struct GenerateContext {
    /// Repository root the artifacts land in.
    pub output_root: PathBuf,
    /// Directory containing the rules/ source tree.
    pub input_root: PathBuf,
    /// When set, adapters return the full preview map but touch nothing.
    pub dry_run: bool,
}

impl GenerateContext {
    pub fn new(output_root: impl Into<PathBuf>, input_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            input_root: input_root.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// One vendor projection.
///
/// Each implementation owns a disjoint subtree of the output root: it
/// removes its own stale artifacts before writing new ones and never
/// touches a sibling vendor's files. The returned map is the complete
/// set of artifacts the run produced (or would produce, under dry-run).
pub trait VendorAdapter {
    /// Which vendor this adapter projects for.
    fn vendor(&self) -> Vendor;

    /// Project the ruleset into this vendor's layout.
    fn generate(&self, ruleset: &RuleSet, ctx: &GenerateContext) -> Result<FileMap>;
}

/// Look up the adapter for a vendor.
pub fn adapter_for(vendor: Vendor) -> Box<dyn VendorAdapter> {
    match vendor {
        Vendor::Cursor => Box::new(CursorAdapter),
        Vendor::Claude => Box::new(ClaudeAdapter),
        Vendor::Continue => Box::new(ContinueAdapter),
        Vendor::Copilot => Box::new(CopilotAdapter),
        Vendor::Gemini => Box::new(GeminiAdapter),
    }
}
