//! Vendor projections for rulesync.
//!
//! Five adapters share one contract: consume a read-only [`RuleSet`] and
//! project it into a vendor-specific file layout under the output root,
//! returning the complete artifact map. Each adapter owns a disjoint
//! subtree and regenerates it from scratch on every run, so removing a
//! source rule removes its artifacts. Skill sync symlinks shared skill
//! directories into vendor destinations with conflict detection.

pub mod adapter;
pub mod claude;
pub mod continue_dev;
pub mod copilot;
pub mod cursor;
pub mod error;
pub mod fsutil;
pub mod gemini;
mod manifest;
pub mod refs;
pub mod skills;

pub use adapter::{GenerateContext, VendorAdapter, adapter_for};
pub use claude::ClaudeAdapter;
pub use continue_dev::ContinueAdapter;
pub use copilot::CopilotAdapter;
pub use cursor::CursorAdapter;
pub use error::{Error, Result};
pub use gemini::GeminiAdapter;
pub use skills::sync_skills;
