//! Core model for rulesync.
//!
//! This crate owns the vendor-independent half of the system: loading
//! behavioral-rule documents (markdown with YAML frontmatter) from
//! configured locations, normalizing them into [`Rule`]/[`RuleSet`], and
//! validating their structural invariants. Vendor projections live in
//! `rulesync-vendors`; this crate never writes to the output tree.

pub mod artifact;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod loader;
pub mod paths;
pub mod rule;
pub mod validate;
pub mod vendor;

pub use artifact::{Artifact, FileMap};
pub use config::{Config, SkillsConfig};
pub use error::{Error, Result};
pub use frontmatter::{Frontmatter, GlobsField, parse_frontmatter};
pub use loader::{RuleLoader, expand_braces};
pub use rule::{Rule, RuleKind, RuleSet, load_rule};
pub use validate::{validate_rule, validate_ruleset};
pub use vendor::Vendor;
