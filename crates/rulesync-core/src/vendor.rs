//! The closed set of supported vendors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported AI-coding-assistant vendor.
///
/// Each vendor owns a disjoint subtree of the output directory; the
/// matching adapter in `rulesync-vendors` is the only writer of that
/// subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Cursor,
    Claude,
    Continue,
    Copilot,
    Gemini,
}

impl Vendor {
    /// All vendors, in the order they are generated for.
    pub const ALL: [Vendor; 5] = [
        Vendor::Cursor,
        Vendor::Claude,
        Vendor::Continue,
        Vendor::Copilot,
        Vendor::Gemini,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Cursor => "cursor",
            Vendor::Claude => "claude",
            Vendor::Continue => "continue",
            Vendor::Copilot => "copilot",
            Vendor::Gemini => "gemini",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vendor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cursor" => Ok(Vendor::Cursor),
            "claude" => Ok(Vendor::Claude),
            "continue" => Ok(Vendor::Continue),
            "copilot" => Ok(Vendor::Copilot),
            "gemini" => Ok(Vendor::Gemini),
            other => Err(format!(
                "unknown vendor '{other}' (expected one of: cursor, claude, continue, copilot, gemini)"
            )),
        }
    }
}
