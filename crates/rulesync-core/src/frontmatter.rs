//! YAML frontmatter parsing for rule documents.
//!
//! A rule file may start with a `---`-delimited YAML mapping followed by a
//! markdown body. Parsing is deliberately lenient: anything that is not a
//! well-formed frontmatter block degrades to "no frontmatter" with the
//! whole text as body, never a hard failure.

use serde_yaml::{Mapping, Value};

const DELIMITER: &str = "---";

/// The shape of the `globs` frontmatter key.
///
/// The validator needs to distinguish an absent key from a present-but-null
/// one, and a well-typed value from a wrongly-typed one, so the raw shape
/// is preserved instead of eagerly normalizing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GlobsField {
    #[default]
    Absent,
    Null,
    One(String),
    Many(Vec<String>),
    /// Present but neither null, string, nor sequence of strings.
    Invalid,
}

impl GlobsField {
    pub fn is_present(&self) -> bool {
        !matches!(self, GlobsField::Absent)
    }

    /// Normalized pattern list: a single string wraps into one element,
    /// anything that is not a string or string sequence is empty.
    pub fn patterns(&self) -> Vec<String> {
        match self {
            GlobsField::One(glob) => vec![glob.clone()],
            GlobsField::Many(globs) => globs.clone(),
            _ => Vec::new(),
        }
    }
}

/// Typed view of a rule's frontmatter.
///
/// The three keys the core logic reads are first-class fields; everything
/// else rides along in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    pub description: Option<String>,
    pub globs: GlobsField,
    /// `None` when the `alwaysApply` key is absent. Only a YAML boolean
    /// `true` counts as true.
    pub always_apply: Option<bool>,
    pub extra: Mapping,
}

impl Frontmatter {
    pub fn from_mapping(mapping: Mapping) -> Self {
        let mut out = Frontmatter::default();

        for (key, value) in mapping {
            let Value::String(key) = key else {
                out.extra.insert(key, value);
                continue;
            };
            if key == "description" {
                if let Value::String(text) = value {
                    out.description = Some(text);
                }
            } else if key == "globs" {
                out.globs = globs_field(value);
            } else if key == "alwaysApply" {
                out.always_apply = Some(matches!(value, Value::Bool(true)));
            } else {
                out.extra.insert(Value::String(key), value);
            }
        }
        out
    }
}

fn globs_field(value: Value) -> GlobsField {
    match value {
        Value::Null => GlobsField::Null,
        Value::String(glob) => GlobsField::One(glob),
        Value::Sequence(items) => {
            let mut globs = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(glob) => globs.push(glob),
                    _ => return GlobsField::Invalid,
                }
            }
            GlobsField::Many(globs)
        }
        _ => GlobsField::Invalid,
    }
}

/// Split text into (frontmatter, body).
///
/// The text is split into three parts on the `---` delimiter; fewer parts,
/// or a middle part that does not parse as a YAML mapping, means the whole
/// text is body. A null middle part (empty block) is an empty mapping.
pub fn parse_frontmatter(text: &str) -> (Frontmatter, String) {
    if !text.starts_with(DELIMITER) {
        return (Frontmatter::default(), text.to_string());
    }

    let mut parts = text.splitn(3, DELIMITER);
    let (Some(_), Some(header), Some(body)) = (parts.next(), parts.next(), parts.next()) else {
        return (Frontmatter::default(), text.to_string());
    };

    let mapping = match serde_yaml::from_str::<Value>(header) {
        Ok(Value::Mapping(mapping)) => mapping,
        Ok(Value::Null) => Mapping::new(),
        _ => return (Frontmatter::default(), text.to_string()),
    };

    (Frontmatter::from_mapping(mapping), body.trim().to_string())
}
