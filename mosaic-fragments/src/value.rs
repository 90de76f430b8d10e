//! Attribute values and their source-literal representation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A class-attribute value, rendered as a source literal.
///
/// Map and list entries keep insertion order; attribute emission never
/// sorts or deduplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<AttrValue>),
    Map(IndexMap<String, AttrValue>),
}

impl AttrValue {
    /// Render this value as a Python-flavored source literal.
    ///
    /// Numbers print as numbers (floats always keep a decimal point),
    /// booleans as `True`/`False`, strings single-quoted, lists as `[..]`,
    /// and maps as `{'key': value, ...}` in insertion order.
    pub fn to_literal(&self) -> String {
        match self {
            Self::Bool(true) => "True".to_string(),
            Self::Bool(false) => "False".to_string(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => {
                if v.is_finite() && v.fract() == 0.0 {
                    format!("{v:.1}")
                } else {
                    v.to_string()
                }
            }
            Self::Str(s) => format!("'{}'", escape_single_quoted(s)),
            Self::List(items) => {
                let items: Vec<String> = items.iter().map(Self::to_literal).collect();
                format!("[{}]", items.join(", "))
            }
            Self::Map(entries) => {
                let entries: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| {
                        format!("'{}': {}", escape_single_quoted(key), value.to_literal())
                    })
                    .collect();
                format!("{{{}}}", entries.join(", "))
            }
        }
    }
}

fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(v: Vec<AttrValue>) -> Self {
        Self::List(v)
    }
}

impl From<IndexMap<String, AttrValue>> for AttrValue {
    fn from(v: IndexMap<String, AttrValue>) -> Self {
        Self::Map(v)
    }
}

impl<V: Into<AttrValue>, const N: usize> From<[(&str, V); N]> for AttrValue {
    fn from(entries: [(&str, V); N]) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.into()))
                .collect(),
        )
    }
}
