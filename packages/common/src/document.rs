use crate::error::TokenError;
use crate::ordering::compare_keys;
use crate::result::TokenResult;
use serde_json::{Map, Value};

/// Keys starting with this prefix carry metadata (`$type`, `$value`,
/// `$description`, ...) and are never children of a group.
pub const METADATA_PREFIX: &str = "$";

/// Token kind used for color leaves.
pub const COLOR_KIND: &str = "color";

/// A parsed token document. The root is always a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDocument {
    root: Map<String, Value>,
}

impl TokenDocument {
    /// Parse a document from JSON text. `origin` names the source in errors.
    pub fn parse(source: &str, origin: &str) -> TokenResult<Self> {
        let value: Value = serde_json::from_str(source).map_err(|source| TokenError::Parse {
            path: origin.to_string(),
            source,
        })?;
        Self::from_value(value, origin)
    }

    pub fn from_value(value: Value, origin: &str) -> TokenResult<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(TokenError::NotAnObject {
                path: origin.to_string(),
            }),
        }
    }

    pub fn root(&self) -> TokenGroup<'_> {
        TokenGroup::new(Some(&self.root))
    }

    /// Walk down a path of keys. Missing or non-object steps yield an
    /// empty group.
    pub fn group(&self, path: &[&str]) -> TokenGroup<'_> {
        path.iter().fold(self.root(), |group, key| group.group(key))
    }
}

/// Borrowed view over a mapping of token nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenGroup<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> TokenGroup<'a> {
    pub fn new(map: Option<&'a Map<String, Value>>) -> Self {
        Self { map }
    }

    pub fn from_node(node: &'a Value) -> Self {
        Self::new(node.as_object())
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|map| map.get(key))
    }

    pub fn group(&self, key: &str) -> TokenGroup<'a> {
        TokenGroup::new(self.get(key).and_then(Value::as_object))
    }

    /// Child entries in key order, metadata keys excluded.
    pub fn entries(&self) -> Vec<(&'a str, &'a Value)> {
        let Some(map) = self.map else {
            return Vec::new();
        };
        let mut entries: Vec<(&'a str, &'a Value)> = map
            .iter()
            .filter(|(key, _)| !key.starts_with(METADATA_PREFIX))
            .map(|(key, value)| (key.as_str(), value))
            .collect();
        entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
        entries
    }
}

/// `$type` of a node, if it is a token.
pub fn token_kind(node: &Value) -> Option<&str> {
    node.get("$type").and_then(Value::as_str)
}

/// `$value` of a node. An explicit `null` counts as absent.
pub fn token_value(node: &Value) -> Option<&Value> {
    node.get("$value").filter(|value| !value.is_null())
}

/// Numeric `$value` of a node.
pub fn token_number(node: &Value) -> Option<f64> {
    token_value(node).and_then(Value::as_f64)
}

pub fn is_color_token(node: &Value) -> bool {
    token_kind(node) == Some(COLOR_KIND)
}

/// Textual form of a scalar: strings verbatim, integral numbers without a
/// fraction, booleans as words. Structured values use compact JSON.
pub fn literal_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => match number.as_f64() {
            Some(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", n as i64),
            Some(n) => format!("{}", n),
            None => number.to_string(),
        },
        Value::Bool(flag) => flag.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Like [`literal_text`], but empty strings, zero, `false` and `null` count
/// as no literal at all.
pub fn present_literal(value: &Value) -> Option<String> {
    let present = match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    present.then(|| literal_text(value))
}
