//! The tree data model compared by evmatch.
//!
//! A [`Tree`] is a tagged union. Mappings are decomposed key by key, text is
//! kept as its own variant so a known field can be decoded from its JSON
//! encoding, and every other value is an opaque scalar compared by equality.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{TypeError, TypeResult};

/// A node of semi-structured data.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Tree {
    /// String keys mapped to subtrees.
    Mapping(BTreeMap<String, Tree>),
    /// A text value, possibly the JSON encoding of a mapping.
    Text(String),
    /// Any other value: numbers, booleans, null, arrays.
    ///
    /// Should never hold a JSON object or string; use [`Tree::scalar`] or
    /// `From<Value>` to construct one. See [`Tree::is_well_formed`].
    Scalar(Value),
}

/// The variant tag of a [`Tree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TreeKind {
    Mapping,
    Text,
    Scalar,
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapping => write!(f, "mapping"),
            Self::Text => write!(f, "text"),
            Self::Scalar => write!(f, "scalar"),
        }
    }
}

impl Tree {
    /// An empty mapping.
    pub fn empty() -> Self {
        Self::Mapping(BTreeMap::new())
    }

    /// Build a tree from any JSON-convertible value.
    ///
    /// Objects and strings land in their dedicated variants, so this is the
    /// safe way to build a scalar.
    pub fn scalar(value: impl Into<Value>) -> Self {
        let value: Value = value.into();
        Self::from(value)
    }

    /// Parse a JSON document of any shape.
    pub fn from_json_str(text: &str) -> TypeResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from(value))
    }

    /// Parse text that must encode a JSON object.
    pub fn parse_mapping(text: &str) -> TypeResult<Self> {
        let tree = Self::from_json_str(text)?;
        match tree.kind() {
            TreeKind::Mapping => Ok(tree),
            found => Err(TypeError::NotAMapping { found }),
        }
    }

    pub fn kind(&self) -> TreeKind {
        match self {
            Self::Mapping(_) => TreeKind::Mapping,
            Self::Text(_) => TreeKind::Text,
            Self::Scalar(_) => TreeKind::Scalar,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Tree>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `false` if any scalar in the tree holds an object or a
    /// string, which belong in the `Mapping` and `Text` variants.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::Mapping(map) => map.values().all(Tree::is_well_formed),
            Self::Text(_) => true,
            Self::Scalar(value) => !matches!(value, Value::Object(_) | Value::String(_)),
        }
    }

    /// Look up a direct child of a mapping.
    pub fn get(&self, key: &str) -> Option<&Tree> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Convert back into a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Mapping(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_value()))
                    .collect::<Map<String, Value>>(),
            ),
            Self::Text(text) => Value::String(text.clone()),
            Self::Scalar(value) => value.clone(),
        }
    }
}

/// Equality follows JSON semantics with numeric comparison of numbers, so
/// `1` equals `1.0`. Strings, booleans and numbers never equal each other.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Mapping(a), Self::Mapping(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k).is_some_and(|w| v == w))
            }
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Scalar(a), Self::Scalar(b)) => values_equal(a, b),
            // A malformed scalar still equals the tree it should have been.
            (Self::Scalar(value), tree) | (tree, Self::Scalar(value)) => {
                matches!(value, Value::Object(_) | Value::String(_))
                    && values_equal(value, &tree.to_value())
            }
            _ => false,
        }
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| values_equal(v, w)))
        }
        _ => a == b,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for Tree {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Mapping(
                map.into_iter().map(|(k, v)| (k, Tree::from(v))).collect(),
            ),
            Value::String(text) => Self::Text(text),
            other => Self::Scalar(other),
        }
    }
}

impl From<Tree> for Value {
    fn from(tree: Tree) -> Self {
        match tree {
            Tree::Mapping(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
            Tree::Text(text) => Value::String(text),
            Tree::Scalar(value) => value,
        }
    }
}

impl From<&str> for Tree {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Tree {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl FromIterator<(String, Tree)> for Tree {
    fn from_iter<I: IntoIterator<Item = (String, Tree)>>(iter: I) -> Self {
        Self::Mapping(iter.into_iter().collect())
    }
}

/// Diagnostic rendering: text is written raw, everything else as compact JSON.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Mapping(_) => write!(f, "{}", self.to_value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_values_map_to_variants() {
        assert_eq!(Tree::from(json!({})).kind(), TreeKind::Mapping);
        assert_eq!(Tree::from(json!("x")).kind(), TreeKind::Text);
        assert_eq!(Tree::from(json!(1)).kind(), TreeKind::Scalar);
        assert_eq!(Tree::from(json!(null)).kind(), TreeKind::Scalar);
        assert_eq!(Tree::from(json!([1, {"a": 2}])).kind(), TreeKind::Scalar);
    }

    #[test]
    fn scalar_constructor_routes_strings_to_text() {
        assert_eq!(Tree::scalar("hello"), Tree::Text("hello".into()));
        assert_eq!(Tree::scalar(true), Tree::Scalar(json!(true)));
    }

    #[test]
    fn nested_mappings_are_decomposed() {
        let tree = Tree::from(json!({"context": {"foo": "bar"}}));
        let inner = tree.get("context").unwrap();
        assert!(inner.is_mapping());
        assert_eq!(inner.get("foo").and_then(Tree::as_text), Some("bar"));
    }

    #[test]
    fn arrays_stay_opaque() {
        let tree = Tree::from(json!({"list": [{"a": 1}]}));
        assert!(matches!(tree.get("list"), Some(Tree::Scalar(Value::Array(_)))));
    }

    #[test]
    fn to_value_restores_json() {
        let value = json!({"a": {"b": [1, 2]}, "c": "d", "e": null});
        assert_eq!(Tree::from(value.clone()).to_value(), value);
    }

    #[test]
    fn serde_uses_plain_json() {
        let tree: Tree = serde_json::from_str(r#"{"x": 1, "y": "z"}"#).unwrap();
        assert_eq!(tree.get("x"), Some(&Tree::scalar(1)));
        assert_eq!(serde_json::to_string(&tree).unwrap(), r#"{"x":1,"y":"z"}"#);
    }

    #[test]
    fn parse_mapping_accepts_objects() {
        let tree = Tree::parse_mapping(r#"{"x": 1}"#).unwrap();
        assert_eq!(tree, Tree::from(json!({"x": 1})));
    }

    #[test]
    fn parse_mapping_rejects_invalid_json() {
        let err = Tree::parse_mapping("not json").unwrap_err();
        assert!(matches!(err, TypeError::Json(_)));
    }

    #[test]
    fn parse_mapping_rejects_non_objects() {
        let err = Tree::parse_mapping("[1, 2]").unwrap_err();
        assert!(matches!(err, TypeError::NotAMapping { found: TreeKind::Scalar }));
        let err = Tree::parse_mapping(r#""text""#).unwrap_err();
        assert!(matches!(err, TypeError::NotAMapping { found: TreeKind::Text }));
    }

    #[test]
    fn integers_equal_floats_of_same_value() {
        assert_eq!(Tree::from(json!({"score": 1.0})), Tree::from(json!({"score": 1})));
        assert_eq!(Tree::scalar(json!([1, {"a": 2.0}])), Tree::scalar(json!([1.0, {"a": 2}])));
        assert_ne!(Tree::scalar(1.5), Tree::scalar(1));
        assert_ne!(Tree::scalar(u64::MAX), Tree::scalar(-1));
    }

    #[test]
    fn kinds_stay_distinct() {
        assert_ne!(Tree::scalar(1), Tree::from("1"));
        assert_ne!(Tree::scalar(true), Tree::scalar(1));
        assert_ne!(Tree::scalar(Value::Null), Tree::scalar(false));
    }

    #[test]
    fn malformed_scalars_are_detected() {
        let text = Tree::Scalar(json!("x"));
        let object = Tree::Scalar(json!({"a": 1}));
        assert!(!text.is_well_formed());
        assert!(!Tree::from_iter([("k".to_string(), object.clone())]).is_well_formed());
        assert!(Tree::from(json!({"a": [1, "x"], "b": "c"})).is_well_formed());

        assert_eq!(text, Tree::from("x"));
        assert_eq!(object, Tree::from(json!({"a": 1.0})));
        assert_ne!(Tree::Scalar(json!("1")), Tree::scalar(1));
    }

    #[test]
    fn display_renders_text_raw() {
        assert_eq!(Tree::from("bar").to_string(), "bar");
        assert_eq!(Tree::scalar(1).to_string(), "1");
        assert_eq!(Tree::scalar(Value::Null).to_string(), "null");
        assert_eq!(Tree::from(json!({"x": 1})).to_string(), r#"{"x":1}"#);
    }
}
