//! Path-tracking reader over an untyped document tree.
//!
//! Every accessor that fails reports the dotted path of the offending value,
//! so build code never has to thread paths by hand.

use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::schema::Vocabulary;

/// Path reported for the document root.
pub const ROOT: &str = "<document>";

#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    pub fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: String::new(),
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn path(&self) -> String {
        if self.path.is_empty() {
            ROOT.to_string()
        } else {
            self.path.clone()
        }
    }

    pub fn key_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn index_path(&self, index: usize) -> String {
        format!("{}[{}]", self.path, index)
    }

    /// Whether the mapping has `key` at all, even with a null value.
    pub fn has_key(&self, key: &str) -> bool {
        self.value
            .as_object()
            .is_some_and(|map| map.contains_key(key))
    }

    /// Child under `key`. Absent keys and explicit nulls both yield `None`.
    pub fn get(&self, key: &str) -> Option<Node<'a>> {
        match self.value.as_object()?.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(Node {
                value,
                path: self.key_path(key),
            }),
        }
    }

    pub fn require(&self, key: &str) -> Result<Node<'a>, ConfigError> {
        self.get(key).ok_or_else(|| ConfigError::MissingRequired {
            path: self.key_path(key),
        })
    }

    /// A validation error located at this node.
    pub fn invalid(&self, constraint: impl Into<String>) -> ConfigError {
        ConfigError::Validation {
            path: self.path(),
            constraint: constraint.into(),
        }
    }

    fn expected(&self, what: &str) -> ConfigError {
        self.invalid(format!("expected {what}, found {}", kind_name(self.value)))
    }

    // =========================================================================
    // Shape accessors
    // =========================================================================

    pub fn mapping(&self) -> Result<&'a Map<String, Value>, ConfigError> {
        self.value.as_object().ok_or_else(|| self.expected("a mapping"))
    }

    /// Entries of a mapping in document order.
    pub fn entries(&self) -> Result<Vec<(&'a str, Node<'a>)>, ConfigError> {
        Ok(self
            .mapping()?
            .iter()
            .map(|(key, value)| {
                (
                    key.as_str(),
                    Node {
                        value,
                        path: self.key_path(key),
                    },
                )
            })
            .collect())
    }

    /// Items of a sequence in document order.
    pub fn items(&self) -> Result<Vec<Node<'a>>, ConfigError> {
        let items = self.value.as_array().ok_or_else(|| self.expected("a sequence"))?;
        Ok(items
            .iter()
            .enumerate()
            .map(|(i, value)| Node {
                value,
                path: self.index_path(i),
            })
            .collect())
    }

    /// A string scalar. Numbers are accepted and rendered as written.
    pub fn as_string(&self) -> Result<String, ConfigError> {
        match self.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(self.expected("a string")),
        }
    }

    pub fn as_bool(&self) -> Result<bool, ConfigError> {
        self.value.as_bool().ok_or_else(|| self.expected("a boolean"))
    }

    pub fn as_u64(&self) -> Result<u64, ConfigError> {
        self.value
            .as_u64()
            .ok_or_else(|| self.expected("a non-negative integer"))
    }

    pub fn as_f64(&self) -> Result<f64, ConfigError> {
        self.value.as_f64().ok_or_else(|| self.expected("a number"))
    }

    pub fn as_string_list(&self) -> Result<Vec<String>, ConfigError> {
        self.items()?.iter().map(|item| item.as_string()).collect()
    }

    pub fn as_vocabulary<V: Vocabulary>(&self) -> Result<V, ConfigError> {
        let raw = self.as_string()?;
        V::parse(&raw).ok_or_else(|| {
            self.invalid(format!("unknown value '{raw}', expected one of: {}", V::expected()))
        })
    }

    // =========================================================================
    // Keyed accessors
    // =========================================================================

    pub fn string(&self, key: &str) -> Result<String, ConfigError> {
        self.require(key)?.as_string()
    }

    pub fn opt_string(&self, key: &str) -> Result<Option<String>, ConfigError> {
        self.get(key).map(|n| n.as_string()).transpose()
    }

    pub fn string_or(&self, key: &str, default: &str) -> Result<String, ConfigError> {
        Ok(self.opt_string(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// Like [`Node::opt_string`], but an absent key yields `default` while an
    /// explicit null yields `None`.
    pub fn nullable_string_or(&self, key: &str, default: Option<&str>) -> Result<Option<String>, ConfigError> {
        if self.has_key(key) {
            self.opt_string(key)
        } else {
            Ok(default.map(str::to_string))
        }
    }

    pub fn bool_or(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        self.get(key).map_or(Ok(default), |n| n.as_bool())
    }

    pub fn opt_u64(&self, key: &str) -> Result<Option<u64>, ConfigError> {
        self.get(key).map(|n| n.as_u64()).transpose()
    }

    pub fn u64_or(&self, key: &str, default: u64) -> Result<u64, ConfigError> {
        Ok(self.opt_u64(key)?.unwrap_or(default))
    }

    pub fn opt_u32(&self, key: &str) -> Result<Option<u32>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(node) => {
                let value = node.as_u64()?;
                u32::try_from(value)
                    .map(Some)
                    .map_err(|_| node.invalid(format!("value {value} is out of range")))
            }
        }
    }

    pub fn u32_or(&self, key: &str, default: u32) -> Result<u32, ConfigError> {
        Ok(self.opt_u32(key)?.unwrap_or(default))
    }

    pub fn opt_f64(&self, key: &str) -> Result<Option<f64>, ConfigError> {
        self.get(key).map(|n| n.as_f64()).transpose()
    }

    /// A list of strings; absent or null yields an empty list.
    pub fn string_list(&self, key: &str) -> Result<Vec<String>, ConfigError> {
        self.get(key).map_or(Ok(Vec::new()), |n| n.as_string_list())
    }

    pub fn vocabulary_or<V: Vocabulary>(&self, key: &str, default: V) -> Result<V, ConfigError> {
        self.get(key).map_or(Ok(default), |n| n.as_vocabulary())
    }
}

/// Name of a value's shape, for diagnostics.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
