//! Typed field access over raw JSON objects.
//!
//! Every accessor fails with `MissingField` when the key is absent and with
//! `InvalidField` when the value has the wrong shape. Nothing is defaulted.

use serde_json::{Map, Value};

use crate::error::{Document, FplError, Result};

/// A JSON object tagged with the document it came from, for error reporting.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    document: Document,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn new(document: Document, map: &'a Map<String, Value>) -> Self {
        Self { document, map }
    }

    pub fn value(&self, key: &str) -> Result<&'a Value> {
        self.map
            .get(key)
            .ok_or_else(|| FplError::missing(self.document, key))
    }

    pub fn int(&self, key: &str) -> Result<i64> {
        self.value(key)?
            .as_i64()
            .ok_or_else(|| FplError::invalid(self.document, key, "an integer"))
    }

    /// Non-negative integer that fits in `u32`.
    pub fn count(&self, key: &str) -> Result<u32> {
        self.value(key)?
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| FplError::invalid(self.document, key, "a non-negative integer"))
    }

    pub fn total(&self, key: &str) -> Result<u64> {
        self.value(key)?
            .as_u64()
            .ok_or_else(|| FplError::invalid(self.document, key, "a non-negative integer"))
    }

    /// Required key whose value may be `null`.
    pub fn opt_count(&self, key: &str) -> Result<Option<u32>> {
        match self.value(key)? {
            Value::Null => Ok(None),
            _ => self.count(key).map(Some),
        }
    }

    pub fn string(&self, key: &str) -> Result<String> {
        self.value(key)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| FplError::invalid(self.document, key, "a string"))
    }

    /// A JSON number, or a string holding one (the API sends `"5.2"` for form).
    pub fn decimal(&self, key: &str) -> Result<f64> {
        let value = self.value(key)?;
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| FplError::invalid(self.document, key, "a number"))
    }

    pub fn list(&self, key: &str) -> Result<Vec<Value>> {
        self.value(key)?
            .as_array()
            .cloned()
            .ok_or_else(|| FplError::invalid(self.document, key, "a list"))
    }
}
