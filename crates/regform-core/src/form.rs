use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Raw field values collected by the form for one validation call.
///
/// Values stay untyped here; coercion into typed step records happens in
/// [`crate::records`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: Map<String, Value>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form state from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(Error::InvalidFormState(format!(
                "expected a JSON object of fields, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse a JSON document into a form state.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(contents)
            .map_err(|err| Error::InvalidFormState(err.to_string()))?;
        Self::from_value(value)
    }

    /// Builder-style insert, mostly useful for fixtures.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(field.into(), value.into())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for FormState {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
