use serde::Serialize;
use serde_json::{Map, Value};

use crate::schema::FieldValue;
use crate::store::Snapshot;

/// Static translation from field names to the keys an endpoint expects,
/// plus constant entries appended to every payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireMapping {
    renames: Vec<(String, String)>,
    constants: Vec<(String, Value)>,
}

impl WireMapping {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn rename(mut self, field: impl Into<String>, wire_key: impl Into<String>) -> Self {
        self.renames.push((field.into(), wire_key.into()));
        self
    }

    pub fn constant(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constants.push((key.into(), value.into()));
        self
    }

    pub fn wire_key<'a>(&'a self, field: &'a str) -> &'a str {
        self.renames
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, wire)| wire.as_str())
            .unwrap_or(field)
    }
}

/// Immutable JSON body of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    form_id: String,
    body: Map<String, Value>,
}

impl Serialize for SubmissionRequest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

impl SubmissionRequest {
    pub fn build(form_id: &str, snapshot: &Snapshot, mapping: &WireMapping) -> Self {
        let mut body = Map::new();
        for (name, value) in snapshot.iter() {
            let value = match value {
                FieldValue::Text(text) => Value::String(text.trim().to_string()),
                FieldValue::Flag(flag) => Value::Bool(*flag),
            };
            body.insert(mapping.wire_key(name).to_string(), value);
        }
        for (key, value) in &mapping.constants {
            body.insert(key.clone(), value.clone());
        }

        Self {
            form_id: form_id.to_string(),
            body,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.body.get(key).and_then(Value::as_str)
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.body.clone()).to_string()
    }
}
