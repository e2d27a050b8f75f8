use std::rc::Rc;

use crate::schema::{FieldKind, FieldValue, FormSchema};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("form has no field named `{0}`")]
    UnknownField(String),
    #[error("field `{field}` is a {kind} field and cannot hold {value:?}")]
    KindMismatch {
        field: String,
        kind: FieldKind,
        value: FieldValue,
    },
}

/// Current values of a form's fields, one slot per declared field.
///
/// Writes never validate and never reach the network. Unknown names and
/// values of the wrong shape are rejected and leave the store untouched.
#[derive(Debug, Clone)]
pub struct FieldStore {
    schema: Rc<FormSchema>,
    values: Vec<FieldValue>,
}

impl FieldStore {
    pub fn new(schema: Rc<FormSchema>) -> Self {
        let values = schema.fields().iter().map(|f| f.default_value()).collect();
        Self { schema, values }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), StoreError> {
        let value = value.into();
        let index = self
            .schema
            .position(name)
            .ok_or_else(|| StoreError::UnknownField(name.to_string()))?;

        let kind = self.schema.fields()[index].kind;
        if !kind.accepts(&value) {
            return Err(StoreError::KindMismatch {
                field: name.to_string(),
                kind,
                value,
            });
        }

        self.values[index] = value;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.schema.position(name).map(|index| &self.values[index])
    }

    pub fn reset(&mut self) {
        for (slot, field) in self.values.iter_mut().zip(self.schema.fields()) {
            *slot = field.default_value();
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let entries = self
            .schema
            .fields()
            .iter()
            .zip(&self.values)
            .map(|(field, value)| (field.name.clone(), value.clone()))
            .collect();
        Snapshot { entries }
    }
}

/// Owned copy of field values at one point in time, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<(String, FieldValue)>,
}

impl Snapshot {
    /// Builds a snapshot outside a store, e.g. from prefill data.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Text of a field, or `""` when absent or a checkbox.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(FieldValue::as_flag).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
