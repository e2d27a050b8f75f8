use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The input kinds a form field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Url,
    Phone,
    Select,
    Checkbox,
}

impl FieldKind {
    /// Value a fresh or reset field holds.
    pub fn default_value(self) -> FieldValue {
        match self {
            FieldKind::Checkbox => FieldValue::Flag(false),
            _ => FieldValue::Text(String::new()),
        }
    }

    /// Whether `value` has the shape this kind stores.
    pub fn accepts(self, value: &FieldValue) -> bool {
        match (self, value) {
            (FieldKind::Checkbox, FieldValue::Flag(_)) => true,
            (FieldKind::Checkbox, FieldValue::Text(_)) => false,
            (_, FieldValue::Text(_)) => true,
            (_, FieldValue::Flag(_)) => false,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
            FieldKind::Phone => "phone",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
        };
        f.write_str(name)
    }
}

/// A single field value. Checkboxes hold a flag, every other kind holds text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    /// Allowed values of a `Select`. The empty string is the placeholder and never an option.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Free-form text rendered as a text area.
    #[serde(default)]
    pub multiline: bool,
}

impl FieldSpec {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            options: Vec::new(),
            multiline: false,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn email(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub fn url(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Url)
    }

    pub fn phone(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Phone)
    }

    pub fn select<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut spec = Self::new(name, FieldKind::Select);
        spec.options = options.into_iter().map(Into::into).collect();
        spec
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox)
    }

    /// Multi-line free text.
    pub fn long_text(name: impl Into<String>) -> Self {
        let mut spec = Self::new(name, FieldKind::Text);
        spec.multiline = true;
        spec
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(&self) -> FieldValue {
        self.kind.default_value()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("form `{0}` declares no fields")]
    EmptySchema(String),
    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),
    #[error("select field `{0}` declares no options")]
    MissingOptions(String),
}

/// Declarative description of one form: its id and fields in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSchema {
    id: String,
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn builder(id: impl Into<String>) -> FormSchemaBuilder {
        FormSchemaBuilder {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

pub struct FormSchemaBuilder {
    id: String,
    fields: Vec<FieldSpec>,
}

impl FormSchemaBuilder {
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn build(self) -> Result<FormSchema, SchemaError> {
        if self.fields.is_empty() {
            return Err(SchemaError::EmptySchema(self.id));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
            if field.kind == FieldKind::Select && field.options.iter().all(|o| o.is_empty()) {
                return Err(SchemaError::MissingOptions(field.name.clone()));
            }
        }

        Ok(FormSchema {
            id: self.id,
            fields: self.fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_declaration_order() {
        let schema = FormSchema::builder("contact")
            .field(FieldSpec::text("name").required())
            .field(FieldSpec::email("email"))
            .field(FieldSpec::checkbox("terms"))
            .build()
            .unwrap();

        let names: Vec<_> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["name", "email", "terms"]);
        assert!(schema.field("name").unwrap().required);
        assert!(!schema.field("email").unwrap().required);
        assert_eq!(schema.position("terms"), Some(2));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = FormSchema::builder("dup")
            .field(FieldSpec::text("name"))
            .field(FieldSpec::email("name"))
            .build()
            .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateField("name".into()));
    }

    #[test]
    fn select_needs_real_options() {
        let err = FormSchema::builder("budget")
            .field(FieldSpec::select("budget", [""]))
            .build()
            .unwrap_err();
        assert_eq!(err, SchemaError::MissingOptions("budget".into()));

        let err = FormSchema::builder("none").build().unwrap_err();
        assert_eq!(err, SchemaError::EmptySchema("none".into()));
    }

    #[test]
    fn long_text_is_multiline_text() {
        let spec = FieldSpec::long_text("goals");
        assert_eq!(spec.kind, FieldKind::Text);
        assert!(spec.multiline);
        assert!(!FieldSpec::text("name").multiline);
    }

    #[test]
    fn defaults_follow_kind() {
        assert_eq!(FieldSpec::checkbox("terms").default_value(), FieldValue::Flag(false));
        assert_eq!(FieldSpec::url("site").default_value(), FieldValue::Text(String::new()));
        assert!(FieldKind::Select.accepts(&"x".into()));
        assert!(!FieldKind::Checkbox.accepts(&"x".into()));
        assert!(!FieldKind::Email.accepts(&true.into()));
    }
}
