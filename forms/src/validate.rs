//! Pure field-level validation of a [`Snapshot`] against its [`FormSchema`].

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::schema::{FieldKind, FieldSpec, FieldValue, FormSchema};
use crate::store::Snapshot;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)*\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

pub const SCHEMA_MISMATCH: &str = "Form data does not match its schema";

/// Per-field problems. The `Display` text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FieldError {
    #[error("Required")]
    Required,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Invalid phone number")]
    InvalidPhone,
    #[error("Invalid option")]
    InvalidOption,
    #[error("Must be accepted")]
    MustBeAccepted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    field_errors: Vec<(String, FieldError)>,
    form_error: Option<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty() && self.form_error.is_none()
    }

    pub fn error_for(&self, field: &str) -> Option<FieldError> {
        self.field_errors
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, error)| *error)
    }

    /// Field errors in declaration order.
    pub fn field_errors(&self) -> impl Iterator<Item = (&str, FieldError)> {
        self.field_errors.iter().map(|(name, error)| (name.as_str(), *error))
    }

    pub fn error_count(&self) -> usize {
        self.field_errors.len()
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }
}

pub fn validate(schema: &FormSchema, snapshot: &Snapshot) -> ValidationResult {
    let mut result = ValidationResult::default();

    for field in schema.fields() {
        let value = match snapshot.get(&field.name) {
            Some(value) if field.kind.accepts(value) => value,
            _ => {
                result.form_error = Some(SCHEMA_MISMATCH.to_string());
                continue;
            }
        };

        if let Some(error) = check_field(field, value) {
            result.field_errors.push((field.name.clone(), error));
        }
    }

    result
}

fn check_field(field: &FieldSpec, value: &FieldValue) -> Option<FieldError> {
    let text = match value {
        FieldValue::Flag(accepted) => {
            return (field.required && !accepted).then_some(FieldError::MustBeAccepted);
        }
        FieldValue::Text(text) => text.trim(),
    };

    if text.is_empty() {
        return field.required.then_some(FieldError::Required);
    }

    match field.kind {
        FieldKind::Email if !is_email(text) => Some(FieldError::InvalidEmail),
        FieldKind::Url if !is_web_url(text) => Some(FieldError::InvalidUrl),
        FieldKind::Phone if !is_phone(text) => Some(FieldError::InvalidPhone),
        FieldKind::Select if !field.options.iter().any(|option| option == text) => {
            Some(FieldError::InvalidOption)
        }
        _ => None,
    }
}

pub fn is_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// Absolute http(s) URL with a host.
pub fn is_web_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

/// 7 to 15 digits once separators and a leading `+` are dropped.
pub fn is_phone(text: &str) -> bool {
    let text = text.strip_prefix('+').unwrap_or(text);
    let mut digits = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return false,
        }
    }
    (7..=15).contains(&digits)
}
