//! The forms the site ships: schema plus the wire mapping each endpoint expects.

use crate::payload::WireMapping;
use crate::schema::{FieldSpec, FormSchema, SchemaError};

pub const CATEGORIES: [&str; 3] = ["D2c brand", "Dropshipper", "Wholesaler / supplier"];
pub const BUDGETS: [&str; 5] = ["<1k", "1k-5k", "5k-10k", "10k-50k", "10k+"];

pub const CALLBACK_SUBJECT: &str = "New Demo Request - EvocLabs";

/// A schema together with its wire mapping.
pub struct Preset {
    pub schema: FormSchema,
    pub mapping: WireMapping,
}

/// Short "request a call" form posted through the form relay.
pub fn book_demo_callback() -> Result<Preset, SchemaError> {
    let schema = FormSchema::builder("book-demo-callback")
        .field(FieldSpec::text("name").required())
        .field(FieldSpec::phone("phone").required())
        .field(FieldSpec::select("category", CATEGORIES).required())
        .field(FieldSpec::checkbox("terms").required())
        .build()?;
    let mapping = WireMapping::identity()
        .constant("_subject", CALLBACK_SUBJECT)
        .constant("_captcha", "false");
    Ok(Preset { schema, mapping })
}

/// Full demo request posted to `/api/book-demo`.
pub fn book_demo() -> Result<Preset, SchemaError> {
    let schema = FormSchema::builder("book-demo")
        .field(FieldSpec::text("name").required())
        .field(FieldSpec::email("email").required())
        .field(FieldSpec::url("website"))
        .field(FieldSpec::select("budget", BUDGETS))
        .field(FieldSpec::long_text("goals"))
        .build()?;
    let mapping = WireMapping::identity().rename("email", "workEmail");
    Ok(Preset { schema, mapping })
}

pub fn contact() -> Result<Preset, SchemaError> {
    let schema = FormSchema::builder("contact")
        .field(FieldSpec::text("name").required())
        .field(FieldSpec::email("email").required())
        .field(FieldSpec::url("website"))
        .field(FieldSpec::select("budget", BUDGETS))
        .field(FieldSpec::long_text("message"))
        .build()?;
    let mapping = WireMapping::identity()
        .rename("email", "workEmail")
        .rename("message", "goals");
    Ok(Preset { schema, mapping })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::SubmissionRequest;
    use crate::store::FieldStore;
    use crate::validate::validate;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn presets_build() {
        for preset in [book_demo_callback(), book_demo(), contact()] {
            let preset = preset.unwrap();
            assert!(!preset.schema.fields().is_empty());
        }
    }

    #[test]
    fn free_text_fields_are_multiline() {
        let demo = book_demo().unwrap();
        let contact = contact().unwrap();
        assert!(demo.schema.field("goals").unwrap().multiline);
        assert!(contact.schema.field("message").unwrap().multiline);
        assert!(!contact.schema.field("name").unwrap().multiline);
    }

    #[test]
    fn callback_payload_carries_relay_fields() {
        let Preset { schema, mapping } = book_demo_callback().unwrap();
        let mut store = FieldStore::new(Rc::new(schema));
        store.set_field("name", "Asha").unwrap();
        store.set_field("phone", "9876543210").unwrap();
        store.set_field("category", "Dropshipper").unwrap();
        store.set_field("terms", true).unwrap();

        let snapshot = store.snapshot();
        assert!(validate(store.schema(), &snapshot).is_valid());

        let request = SubmissionRequest::build(store.schema().id(), &snapshot, &mapping);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "Asha",
                "phone": "9876543210",
                "category": "Dropshipper",
                "terms": true,
                "_subject": CALLBACK_SUBJECT,
                "_captcha": "false",
            })
        );
    }

    #[test]
    fn contact_speaks_the_book_demo_wire_format() {
        let Preset { schema, mapping } = contact().unwrap();
        let mut store = FieldStore::new(Rc::new(schema));
        store.set_field("name", "Test User").unwrap();
        store.set_field("email", "test@example.com").unwrap();
        store.set_field("message", "Scale paid social").unwrap();

        let request = SubmissionRequest::build("contact", &store.snapshot(), &mapping);
        assert_eq!(request.get_str("workEmail"), Some("test@example.com"));
        assert_eq!(request.get_str("goals"), Some("Scale paid social"));
        assert_eq!(request.get_str("website"), Some(""));
    }
}
