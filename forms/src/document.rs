//! Firestore REST encoding of a submission, used by the lead archive.

use serde_json::{json, Map, Value};

use crate::payload::SubmissionRequest;

pub const FIRESTORE_API: &str = "https://firestore.googleapis.com/v1";

/// `POST` target that creates a document with a generated id in `collection`.
pub fn collection_url(project_id: &str, collection: &str, api_key: &str) -> String {
    format!(
        "{}/projects/{}/databases/(default)/documents/{}?key={}",
        FIRESTORE_API, project_id, collection, api_key
    )
}

/// Wraps every payload entry in its Firestore typed value. Keys starting with
/// `_` are relay directives and are not archived.
pub fn firestore_document(request: &SubmissionRequest) -> Value {
    let mut fields = Map::new();
    for (key, value) in request.body() {
        if key.starts_with('_') {
            continue;
        }
        fields.insert(key.clone(), typed_value(value));
    }
    fields.insert("form".to_string(), json!({ "stringValue": request.form_id() }));
    json!({ "fields": fields })
}

fn typed_value(value: &Value) -> Value {
    match value {
        Value::Bool(flag) => json!({ "booleanValue": flag }),
        Value::Number(n) if n.is_i64() => json!({ "integerValue": n.to_string() }),
        Value::Number(n) => json!({ "doubleValue": n.as_f64() }),
        Value::String(text) => json!({ "stringValue": text }),
        Value::Null => json!({ "nullValue": null }),
        other => json!({ "stringValue": other.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::WireMapping;
    use crate::schema::FieldValue;
    use crate::store::Snapshot;

    #[test]
    fn encodes_typed_fields_and_skips_directives() {
        let snapshot = Snapshot::from_pairs([("name", FieldValue::from("Asha")), ("terms", true.into())]);
        let mapping = WireMapping::identity().constant("_captcha", "false");
        let request = SubmissionRequest::build("book-demo-callback", &snapshot, &mapping);

        assert_eq!(
            firestore_document(&request),
            json!({
                "fields": {
                    "name": { "stringValue": "Asha" },
                    "terms": { "booleanValue": true },
                    "form": { "stringValue": "book-demo-callback" },
                }
            })
        );
    }

    #[test]
    fn collection_url_targets_default_database() {
        assert_eq!(
            collection_url("evoc", "leads", "k"),
            "https://firestore.googleapis.com/v1/projects/evoc/databases/(default)/documents/leads?key=k"
        );
    }
}
