//! Submits a sample demo request to the configured endpoint.
//!
//! `probe [values.json]` — the optional file is a flat JSON object of field
//! values for the `book-demo` form (or `book-demo-callback` when
//! `FORMS_RELAY_INBOX` is set).

use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use forms::http::HttpTransport;
use forms::{presets, Attempt, Coordinator, Endpoint, FieldValue, SubmissionState};

fn sample_values(relay: bool) -> Map<String, Value> {
    let sample = if relay {
        serde_json::json!({
            "name": "Test User",
            "phone": "9876543210",
            "category": "D2c brand",
            "terms": true,
        })
    } else {
        serde_json::json!({
            "name": "Test User",
            "email": "test@example.com",
            "website": "https://example.com",
            "budget": "10k-50k",
            "goals": "Testing the demo booking form",
        })
    };
    match sample {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn read_values(path: &str) -> Result<Map<String, Value>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    match serde_json::from_str(&raw).with_context(|| format!("parsing {}", path))? {
        Value::Object(map) => Ok(map),
        _ => Err(anyhow!("{} must hold a JSON object", path)),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let relay = std::env::var("FORMS_RELAY_INBOX").map_or(false, |inbox| !inbox.trim().is_empty());
    let preset = if relay {
        presets::book_demo_callback()?
    } else {
        presets::book_demo()?
    };

    let endpoint = Endpoint::from_env();
    tracing::info!("probing {} (timeout {:?})", endpoint.url(), endpoint.timeout());

    let form = Coordinator::new(Rc::new(preset.schema), HttpTransport::new(endpoint))
        .with_mapping(preset.mapping);
    form.subscribe(|state: &SubmissionState| tracing::info!("state: {:?}", state));

    let values = match std::env::args().nth(1) {
        Some(path) => read_values(&path)?,
        None => sample_values(relay),
    };
    for (name, value) in values {
        let value = match value {
            Value::Bool(flag) => FieldValue::Flag(flag),
            Value::String(text) => FieldValue::Text(text),
            other => FieldValue::Text(other.to_string()),
        };
        form.set_field(&name, value)?;
    }

    match form.submit().await {
        Attempt::Finished(SubmissionState::Succeeded) => {
            println!("Success: submission accepted");
            Ok(())
        }
        Attempt::Finished(SubmissionState::Failed(failure)) => {
            if let Some(result) = failure.validation() {
                for (field, error) in result.field_errors() {
                    eprintln!("  {}: {}", field, error);
                }
            }
            Err(anyhow!(
                "submission failed ({}): {}",
                failure.reason(),
                failure.message().unwrap_or_else(|| "invalid input".to_string())
            ))
        }
        other => Err(anyhow!("submission did not complete: {:?}", other)),
    }
}
