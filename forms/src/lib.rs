//! Schema-driven lead forms: field store, validation and a single-flight
//! submission coordinator behind a pluggable [`Transport`].
//!
//! ```no_run
//! # async fn demo(transport: impl forms::Transport) -> Result<(), Box<dyn std::error::Error>> {
//! use std::rc::Rc;
//! use forms::{presets, Coordinator};
//!
//! let preset = presets::book_demo()?;
//! let form = Coordinator::new(Rc::new(preset.schema), transport).with_mapping(preset.mapping);
//! form.set_field("name", "Test User")?;
//! form.set_field("email", "test@example.com")?;
//! let attempt = form.submit().await;
//! # let _ = attempt;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod coordinator;
pub mod document;
pub mod error;
pub mod payload;
pub mod presets;
pub mod schema;
pub mod store;
pub mod tracker;
pub mod transport;
pub mod validate;

#[cfg(feature = "native")]
pub mod http;

pub use config::Endpoint;
pub use coordinator::{Attempt, Coordinator, Failure, Observer, SubmissionState};
pub use error::{FailureReason, SubmitError, TrackError};
pub use payload::{SubmissionRequest, WireMapping};
pub use schema::{FieldKind, FieldSpec, FieldValue, FormSchema, SchemaError};
pub use store::{FieldStore, Snapshot, StoreError};
pub use tracker::Tracker;
pub use transport::{interpret_response, Transport};
pub use validate::{validate, FieldError, ValidationResult};
