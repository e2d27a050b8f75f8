//! The submission state machine.
//!
//! ```text
//! Idle ──submit(invalid)──▶ Failed(validation) ──submit()──▶ Submitting
//! Idle ──submit(valid)────▶ Submitting
//! Submitting ──ok──▶ Succeeded ──reset()──▶ Idle
//! Submitting ──err─▶ Failed(network | server | parse) ──submit()──▶ Submitting
//! ```
//!
//! One coordinator belongs to one mounted form. It is `!Send` and uses
//! interior mutability so `submit` can take `&self`; no borrow is held across
//! the transport await, which is what lets a second `submit` observe
//! `Submitting` and back off.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{FailureReason, SubmitError};
use crate::payload::{SubmissionRequest, WireMapping};
use crate::schema::{FieldValue, FormSchema};
use crate::store::{FieldStore, Snapshot, StoreError};
use crate::tracker::{self, Tracker};
use crate::transport::Transport;
use crate::validate::{self, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed(Failure),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            SubmissionState::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    Validation(ValidationResult),
    Submit(SubmitError),
}

impl Failure {
    pub fn reason(&self) -> FailureReason {
        match self {
            Failure::Validation(_) => FailureReason::Validation,
            Failure::Submit(e) => e.reason(),
        }
    }

    /// Banner text. Validation failures only carry a banner for form-level errors.
    pub fn message(&self) -> Option<String> {
        match self {
            Failure::Validation(result) => result.form_error().map(str::to_string),
            Failure::Submit(e) => Some(e.user_message()),
        }
    }

    pub fn validation(&self) -> Option<&ValidationResult> {
        match self {
            Failure::Validation(result) => Some(result),
            Failure::Submit(_) => None,
        }
    }
}

/// Result of one `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// A request is already in flight, or a success has not been reset yet.
    Ignored,
    /// The form was disposed; nothing was sent or the outcome was dropped.
    Abandoned,
    Finished(SubmissionState),
}

pub trait Observer {
    fn on_transition(&self, state: &SubmissionState);
}

impl<F: Fn(&SubmissionState)> Observer for F {
    fn on_transition(&self, state: &SubmissionState) {
        self(state)
    }
}

pub struct Coordinator<T> {
    schema: Rc<FormSchema>,
    store: RefCell<FieldStore>,
    state: RefCell<SubmissionState>,
    mapping: WireMapping,
    transport: T,
    trackers: Vec<Box<dyn Tracker>>,
    observers: RefCell<Vec<Rc<dyn Observer>>>,
    disposed: Cell<bool>,
}

impl<T: Transport> Coordinator<T> {
    pub fn new(schema: Rc<FormSchema>, transport: T) -> Self {
        Self {
            store: RefCell::new(FieldStore::new(Rc::clone(&schema))),
            schema,
            state: RefCell::new(SubmissionState::Idle),
            mapping: WireMapping::identity(),
            transport,
            trackers: Vec::new(),
            observers: RefCell::new(Vec::new()),
            disposed: Cell::new(false),
        }
    }

    pub fn with_mapping(mut self, mapping: WireMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn with_tracker(mut self, tracker: impl Tracker + 'static) -> Self {
        self.trackers.push(Box::new(tracker));
        self
    }

    /// Registers an observer. One added during a notification hears the next transition.
    pub fn subscribe(&self, observer: impl Observer + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn set_field(&self, name: &str, value: impl Into<FieldValue>) -> Result<(), StoreError> {
        self.store.borrow_mut().set_field(name, value)
    }

    pub fn field(&self, name: &str) -> Option<FieldValue> {
        self.store.borrow().get(name).cloned()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.borrow().snapshot()
    }

    /// Clears the fields and re-arms the form. Ignored while a request is in flight.
    pub fn reset(&self) {
        if self.state.borrow().is_submitting() {
            tracing::debug!("reset of `{}` ignored while submitting", self.schema.id());
            return;
        }
        self.store.borrow_mut().reset();
        self.transition(SubmissionState::Idle);
    }

    /// Detaches the form. Later outcomes are dropped without touching state.
    pub fn dispose(&self) {
        self.disposed.set(true);
        self.observers.borrow_mut().clear();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    pub async fn submit(&self) -> Attempt {
        if self.disposed.get() {
            return Attempt::Abandoned;
        }

        match *self.state.borrow() {
            SubmissionState::Submitting | SubmissionState::Succeeded => {
                tracing::debug!("submit of `{}` ignored", self.schema.id());
                return Attempt::Ignored;
            }
            SubmissionState::Idle | SubmissionState::Failed(_) => {}
        }

        let snapshot = self.snapshot();
        let validation = validate::validate(&self.schema, &snapshot);
        if !validation.is_valid() {
            tracing::debug!(
                "`{}` failed validation with {} field error(s)",
                self.schema.id(),
                validation.error_count()
            );
            let state = SubmissionState::Failed(Failure::Validation(validation));
            self.transition(state.clone());
            return Attempt::Finished(state);
        }

        let request = SubmissionRequest::build(self.schema.id(), &snapshot, &self.mapping);
        self.transition(SubmissionState::Submitting);

        let outcome = self.transport.send(&request).await;

        if self.disposed.get() {
            tracing::debug!("`{}` disposed while submitting, outcome dropped", self.schema.id());
            return Attempt::Abandoned;
        }

        let state = match outcome {
            Ok(()) => {
                tracing::info!("`{}` submitted", self.schema.id());
                SubmissionState::Succeeded
            }
            Err(e) => {
                tracing::warn!("`{}` submission failed: {}", self.schema.id(), e);
                SubmissionState::Failed(Failure::Submit(e))
            }
        };
        self.transition(state.clone());

        if state == SubmissionState::Succeeded {
            tracker::fire_all(&self.trackers, &request);
        }

        Attempt::Finished(state)
    }

    fn transition(&self, next: SubmissionState) {
        tracing::debug!("`{}` -> {:?}", self.schema.id(), next);
        *self.state.borrow_mut() = next.clone();
        // observers may subscribe or dispose while being notified
        let observers = self.observers.borrow().clone();
        for observer in observers {
            if self.disposed.get() {
                break;
            }
            observer.on_transition(&next);
        }
    }
}
