use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_unmount;

use forms::{presets, Coordinator, Endpoint, FieldValue, Snapshot, SubmissionState};

use super::archive::LeadArchive;
use super::pixel::MetaPixel;
use super::transport::BrowserTransport;
use crate::config;

pub type FormCoordinator = Coordinator<BrowserTransport>;

fn with_trackers(coordinator: FormCoordinator) -> FormCoordinator {
    let coordinator = coordinator.with_tracker(MetaPixel);
    match LeadArchive::from_config() {
        Some(archive) => coordinator.with_tracker(archive),
        None => coordinator,
    }
}

/// Demo request: the short callback form through the relay when an inbox is
/// configured, the full form against our API otherwise.
pub fn book_demo_form() -> FormCoordinator {
    let (preset, endpoint) = match config::relay_inbox() {
        Some(inbox) => (presets::book_demo_callback(), Endpoint::relay(inbox)),
        None => (presets::book_demo(), Endpoint::api(&config::get_backend_url())),
    };
    let preset = preset.expect("book demo schema is valid");
    let transport = BrowserTransport::new(endpoint.with_timeout(config::request_timeout()));
    with_trackers(
        Coordinator::new(Rc::new(preset.schema), transport).with_mapping(preset.mapping),
    )
}

pub fn contact_form() -> FormCoordinator {
    let preset = presets::contact().expect("contact schema is valid");
    let endpoint =
        Endpoint::api(&config::get_backend_url()).with_timeout(config::request_timeout());
    let transport = BrowserTransport::new(endpoint);
    with_trackers(
        Coordinator::new(Rc::new(preset.schema), transport).with_mapping(preset.mapping),
    )
}

#[derive(Clone)]
pub struct SubmissionHandle {
    pub coordinator: Rc<FormCoordinator>,
    pub state: SubmissionState,
    pub values: Snapshot,
    pub on_change: Callback<(String, FieldValue)>,
    pub on_submit: Callback<SubmitEvent>,
    pub on_reset: Callback<MouseEvent>,
}

/// Owns one coordinator for the lifetime of the calling component and
/// mirrors its state and values into Yew state.
#[hook]
pub fn use_submission(build: fn() -> FormCoordinator) -> SubmissionHandle {
    let state = use_state(|| SubmissionState::Idle);

    let coordinator = {
        let state = state.clone();
        use_memo(
            move |_| {
                let coordinator = build();
                coordinator.subscribe(move |next: &SubmissionState| state.set(next.clone()));
                coordinator
            },
            (),
        )
    };
    let values = {
        let coordinator = coordinator.clone();
        use_state(move || coordinator.snapshot())
    };

    {
        let coordinator = coordinator.clone();
        use_unmount(move || coordinator.dispose());
    }

    let on_change = {
        let coordinator = coordinator.clone();
        let values = values.clone();
        Callback::from(move |(name, value): (String, FieldValue)| {
            match coordinator.set_field(&name, value) {
                Ok(()) => values.set(coordinator.snapshot()),
                Err(e) => log::error!("Rejected input: {}", e),
            }
        })
    };

    let on_submit = {
        let coordinator = coordinator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let coordinator = coordinator.clone();
            spawn_local(async move {
                coordinator.submit().await;
            });
        })
    };

    let on_reset = {
        let coordinator = coordinator.clone();
        let values = values.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            coordinator.reset();
            values.set(coordinator.snapshot());
        })
    };

    SubmissionHandle {
        values: (*values).clone(),
        state: (*state).clone(),
        coordinator,
        on_change,
        on_submit,
        on_reset,
    }
}
