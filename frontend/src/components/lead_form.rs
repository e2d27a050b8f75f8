use yew::prelude::*;

use forms::{FieldError, SubmissionState};

use super::form_field::FormField;
use crate::submission::hook::{use_submission, FormCoordinator};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub build: fn() -> FormCoordinator,
    pub submit_label: AttrValue,
    pub success_title: AttrValue,
    pub success_text: AttrValue,
}

/// Renders every field of the coordinator's schema, the error banner, and
/// the confirmation panel once the submission succeeds.
#[function_component]
pub fn LeadForm(props: &LeadFormProps) -> Html {
    let form = use_submission(props.build);

    if form.state == SubmissionState::Succeeded {
        return html! {
            <div class="lead-form-success">
                <h3>{ props.success_title.clone() }</h3>
                <p>{ props.success_text.clone() }</p>
                <button class="link-button" onclick={form.on_reset.clone()}>
                    { "Submit another request" }
                </button>
            </div>
        };
    }

    let failure = form.state.failure();
    let field_error = |name: &str| -> Option<FieldError> {
        failure
            .and_then(|failure| failure.validation())
            .and_then(|result| result.error_for(name))
    };
    let banner = failure.and_then(|failure| failure.message());
    let submitting = form.state.is_submitting();

    html! {
        <form class="lead-form" onsubmit={form.on_submit.clone()} novalidate={true}>
            <style>
            {r#".lead-form { display: flex; flex-direction: column; gap: 0.9rem; }
                .lead-form .form-field { display: flex; flex-direction: column; gap: 0.35rem; }
                .lead-form .checkbox-field label { flex-direction: row; align-items: center; gap: 0.5rem; }
                .lead-form input, .lead-form select, .lead-form textarea {
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 8px;
                    padding: 0.65rem 0.9rem;
                    background: rgba(15, 23, 42, 0.5);
                    color: #fff;
                }
                .lead-form .has-error input, .lead-form .has-error select { border-color: #ef4444; }
                .lead-form .required, .lead-form .field-error { color: #ef4444; font-size: 0.85rem; }
                .lead-form .form-banner {
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    background: rgba(239, 68, 68, 0.12);
                    color: #fca5a5;
                }
                .lead-form button[type=submit]:disabled { opacity: 0.6; cursor: wait; }"#}
            </style>
            if let Some(message) = banner {
                <div class="form-banner">{ message }</div>
            }
            { for form.coordinator.schema().fields().iter().map(|spec| {
                let value = form
                    .values
                    .get(&spec.name)
                    .cloned()
                    .unwrap_or_else(|| spec.default_value());
                html! {
                    <FormField
                        key={spec.name.clone()}
                        spec={spec.clone()}
                        {value}
                        error={field_error(&spec.name)}
                        on_change={form.on_change.clone()}
                    />
                }
            }) }
            <button type="submit" disabled={submitting}>
                if submitting {
                    { "Sending..." }
                } else {
                    { props.submit_label.clone() }
                }
            </button>
        </form>
    }
}
