use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::submission::hook::{book_demo_form, FormCoordinator};

#[function_component]
pub fn BookDemo() -> Html {
    html! {
        <div class="book-demo">
            <div class="book-demo-form">
                <h1>{"Powering Online Growth for D2C Brands"}</h1>
                <LeadForm
                    build={book_demo_form as fn() -> FormCoordinator}
                    submit_label="Request a Call"
                    success_title="Request Received!"
                    success_text="We'll be in touch shortly to schedule your demo."
                />
            </div>
        </div>
    }
}
