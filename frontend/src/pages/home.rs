use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::submission::hook::{contact_form, FormCoordinator};
use crate::Route;

#[function_component]
pub fn Home() -> Html {
    html! {
        <div class="home">
            <section class="hero">
                <h1>{"Performance marketing for D2C brands"}</h1>
                <p>{"Paid social, search and retention run by one team, measured on profit."}</p>
                <Link<Route> to={Route::BookDemo} classes="cta-button">
                    {"Book a Demo"}
                </Link<Route>>
            </section>
            <section id="contact" class="contact">
                <div class="contact-intro">
                    <h2>{"Get Started"}</h2>
                    <h3>{"Ready to ignite your growth?"}</h3>
                    <p>{"Tell us where you are and we'll come back within 24 hours."}</p>
                </div>
                <LeadForm
                    build={contact_form as fn() -> FormCoordinator}
                    submit_label="Send Message"
                    success_title="Message Sent!"
                    success_text="Thanks for reaching out. We'll get back to you within 24 hours."
                />
            </section>
        </div>
    }
}
