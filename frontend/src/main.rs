use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod submission {
    pub mod archive;
    pub mod hook;
    pub mod pixel;
    pub mod transport;
}
mod components {
    pub mod form_field;
    pub mod lead_form;
}
mod pages {
    pub mod book_demo;
    pub mod home;
}

use pages::{book_demo::BookDemo, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/book-demo")]
    BookDemo,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::BookDemo => {
            info!("Rendering Book Demo page");
            html! { <BookDemo /> }
        }
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home} classes="back-link">
                    {"Back to home"}
                </Link<Route>>
            </div>
        },
    }
}

#[function_component]
fn Nav() -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Evoc Labs"}
                </Link<Route>>
                <Link<Route> to={Route::BookDemo} classes="nav-login-button">
                    {"Book a Demo"}
                </Link<Route>>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging; `forms` logs through tracing's log bridge
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
