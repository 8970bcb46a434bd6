use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod context;
mod countdown;
mod registration {
    pub mod draft;
    pub mod error;
    pub mod form;
    pub mod payload;
    pub mod transport;
}
mod components {
    pub mod count_timer;
    pub mod registration_modal;
}
mod pages {
    pub mod landing;
}

use context::RegistrationProvider;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn NotFound() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off. The hackathon is this way:"}</p>
            <Link<Route> to={Route::Home} classes="not-found__link">
                {"Back to AI Hacks"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #05060f;
                    color: #fff;
                    text-align: center;
                }
                .not-found h1 {
                    font-size: 6rem;
                    font-weight: 900;
                    color: #facc15;
                }
                .not-found__link {
                    color: #22d3ee;
                    font-weight: 700;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <RegistrationProvider>
                <Switch<Route> render={switch} />
            </RegistrationProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
