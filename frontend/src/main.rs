use yew::prelude::*;
use yew_router::prelude::*;

mod admin;
mod browser_store;
mod config;
mod home;
mod logging;
mod party_manager;
mod registration;
mod styles;
mod vote_booth;

use crate::{
    admin::Admin,
    config::CONFIG,
    home::Home,
    registration::Registration,
    vote_booth::VoteBooth,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/register")] Register,
    #[at("/vote")] Vote,
    #[at("/admin")] Admin,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-gray-900">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => html! { <Home /> },
        Route::Register => html! { <Registration /> },
        Route::Vote => html! { <VoteBooth /> },
        Route::Admin => html! { <Admin /> },
    }
}

fn prepare_storage() -> shared::Result<()> {
    let registry = browser_store::registry()?;
    shared::start_session(&registry, CONFIG.reset_on_load)
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    logging::init(CONFIG.log_level);

    if let Err(e) = prepare_storage() {
        tracing::error!("Failed to prepare storage: {}", e);
    }

    yew::Renderer::<App>::new().render();
}
