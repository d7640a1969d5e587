use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, config::CONFIG, styles::*};

#[function_component]
pub fn Home() -> Html {
    html! {
        <div class={CONTAINER}>
            <h1 class={HEADING_LG}>{CONFIG.app_title}</h1>
            <div class={combine_classes(CARD, "flex flex-col sm:flex-row gap-4 justify-center")}>
                <Link<Route> to={Route::Admin}
                    classes={classes!(combine_classes(&menu_button(), BUTTON_PRIMARY))}>
                    {"Admin"}
                </Link<Route>>
                <Link<Route> to={Route::Register}
                    classes={classes!(combine_classes(&menu_button(), BUTTON_SUCCESS))}>
                    {"Voter"}
                </Link<Route>>
            </div>
        </div>
    }
}
