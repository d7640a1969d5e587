use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use shared::{station::{NO_VOTERS_MESSAGE, NO_VOTES_MESSAGE}, tally_lines, voter_roster, TallyLine};
use crate::{browser_store, party_manager::PartyManager, styles::*, Route};

#[derive(Clone, Default, PartialEq)]
enum Panel {
    #[default]
    Closed,
    Voters(Vec<String>),
    Parties,
    Counts(Vec<TallyLine>),
}

#[derive(Clone, Default)]
pub struct AdminState {
    panel: Panel,
    error: Option<String>,
}

pub enum Msg {
    ShowVoters,
    ShowParties,
    CountVotes,
}

impl Reducible for AdminState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let loaded = browser_store::registry().and_then(|registry| match action {
            Msg::ShowVoters => voter_roster(&registry).map(Panel::Voters),
            Msg::ShowParties => Ok(Panel::Parties),
            Msg::CountVotes => tally_lines(&registry).map(Panel::Counts),
        });

        let next = match loaded {
            Ok(panel) => AdminState { panel, error: None },
            Err(e) => AdminState { panel: Panel::Closed, error: Some(e.user_message().to_string()) },
        };
        Rc::new(next)
    }
}

#[function_component]
pub fn Admin() -> Html {
    let state = use_reducer(AdminState::default);

    let action_button = |label: &'static str, make: fn() -> Msg| {
        let state = state.clone();
        html! {
            <button
                type="button"
                onclick={Callback::from(move |_| state.dispatch(make()))}
                class={button_primary(false)}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class={CONTAINER}>
            <h2 class={HEADING_MD}>{"Admin"}</h2>

            <div class="flex flex-wrap gap-4 mb-6">
                {action_button("View Registered Voters", || Msg::ShowVoters)}
                {action_button("Manage Parties", || Msg::ShowParties)}
                {action_button("Count Votes", || Msg::CountVotes)}
                <Link<Route> to={Route::Home} classes={classes!(combine_classes(BUTTON_BASE, BUTTON_SECONDARY))}>
                    {"Back to main menu"}
                </Link<Route>>
            </div>

            if let Some(error) = &state.error {
                <div class={alert_style("error")}>{error}</div>
            }

            {render_panel(&state.panel)}
        </div>
    }
}

fn render_panel(panel: &Panel) -> Html {
    match panel {
        Panel::Closed => html! {},
        Panel::Voters(lines) => html! {
            <div class={CARD_SECTION}>
                <h3 class={HEADING_SM}>{"Registered Voters"}</h3>
                if lines.is_empty() {
                    <p class={TEXT_MUTED}>{NO_VOTERS_MESSAGE}</p>
                } else {
                    <ul class={SPACE_Y_BASE}>
                        {for lines.iter().map(|line| html! { <li class="text-gray-200">{line}</li> })}
                    </ul>
                }
            </div>
        },
        Panel::Parties => html! {
            <div class={CARD_SECTION}>
                <h3 class={HEADING_SM}>{"Parties"}</h3>
                <PartyManager />
            </div>
        },
        Panel::Counts(lines) => html! {
            <div class={CARD_SECTION}>
                <h3 class={HEADING_SM}>{"Vote Counts"}</h3>
                if lines.is_empty() {
                    <p class={TEXT_MUTED}>{NO_VOTES_MESSAGE}</p>
                } else {
                    <ul class={SPACE_Y_BASE}>
                        {for lines.iter().map(|line| html! {
                            <li class={combine_classes(STATS_CARD, STATS_CARD_INFO)}>{line.to_string()}</li>
                        })}
                    </ul>
                }
            </div>
        },
    }
}
