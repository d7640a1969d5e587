use std::rc::Rc;
use gloo_timers::callback::Timeout;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;
use shared::{cast_vote, station::REGISTERED_MESSAGE, BallotPass, StationError};
use crate::{browser_store, config::CONFIG, styles::*, Route};

#[derive(PartialEq)]
enum BoothState {
    Ready,
    Rejected(String),
    Thanked(String),
}

pub enum Msg {
    Select(String),
    Submit,
}

pub struct VoteBooth {
    /// Handed over by the registration screen through the history state.
    pass: Option<Rc<BallotPass>>,
    parties: Vec<String>,
    selection: String,
    state: BoothState,
    load_error: Option<String>,
}

impl Component for VoteBooth {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let pass = ctx.link().location().and_then(|l| l.state::<BallotPass>());
        let (parties, load_error) = match browser_store::registry().and_then(|r| r.load_parties()) {
            Ok(parties) => (parties, None),
            Err(e) => (Vec::new(), Some(e.user_message().to_string())),
        };
        Self {
            pass,
            parties,
            selection: String::new(),
            state: BoothState::Ready,
            load_error,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(party) => {
                if matches!(self.state, BoothState::Thanked(_)) {
                    return false;
                }
                self.selection = party;
                true
            }
            Msg::Submit => {
                let Some(pass) = self.pass.clone() else {
                    return false;
                };
                if matches!(self.state, BoothState::Thanked(_)) {
                    return false;
                }
                let outcome = browser_store::registry()
                    .map_err(StationError::from)
                    .and_then(|registry| cast_vote(&registry, &pass, &self.selection));

                match outcome {
                    Ok(receipt) => {
                        self.state = BoothState::Thanked(receipt.message());
                        self.selection.clear();
                        if let Some(navigator) = ctx.link().navigator() {
                            Timeout::new(CONFIG.vote_return_delay_ms, move || {
                                navigator.push(&Route::Home);
                            })
                            .forget();
                        }
                    }
                    Err(e) => self.state = BoothState::Rejected(e.user_message()),
                }
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.pass.is_none() {
            if let Some(navigator) = ctx.link().navigator() {
                navigator.replace(&Route::Register);
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.pass.is_none() {
            return html! {};
        }
        let thanked = matches!(self.state, BoothState::Thanked(_));

        html! {
            <div class={CONTAINER_SM}>
                <h2 class={HEADING_MD}>{"Cast Your Vote"}</h2>

                if let Some(error) = &self.load_error {
                    <div class={alert_style("error")}>{error}</div>
                } else if let Some(notice) = self.notice() {
                    <div class={alert_style("success")}>{notice}</div>
                }

                <form
                    class={SPACE_Y_LG}
                    onsubmit={ctx.link().callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <div class={INPUT_GROUP}>
                        <label class={TEXT_LABEL} for="party">{"Party"}</label>
                        <select
                            id="party"
                            class={INPUT_BASE}
                            disabled={thanked}
                            onchange={ctx.link().callback(|e: Event| {
                                let target = e.target_unchecked_into::<HtmlSelectElement>();
                                Msg::Select(target.value())
                            })}
                        >
                            <option value="" selected={self.selection.is_empty()}>{"Select Party"}</option>
                            {for self.parties.iter().map(|party| html! {
                                <option value={party.clone()} selected={&self.selection == party}>{party}</option>
                            })}
                        </select>
                    </div>

                    {self.render_message()}

                    <button type="submit" disabled={thanked} class={button_primary(true)}>
                        {"Vote"}
                    </button>
                </form>
            </div>
        }
    }
}

impl VoteBooth {
    fn notice(&self) -> Option<&'static str> {
        match (&self.pass, &self.state) {
            (Some(_), BoothState::Ready | BoothState::Rejected(_)) => Some(REGISTERED_MESSAGE),
            _ => None,
        }
    }

    fn render_message(&self) -> Html {
        match &self.state {
            BoothState::Ready => html! {},
            BoothState::Rejected(message) => html! {
                <div class={TEXT_ERROR}>{message}</div>
            },
            BoothState::Thanked(message) => html! {
                <div class={combine_classes(STATS_CARD, STATS_CARD_SUCCESS)}>{message}</div>
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{register_voter, MemoryStore, Registry, RegistrationForm};

    fn booth(pass: Option<BallotPass>) -> VoteBooth {
        VoteBooth {
            pass: pass.map(Rc::new),
            parties: vec!["DA".into()],
            selection: String::new(),
            state: BoothState::Ready,
            load_error: None,
        }
    }

    fn registered_pass() -> BallotPass {
        let registry = Registry::new(MemoryStore::new());
        let form = RegistrationForm {
            name: "Lerato".into(),
            surname: "Nkosi".into(),
            gender: "Female".into(),
            id_number: "9202025009087".into(),
        };
        register_voter(&registry, form, 2026).unwrap()
    }

    #[test]
    fn no_registration_notice_without_pass() {
        assert_eq!(booth(None).notice(), None);
    }

    #[test]
    fn registration_notice_until_thanked() {
        let mut booth = booth(Some(registered_pass()));
        assert_eq!(booth.notice(), Some(REGISTERED_MESSAGE));

        booth.state = BoothState::Rejected("Please select a party to vote for.".into());
        assert_eq!(booth.notice(), Some(REGISTERED_MESSAGE));

        booth.state = BoothState::Thanked("Thank you for voting for DA!".into());
        assert_eq!(booth.notice(), None);
    }
}
