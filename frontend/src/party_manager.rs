use web_sys::HtmlInputElement;
use yew::prelude::*;
use shared::{delete_party_with, ErrorCode};
use crate::{browser_store, styles::*};

pub enum Msg {
    UpdateInput(String),
    AddParty,
    DeleteParty,
}

pub struct PartyManager {
    parties: Vec<String>,
    input_value: String,
    error: Option<String>,
}

impl Component for PartyManager {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let mut manager = Self {
            parties: Vec::new(),
            input_value: String::new(),
            error: None,
        };
        manager.reload();
        manager
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateInput(value) => {
                self.input_value = value;
                true
            }
            Msg::AddParty => {
                let added = browser_store::registry().and_then(|r| r.add_party(&self.input_value));
                match added {
                    // an already listed name is ignored without a message
                    Ok(_) => self.reload(),
                    Err(e) => self.error = Some(e.user_message().to_string()),
                }
                true
            }
            Msg::DeleteParty => {
                let deleted = browser_store::registry()
                    .and_then(|registry| delete_party_with(&registry, prompt_party_name));
                match deleted {
                    Ok(_) => self.reload(),
                    Err(e) if e.code == ErrorCode::NotFound => alert(e.user_message()),
                    Err(e) => self.error = Some(e.user_message().to_string()),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={SPACE_Y_LG}>
                <form
                    class="flex gap-2"
                    onsubmit={ctx.link().callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::AddParty
                    })}
                >
                    <div class={INPUT_GROUP}>
                        <input
                            type="text"
                            required={true}
                            value={self.input_value.clone()}
                            placeholder="Party name"
                            class={INPUT_BASE}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let target = e.target_unchecked_into::<HtmlInputElement>();
                                Msg::UpdateInput(target.value())
                            })}
                        />
                    </div>
                    <button type="submit" class={button_primary(false)}>
                        {"Add Party"}
                    </button>
                    <button
                        type="button"
                        onclick={ctx.link().callback(|_| Msg::DeleteParty)}
                        class={combine_classes(BUTTON_BASE, BUTTON_DANGER)}
                    >
                        {"Delete Party"}
                    </button>
                </form>

                if let Some(error) = &self.error {
                    <div class={TEXT_ERROR}>{error}</div>
                }

                <ul class={SPACE_Y_BASE}>
                    {for self.parties.iter().map(|party| html! {
                        <li class={CARD_SECTION}>
                            <span class="text-white break-words">{party}</span>
                        </li>
                    })}
                </ul>
            </div>
        }
    }
}

impl PartyManager {
    fn reload(&mut self) {
        match browser_store::registry().and_then(|r| r.load_parties()) {
            Ok(parties) => {
                self.parties = parties;
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message().to_string()),
        }
    }
}

fn prompt_party_name() -> Option<String> {
    web_sys::window()?
        .prompt_with_message("Enter the name of the party to delete:")
        .ok()
        .flatten()
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
