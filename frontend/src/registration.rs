use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;
use time::OffsetDateTime;
use shared::{register_voter, RegistrationForm};
use crate::{browser_store, styles::*, Route};

const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

pub struct Registration {
    form: RegistrationForm,
    message: Option<String>,
    navigator: Option<Navigator>,
}

pub enum Msg {
    UpdateField(&'static str, String),
    Submit,
}

impl Component for Registration {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: RegistrationForm::default(),
            message: None,
            navigator: ctx.link().navigator(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateField(field, value) => {
                match field {
                    "name" => self.form.name = value,
                    "surname" => self.form.surname = value,
                    "gender" => self.form.gender = value,
                    "id_number" => self.form.id_number = value,
                    _ => return false,
                }
                true
            }
            Msg::Submit => {
                let current_year = OffsetDateTime::now_utc().year();
                let outcome = browser_store::registry()
                    .map_err(shared::StationError::from)
                    .and_then(|registry| register_voter(&registry, self.form.clone(), current_year));

                match outcome {
                    Ok(pass) => {
                        self.form.clear();
                        self.message = None;
                        if let Some(navigator) = &self.navigator {
                            navigator.push_with_state(&Route::Vote, pass);
                        }
                    }
                    Err(e) => self.message = Some(e.user_message()),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let text_input = |field: &'static str, label: &'static str, value: &str| {
            html! {
                <div class={INPUT_GROUP}>
                    <label class={TEXT_LABEL} for={field}>{label}</label>
                    <input
                        id={field}
                        type="text"
                        required={true}
                        value={value.to_string()}
                        class={INPUT_BASE}
                        oninput={ctx.link().callback(move |e: InputEvent| {
                            let target = e.target_unchecked_into::<HtmlInputElement>();
                            Msg::UpdateField(field, target.value())
                        })}
                    />
                </div>
            }
        };

        html! {
            <div class={CONTAINER_SM}>
                <h2 class={HEADING_MD}>{"Voter Registration"}</h2>

                {if let Some(message) = &self.message {
                    html! { <div class={alert_style("error")}>{message}</div> }
                } else { html! {} }}

                <form
                    class={SPACE_Y_LG}
                    onsubmit={ctx.link().callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    {text_input("name", "Name", &self.form.name)}
                    {text_input("surname", "Surname", &self.form.surname)}

                    <div class={INPUT_GROUP}>
                        <label class={TEXT_LABEL} for="gender">{"Gender"}</label>
                        <select
                            id="gender"
                            required={true}
                            class={INPUT_BASE}
                            onchange={ctx.link().callback(|e: Event| {
                                let target = e.target_unchecked_into::<HtmlSelectElement>();
                                Msg::UpdateField("gender", target.value())
                            })}
                        >
                            <option value="" selected={self.form.gender.is_empty()}>{"Select Gender"}</option>
                            {for GENDERS.iter().map(|g| html! {
                                <option value={*g} selected={self.form.gender == *g}>{*g}</option>
                            })}
                        </select>
                    </div>

                    {text_input("id_number", "ID Number", &self.form.id_number)}

                    <div class="flex flex-col sm:flex-row gap-4">
                        <button type="submit" class={button_primary(true)}>
                            {"Register"}
                        </button>
                        <Link<Route> to={Route::Home} classes={classes!(combine_classes(BUTTON_FULL, BUTTON_SECONDARY))}>
                            {"Back to main menu"}
                        </Link<Route>>
                    </div>
                </form>
            </div>
        }
    }
}
