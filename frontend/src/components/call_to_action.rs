use chrono::Utc;
use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::confirmation::{registration_message, Confirmation};
use crate::context::{use_submit_client, use_toaster};
use crate::forms::client::SubmitOutcome;
use crate::forms::models::{Platform, RegistrationDraft};
use crate::forms::state::{submit_once, FormAction, FormState, InFlight, RegistrationField, SubmitAttempt};

const PROGRAM_POINTS: [&str; 5] = [
    "Download the VLV app",
    "Scan your body",
    "Start selling and earning immediately",
    "No upfront costs",
    "Receive 50% of each sale",
];

/// The `#signup` section: program summary plus a short sign-up form that
/// creates a registration record with the sign-up source tag.
#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let client = use_submit_client();
    let toaster = use_toaster();
    let form = use_reducer(FormState::<RegistrationDraft>::default);
    let latch = use_state(InFlight::default);

    let on_submit = {
        let form = form.clone();
        let latch = (*latch).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let built = form.draft.to_signup_record(Utc::now());
            let form = form.clone();
            let client = client.clone();
            let latch = latch.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let begin = form.clone();
                let attempt = submit_once(
                    &latch,
                    built,
                    move || begin.dispatch(FormAction::Begin),
                    |record| async move { client.0.submit_registration(&record).await },
                )
                .await;
                match (&attempt, toaster.as_ref()) {
                    (SubmitAttempt::Settled(Ok(SubmitOutcome::AlreadyRegistered)), Some(toaster)) => {
                        toaster.success("Thank you!", "You have already registered, we will be in touch.")
                    }
                    (SubmitAttempt::Settled(Ok(_)), Some(toaster)) => {
                        toaster.success("Success!", "Thank you for signing up. We'll be in touch soon.")
                    }
                    (SubmitAttempt::Settled(Err(e)), toaster) => {
                        error!("Sign-up failed: {}", e);
                        if let Some(toaster) = toaster {
                            toaster.failure("Sign-up failed", &e.to_string());
                        }
                    }
                    _ => {}
                }
                if let Some(action) = attempt.into_action() {
                    form.dispatch(action);
                }
            });
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(RegistrationField::Email(input.value())));
        })
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(RegistrationField::Name(input.value())));
        })
    };

    let on_platform = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(RegistrationField::Platform(Platform::from_id(&select.value()))));
        })
    };

    let sign_up_again = {
        let form = form.clone();
        Callback::from(move |_: ()| form.dispatch(FormAction::Reset))
    };

    let submitting = form.is_submitting();
    let selected_platform = form.draft.platform.map(Platform::id).unwrap_or("");

    html! {
        <section id="signup" class="section cta-section">
            <div class="section-container narrow">
                <div class="section-intro">
                    <h2 class="section-heading">{"Get "}<span class="gradient-text">{"Started"}</span>{" Today"}</h2>
                    <p class="section-subheading">
                        {"Ready to turn your unique body into a profitable product? Join VLV now and start earning."}
                    </p>
                </div>

                <div class="cta-card">
                    <div class="cta-program">
                        <h3>{"Join Our Creator Program"}</h3>
                        <ul class="check-list">
                            { for PROGRAM_POINTS.iter().map(|point| html! { <li>{*point}</li> }) }
                        </ul>
                        <p class="muted">{"Because your body is your brand, and it deserves to be celebrated."}</p>
                    </div>

                    <div class="cta-form">
                        if let Some(outcome) = form.succeeded() {
                            <Confirmation
                                message={registration_message(outcome)}
                                action_label="Sign up someone else"
                                on_action={sign_up_again}
                            />
                        } else {
                            if let Some(message) = form.inline_error.clone() {
                                <div class="alert alert-destructive" role="alert">{message}</div>
                            }
                            <form class="form" onsubmit={on_submit} novalidate=true>
                                <label for="signup-email">{"Email Address"}</label>
                                <input
                                    id="signup-email"
                                    type="email"
                                    class="input-field"
                                    placeholder="you@example.com"
                                    value={form.draft.email.clone()}
                                    oninput={on_email}
                                    disabled={submitting}
                                    required=true
                                />

                                <label for="signup-name">{"Full Name"}</label>
                                <input
                                    id="signup-name"
                                    type="text"
                                    class="input-field"
                                    placeholder="Your Name"
                                    value={form.draft.name.clone()}
                                    oninput={on_name}
                                    disabled={submitting}
                                    required=true
                                />

                                <label for="signup-platform">{"Platform"}</label>
                                <select
                                    id="signup-platform"
                                    class="input-field"
                                    onchange={on_platform}
                                    disabled={submitting}
                                    required=true
                                >
                                    <option value="" selected={selected_platform.is_empty()}>{"Select your platform"}</option>
                                    { for Platform::ALL.iter().map(|platform| html! {
                                        <option
                                            value={platform.id()}
                                            selected={selected_platform == platform.id()}
                                        >
                                            {platform.label()}
                                        </option>
                                    }) }
                                </select>

                                <button type="submit" class="button-primary full-width" disabled={submitting}>
                                    if submitting {
                                        <span class="spinner"></span>
                                    } else {
                                        {"Sign Up Now →"}
                                    }
                                </button>

                                <p class="fine-print">
                                    {"By signing up, you agree to our Terms of Service and Privacy Policy."}
                                </p>
                            </form>
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
