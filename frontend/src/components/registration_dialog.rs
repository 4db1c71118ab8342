use chrono::Utc;
use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::confirmation::{registration_message, Confirmation};
use crate::components::notification::Toaster;
use crate::context::{use_submit_client, use_toaster};
use crate::forms::client::SubmitOutcome;
use crate::forms::models::{Interest, RegistrationDraft};
use crate::forms::state::{submit_once, FormAction, FormState, InFlight, RegistrationField, SubmitAttempt};

fn announce(toaster: Option<&Toaster>, attempt: &SubmitAttempt) {
    match attempt {
        SubmitAttempt::Settled(Ok(outcome)) => {
            if let Some(toaster) = toaster {
                match outcome {
                    SubmitOutcome::AlreadyRegistered => {
                        toaster.success("Thank you!", "You have already registered, we will be in touch.")
                    }
                    _ => toaster.success("Interest registered!", "We'll be in touch soon."),
                }
            }
        }
        SubmitAttempt::Settled(Err(e)) => {
            error!("Registration failed: {}", e);
            if let Some(toaster) = toaster {
                toaster.failure("Registration error", &e.to_string());
            }
        }
        SubmitAttempt::Invalid(_) | SubmitAttempt::Busy => {}
    }
}

#[derive(Properties, PartialEq)]
pub struct RegistrationDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(RegistrationDialog)]
pub fn registration_dialog(props: &RegistrationDialogProps) -> Html {
    let client = use_submit_client();
    let toaster = use_toaster();
    let form = use_reducer(FormState::<RegistrationDraft>::default);
    let latch = use_state(InFlight::default);

    // Every reopen starts from the form, not the last confirmation.
    {
        let form = form.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    form.dispatch(FormAction::Reset);
                }
                || ()
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let on_submit = {
        let form = form.clone();
        let client = client.clone();
        let latch = (*latch).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let built = form.draft.to_record(Utc::now());
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
                announce(toaster.as_ref(), &attempt);
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

    let on_domain = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(RegistrationField::DomainPreference(input.value())));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(RegistrationField::Message(input.value())));
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let submitting = form.is_submitting();
    let confirmed = form.succeeded();

    html! {
        <div class="dialog-overlay" onclick={close.clone()}>
            <div class="dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                <button type="button" class="dialog-close" onclick={close} aria-label="Close">{"✕"}</button>
                <div class="dialog-header">
                    <h2>{ if confirmed.is_some() { "Thank You!" } else { "Register Your Interest" } }</h2>
                    <p class="dialog-description">
                        {
                            if confirmed.is_some() {
                                "We appreciate your interest. We'll be in touch soon with more details."
                            } else {
                                "Be among the first to experience VLV. Join our waitlist for early access and exclusive updates."
                            }
                        }
                    </p>
                </div>

                if let Some(outcome) = confirmed {
                    <Confirmation
                        message={registration_message(outcome)}
                        action_label="Close"
                        on_action={props.on_close.clone()}
                    />
                } else {
                    if let Some(message) = form.inline_error.clone() {
                        <div class="alert alert-destructive" role="alert">{message}</div>
                    }
                    if client.is_demo() {
                        <div class="alert">
                            {"Note: Demo mode active. Your details won't be stored, but the form will still work."}
                        </div>
                    }
                    <form class="form" onsubmit={on_submit} novalidate=true>
                        <label for="register-email">{"Email Address"}</label>
                        <input
                            id="register-email"
                            type="email"
                            placeholder="youremail@example.com"
                            value={form.draft.email.clone()}
                            oninput={on_email}
                            disabled={submitting}
                            required=true
                        />

                        <fieldset class="interest-options" disabled={submitting}>
                            <legend>{"Role: (optional)"}</legend>
                            { for Interest::ALL.iter().map(|interest| {
                                let interest = *interest;
                                let onchange = {
                                    let form = form.clone();
                                    Callback::from(move |_: Event| {
                                        form.dispatch(FormAction::Edit(RegistrationField::ToggleInterest(interest)));
                                    })
                                };
                                html! {
                                    <label class="checkbox" key={interest.id()}>
                                        <input
                                            type="checkbox"
                                            id={interest.id()}
                                            checked={form.draft.interests.contains(&interest)}
                                            {onchange}
                                        />
                                        {interest.label()}
                                    </label>
                                }
                            }) }
                        </fieldset>

                        <label for="domain-preference">{"Domain Preference (optional)"}</label>
                        <textarea
                            id="domain-preference"
                            rows="2"
                            placeholder="What domain name would you like? (e.g., yourname.com)"
                            value={form.draft.domain_preference.clone()}
                            oninput={on_domain}
                            disabled={submitting}
                        />

                        <label for="register-message">{"Message (optional)"}</label>
                        <textarea
                            id="register-message"
                            placeholder="Tell us more..."
                            value={form.draft.message.clone()}
                            oninput={on_message}
                            disabled={submitting}
                        />

                        <button type="submit" class="button-primary full-width" disabled={submitting}>
                            { if submitting { "Submitting..." } else { "Submit" } }
                        </button>
                    </form>
                }
            </div>
        </div>
    }
}
