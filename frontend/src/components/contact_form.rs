use chrono::Utc;
use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::confirmation::Confirmation;
use crate::context::{use_submit_client, use_toaster};
use crate::forms::models::ContactDraft;
use crate::forms::state::{submit_once, ContactField, FormAction, FormState, InFlight, SubmitAttempt};

pub const CONTACT_ADDRESS: &str = "Hannah@vulvalareplica.com";

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let client = use_submit_client();
    let toaster = use_toaster();
    let form = use_reducer(FormState::<ContactDraft>::default);
    let latch = use_state(InFlight::default);

    let on_submit = {
        let form = form.clone();
        let latch = (*latch).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let built = form.draft.to_message(Utc::now());
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
                    |message| async move { client.0.submit_contact(&message).await },
                )
                .await;
                match (&attempt, toaster.as_ref()) {
                    (SubmitAttempt::Settled(Ok(_)), Some(toaster)) => {
                        toaster.success("Message sent!", "Thank you for contacting us. We'll get back to you soon.")
                    }
                    (SubmitAttempt::Settled(Err(e)), toaster) => {
                        error!("Contact form failed: {}", e);
                        if let Some(toaster) = toaster {
                            toaster.failure("Message not sent", &e.to_string());
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

    let text_input = |to_field: fn(String) -> ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(to_field(input.value())));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(ContactField::Message(input.value())));
        })
    };

    let write_another = {
        let form = form.clone();
        Callback::from(move |_: ()| form.dispatch(FormAction::Reset))
    };

    let submitting = form.is_submitting();

    html! {
        <div class="contact-card">
            <h2>{"✉ Contact Us"}</h2>

            if form.succeeded().is_some() {
                <Confirmation
                    message="Thank you for contacting us. We'll get back to you soon."
                    action_label="Send another message"
                    on_action={write_another}
                />
            } else {
                if let Some(message) = form.inline_error.clone() {
                    <div class="alert alert-destructive" role="alert">{message}</div>
                }
                <form class="form" onsubmit={on_submit} novalidate=true>
                    <label for="contact-name">{"Name *"}</label>
                    <input
                        id="contact-name"
                        placeholder="Your name"
                        value={form.draft.name.clone()}
                        oninput={text_input(ContactField::Name)}
                        disabled={submitting}
                        required=true
                    />

                    <label for="contact-email">{"Email Address *"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        placeholder="you@example.com"
                        value={form.draft.email.clone()}
                        oninput={text_input(ContactField::Email)}
                        disabled={submitting}
                        required=true
                    />

                    <label for="contact-subject">{"Subject"}</label>
                    <input
                        id="contact-subject"
                        placeholder="What's this regarding?"
                        value={form.draft.subject.clone()}
                        oninput={text_input(ContactField::Subject)}
                        disabled={submitting}
                    />

                    <label for="contact-message">{"Message *"}</label>
                    <textarea
                        id="contact-message"
                        class="tall"
                        placeholder="How can we help you?"
                        value={form.draft.message.clone()}
                        oninput={on_message}
                        disabled={submitting}
                        required=true
                    />

                    <button type="submit" class="button-primary full-width" disabled={submitting}>
                        { if submitting { "Sending..." } else { "Send Message" } }
                    </button>

                    <p class="muted">{format!("Your message will be sent to {}", CONTACT_ADDRESS)}</p>
                </form>
            }
        </div>
    }
}
