use yew::prelude::*;

use crate::forms::client::SubmitOutcome;

/// Copy for the view that replaces a form after it settles successfully.
/// A duplicate gets its own wording but the same view.
pub fn registration_message(outcome: SubmitOutcome) -> &'static str {
    match outcome {
        SubmitOutcome::AlreadyRegistered => "You have already registered, we will be in touch.",
        SubmitOutcome::Stored | SubmitOutcome::Simulated => {
            "Thanks for joining our waitlist! We're excited to have you on board."
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmationProps {
    pub message: AttrValue,
    pub action_label: AttrValue,
    pub on_action: Callback<()>,
}

#[function_component(Confirmation)]
pub fn confirmation(props: &ConfirmationProps) -> Html {
    let onclick = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(()))
    };

    html! {
        <div class="confirmation">
            <div class="confirmation-icon">
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
                </svg>
            </div>
            <p>{&props.message}</p>
            <button type="button" class="button-outline" {onclick}>{&props.action_label}</button>
        </div>
    }
}
