use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use yew::Reducible;

use super::client::{SubmitError, SubmitOutcome};
use super::models::{ContactDraft, Interest, Platform, RegistrationDraft};
use super::validation::ValidationError;

/// A form's field values plus the edits its inputs can emit.
pub trait Draft: Clone + Default + PartialEq + 'static {
    type Field;

    fn apply(&mut self, field: Self::Field);
}

pub enum RegistrationField {
    Email(String),
    Name(String),
    DomainPreference(String),
    Message(String),
    ToggleInterest(Interest),
    Platform(Option<Platform>),
}

impl Draft for RegistrationDraft {
    type Field = RegistrationField;

    fn apply(&mut self, field: RegistrationField) {
        match field {
            RegistrationField::Email(v) => self.email = v,
            RegistrationField::Name(v) => self.name = v,
            RegistrationField::DomainPreference(v) => self.domain_preference = v,
            RegistrationField::Message(v) => self.message = v,
            RegistrationField::ToggleInterest(i) => self.toggle_interest(i),
            RegistrationField::Platform(p) => self.platform = p,
        }
    }
}

pub enum ContactField {
    Name(String),
    Email(String),
    Subject(String),
    Message(String),
}

impl Draft for ContactDraft {
    type Field = ContactField;

    fn apply(&mut self, field: ContactField) {
        match field {
            ContactField::Name(v) => self.name = v,
            ContactField::Email(v) => self.email = v,
            ContactField::Subject(v) => self.subject = v,
            ContactField::Message(v) => self.message = v,
        }
    }
}

/// `Idle -> Submitting -> {Succeeded | Failed}`, and `Failed -> Idle` on the
/// next edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Succeeded(SubmitOutcome),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState<D> {
    pub draft: D,
    pub status: FormStatus,
    /// Validation or submission error rendered next to the form.
    pub inline_error: Option<String>,
}

impl<D: Default> Default for FormState<D> {
    fn default() -> Self {
        Self {
            draft: D::default(),
            status: FormStatus::Idle,
            inline_error: None,
        }
    }
}

impl<D> FormState<D> {
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn succeeded(&self) -> Option<SubmitOutcome> {
        match self.status {
            FormStatus::Succeeded(outcome) => Some(outcome),
            _ => None,
        }
    }
}

pub enum FormAction<D: Draft> {
    Edit(D::Field),
    Invalid(ValidationError),
    Begin,
    Settle(Result<SubmitOutcome, SubmitError>),
    /// Back to a fresh form, e.g. when a dialog is reopened.
    Reset,
}

impl<D: Draft> Reducible for FormState<D> {
    type Action = FormAction<D>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field) => {
                next.draft.apply(field);
                next.inline_error = None;
                if matches!(next.status, FormStatus::Failed(_)) {
                    next.status = FormStatus::Idle;
                }
            }
            FormAction::Invalid(error) => {
                next.inline_error = Some(error.to_string());
                if matches!(next.status, FormStatus::Failed(_)) {
                    next.status = FormStatus::Idle;
                }
            }
            FormAction::Begin => {
                next.status = FormStatus::Submitting;
                next.inline_error = None;
            }
            FormAction::Settle(Ok(outcome)) => {
                next.draft = D::default();
                next.status = FormStatus::Succeeded(outcome);
                next.inline_error = None;
            }
            FormAction::Settle(Err(error)) => {
                let message = error.to_string();
                next.inline_error = Some(message.clone());
                next.status = FormStatus::Failed(message);
            }
            // An in-flight request still owns the form; its Settle ends it.
            FormAction::Reset if next.is_submitting() => {}
            FormAction::Reset => {
                next.status = FormStatus::Idle;
                next.inline_error = None;
            }
        }
        Rc::new(next)
    }
}

/// Latch shared by a form's callbacks. At most one submission holds it, and
/// the holder's token releases it on drop, whether the request settled with
/// success or failure.
#[derive(Clone, Default)]
pub struct InFlight(Rc<Cell<bool>>);

pub struct InFlightToken(Rc<Cell<bool>>);

impl InFlight {
    pub fn try_acquire(&self) -> Option<InFlightToken> {
        if self.0.replace(true) {
            None
        } else {
            Some(InFlightToken(self.0.clone()))
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.0.get()
    }
}

impl Drop for InFlightToken {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed; nothing was sent.
    Invalid(ValidationError),
    /// Another submission from the same form is still in flight.
    Busy,
    Settled(Result<SubmitOutcome, SubmitError>),
}

/// Validates, takes the latch, then sends exactly once. `on_begin` runs after
/// the latch is taken and before the request goes out.
pub async fn submit_once<R, F, Fut>(
    latch: &InFlight,
    built: Result<R, ValidationError>,
    on_begin: impl FnOnce(),
    send: F,
) -> SubmitAttempt
where
    F: FnOnce(R) -> Fut,
    Fut: Future<Output = Result<SubmitOutcome, SubmitError>>,
{
    let payload = match built {
        Ok(payload) => payload,
        Err(error) => return SubmitAttempt::Invalid(error),
    };
    let Some(_token) = latch.try_acquire() else {
        return SubmitAttempt::Busy;
    };
    on_begin();
    SubmitAttempt::Settled(send(payload).await)
}

impl SubmitAttempt {
    /// Feeds the attempt back into the form's state machine.
    pub fn into_action<D: Draft>(self) -> Option<FormAction<D>> {
        match self {
            SubmitAttempt::Invalid(error) => Some(FormAction::Invalid(error)),
            SubmitAttempt::Busy => None,
            SubmitAttempt::Settled(result) => Some(FormAction::Settle(result)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::client::SubmitClient;
    use crate::forms::models::{ContactMessage, RegistrationRecord};
    use async_trait::async_trait;
    use chrono::Utc;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;

    /// Records every payload and answers with a fixed result.
    struct RecordingClient {
        calls: RefCell<Vec<String>>,
        reply: Result<SubmitOutcome, SubmitError>,
    }

    impl RecordingClient {
        fn replying(reply: Result<SubmitOutcome, SubmitError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply,
            }
        }
    }

    #[async_trait(?Send)]
    impl SubmitClient for RecordingClient {
        async fn submit_registration(&self, record: &RegistrationRecord) -> Result<SubmitOutcome, SubmitError> {
            self.calls.borrow_mut().push(record.email.clone());
            self.reply.clone()
        }

        async fn submit_contact(&self, message: &ContactMessage) -> Result<SubmitOutcome, SubmitError> {
            self.calls.borrow_mut().push(message.email.clone());
            self.reply.clone()
        }
    }

    fn draft(email: &str) -> RegistrationDraft {
        RegistrationDraft {
            email: email.into(),
            message: "hello".into(),
            ..Default::default()
        }
    }

    fn run(
        client: &RecordingClient,
        latch: &InFlight,
        state: Rc<FormState<RegistrationDraft>>,
    ) -> Rc<FormState<RegistrationDraft>> {
        let began = Cell::new(false);
        let attempt = block_on(submit_once(
            latch,
            state.draft.to_record(Utc::now()),
            || began.set(true),
            |record| async move { client.submit_registration(&record).await },
        ));
        let mut state = state;
        if began.get() {
            state = state.reduce(FormAction::Begin);
        }
        match attempt.into_action() {
            Some(action) => state.reduce(action),
            None => state,
        }
    }

    fn with_draft(draft: RegistrationDraft) -> Rc<FormState<RegistrationDraft>> {
        Rc::new(FormState { draft, ..Default::default() })
    }

    #[test]
    fn invalid_email_never_reaches_the_client() {
        let client = RecordingClient::replying(Ok(SubmitOutcome::Stored));
        let latch = InFlight::default();

        for email in ["", "ada", "ada@example", "ada @example.com"] {
            let state = run(&client, &latch, with_draft(draft(email)));
            assert_eq!(state.status, FormStatus::Idle);
            assert_eq!(state.inline_error.as_deref(), Some("Please enter a valid email address"));
        }
        assert!(client.calls.borrow().is_empty());
    }

    #[test]
    fn success_clears_the_form_and_confirms() {
        let client = RecordingClient::replying(Ok(SubmitOutcome::Stored));
        let state = run(&client, &InFlight::default(), with_draft(draft("ada@example.com")));

        assert_eq!(client.calls.borrow().len(), 1);
        assert_eq!(state.succeeded(), Some(SubmitOutcome::Stored));
        assert_eq!(state.draft, RegistrationDraft::default());
        assert!(state.inline_error.is_none());
    }

    #[test]
    fn duplicate_confirms_like_a_plain_success() {
        let client = RecordingClient::replying(Ok(SubmitOutcome::AlreadyRegistered));
        let state = run(&client, &InFlight::default(), with_draft(draft("ada@example.com")));

        assert_eq!(state.succeeded(), Some(SubmitOutcome::AlreadyRegistered));
        assert_eq!(state.draft, RegistrationDraft::default());
    }

    #[test]
    fn failure_keeps_the_fields_for_retry() {
        let client = RecordingClient::replying(Err(SubmitError::Network("connection refused".into())));
        let latch = InFlight::default();
        let state = run(&client, &latch, with_draft(draft("ada@example.com")));

        assert_eq!(state.status, FormStatus::Failed("Request failed: connection refused".into()));
        assert_eq!(state.draft, draft("ada@example.com"));
        assert!(state.inline_error.is_some());
        assert!(!latch.is_active(), "latch must be released after a failure");

        // Editing returns the form to idle so it can be resubmitted.
        let state = state.reduce(FormAction::Edit(RegistrationField::Message("again".into())));
        assert_eq!(state.status, FormStatus::Idle);
        assert!(state.inline_error.is_none());
        assert_eq!(state.draft.email, "ada@example.com");
    }

    #[test]
    fn one_request_while_in_flight() {
        let calls = Rc::new(Cell::new(0u32));
        let (release, gate) = oneshot::channel::<()>();
        let gate = Rc::new(RefCell::new(Some(gate)));
        let latch = InFlight::default();
        let results = Rc::new(RefCell::new(Vec::new()));

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for _ in 0..3 {
            let (calls, gate, latch, results) = (calls.clone(), gate.clone(), latch.clone(), results.clone());
            spawner
                .spawn_local(async move {
                    let attempt = submit_once(&latch, draft("ada@example.com").to_record(Utc::now()), || {}, |_| async move {
                        calls.set(calls.get() + 1);
                        let waiting = gate.borrow_mut().take();
                        if let Some(waiting) = waiting {
                            let _ = waiting.await;
                        }
                        Ok(SubmitOutcome::Stored)
                    })
                    .await;
                    results.borrow_mut().push(attempt);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        assert_eq!(calls.get(), 1);
        assert!(latch.is_active());
        assert_eq!(*results.borrow(), vec![SubmitAttempt::Busy, SubmitAttempt::Busy]);

        release.send(()).unwrap();
        pool.run_until_stalled();
        assert!(!latch.is_active());
        assert_eq!(results.borrow().last(), Some(&SubmitAttempt::Settled(Ok(SubmitOutcome::Stored))));
    }

    #[test]
    fn reset_reopens_a_confirmed_form() {
        let state = with_draft(RegistrationDraft::default())
            .reduce(FormAction::Begin)
            .reduce(FormAction::Settle(Ok(SubmitOutcome::Simulated)))
            .reduce(FormAction::Reset);
        assert_eq!(state.status, FormStatus::Idle);
    }

    #[test]
    fn reopening_mid_request_keeps_the_submit_disabled() {
        let latch = InFlight::default();
        let _token = latch.try_acquire().unwrap();

        let state = with_draft(draft("ada@example.com"))
            .reduce(FormAction::Begin)
            .reduce(FormAction::Reset);
        assert!(state.is_submitting());
        assert!(latch.is_active());

        let state = state
            .reduce(FormAction::Settle(Ok(SubmitOutcome::Stored)))
            .reduce(FormAction::Reset);
        assert_eq!(state.status, FormStatus::Idle);
    }
}
