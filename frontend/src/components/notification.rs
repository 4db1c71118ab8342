use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays up unless dismissed.
pub const TOAST_LIFETIME_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => {
                if !next.toasts.iter().any(|t| t.id == toast.id) {
                    next.toasts.push(toast);
                }
            }
            ToastAction::Dismiss(id) => next.toasts.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

/// Context handle forms use to raise notifications.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    push: Callback<(String, String, ToastVariant)>,
}

impl Toaster {
    pub fn success(&self, title: &str, description: &str) {
        self.push
            .emit((title.to_string(), description.to_string(), ToastVariant::Default));
    }

    pub fn failure(&self, title: &str, description: &str) {
        self.push
            .emit((title.to_string(), description.to_string(), ToastVariant::Destructive));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_mut_ref(|| 0u32);

    let toaster = {
        let queue = queue.clone();
        use_state(move || Toaster {
            push: Callback::from(move |(title, description, variant): (String, String, ToastVariant)| {
                let id = {
                    let mut counter = next_id.borrow_mut();
                    let id = *counter;
                    *counter = id.wrapping_add(1);
                    id
                };
                queue.dispatch(ToastAction::Push(Toast {
                    id,
                    title,
                    description,
                    variant,
                }));
                let queue = queue.clone();
                Timeout::new(TOAST_LIFETIME_MS, move || queue.dispatch(ToastAction::Dismiss(id))).forget();
            }),
        })
    };

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { for props.children.iter() }
            <div class="toast-viewport" aria-live="polite">
                { for queue.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let dismiss = {
                        let queue = queue.clone();
                        Callback::from(move |_: MouseEvent| queue.dispatch(ToastAction::Dismiss(id)))
                    };
                    html! {
                        <div
                            key={id}
                            class={classes!("toast", (toast.variant == ToastVariant::Destructive).then(|| "toast-destructive"))}
                            role="status"
                        >
                            <div class="toast-body">
                                <div class="toast-title">{&toast.title}</div>
                                <div class="toast-description">{&toast.description}</div>
                            </div>
                            <button class="toast-close" onclick={dismiss} aria-label="Dismiss">{"✕"}</button>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, id: u32, title: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push(Toast {
            id,
            title: title.to_string(),
            description: String::new(),
            variant: ToastVariant::Default,
        }))
    }

    #[test]
    fn toasts_stack_in_arrival_order() {
        let queue = push(push(Rc::new(ToastQueue::default()), 0, "first"), 1, "second");
        let titles: Vec<&str> = queue.toasts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);

        let queue = push(queue, 1, "again");
        assert_eq!(queue.toasts.len(), 2);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let queue = push(push(Rc::new(ToastQueue::default()), 0, "first"), 1, "second");
        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].title, "second");

        // Timer firing after a manual dismiss is a no-op.
        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.toasts.len(), 1);
    }
}
