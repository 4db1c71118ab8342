//! Hooks for the services `App` provides through context.
//!
//! The submission client and consent store are chosen once at startup and
//! handed down, so components never decide between a live and a demo backend
//! or touch `window.localStorage` directly.

use std::rc::Rc;

use yew::prelude::*;

use crate::components::notification::Toaster;
use crate::consent::store::{ConsentStore, MemoryStore};
use crate::forms::client::{DemoSubmitClient, SubmitHandle};

/// Falls back to the demo client when rendered outside `App`.
#[hook]
pub fn use_submit_client() -> SubmitHandle {
    use_context::<SubmitHandle>().unwrap_or_else(|| SubmitHandle(Rc::new(DemoSubmitClient)))
}

/// Falls back to a throwaway in-memory store when rendered outside `App`.
#[hook]
pub fn use_consent_store() -> ConsentStore {
    use_context::<ConsentStore>().unwrap_or_else(|| ConsentStore::new(Rc::new(MemoryStore::default())))
}

#[hook]
pub fn use_toaster() -> Option<Toaster> {
    use_context::<Toaster>()
}
