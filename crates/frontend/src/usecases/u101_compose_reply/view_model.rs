//! Compose Reply - View Model
//!
//! Signals back the view; transitions run on a `ReplyFormState` snapshot and
//! are written back with `update`.

use contracts::usecases::u101_compose_reply::validation::can_submit;
use contracts::usecases::u101_compose_reply::{ImageAttachment, OperationState, ReplyFormState};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ComposeReplyVm {
    pub complaint: RwSignal<String>,
    pub core_answer: RwSignal<String>,
    pub image: RwSignal<Option<ImageAttachment>>,
    pub response: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    pub is_copied: RwSignal<bool>,
    request_seq: RwSignal<u64>,
    attach_seq: RwSignal<u64>,
}

impl ComposeReplyVm {
    pub fn new() -> Self {
        Self {
            complaint: RwSignal::new(String::new()),
            core_answer: RwSignal::new(String::new()),
            image: RwSignal::new(None),
            response: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            is_copied: RwSignal::new(false),
            request_seq: RwSignal::new(0),
            attach_seq: RwSignal::new(0),
        }
    }

    /// Reactive submit guard
    pub fn can_submit(&self) -> bool {
        can_submit(
            &self.complaint.get(),
            self.image.with(|image| image.is_some()),
            &self.core_answer.get(),
            self.is_loading.get(),
        )
    }

    /// Reactive outcome for the result area and the error banner
    pub fn status(&self) -> OperationState {
        let is_loading = self.is_loading.get();
        self.error.with(|error| {
            self.response
                .with(|response| OperationState::from_parts(is_loading, error.as_deref(), response))
        })
    }

    pub fn snapshot(&self) -> ReplyFormState {
        ReplyFormState {
            complaint: self.complaint.get_untracked(),
            core_answer: self.core_answer.get_untracked(),
            image: self.image.get_untracked(),
            response: self.response.get_untracked(),
            error: self.error.get_untracked(),
            is_loading: self.is_loading.get_untracked(),
            is_copied: self.is_copied.get_untracked(),
            request_seq: self.request_seq.get_untracked(),
            attach_seq: self.attach_seq.get_untracked(),
        }
    }

    /// Run a transition and write changed fields back to the signals
    pub fn update<R>(&self, f: impl FnOnce(&mut ReplyFormState) -> R) -> R {
        let before = self.snapshot();
        let mut state = before.clone();
        let result = f(&mut state);

        set_if_changed(self.complaint, &before.complaint, state.complaint);
        set_if_changed(self.core_answer, &before.core_answer, state.core_answer);
        set_if_changed(self.image, &before.image, state.image);
        set_if_changed(self.response, &before.response, state.response);
        set_if_changed(self.error, &before.error, state.error);
        set_if_changed(self.is_loading, &before.is_loading, state.is_loading);
        set_if_changed(self.is_copied, &before.is_copied, state.is_copied);
        set_if_changed(self.request_seq, &before.request_seq, state.request_seq);
        set_if_changed(self.attach_seq, &before.attach_seq, state.attach_seq);

        result
    }
}

impl Default for ComposeReplyVm {
    fn default() -> Self {
        Self::new()
    }
}

// Re-setting a bound textarea moves its caret
fn set_if_changed<T>(signal: RwSignal<T>, before: &T, after: T)
where
    T: PartialEq + Send + Sync + 'static,
{
    if *before != after {
        signal.set(after);
    }
}
