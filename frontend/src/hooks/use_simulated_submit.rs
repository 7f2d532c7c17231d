//! Fake network round trip for the adoption and donation forms.
//!
//! A pending ticket arms a one-shot timer. The timer lives inside the
//! effect keyed on the submission state, so closing the modal (unmounting
//! the form) drops it before it can fire.

use crate::services::logging::Logger;
use gloo::timers::callback::Timeout;
use loklok_shared::{Submission, SubmissionState, Ticket};
use std::rc::Rc;
use yew::prelude::*;

pub enum SubmissionAction {
    Begin,
    Complete(Ticket),
}

#[derive(Default, PartialEq)]
pub struct SubmissionStore(Submission);

impl Reducible for SubmissionStore {
    type Action = SubmissionAction;

    fn reduce(self: Rc<Self>, action: SubmissionAction) -> Rc<Self> {
        let mut submission = self.0;
        let changed = match action {
            SubmissionAction::Begin => submission.begin().is_some(),
            SubmissionAction::Complete(ticket) => submission.complete(ticket),
        };
        if changed {
            Rc::new(SubmissionStore(submission))
        } else {
            self
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseSimulatedSubmitResult {
    pub state: SubmissionState,
    pub actions: UseSimulatedSubmitActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSimulatedSubmitActions {
    pub begin: Callback<()>,
}

#[hook]
pub fn use_simulated_submit(component: &'static str, delay_ms: u32) -> UseSimulatedSubmitResult {
    let store = use_reducer(SubmissionStore::default);

    {
        let dispatcher = store.dispatcher();
        use_effect_with(store.0.state(), move |state| {
            let timeout = match *state {
                SubmissionState::Pending(ticket) => {
                    Logger::debug_with_component(component, &format!("submission {} pending", ticket));
                    Some(Timeout::new(delay_ms, move || {
                        Logger::info_with_component(component, &format!("submission {} completed", ticket));
                        dispatcher.dispatch(SubmissionAction::Complete(ticket));
                    }))
                }
                _ => None,
            };
            move || drop(timeout)
        });
    }

    let begin = {
        let dispatcher = store.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(SubmissionAction::Begin))
    };

    UseSimulatedSubmitResult {
        state: store.0.state(),
        actions: UseSimulatedSubmitActions { begin },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(store: Rc<SubmissionStore>, action: SubmissionAction) -> Rc<SubmissionStore> {
        store.reduce(action)
    }

    #[test]
    fn test_unchanged_store_keeps_rc() {
        let store = Rc::new(SubmissionStore::default());
        let same = reduce(store.clone(), SubmissionAction::Complete(7));
        assert!(Rc::ptr_eq(&store, &same));
    }

    #[test]
    fn test_begin_then_complete() {
        let store = reduce(Rc::new(SubmissionStore::default()), SubmissionAction::Begin);
        let SubmissionState::Pending(ticket) = store.0.state() else {
            panic!("expected a pending submission");
        };

        let again = reduce(store.clone(), SubmissionAction::Begin);
        assert!(Rc::ptr_eq(&store, &again), "double submit is ignored");

        let store = reduce(store, SubmissionAction::Complete(ticket));
        assert_eq!(store.0.state(), SubmissionState::Submitted);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let store = reduce(Rc::new(SubmissionStore::default()), SubmissionAction::Begin);
        let SubmissionState::Pending(ticket) = store.0.state() else {
            panic!("expected a pending submission");
        };

        let store = reduce(store, SubmissionAction::Complete(ticket + 1));
        assert_eq!(store.0.state(), SubmissionState::Pending(ticket));
    }
}
