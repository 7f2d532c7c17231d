use crate::services::logging::Logger;
use loklok_shared::{Catalog, Intent, SiteConfig, SiteState};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// [`SiteState`] as a Yew reducer. Intents that change nothing keep the
/// same `Rc`, so subscribers are not re-rendered.
#[derive(Debug, Clone)]
pub struct SiteStore(SiteState);

impl Deref for SiteStore {
    type Target = SiteState;

    fn deref(&self) -> &SiteState {
        &self.0
    }
}

impl Reducible for SiteStore {
    type Action = Intent;

    fn reduce(self: Rc<Self>, intent: Intent) -> Rc<Self> {
        let mut next = (*self).clone();
        // scroll events are too chatty to log
        let description = (!matches!(intent, Intent::Scrolled(_))).then(|| format!("{:?}", intent));
        if next.0.apply(intent) {
            if let Some(description) = description {
                Logger::debug_with_component("site-state", &format!("applied {}", description));
            }
            Rc::new(next)
        } else {
            self
        }
    }
}

pub struct UseSiteStateResult {
    pub state: UseReducerHandle<SiteStore>,
    pub actions: UseSiteStateActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSiteStateActions {
    /// Every component raises intents through this one callback
    pub dispatch: Callback<Intent>,
}

#[hook]
pub fn use_site_state(catalog: Rc<Catalog>, config: SiteConfig) -> UseSiteStateResult {
    let state = use_reducer(move || SiteStore(SiteState::new(catalog, config)));

    let dispatch = {
        let dispatcher = state.dispatcher();
        use_callback((), move |intent: Intent, _| dispatcher.dispatch(intent))
    };

    UseSiteStateResult {
        state,
        actions: UseSiteStateActions { dispatch },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loklok_shared::{catalog, Anchor, NavigationKind, ViewState};

    fn store() -> Rc<SiteStore> {
        let catalog = Rc::new(catalog().unwrap().clone());
        Rc::new(SiteStore(SiteState::new(catalog, SiteConfig::default())))
    }

    #[test]
    fn test_noop_intents_keep_rc() {
        let store = store();

        let same = store.clone().reduce(Intent::Scrolled(10.0));
        assert!(Rc::ptr_eq(&store, &same), "scroll under the threshold");

        let same = store.clone().reduce(Intent::CloseLanguageMenu);
        assert!(Rc::ptr_eq(&store, &same), "language menu already closed");

        let same = store.clone().reduce(Intent::CloseDetail);
        assert!(Rc::ptr_eq(&store, &same), "no detail view open");
    }

    #[test]
    fn test_navigation_yields_new_state() {
        let store = store();
        let next = store.clone().reduce(Intent::NavigateTo(Anchor::Pets));
        assert!(!Rc::ptr_eq(&store, &next));

        let pending = next.pending_scroll().unwrap();
        assert_eq!(pending.anchor, Anchor::Pets);
        assert_eq!(pending.kind, NavigationKind::Immediate);
        assert_eq!(next.view(), ViewState::Home);

        let handled = next.clone().reduce(Intent::ScrollHandled(pending.seq));
        assert!(handled.pending_scroll().is_none());
        let same = handled.clone().reduce(Intent::ScrollHandled(pending.seq));
        assert!(Rc::ptr_eq(&handled, &same), "scroll already handled");
    }

    #[test]
    fn test_scroll_past_threshold_flips_flag() {
        let store = store().reduce(Intent::Scrolled(120.0));
        assert!(store.is_scrolled());
        let same = store.clone().reduce(Intent::Scrolled(300.0));
        assert!(Rc::ptr_eq(&store, &same));
    }
}
