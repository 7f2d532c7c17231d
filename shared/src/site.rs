//! # Site State
//!
//! The single in-memory state tree of a browsing session: active locale,
//! category filter, layout, overlay, nav bar flags and any scroll waiting for
//! the layout to settle.
//!
//! ## Responsibilities:
//! - Apply user [`Intent`]s synchronously
//! - Derive the view-model (filtered and displayed animals, selected animal)
//! - Sequence anchor navigation in two phases: commit the layout change, then
//!   scroll once the renderer reports the layout is ready
//!
//! Locale changes never touch the layout, filter or overlay.

use crate::animal::{Animal, AnimalId};
use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::filter::{display_animals, filter_animals, CategoryFilter};
use crate::locale::Locale;
use crate::overlay::Overlay;
use crate::scroll::ScrollTracker;
use crate::view::{Anchor, NavigationKind, PendingScroll, ViewState};
use std::rc::Rc;

/// Something the visitor did
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetLocale(Locale),
    ToggleLanguageMenu,
    CloseLanguageMenu,
    ToggleMobileMenu,
    SelectCategory(CategoryFilter),
    ShowGallery,
    ShowHome,
    NavigateTo(Anchor),
    /// The renderer committed the layout and performed the scroll `seq`
    ScrollHandled(u32),
    Scrolled(f64),
    SelectAnimal(AnimalId),
    CloseDetail,
    OpenAdopt,
    CloseAdopt,
    OpenDonate(Option<String>),
    CloseDonate,
}

#[derive(Debug, Clone)]
pub struct SiteState {
    catalog: Rc<Catalog>,
    config: SiteConfig,
    locale: Locale,
    filter: CategoryFilter,
    view: ViewState,
    overlay: Overlay,
    scroll: ScrollTracker,
    language_menu_open: bool,
    mobile_menu_open: bool,
    pending_scroll: Option<PendingScroll>,
    scroll_seq: u32,
}

impl SiteState {
    pub fn new(catalog: Rc<Catalog>, config: SiteConfig) -> Self {
        let scroll = ScrollTracker::new(config.scrolled_threshold);
        Self {
            catalog,
            config,
            locale: Locale::default(),
            filter: CategoryFilter::default(),
            view: ViewState::default(),
            overlay: Overlay::default(),
            scroll,
            language_menu_open: false,
            mobile_menu_open: false,
            pending_scroll: None,
            scroll_seq: 0,
        }
    }

    /// Apply an intent. Returns whether anything observable changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::SetLocale(locale) => self.set_locale(locale),
            Intent::ToggleLanguageMenu => {
                self.language_menu_open = !self.language_menu_open;
                true
            }
            Intent::CloseLanguageMenu => std::mem::replace(&mut self.language_menu_open, false),
            Intent::ToggleMobileMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
                true
            }
            Intent::SelectCategory(filter) => std::mem::replace(&mut self.filter, filter) != filter,
            Intent::ShowGallery => self.set_view(ViewState::Gallery),
            Intent::ShowHome => self.set_view(ViewState::Home),
            Intent::NavigateTo(anchor) => {
                self.navigate_to(anchor);
                true
            }
            Intent::ScrollHandled(seq) => self.take_pending_scroll(seq).is_some(),
            Intent::Scrolled(offset) => self.scroll.observe(offset),
            Intent::SelectAnimal(id) => self.select_animal(id),
            Intent::CloseDetail => self.overlay.close_detail(),
            Intent::OpenAdopt => self.open_adopt(),
            Intent::CloseAdopt => self.overlay.close_adopt(),
            Intent::OpenDonate(prefill) => self.overlay.open_donate(prefill),
            Intent::CloseDonate => self.overlay.close_donate(),
        }
    }

    /// Idempotent; dismisses the language dropdown and mobile menu.
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        let changed = self.locale != locale || self.language_menu_open || self.mobile_menu_open;
        self.locale = locale;
        self.language_menu_open = false;
        self.mobile_menu_open = false;
        changed
    }

    fn set_view(&mut self, view: ViewState) -> bool {
        std::mem::replace(&mut self.view, view) != view
    }

    /// Phase one of anchor navigation.
    ///
    /// Switches to the home layout if needed and records the scroll. The
    /// renderer performs it after its next layout pass and acknowledges with
    /// [`Intent::ScrollHandled`].
    pub fn navigate_to(&mut self, anchor: Anchor) -> NavigationKind {
        let kind = match self.view {
            ViewState::Home => NavigationKind::Immediate,
            ViewState::Gallery => NavigationKind::AfterLayout,
        };
        self.view = ViewState::Home;
        self.mobile_menu_open = false;
        self.scroll_seq = self.scroll_seq.wrapping_add(1);
        self.pending_scroll = Some(PendingScroll {
            anchor,
            kind,
            seq: self.scroll_seq,
        });
        kind
    }

    /// Phase two: hand out the pending scroll once, if `seq` is current.
    pub fn take_pending_scroll(&mut self, seq: u32) -> Option<PendingScroll> {
        if self.pending_scroll.map(|pending| pending.seq) == Some(seq) {
            self.pending_scroll.take()
        } else {
            None
        }
    }

    fn select_animal(&mut self, id: AnimalId) -> bool {
        if self.catalog.find(id).is_none() {
            return false;
        }
        self.overlay.open_detail(id)
    }

    fn open_adopt(&mut self) -> bool {
        let catalog = Rc::clone(&self.catalog);
        match self.overlay.selected_animal().and_then(|id| catalog.find(id)) {
            Some(animal) => self.overlay.open_adopt(animal),
            None => false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.is_scrolled()
    }

    pub fn language_menu_open(&self) -> bool {
        self.language_menu_open
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn pending_scroll(&self) -> Option<PendingScroll> {
        self.pending_scroll
    }

    /// Animal shown by the detail view or adoption form
    pub fn selected_animal(&self) -> Option<&Animal> {
        self.overlay.selected_animal().and_then(|id| self.catalog.find(id))
    }

    pub fn filtered_animals(&self) -> Vec<&Animal> {
        filter_animals(self.catalog.animals(), self.filter)
    }

    /// Cards for the current layout
    pub fn displayed_animals(&self) -> Vec<&Animal> {
        display_animals(&self.filtered_animals(), self.view, self.config.home_preview_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::test_support::{adopted_animal, animal};
    use crate::animal::Species;
    use crate::view::resolve_scroll_top;

    fn state() -> SiteState {
        let catalog = Catalog::new(
            vec![
                animal(1, Species::Dog),
                animal(2, Species::Cat),
                adopted_animal(3, Species::Dog),
                animal(4, Species::Cat),
                animal(5, Species::Dog),
            ],
            vec![],
        )
        .unwrap();
        SiteState::new(Rc::new(catalog), SiteConfig::default())
    }

    fn ids(animals: &[&Animal]) -> Vec<u32> {
        animals.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.locale(), Locale::En);
        assert_eq!(state.filter(), CategoryFilter::All);
        assert_eq!(state.view(), ViewState::Home);
        assert_eq!(*state.overlay(), Overlay::None);
        assert!(!state.is_scrolled());
        assert!(state.pending_scroll().is_none());
        assert_eq!(ids(&state.displayed_animals()), vec![1, 2, 3]);
    }

    #[test]
    fn test_gallery_shows_full_filtered_list() {
        let mut state = state();
        state.apply(Intent::SelectCategory(CategoryFilter::Dog));
        assert_eq!(ids(&state.displayed_animals()), vec![1, 3, 5]);

        state.apply(Intent::SelectCategory(CategoryFilter::All));
        assert!(state.apply(Intent::ShowGallery));
        assert_eq!(ids(&state.displayed_animals()), vec![1, 2, 3, 4, 5]);

        assert!(state.apply(Intent::ShowHome));
        assert_eq!(state.view(), ViewState::Home);
        assert!(!state.apply(Intent::ShowHome));
    }

    #[test]
    fn test_view_switch_keeps_filter_and_overlay() {
        let mut state = state();
        state.apply(Intent::SelectCategory(CategoryFilter::Cat));
        state.apply(Intent::SelectAnimal(2));
        state.apply(Intent::ShowGallery);
        assert_eq!(state.filter(), CategoryFilter::Cat);
        assert_eq!(*state.overlay(), Overlay::Detail(2));
    }

    #[test]
    fn test_detail_then_adopt_then_close_resets_selection() {
        let mut state = state();
        assert!(state.apply(Intent::SelectAnimal(1)));
        assert_eq!(state.selected_animal().map(|a| a.id), Some(1));

        assert!(state.apply(Intent::OpenAdopt));
        assert_eq!(*state.overlay(), Overlay::Adopt(1));
        assert_eq!(state.selected_animal().map(|a| a.id), Some(1));

        assert!(state.apply(Intent::CloseAdopt));
        assert_eq!(*state.overlay(), Overlay::None);
        assert!(state.selected_animal().is_none());
    }

    #[test]
    fn test_adopt_on_adopted_animal_is_noop() {
        let mut state = state();
        state.apply(Intent::SelectAnimal(3));
        assert!(!state.apply(Intent::OpenAdopt));
        assert_eq!(*state.overlay(), Overlay::Detail(3));
    }

    #[test]
    fn test_unknown_animal_is_ignored() {
        let mut state = state();
        assert!(!state.apply(Intent::SelectAnimal(42)));
        assert_eq!(*state.overlay(), Overlay::None);
    }

    #[test]
    fn test_locale_switch_leaves_view_overlay_and_filter() {
        let mut state = state();
        state.apply(Intent::SelectCategory(CategoryFilter::Dog));
        state.apply(Intent::ShowGallery);
        state.apply(Intent::SelectAnimal(5));
        state.apply(Intent::ToggleLanguageMenu);
        assert!(state.language_menu_open());

        for locale in [Locale::Tr, Locale::En, Locale::Tr] {
            state.apply(Intent::SetLocale(locale));
            assert_eq!(state.locale(), locale);
            assert_eq!(state.view(), ViewState::Gallery);
            assert_eq!(*state.overlay(), Overlay::Detail(5));
            assert_eq!(state.filter(), CategoryFilter::Dog);
            assert!(!state.language_menu_open());
        }

        assert!(!state.set_locale(Locale::Tr), "setting the same locale twice is a no-op");
    }

    #[test]
    fn test_navigate_from_gallery_defers_scroll_until_layout() {
        let mut state = state();
        state.apply(Intent::ShowGallery);
        state.apply(Intent::ToggleMobileMenu);

        let kind = state.navigate_to(Anchor::Donate);
        assert_eq!(kind, NavigationKind::AfterLayout);
        assert_eq!(state.view(), ViewState::Home);
        assert!(!state.mobile_menu_open());

        let pending = state.pending_scroll().unwrap();
        assert_eq!(pending.anchor, Anchor::Donate);

        // Renderer reports the home layout is mounted; donate sits 2400px down
        let taken = state.take_pending_scroll(pending.seq).unwrap();
        let top = resolve_scroll_top(taken.anchor, Some(2400.0), 0.0, state.config().header_offset);
        assert_eq!(top, Some(2300.0));
        assert!(state.pending_scroll().is_none());
    }

    #[test]
    fn test_navigate_on_home_is_immediate() {
        let mut state = state();
        assert_eq!(state.navigate_to(Anchor::About), NavigationKind::Immediate);
        assert_eq!(state.view(), ViewState::Home);
    }

    #[test]
    fn test_stale_scroll_ack_is_ignored() {
        let mut state = state();
        state.apply(Intent::NavigateTo(Anchor::Pets));
        let first = state.pending_scroll().unwrap().seq;
        state.apply(Intent::NavigateTo(Anchor::Donate));

        assert!(!state.apply(Intent::ScrollHandled(first)));
        assert_eq!(state.pending_scroll().map(|p| p.anchor), Some(Anchor::Donate));

        let current = state.pending_scroll().unwrap().seq;
        assert!(state.apply(Intent::ScrollHandled(current)));
        assert!(state.pending_scroll().is_none());
    }

    #[test]
    fn test_scrolled_flag_follows_threshold() {
        let mut state = state();
        assert!(state.apply(Intent::Scrolled(120.0)));
        assert!(state.is_scrolled());
        assert!(!state.apply(Intent::Scrolled(80.0)));
        assert!(state.apply(Intent::Scrolled(0.0)));
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_donate_overlay_from_any_layout() {
        let mut state = state();
        state.apply(Intent::ShowGallery);
        assert!(state.apply(Intent::OpenDonate(Some("$50".to_string()))));
        assert_eq!(*state.overlay(), Overlay::Donate { prefill: Some("$50".to_string()) });
        assert!(!state.apply(Intent::SelectAnimal(1)), "backdrop covers the cards");
        assert!(state.apply(Intent::CloseDonate));
        assert_eq!(*state.overlay(), Overlay::None);
    }

    #[test]
    fn test_menus() {
        let mut state = state();
        state.apply(Intent::ToggleLanguageMenu);
        assert!(state.apply(Intent::CloseLanguageMenu));
        assert!(!state.apply(Intent::CloseLanguageMenu));

        state.apply(Intent::ToggleMobileMenu);
        assert!(state.mobile_menu_open());
        state.apply(Intent::SetLocale(Locale::Tr));
        assert!(!state.mobile_menu_open());
    }
}
