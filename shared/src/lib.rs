//! Core of the LokLok shelter site: the animal catalog, string tables,
//! category filter, layout and overlay state machine, and the simulated
//! adoption/donation forms. Nothing here touches the browser, so the whole
//! crate is tested natively.

pub mod animal;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod forms;
pub mod i18n;
pub mod locale;
pub mod overlay;
pub mod scroll;
pub mod site;
pub mod view;

pub use animal::{Animal, AnimalId, Gender, Size, Species};
pub use catalog::{catalog, AdoptionDatum, Catalog, DataError};
pub use config::{ConfigError, SiteConfig};
pub use filter::{display_animals, filter_animals, CategoryFilter};
pub use forms::{
    AdoptForm, AdoptionInquiry, DonateForm, DonationRecord, FormError, FormField, Submission,
    SubmissionState, Ticket,
};
pub use i18n::{dictionary, Dictionary};
pub use locale::{Locale, LocaleError, Localized};
pub use overlay::Overlay;
pub use scroll::ScrollTracker;
pub use site::{Intent, SiteState};
pub use view::{resolve_scroll_top, Anchor, NavigationKind, PendingScroll, ViewState};
