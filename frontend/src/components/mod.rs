pub mod animal_card;
pub mod button;
pub mod category_tabs;
pub mod detail_modal;
pub mod forms;
pub mod gallery;
pub mod modal;
pub mod nav_bar;
pub mod sections;
pub mod strings;

pub use detail_modal::DetailModal;
pub use forms::{AdoptFormModal, DonateFormModal};
pub use gallery::Gallery;
pub use nav_bar::NavBar;
pub use strings::Strings;
