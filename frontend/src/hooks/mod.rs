pub mod use_outside_click;
pub mod use_scroll_tracker;
pub mod use_simulated_submit;
pub mod use_site_state;

pub use use_outside_click::use_outside_click;
pub use use_scroll_tracker::use_scroll_tracker;
pub use use_simulated_submit::use_simulated_submit;
pub use use_site_state::use_site_state;
