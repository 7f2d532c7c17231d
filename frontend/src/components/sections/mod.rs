pub mod about;
pub mod adoption_chart;
pub mod donate;
pub mod footer;
pub mod hero;
pub mod pets;
pub mod stats;

pub use about::About;
pub use donate::Donate;
pub use footer::Footer;
pub use hero::Hero;
pub use pets::Pets;
pub use stats::Stats;
