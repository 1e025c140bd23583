mod auth_switch;
pub use auth_switch::*;

mod filter_bar;
pub use filter_bar::*;

pub mod notice;

mod profile_card;
pub use profile_card::*;

mod swipe_card;
pub use swipe_card::*;
