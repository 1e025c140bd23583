pub mod auth;
pub mod browse;
pub mod home;
pub mod matches;
pub mod post;
pub mod swipe;
