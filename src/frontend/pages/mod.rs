//! Page components

mod feature;
mod home;
mod unavailable;

pub use feature::*;
pub use home::HomePage;
pub use unavailable::SiteUnavailable;
