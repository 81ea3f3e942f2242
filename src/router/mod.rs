//! Navigation rules that stay independent of the browser.
//!
//! Path matching, parameter capture and redirects belong to `leptos_router`
//! (see `frontend::routes`). What lives here is the part the router asks
//! about: whether a session may enter a protected branch and where it goes
//! otherwise, plus the identity of every feature view.

pub use guard::*;
pub use views::*;

mod guard;
mod views;
