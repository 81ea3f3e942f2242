//! Component-local view state.
//!
//! Each struct here is owned by exactly one component instance and changes
//! only through its methods, so the transitions can be exercised without a
//! rendering engine. The Leptos components in `frontend` hold these in
//! signals and call the methods from DOM event handlers.

pub use carousel::*;
pub use contact::*;
pub use faq::*;
pub use header::*;
pub use layout::*;
pub use overlay::*;

mod carousel;
mod contact;
mod faq;
mod header;
mod layout;
mod overlay;
