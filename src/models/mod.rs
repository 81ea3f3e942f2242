pub use activity::*;
pub use agenda::*;
pub use contact::*;
pub use faq::*;
pub use gallery::*;
pub use hero::*;
pub use testimonial::*;

mod activity;
mod agenda;
mod contact;
mod faq;
mod gallery;
mod hero;
mod testimonial;
