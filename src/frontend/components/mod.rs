//! Reusable UI components for the association site

mod activities;
mod agenda;
mod carousel;
mod contact;
mod faq;
mod footer;
mod gallery;
mod header;
mod overlays;

pub use activities::Activities;
pub use agenda::Agenda;
pub use carousel::{HeroCarousel, TestimonialCarousel};
pub use contact::ContactCallToAction;
pub use faq::Faq;
pub use footer::Footer;
pub use gallery::Gallery;
pub use header::Header;
pub use overlays::{ActivityModal, ContactPopup, ImageViewer};
