//! Gallery page composition surfaces.

mod a11y;
mod card;
mod footer;
mod gallery;
mod grid;
mod hero;

pub use card::IconCard;
pub use footer::SiteFooter;
pub use gallery::{IconGallery, COLLECTION_SECTION_ID};
pub use grid::{empty_state_message, IconGrid};
pub use hero::HeroSection;
