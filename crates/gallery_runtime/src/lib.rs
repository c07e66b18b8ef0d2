//! Gallery runtime: catalog, search, boot seeding, and page composition for
//! the animated icon collection site.

pub mod boot;
pub mod components;
pub mod context;
pub mod filter;
pub mod registry;
pub mod scroll;

pub use boot::{current_boot_config, BootConfig, GalleryScene, QUERY_PARAM};
pub use components::{
    empty_state_message, HeroSection, IconCard, IconGallery, IconGrid, SiteFooter,
    COLLECTION_SECTION_ID,
};
pub use context::{use_gallery, GalleryContext, GalleryProvider};
pub use filter::filter_icons;
pub use registry::{icon_preview, icon_registry, resolve, IconDescriptor};
pub use scroll::{ScrollError, ScrollMotion, SmoothScroll};
