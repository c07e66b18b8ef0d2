//! Hover-animated SVG icon components for Leptos.
//!
//! The crate owns a static glyph catalog, a per-instance pointer animation
//! machine, and the stable `data-motion-*` / `data-icon` DOM contract the
//! stylesheet layer keys its keyframes off. Components render markup and
//! tokens only; no animation timing lives in Rust. Hosts that want routed
//! navigation inject it through the [`NavigationLink`] seam instead of
//! linking a router from here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod component;
mod glyph;
mod link;
mod motion;

pub use component::{
    AnimatedIcon, DEFAULT_FILL, DEFAULT_SIZE, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH,
};
pub use glyph::{GlyphLayer, GlyphName, VIEW_BOX};
pub use link::{
    link_mode, LinkMode, LinkProps, NavigationLink, DEFAULT_REL, DEFAULT_TARGET,
};
pub use motion::{MotionChannel, MotionState, CONTAINER_CHANNEL, IDLE_VARIANT};

/// Convenience imports for crates composing the icon set.
pub mod prelude {
    pub use crate::{
        AnimatedIcon, GlyphName, LinkMode, LinkProps, MotionChannel, MotionState, NavigationLink,
    };
}
