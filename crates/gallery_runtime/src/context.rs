//! Gallery provider and context wiring.
//!
//! The provider owns the page-wide reactive state: the live search query and
//! the scroll capability. UI composition stays in [`crate::components`].

use leptos::*;

use crate::boot::BootConfig;
use crate::scroll::{ScrollMotion, SmoothScroll};

/// Leptos context for reading and driving gallery state.
#[derive(Clone, Copy)]
pub struct GalleryContext {
    /// Live search query; empty means unfiltered.
    pub query: RwSignal<String>,
    /// Shared section-scroll capability.
    pub scroll: SmoothScroll,
}

impl GalleryContext {
    /// Clears the search query back to the unfiltered state.
    pub fn clear_query(&self) {
        self.query.set(String::new());
    }
}

/// Provides [`GalleryContext`] to descendant components and seeds it from the
/// boot configuration.
#[component]
pub fn GalleryProvider(
    /// Boot configuration parsed from the page URL, if any.
    boot: Option<BootConfig>,
    children: Children,
) -> impl IntoView {
    let seed_query = boot
        .as_ref()
        .map(BootConfig::seed_query)
        .unwrap_or_default();
    let motion = match boot.as_ref().and_then(|config| config.reduced_motion) {
        Some(true) => ScrollMotion::Instant,
        _ => ScrollMotion::Smooth,
    };

    if let Some(config) = &boot {
        match serde_json::to_string(config) {
            Ok(raw) => logging::log!("gallery boot config: {raw}"),
            Err(err) => logging::warn!("gallery boot config serialize failed: {err}"),
        }
    }

    let context = GalleryContext {
        query: create_rw_signal(seed_query),
        scroll: SmoothScroll::with_motion(motion),
    };
    provide_context(context);

    children()
}

/// Reads the ambient [`GalleryContext`].
///
/// Panics when called outside a [`GalleryProvider`] subtree; that is a
/// composition bug, not a runtime condition.
pub fn use_gallery() -> GalleryContext {
    use_context::<GalleryContext>().expect("GalleryContext not provided")
}
