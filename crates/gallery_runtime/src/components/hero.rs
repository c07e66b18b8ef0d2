//! Landing hero with the scroll-to-collection call to action.

use leptos::*;

use super::gallery::COLLECTION_SECTION_ID;
use crate::context::use_gallery;

/// Opening hero: headline, feature trio, and a button that scrolls the
/// collection section into view through the shared scroll capability.
#[component]
pub fn HeroSection() -> impl IntoView {
    use motion_icons::{AnimatedIcon, GlyphName};

    let gallery = use_gallery();
    let explore = move |_| {
        if let Err(err) = gallery.scroll.scroll_to_section(COLLECTION_SECTION_ID) {
            logging::warn!("hero scroll failed: {err}");
        }
    };

    view! {
        <section class="hero" data-gallery-slot="hero">
            <div class="hero-backdrop" aria-hidden="true">
                <span class="hero-blob" data-blob="a"></span>
                <span class="hero-blob" data-blob="b"></span>
            </div>
            <h1 class="hero-title">
                <span class="hero-accent">"Custom Icons"</span>
                <br/>
                <span>"Collection"</span>
            </h1>
            <p class="hero-subtitle">
                "Discover handcrafted, customizable icons that bring your designs to life. \
                 Each icon is crafted with attention to detail and ready for any project."
            </p>
            <div class="hero-features">
                <div class="hero-feature">
                    <AnimatedIcon glyph=GlyphName::Palette />
                    <span>"Customizable"</span>
                </div>
                <div class="hero-feature">
                    <AnimatedIcon glyph=GlyphName::Sparkles />
                    <span>"Handcrafted"</span>
                </div>
                <div class="hero-feature">
                    <AnimatedIcon glyph=GlyphName::Fire />
                    <span>"Ready to Use"</span>
                </div>
            </div>
            <button type="button" class="hero-cta" on:click=explore>
                "Explore Icons"
            </button>
        </section>
    }
}
