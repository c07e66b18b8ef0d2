//! The icon collection section: header, search, and grid.

use leptos::*;

use super::a11y::focus_element_by_id;
use super::grid::IconGrid;
use crate::context::use_gallery;
use crate::filter::filter_icons;
use crate::registry::icon_registry;

/// DOM id of the collection section, targeted by the hero scroll action.
pub const COLLECTION_SECTION_ID: &str = "icon-collection";

/// DOM id of the search input, refocused after a clear action.
const SEARCH_INPUT_ID: &str = "gallery-search-input";

/// Feature chips shown in the integration panel.
const INTEGRATION_CHIPS: [&str; 4] = [
    "Customizable Colors",
    "Adjustable Sizes",
    "Smooth Animations",
    "Leptos Components",
];

/// The searchable icon collection.
///
/// Reads the ambient [`crate::GalleryContext`]; the filtered descriptor list
/// is derived from the live query, never stored.
#[component]
pub fn IconGallery() -> impl IntoView {
    use motion_icons::{AnimatedIcon, GlyphName};

    let gallery = use_gallery();
    let query = gallery.query;
    let filtered = create_memo(move |_| filter_icons(icon_registry(), &query.get()));

    let clear_query = Callback::new(move |_: ()| {
        gallery.clear_query();
        focus_element_by_id(SEARCH_INPUT_ID);
    });

    view! {
        <section id=COLLECTION_SECTION_ID class="gallery-section">
            <header class="gallery-header">
                <h2>"Icon Collection"</h2>
                <p>
                    "Each icon is designed to be easily integrated into your projects. \
                     Customize colors, sizes, and animations to match your design needs."
                </p>
            </header>

            <div class="gallery-search" data-gallery-slot="search">
                <span class="gallery-search-glyph" aria-hidden="true">
                    <AnimatedIcon
                        glyph=GlyphName::Search
                        width=20.0
                        height=20.0
                        stroke="#9ca3af"
                        accent_color="#10b981"
                        glow_effect=false
                    />
                </span>
                <input
                    id=SEARCH_INPUT_ID
                    type="text"
                    placeholder="Search icons..."
                    aria-label="Search icons"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>

            <aside class="gallery-integration">
                <h3>"Easy Integration"</h3>
                <p>
                    "All icons are built as Leptos components and can be easily added to \
                     any UI element. Simply import and customize with props for colors, \
                     sizes, and animations."
                </p>
                <div class="gallery-chip-row">
                    {INTEGRATION_CHIPS
                        .iter()
                        .map(|chip| view! { <span class="gallery-chip">{*chip}</span> })
                        .collect_view()}
                </div>
            </aside>

            <IconGrid icons=filtered query=query on_clear_query=clear_query />
        </section>
    }
}
