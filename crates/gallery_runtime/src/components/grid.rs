//! The keyed icon grid and its empty state.

use leptos::*;

use super::card::IconCard;
use crate::registry::IconDescriptor;

/// Hint chips offered when a search matches nothing.
const HINT_CHIPS: [&str; 5] = ["Profile", "Search", "Arrow", "GitHub", "Calendar"];

/// Copy shown under the empty-state heading.
///
/// Quotes the active query so visitors see exactly what failed to match;
/// a blank query falls back to a generic prompt.
pub fn empty_state_message(query: &str) -> String {
    if query.is_empty() {
        "Try searching for something else".to_string()
    } else {
        format!("No icons match \"{query}\"")
    }
}

/// Renders the filtered catalog as a keyed grid, or the empty state when
/// nothing matches.
///
/// Cards are keyed by descriptor id, so a shrinking result set removes DOM
/// nodes instead of re-rendering survivors.
#[component]
pub fn IconGrid(
    /// Filtered descriptors in catalog order.
    #[prop(into)]
    icons: Signal<Vec<IconDescriptor>>,
    /// Live query, quoted by the empty-state copy.
    #[prop(into)]
    query: Signal<String>,
    /// Invoked by the empty state's clear action.
    on_clear_query: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !icons.get().is_empty()
            fallback=move || {
                view! { <GalleryEmptyState query=query on_clear_query=on_clear_query /> }
            }
        >
            <div class="icon-grid" data-gallery-slot="grid">
                <For each=move || icons.get() key=|descriptor| descriptor.id let:descriptor>
                    <IconCard descriptor=descriptor />
                </For>
            </div>
        </Show>
    }
}

#[component]
fn GalleryEmptyState(
    #[prop(into)] query: Signal<String>,
    on_clear_query: Callback<()>,
) -> impl IntoView {
    use motion_icons::{AnimatedIcon, GlyphName};

    view! {
        <div class="gallery-empty" data-gallery-slot="empty-state">
            <AnimatedIcon
                glyph=GlyphName::Search
                width=80.0
                height=80.0
                stroke="#9ca3af"
                accent_color="#10b981"
                glow_effect=false
            />
            <h3 class="gallery-empty-title">"No icons found"</h3>
            <p class="gallery-empty-copy">{move || empty_state_message(&query.get())}</p>
            <div class="gallery-empty-hints">
                <p>"Available icons:"</p>
                <div class="gallery-chip-row">
                    {HINT_CHIPS
                        .iter()
                        .map(|chip| view! { <span class="gallery-chip">{*chip}</span> })
                        .collect_view()}
                </div>
            </div>
            <button
                type="button"
                class="gallery-clear-button"
                on:click=move |_| on_clear_query.call(())
            >
                "Clear Search"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_state_quotes_the_active_query() {
        assert_eq!(
            empty_state_message("dragon"),
            "No icons match \"dragon\""
        );
    }

    #[test]
    fn blank_query_gets_the_generic_prompt() {
        assert_eq!(empty_state_message(""), "Try searching for something else");
    }

    #[test]
    fn hint_chips_name_catalog_entries() {
        use crate::filter::filter_icons;
        use crate::registry::icon_registry;

        for chip in HINT_CHIPS {
            assert!(
                !filter_icons(icon_registry(), chip).is_empty(),
                "hint chip {chip:?} matches nothing"
            );
        }
    }
}
