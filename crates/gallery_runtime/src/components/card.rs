//! One gallery card.

use leptos::*;

use crate::registry::{icon_preview, IconDescriptor};

/// A single catalog entry: the configured icon demo above its name and
/// category.
#[component]
pub fn IconCard(
    /// Catalog entry to render.
    descriptor: IconDescriptor,
) -> impl IntoView {
    view! {
        <article class="icon-card" data-icon-card=descriptor.component_key>
            <div class="icon-card-stage">{icon_preview(descriptor.component_key)}</div>
            <div class="icon-card-copy">
                <h3 class="icon-card-name">{descriptor.name}</h3>
                <p class="icon-card-category">{descriptor.category}</p>
            </div>
        </article>
    }
}
