//! The animated icon component.

use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::*;

use crate::glyph::{self, GlyphName};
use crate::link::{link_mode, LinkMode, LinkProps, NavigationLink, DEFAULT_REL, DEFAULT_TARGET};
use crate::motion::{MotionState, CONTAINER_CHANNEL};

/// Rendered width and height applied when the caller gives no geometry.
pub const DEFAULT_SIZE: f64 = 28.0;
/// Stroke width applied when the caller gives no override.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
/// Stroke color applied when the caller gives no override.
pub const DEFAULT_STROKE: &str = "#ffffff";
/// Fill applied to the main silhouette when the caller gives no override.
pub const DEFAULT_FILL: &str = "transparent";

/// A hover-animated SVG icon.
///
/// Renders one [`GlyphName`] as a layered `<svg>` inside an `.icon-scene`
/// wrapper. Pointer enter and leave drive a per-instance [`MotionState`]; the
/// component only re-emits `data-motion-variant` tokens and leaves the actual
/// keyframes to the stylesheet, so the markup stays identical across frames.
///
/// Link wrapping picks exactly one strategy per render: an injected
/// [`NavigationLink`] capability wins over `href`, and `href` wins over
/// rendering bare. All other props pass through unchanged on every render.
#[component]
pub fn AnimatedIcon(
    /// Glyph to render.
    glyph: GlyphName,
    /// Rendered width in pixels.
    #[prop(default = DEFAULT_SIZE)]
    width: f64,
    /// Rendered height in pixels.
    #[prop(default = DEFAULT_SIZE)]
    height: f64,
    /// Stroke width for stroked layers.
    #[prop(default = DEFAULT_STROKE_WIDTH)]
    stroke_width: f64,
    /// Main silhouette stroke color; white when omitted.
    #[prop(optional, into)]
    stroke: Option<String>,
    /// Accent color for decorative layers; the glyph's brand accent when
    /// omitted.
    #[prop(optional, into)]
    accent_color: Option<String>,
    /// Fill for the main silhouette; transparent when omitted.
    #[prop(optional, into)]
    fill_color: Option<String>,
    /// Optional caption rendered beside the icon.
    #[prop(optional, into)]
    label: Option<String>,
    /// Caption font size in pixels.
    #[prop(default = 14.0)]
    label_size: f64,
    /// Caption color; falls back to the resolved stroke color.
    #[prop(optional, into)]
    label_color: Option<String>,
    /// Caption font weight.
    #[prop(default = 500)]
    label_weight: u16,
    /// Enables the container glow treatment on hover.
    #[prop(default = true)]
    glow_effect: bool,
    /// Plain hyperlink destination, used when no `link` capability is given.
    #[prop(optional, into)]
    href: Option<String>,
    /// Anchor target when `href` wrapping applies.
    #[prop(default = DEFAULT_TARGET.to_string(), into)]
    target: String,
    /// Anchor relationship when `href` wrapping applies.
    #[prop(default = DEFAULT_REL.to_string(), into)]
    rel: String,
    /// Invoked on click; clicks are a no-op when omitted.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Host navigation capability; outranks `href`.
    #[prop(optional)]
    link: Option<Rc<dyn NavigationLink>>,
    /// Opaque bag forwarded verbatim to the `link` capability.
    #[prop(optional)]
    link_props: LinkProps,
    /// Additional attributes forwarded unvalidated to the `<svg>` element.
    #[prop(attrs)]
    attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let state = create_rw_signal(MotionState::default());

    let stroke = stroke.unwrap_or_else(|| DEFAULT_STROKE.to_string());
    let accent = accent_color.unwrap_or_else(|| glyph.accent().to_string());
    let fill = fill_color.unwrap_or_else(|| DEFAULT_FILL.to_string());
    let label_color = label_color.unwrap_or_else(|| stroke.clone());

    let scene_style = format!(
        "--icon-stroke:{stroke};--icon-accent:{accent};--icon-fill:{fill};--icon-stroke-width:{stroke_width}"
    );

    let layers = glyph
        .layers()
        .iter()
        .map(|layer| {
            let channel = layer.channel;
            view! {
                <g
                    data-motion-channel=channel.token
                    data-motion-variant=move || channel.variant_for(state.get())
                    inner_html=layer.body
                ></g>
            }
        })
        .collect_view();

    let content = view! {
        <div
            class="icon-scene"
            data-icon=glyph.token()
            data-glow=bool_token(glow_effect)
            data-motion-channel=CONTAINER_CHANNEL.token
            data-motion-variant=move || CONTAINER_CHANNEL.variant_for(state.get())
            style=scene_style
            on:mouseenter=move |_| state.update(|s| *s = s.on_pointer_enter())
            on:mouseleave=move |_| state.update(|s| *s = s.on_pointer_leave())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <svg
                {..attrs}
                xmlns="http://www.w3.org/2000/svg"
                viewBox=glyph::VIEW_BOX
                width=width
                height=height
                fill="none"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
                focusable="false"
            >
                {layers}
            </svg>
            {label.map(|text| {
                view! {
                    <span
                        class="icon-label"
                        style=format!(
                            "color:{label_color};font-size:{label_size}px;font-weight:{label_weight}"
                        )
                    >
                        {text}
                    </span>
                }
            })}
        </div>
    };

    match (link_mode(link.is_some(), href.is_some()), link) {
        (LinkMode::Capability, Some(capability)) => {
            capability.wrap(link_props, content.into_view())
        }
        (LinkMode::Anchor, _) => {
            let href = href.unwrap_or_default();
            view! {
                <a class="icon-link" href=href target=target rel=rel>
                    {content}
                </a>
            }
            .into_view()
        }
        _ => content.into_view(),
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bool_token_mirrors_dom_conventions() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }

    #[test]
    fn defaults_match_the_documented_contract() {
        assert_eq!(DEFAULT_SIZE, 28.0);
        assert_eq!(DEFAULT_STROKE_WIDTH, 2.0);
        assert_eq!(DEFAULT_STROKE, "#ffffff");
        assert_eq!(DEFAULT_FILL, "transparent");
    }
}
