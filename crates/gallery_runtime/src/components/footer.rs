//! Site footer: brand block, source link, and attribution bar.

use std::rc::Rc;

use leptos::*;
use motion_icons::{AnimatedIcon, GlyphName, LinkProps, NavigationLink};

/// Footer with the brand blurb and a source-repository link.
///
/// The optional `home_link` capability comes from the entry layer; when
/// present, the attribution bar gains a routed home icon wrapped by it. The
/// runtime itself stays router-free.
#[component]
pub fn SiteFooter(
    /// Router-aware wrapper for the home icon, injected by the host.
    #[prop(optional)]
    home_link: Option<Rc<dyn NavigationLink>>,
) -> impl IntoView {
    view! {
        <footer class="site-footer" data-gallery-slot="footer">
            <div class="footer-columns">
                <div class="footer-brand">
                    <h3>"Custom Icons"</h3>
                    <p>
                        "Handcrafted, animated icons for modern web applications. Built \
                         with Rust and Leptos for smooth interactions."
                    </p>
                </div>
                <div class="footer-source">
                    <h4>"How to Use?"</h4>
                    <p>"Learn how to integrate these icons into your projects."</p>
                    <AnimatedIcon
                        glyph=GlyphName::GitHub
                        width=24.0
                        height=24.0
                        stroke="#10b981"
                        accent_color="#059669"
                        fill_color="#ffffff"
                        label="Visit GitHub"
                        label_size=12.0
                        label_color="#374151"
                        href="https://github.com"
                    />
                </div>
            </div>
            <div class="footer-bottom">
                <p>
                    "© 2026 Custom Icons Collection. Built with"
                    <span class="footer-heart">
                        <AnimatedIcon
                            glyph=GlyphName::Heart
                            width=16.0
                            height=16.0
                            stroke="#ef4444"
                            fill_color="#ef4444"
                            glow_effect=false
                        />
                    </span>
                    "using Rust and Leptos."
                </p>
                {home_link.map(|capability| {
                    view! {
                        <AnimatedIcon
                            glyph=GlyphName::Home
                            width=18.0
                            height=18.0
                            stroke="#374151"
                            label="Home"
                            label_size=12.0
                            label_color="#374151"
                            glow_effect=false
                            link=capability
                            link_props=LinkProps::to("/")
                        />
                    }
                })}
            </div>
        </footer>
    }
}
