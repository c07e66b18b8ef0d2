//! The icon catalog and its component-key resolution table.
//!
//! Entries are declared in display order with stable unique ids. Component
//! keys are opaque strings so catalog data can round-trip through serde or
//! external tooling without referencing Rust types; [`resolve`] maps a key
//! back onto a [`GlyphName`] and [`icon_preview`] renders the gallery demo
//! for it. Unknown keys degrade to a neutral placeholder instead of failing
//! the whole gallery.

use leptos::*;
use motion_icons::{AnimatedIcon, GlyphName};

/// One catalog entry rendered as a gallery card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDescriptor {
    /// Stable unique id, used as the keyed-list identity.
    pub id: u32,
    /// Display name, matched by the search filter.
    pub name: &'static str,
    /// Short display description, matched by the search filter.
    pub description: &'static str,
    /// Display category; never consulted by the filter.
    pub category: &'static str,
    /// Opaque key resolved to a glyph at render time.
    pub component_key: &'static str,
}

const ICON_REGISTRY: [IconDescriptor; 18] = [
    IconDescriptor {
        id: 1,
        name: "Profile Icon",
        description: "A customizable profile icon with animated elements",
        category: "User Interface",
        component_key: "ProfileIcon",
    },
    IconDescriptor {
        id: 2,
        name: "Search Icon",
        description: "An animated search icon with scanning effects",
        category: "Navigation",
        component_key: "SearchIcon",
    },
    IconDescriptor {
        id: 3,
        name: "Left Arrow Icon",
        description: "A directional arrow icon with smooth animations",
        category: "Navigation",
        component_key: "LeftArrowIcon",
    },
    IconDescriptor {
        id: 4,
        name: "GitHub Icon",
        description: "An octocat mark with blinking eyes and code sparks",
        category: "Social",
        component_key: "GitHubIcon",
    },
    IconDescriptor {
        id: 5,
        name: "Calendar Icon",
        description: "A month grid with flipping pages and a pulsing event",
        category: "Utility",
        component_key: "CalendarIcon",
    },
    IconDescriptor {
        id: 6,
        name: "Home Icon",
        description: "A house with glowing windows and chimney smoke",
        category: "Navigation",
        component_key: "HomeIcon",
    },
    IconDescriptor {
        id: 7,
        name: "ExternalLink Icon",
        description: "A boxed arrow that launches toward a new tab",
        category: "Navigation",
        component_key: "ExternalLinkIcon",
    },
    IconDescriptor {
        id: 8,
        name: "Heart Icon",
        description: "A beating heart with drifting mini hearts",
        category: "Effects",
        component_key: "HeartIcon",
    },
    IconDescriptor {
        id: 9,
        name: "Fire Icon",
        description: "A layered flame with rising embers",
        category: "Effects",
        component_key: "FireIcon",
    },
    IconDescriptor {
        id: 10,
        name: "Palette Icon",
        description: "A painter's palette with flowing paint wells",
        category: "User Interface",
        component_key: "PaletteIcon",
    },
    IconDescriptor {
        id: 11,
        name: "Sparkles Icon",
        description: "A star cluster that twinkles and shimmers",
        category: "Effects",
        component_key: "SparklesIcon",
    },
    IconDescriptor {
        id: 12,
        name: "Facebook Icon",
        description: "The Facebook mark with social ripples",
        category: "Social",
        component_key: "FacebookIcon",
    },
    IconDescriptor {
        id: 13,
        name: "Instagram Icon",
        description: "A camera body with a focusing lens and flash",
        category: "Social",
        component_key: "InstagramIcon",
    },
    IconDescriptor {
        id: 14,
        name: "LinkedIn Icon",
        description: "The LinkedIn badge with a growing career chart",
        category: "Social",
        component_key: "LinkedInIcon",
    },
    IconDescriptor {
        id: 15,
        name: "WhatsApp Icon",
        description: "A chat bubble with typing dots and a message badge",
        category: "Social",
        component_key: "WhatsAppIcon",
    },
    IconDescriptor {
        id: 16,
        name: "X Icon",
        description: "The X letterform with trending sparks",
        category: "Social",
        component_key: "XIcon",
    },
    IconDescriptor {
        id: 17,
        name: "Notification Icon",
        description: "A ringing bell with a bouncing unread badge",
        category: "User Interface",
        component_key: "NotificationIcon",
    },
    IconDescriptor {
        id: 18,
        name: "ShoppingCart Icon",
        description: "A checkout cart with rolling wheels",
        category: "Commerce",
        component_key: "ShoppingCartIcon",
    },
];

/// Every catalog entry in display order.
pub fn icon_registry() -> &'static [IconDescriptor] {
    &ICON_REGISTRY
}

/// Resolves a component key to its glyph, or `None` for unknown keys.
pub fn resolve(component_key: &str) -> Option<GlyphName> {
    match component_key {
        "ProfileIcon" => Some(GlyphName::Profile),
        "SearchIcon" => Some(GlyphName::Search),
        "LeftArrowIcon" => Some(GlyphName::LeftArrow),
        "GitHubIcon" => Some(GlyphName::GitHub),
        "CalendarIcon" => Some(GlyphName::Calendar),
        "HomeIcon" => Some(GlyphName::Home),
        "ExternalLinkIcon" => Some(GlyphName::ExternalLink),
        "HeartIcon" => Some(GlyphName::Heart),
        "FireIcon" => Some(GlyphName::Fire),
        "PaletteIcon" => Some(GlyphName::Palette),
        "SparklesIcon" => Some(GlyphName::Sparkles),
        "FacebookIcon" => Some(GlyphName::Facebook),
        "InstagramIcon" => Some(GlyphName::Instagram),
        "LinkedInIcon" => Some(GlyphName::LinkedIn),
        "WhatsAppIcon" => Some(GlyphName::WhatsApp),
        "XIcon" => Some(GlyphName::X),
        "NotificationIcon" => Some(GlyphName::Notification),
        "ShoppingCartIcon" => Some(GlyphName::ShoppingCart),
        _ => None,
    }
}

/// Renders the gallery demo for a component key.
///
/// Total over its input: known keys get their configured demo, unknown keys
/// a neutral placeholder block, so one bad catalog row never breaks the
/// page.
pub fn icon_preview(component_key: &str) -> View {
    match resolve(component_key) {
        Some(glyph) => glyph_preview(glyph),
        None => render_unknown_preview(),
    }
}

/// Demo geometry shared by every card preview.
const PREVIEW_SIZE: f64 = 60.0;

fn glyph_preview(glyph: GlyphName) -> View {
    match glyph {
        GlyphName::Profile => view! {
            <AnimatedIcon
                glyph=GlyphName::Profile
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#10b981"
                label="Profile"
                label_size=18.0
                label_color="#1f2937"
                label_weight=600
            />
        }
        .into_view(),
        GlyphName::Search => view! {
            <AnimatedIcon
                glyph=GlyphName::Search
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#10b981"
                accent_color="#059669"
            />
        }
        .into_view(),
        GlyphName::LeftArrow => view! {
            <AnimatedIcon
                glyph=GlyphName::LeftArrow
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#10b981"
            />
        }
        .into_view(),
        GlyphName::GitHub => view! {
            <AnimatedIcon
                glyph=GlyphName::GitHub
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#10b981"
                accent_color="#059669"
                fill_color="#ffffff"
            />
        }
        .into_view(),
        GlyphName::Calendar => view! {
            <AnimatedIcon
                glyph=GlyphName::Calendar
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                accent_color="#6366f1"
                fill_color="#6366f110"
            />
        }
        .into_view(),
        GlyphName::Home => view! {
            <AnimatedIcon
                glyph=GlyphName::Home
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                accent_color="#6366f1"
                fill_color="#6366f120"
                href="/"
            />
        }
        .into_view(),
        GlyphName::ExternalLink => view! {
            <AnimatedIcon
                glyph=GlyphName::ExternalLink
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                accent_color="#6366f1"
                fill_color="#6366f120"
            />
        }
        .into_view(),
        GlyphName::Heart => view! {
            <AnimatedIcon
                glyph=GlyphName::Heart
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                fill_color="#6366f120"
            />
        }
        .into_view(),
        GlyphName::Fire => view! {
            <AnimatedIcon
                glyph=GlyphName::Fire
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                accent_color="#ef4444"
                fill_color="#6366f120"
            />
        }
        .into_view(),
        GlyphName::Palette => view! {
            <AnimatedIcon
                glyph=GlyphName::Palette
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                accent_color="#6366f1"
                fill_color="#6366f120"
            />
        }
        .into_view(),
        GlyphName::Sparkles => view! {
            <AnimatedIcon
                glyph=GlyphName::Sparkles
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                accent_color="#6366f1"
                fill_color="#6366f120"
            />
        }
        .into_view(),
        GlyphName::Facebook => view! {
            <AnimatedIcon
                glyph=GlyphName::Facebook
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                fill_color="#6366f120"
            />
        }
        .into_view(),
        GlyphName::Instagram => view! {
            <AnimatedIcon
                glyph=GlyphName::Instagram
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                fill_color="#6366f120"
            />
        }
        .into_view(),
        GlyphName::LinkedIn => view! {
            <AnimatedIcon
                glyph=GlyphName::LinkedIn
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                fill_color="#6366f120"
            />
        }
        .into_view(),
        GlyphName::WhatsApp => view! {
            <AnimatedIcon
                glyph=GlyphName::WhatsApp
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                fill_color="#6366f120"
            />
        }
        .into_view(),
        GlyphName::X => view! {
            <AnimatedIcon
                glyph=GlyphName::X
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                fill_color="#6366f120"
            />
        }
        .into_view(),
        GlyphName::Notification => view! {
            <AnimatedIcon
                glyph=GlyphName::Notification
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                fill_color="#6366f120"
            />
        }
        .into_view(),
        GlyphName::ShoppingCart => view! {
            <AnimatedIcon
                glyph=GlyphName::ShoppingCart
                width=PREVIEW_SIZE
                height=PREVIEW_SIZE
                stroke="#ffffff"
                fill_color="#6366f120"
            />
        }
        .into_view(),
    }
}

fn render_unknown_preview() -> View {
    view! { <div class="icon-card-unknown" data-icon="unknown" aria-hidden="true"></div> }
        .into_view()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in icon_registry() {
            assert!(seen.insert(entry.id), "duplicate id {}", entry.id);
        }
        assert_eq!(seen.len(), icon_registry().len());
    }

    #[test]
    fn registry_order_is_stable() {
        let ids: Vec<u32> = icon_registry().iter().map(|entry| entry.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids.first().copied(), Some(1));
    }

    #[test]
    fn every_registry_key_resolves_to_a_glyph() {
        for entry in icon_registry() {
            assert!(
                resolve(entry.component_key).is_some(),
                "unresolvable key {}",
                entry.component_key
            );
        }
    }

    #[test]
    fn every_glyph_is_reachable_from_the_registry() {
        let resolved: HashSet<GlyphName> = icon_registry()
            .iter()
            .filter_map(|entry| resolve(entry.component_key))
            .collect();
        assert_eq!(resolved.len(), GlyphName::ALL.len());
    }

    #[test]
    fn unknown_keys_resolve_to_none() {
        assert_eq!(resolve("TotallyUnknownIcon"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve(" HeartIcon"), None);
    }

    #[test]
    fn names_and_descriptions_are_display_ready() {
        for entry in icon_registry() {
            assert!(!entry.name.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.category.is_empty());
            assert_eq!(entry.name.trim(), entry.name, "untrimmed name {:?}", entry.name);
        }
    }
}
