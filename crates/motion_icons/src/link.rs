//! Navigation wrapping for icon content.
//!
//! Icons never hard-code a routing story. A host application may inject a
//! [`NavigationLink`] capability (a router-aware wrapper), fall back to a
//! plain `href` anchor, or render the icon unwrapped. Exactly one strategy
//! applies per render, decided by [`link_mode`].

use leptos::View;

/// Anchor target applied when `href` wrapping is used and the caller gave
/// no override.
pub const DEFAULT_TARGET: &str = "_blank";

/// Anchor relationship applied when `href` wrapping is used and the caller
/// gave no override.
pub const DEFAULT_REL: &str = "noopener noreferrer";

/// Opaque property bag handed to a [`NavigationLink`] capability.
///
/// The icon layer forwards the bag verbatim; only the capability
/// implementation gives its contents meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkProps {
    /// Destination in whatever form the host navigation system expects.
    pub to: Option<String>,
    /// Additional name and value pairs for the navigation primitive.
    pub attrs: Vec<(String, String)>,
}

impl LinkProps {
    /// Creates a bag carrying only a destination.
    pub fn to(destination: impl Into<String>) -> Self {
        Self {
            to: Some(destination.into()),
            attrs: Vec::new(),
        }
    }

    /// Appends a pass-through attribute pair.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }
}

/// Host-provided navigation wrapper for icon content.
///
/// Implementations must render `children` unchanged inside their navigation
/// primitive and must not interpret the [`LinkProps`] bag beyond handing it
/// to that primitive.
pub trait NavigationLink {
    /// Wraps the already-rendered icon content in the navigation primitive.
    fn wrap(&self, props: LinkProps, children: View) -> View;
}

impl<F> NavigationLink for F
where
    F: Fn(LinkProps, View) -> View,
{
    fn wrap(&self, props: LinkProps, children: View) -> View {
        self(props, children)
    }
}

/// Wrapping strategy chosen for one icon render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// Wrapped by an injected [`NavigationLink`] capability.
    Capability,
    /// Wrapped in a plain anchor element.
    Anchor,
    /// Rendered without any wrapper.
    Plain,
}

/// Picks the single wrapping strategy for a render.
///
/// A capability always wins over `href`; `href` always wins over rendering
/// bare. Lower-precedence inputs are ignored rather than combined, so an
/// icon is never double-wrapped.
pub const fn link_mode(has_capability: bool, has_href: bool) -> LinkMode {
    if has_capability {
        LinkMode::Capability
    } else if has_href {
        LinkMode::Anchor
    } else {
        LinkMode::Plain
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn capability_outranks_href() {
        assert_eq!(link_mode(true, true), LinkMode::Capability);
        assert_eq!(link_mode(true, false), LinkMode::Capability);
    }

    #[test]
    fn href_applies_only_without_a_capability() {
        assert_eq!(link_mode(false, true), LinkMode::Anchor);
    }

    #[test]
    fn bare_render_when_nothing_is_supplied() {
        assert_eq!(link_mode(false, false), LinkMode::Plain);
    }

    #[test]
    fn link_props_builder_accumulates_attrs_in_order() {
        let props = LinkProps::to("/gallery")
            .with_attr("class", "footer-link")
            .with_attr("data-test", "home");

        assert_eq!(props.to.as_deref(), Some("/gallery"));
        assert_eq!(
            props.attrs,
            vec![
                ("class".to_string(), "footer-link".to_string()),
                ("data-test".to_string(), "home".to_string()),
            ]
        );
    }

    #[test]
    fn default_anchor_attributes_open_a_detached_context() {
        assert_eq!(DEFAULT_TARGET, "_blank");
        assert_eq!(DEFAULT_REL, "noopener noreferrer");
    }
}
