//! Static glyph catalog for the icon collection.
//!
//! Every glyph is a view box plus an ordered list of [`GlyphLayer`]s. A layer
//! couples one raw SVG fragment to the [`MotionChannel`] that toggles it, so
//! the catalog stays pure data: no signals, no DOM, nothing per instance.
//! Fragments color themselves through the CSS custom properties set by
//! [`crate::AnimatedIcon`] (`--icon-stroke`, `--icon-accent`, `--icon-fill`,
//! `--icon-stroke-width`); keyframes live entirely in the stylesheet layer.

use crate::motion::MotionChannel;

/// Coordinate space shared by every glyph's fragments.
pub const VIEW_BOX: &str = "0 0 24 24";

/// One channel-bound SVG fragment inside a glyph.
///
/// Fragments are injected verbatim into a `<g>` wrapper carrying the
/// channel's `data-motion-*` attributes, so everything inside one layer
/// animates as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphLayer {
    /// Channel that drives this layer's variant token.
    pub channel: MotionChannel,
    /// Raw SVG markup for the layer.
    pub body: &'static str,
}

/// Draw-in channel shared by every glyph's main silhouette.
const PRIMARY: MotionChannel = MotionChannel::new("primary", "drawing");

/// Identifiers for every glyph in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphName {
    /// Month-grid calendar with binding posts.
    Calendar,
    /// Boxed arrow escaping toward the top right.
    ExternalLink,
    /// Facebook brand lowercase f.
    Facebook,
    /// Three nested candle-style flames.
    Fire,
    /// GitHub octocat silhouette.
    GitHub,
    /// Outlined heart with a heart-rate trace.
    Heart,
    /// Gabled house with door and porthole windows.
    Home,
    /// Instagram camera body and lens.
    Instagram,
    /// Arrow pointing left out of a target ring.
    LeftArrow,
    /// LinkedIn brand badge.
    LinkedIn,
    /// Ringing bell with an unread-count badge.
    Notification,
    /// Painter's palette with paint wells.
    Palette,
    /// Head-and-shoulders user figure.
    Profile,
    /// Magnifier with a scanning crosshair.
    Search,
    /// Checkout cart on two wheels.
    ShoppingCart,
    /// Five-pointed star with satellite sparkles.
    Sparkles,
    /// WhatsApp speech-bubble handset.
    WhatsApp,
    /// X brand letterform.
    X,
}

impl GlyphName {
    /// Every glyph in catalog order.
    pub const ALL: [Self; 18] = [
        Self::Calendar,
        Self::ExternalLink,
        Self::Facebook,
        Self::Fire,
        Self::GitHub,
        Self::Heart,
        Self::Home,
        Self::Instagram,
        Self::LeftArrow,
        Self::LinkedIn,
        Self::Notification,
        Self::Palette,
        Self::Profile,
        Self::Search,
        Self::ShoppingCart,
        Self::Sparkles,
        Self::WhatsApp,
        Self::X,
    ];

    /// Stable DOM token for the glyph, emitted as `data-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::ExternalLink => "external-link",
            Self::Facebook => "facebook",
            Self::Fire => "fire",
            Self::GitHub => "github",
            Self::Heart => "heart",
            Self::Home => "home",
            Self::Instagram => "instagram",
            Self::LeftArrow => "left-arrow",
            Self::LinkedIn => "linkedin",
            Self::Notification => "notification",
            Self::Palette => "palette",
            Self::Profile => "profile",
            Self::Search => "search",
            Self::ShoppingCart => "shopping-cart",
            Self::Sparkles => "sparkles",
            Self::WhatsApp => "whatsapp",
            Self::X => "x",
        }
    }

    /// Brand accent applied when the caller does not override `accent_color`.
    pub const fn accent(self) -> &'static str {
        match self {
            Self::Calendar => "#6366f1",
            Self::ExternalLink => "#6366f1",
            Self::Facebook => "#1877F2",
            Self::Fire => "#f59e0b",
            Self::GitHub => "#6366f1",
            Self::Heart => "#ef4444",
            Self::Home => "#6366f1",
            Self::Instagram => "#E4405F",
            Self::LeftArrow => "#6366f1",
            Self::LinkedIn => "#0077B5",
            Self::Notification => "#f59e0b",
            Self::Palette => "#8b5cf6",
            Self::Profile => "#6366f1",
            Self::Search => "#6366f1",
            Self::ShoppingCart => "#10b981",
            Self::Sparkles => "#fbbf24",
            Self::WhatsApp => "#25D366",
            Self::X => "#000000",
        }
    }

    /// Ordered layers for the glyph, rendered back to front.
    pub fn layers(self) -> &'static [GlyphLayer] {
        match self {
            Self::Calendar => &CALENDAR_LAYERS,
            Self::ExternalLink => &EXTERNAL_LINK_LAYERS,
            Self::Facebook => &FACEBOOK_LAYERS,
            Self::Fire => &FIRE_LAYERS,
            Self::GitHub => &GITHUB_LAYERS,
            Self::Heart => &HEART_LAYERS,
            Self::Home => &HOME_LAYERS,
            Self::Instagram => &INSTAGRAM_LAYERS,
            Self::LeftArrow => &LEFT_ARROW_LAYERS,
            Self::LinkedIn => &LINKEDIN_LAYERS,
            Self::Notification => &NOTIFICATION_LAYERS,
            Self::Palette => &PALETTE_LAYERS,
            Self::Profile => &PROFILE_LAYERS,
            Self::Search => &SEARCH_LAYERS,
            Self::ShoppingCart => &SHOPPING_CART_LAYERS,
            Self::Sparkles => &SPARKLES_LAYERS,
            Self::WhatsApp => &WHATSAPP_LAYERS,
            Self::X => &X_LAYERS,
        }
    }
}

const CALENDAR_LAYERS: [GlyphLayer; 4] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<rect x="3" y="4" width="18" height="17" rx="2" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/><path d="M3 9h18" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/><path d="M8 2v4" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/><path d="M16 2v4" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("flip", "flipping"),
        body: r#"<circle cx="6" cy="12" r="0.8" style="fill:var(--icon-accent)" opacity="0.55"/><circle cx="9" cy="12" r="0.8" style="fill:var(--icon-accent)" opacity="0.55"/><circle cx="12" cy="12" r="0.8" style="fill:var(--icon-accent)" opacity="0.55"/><circle cx="15" cy="12" r="0.8" style="fill:var(--icon-accent)" opacity="0.55"/><circle cx="18" cy="12" r="0.8" style="fill:var(--icon-accent)" opacity="0.55"/><circle cx="6" cy="15" r="0.8" style="fill:var(--icon-accent)" opacity="0.55"/><circle cx="9" cy="15" r="0.8" style="fill:var(--icon-accent)" opacity="0.55"/><circle cx="15" cy="15" r="0.8" style="fill:var(--icon-accent)" opacity="0.55"/><circle cx="6" cy="18" r="0.8" style="fill:var(--icon-accent)" opacity="0.55"/><circle cx="12" cy="18" r="0.8" style="fill:var(--icon-accent)" opacity="0.55"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("date", "highlighting"),
        body: r#"<circle cx="9" cy="15" r="0.3" style="fill:var(--icon-stroke)"/><circle cx="15" cy="12" r="0.3" style="fill:var(--icon-stroke)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("event", "pulsing"),
        body: r#"<circle cx="18" cy="18" r="1.1" style="fill:var(--icon-accent)"/>"#,
    },
];

const EXTERNAL_LINK_LAYERS: [GlyphLayer; 4] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M18 13v6a2 2 0 01-2 2H5a2 2 0 01-2-2V8a2 2 0 012-2h6" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/><path d="M15 3h6v6" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/><path d="M21 3l-8 8" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("portal", "opening"),
        body: r#"<path d="M3 3h6l4 4-4 4H3a2 2 0 01-1-1V4a2 2 0 011-1z" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.35"/><circle cx="7" cy="7" r="3" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.3"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("launch", "launching"),
        body: r#"<circle cx="19" cy="5" r="0.8" style="fill:var(--icon-accent)" opacity="0.6"/><path d="M10 4l2-1" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.45"/><path d="M10 10l2 1" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.45"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("trail", "trailing"),
        body: r#"<circle cx="16" cy="7" r="0.3" style="fill:var(--icon-accent)" opacity="0.6"/><circle cx="17" cy="6" r="0.2" style="fill:var(--icon-accent)" opacity="0.5"/><circle cx="15" cy="8" r="0.25" style="fill:var(--icon-accent)" opacity="0.4"/><path d="M22 1l-1 2" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.4"/><path d="M23 2l-2 1" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.3"/>"#,
    },
];

const FACEBOOK_LAYERS: [GlyphLayer; 5] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("connect", "connecting"),
        body: r#"<rect x="3" y="3" width="2" height="2" rx="0.3" style="fill:var(--icon-accent)" opacity="0.5"/><rect x="19" y="19" width="2" height="2" rx="0.3" style="fill:var(--icon-accent)" opacity="0.5"/><rect x="3" y="19" width="1.5" height="1.5" rx="0.3" style="fill:var(--icon-accent)" opacity="0.4"/><rect x="19" y="3" width="1.5" height="1.5" rx="0.3" style="fill:var(--icon-accent)" opacity="0.4"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("wave", "waving"),
        body: r#"<circle cx="12" cy="12" r="11" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.25"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("engage", "engaging"),
        body: r#"<circle cx="19" cy="5" r="1.5" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.5"/><path d="M17.5 5l1-1 1 1" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.6"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("social", "socializing"),
        body: r#"<circle cx="12" cy="3" r="0.6" style="fill:var(--icon-accent)" opacity="0.5"/><circle cx="3" cy="12" r="0.5" style="fill:var(--icon-accent)" opacity="0.45"/><circle cx="21" cy="12" r="0.5" style="fill:var(--icon-accent)" opacity="0.45"/><circle cx="12" cy="21" r="0.6" style="fill:var(--icon-accent)" opacity="0.5"/>"#,
    },
];

const FIRE_LAYERS: [GlyphLayer; 4] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M8.5 14.5c0-5 3.5-10 3.5-10s3.5 5 3.5 10a3.5 3.5 0 1 1-7 0" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("flame", "burning"),
        body: r#"<path d="M10 14c0-3 2-6 2-6s2 3 2 6a2 2 0 1 1-4 0" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.7"/><path d="M11 13.5c0-2 1-4 1-4s1 2 1 4a1 1 0 1 1-2 0" style="fill:var(--icon-accent)" opacity="0.8"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("ember", "floating"),
        body: r#"<circle cx="10" cy="6" r="0.8" style="fill:var(--icon-accent)" opacity="0.6"/><circle cx="14" cy="7" r="0.6" style="fill:var(--icon-accent)" opacity="0.5"/><circle cx="12" cy="5" r="0.4" style="fill:var(--icon-accent)" opacity="0.45"/><circle cx="6" cy="12" r="0.3" style="fill:var(--icon-accent)" opacity="0.4"/><circle cx="18" cy="14" r="0.25" style="fill:var(--icon-accent)" opacity="0.35"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("heat", "radiating"),
        body: r#"<path d="M6 20c2-1 4 1 6-1s4 1 6-1" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.35"/><path d="M7 22c1.5-0.5 3 0.5 4.5-0.5s3 0.5 4.5-0.5" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.25"/><ellipse cx="12" cy="17.5" rx="3" ry="1" style="fill:var(--icon-accent)" opacity="0.15"/>"#,
    },
];

const GITHUB_LAYERS: [GlyphLayer; 3] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("pulse", "pulsing"),
        body: r#"<path d="M7 3l1 2" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.5"/><path d="M17 3l-1 2" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.5"/><circle cx="4" cy="20" r="0.8" style="fill:var(--icon-accent)" opacity="0.4"/><circle cx="20" cy="4" r="0.8" style="fill:var(--icon-accent)" opacity="0.4"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("eye", "blinking"),
        body: r#"<circle cx="9" cy="9" r="1" style="fill:var(--icon-accent)" opacity="0.8"/><circle cx="15" cy="9" r="1" style="fill:var(--icon-accent)" opacity="0.8"/>"#,
    },
];

const HEART_LAYERS: [GlyphLayer; 4] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("pulse", "beating"),
        body: r#"<circle cx="9" cy="10" r="2.5" style="fill:var(--icon-accent)" opacity="0.25"/><circle cx="15" cy="10" r="2.5" style="fill:var(--icon-accent)" opacity="0.25"/><path d="M2 12h4l2-4 2 8 2-6 2 4h8" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.45"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("sparkle", "sparkling"),
        body: r#"<circle cx="8" cy="6" r="0.8" style="fill:var(--icon-accent)" opacity="0.6"/><circle cx="16" cy="7" r="0.6" style="fill:var(--icon-accent)" opacity="0.5"/><circle cx="12" cy="8" r="0.4" style="fill:var(--icon-accent)" opacity="0.45"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("drift", "loving"),
        body: r#"<path d="M5 4.5a1 1 0 0 0-1.4 0 1 1 0 0 0 0 1.4l.7.7.7-.7a1 1 0 0 0 0-1.4z" style="fill:var(--icon-accent)" opacity="0.4"/><path d="M19 4.5a1 1 0 0 0-1.4 0 1 1 0 0 0 0 1.4l.7.7.7-.7a1 1 0 0 0 0-1.4z" style="fill:var(--icon-accent)" opacity="0.4"/><path d="M3 12l2-2" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.35"/><path d="M21 12l-2 2" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.35"/>"#,
    },
];

const HOME_LAYERS: [GlyphLayer; 4] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M3 12l9-9 9 9v8a2 2 0 01-2 2H5a2 2 0 01-2-2v-8z" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/><path d="M16 3v4" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("welcome", "welcoming"),
        body: r#"<path d="M9 21v-6a2 2 0 012-2h2a2 2 0 012 2v6" style="stroke:var(--icon-accent);stroke-width:1.5" opacity="0.7"/><circle cx="8" cy="22" r="0.5" style="fill:var(--icon-accent)" opacity="0.4"/><circle cx="12" cy="22" r="0.5" style="fill:var(--icon-accent)" opacity="0.4"/><circle cx="16" cy="22" r="0.5" style="fill:var(--icon-accent)" opacity="0.4"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("light", "glowing"),
        body: r#"<circle cx="7" cy="16" r="2" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.6"/><path d="M5 16h4M7 14v4" style="stroke:var(--icon-accent);stroke-width:0.7" opacity="0.5"/><circle cx="17" cy="16" r="2" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.6"/><path d="M15 16h4M17 14v4" style="stroke:var(--icon-accent);stroke-width:0.7" opacity="0.5"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("smoke", "smoking"),
        body: r#"<circle cx="16" cy="2" r="0.5" style="fill:var(--icon-accent)" opacity="0.4"/><circle cx="15.5" cy="1.5" r="0.3" style="fill:var(--icon-accent)" opacity="0.3"/><circle cx="16.5" cy="1" r="0.2" style="fill:var(--icon-accent)" opacity="0.25"/>"#,
    },
];

const INSTAGRAM_LAYERS: [GlyphLayer; 4] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<rect x="3" y="3" width="18" height="18" rx="6" ry="6" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("lens", "focusing"),
        body: r#"<circle cx="12" cy="12" r="5" style="stroke:var(--icon-accent);stroke-width:var(--icon-stroke-width)" opacity="0.85"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("flash", "flashing"),
        body: r#"<circle cx="17.5" cy="6.5" r="1.2" style="fill:var(--icon-accent)" opacity="0.9"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("story", "scrolling"),
        body: r#"<circle cx="12" cy="12" r="10.5" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.25"/><circle cx="5" cy="5" r="0.3" style="fill:var(--icon-accent)" opacity="0.5"/><circle cx="19" cy="19" r="0.25" style="fill:var(--icon-accent)" opacity="0.4"/>"#,
    },
];

const LEFT_ARROW_LAYERS: [GlyphLayer; 3] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M20 12H4" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/><path d="M10 18l-6-6" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/><path d="M10 6l-6 6" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("flow", "flowing"),
        body: r#"<path d="M22 10h-2" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.5"/><path d="M22 14h-1.5" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.4"/><path d="M14 8v2" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.35"/><path d="M14 14v2" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.35"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("pulse", "pulsing"),
        body: r#"<circle cx="20" cy="12" r="3" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.35"/><circle cx="2" cy="12" r="1" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.45"/><circle cx="2" cy="12" r="0.4" style="fill:var(--icon-accent)" opacity="0.6"/>"#,
    },
];

const LINKEDIN_LAYERS: [GlyphLayer; 5] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z" style="stroke:var(--icon-stroke);stroke-width:1;fill:var(--icon-fill)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("network", "networking"),
        body: r#"<path d="M2 18l4-4 4 4 6-6" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.5"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("career", "growing"),
        body: r#"<path d="M20 12l-3-3v2h-3v2h3v2z" style="fill:var(--icon-accent)" opacity="0.55"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("badge", "pulsing"),
        body: r#"<circle cx="18" cy="6" r="2" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.5"/><circle cx="18" cy="6" r="1.2" style="fill:var(--icon-accent)" opacity="0.8"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("particle", "floating"),
        body: r#"<circle cx="12" cy="12" r="1" style="fill:var(--icon-accent)" opacity="0.35"/><rect x="19" y="4" width="1.5" height="1.5" style="fill:var(--icon-accent)" opacity="0.4"/>"#,
    },
];

const NOTIFICATION_LAYERS: [GlyphLayer; 5] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M18 8a6 6 0 0 0-12 0c0 7-3 9-3 9h18s-3-2-3-9" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/><path d="M13.73 21a2 2 0 0 1-3.46 0" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("ring", "ringing"),
        body: r#"<circle cx="12" cy="11" r="8" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.3"/><circle cx="12" cy="11" r="10" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.2"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("dot", "bouncing"),
        body: r#"<circle cx="18" cy="6" r="4" style="fill:var(--icon-accent)" opacity="0.3"/><circle cx="18" cy="6" r="2.5" style="fill:var(--icon-accent)" opacity="0.9"/><text x="18" y="7" text-anchor="middle" font-size="3.2" style="fill:var(--icon-stroke)">3</text>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("pulse", "pulsing"),
        body: r#"<ellipse cx="12" cy="13" rx="6" ry="8" style="fill:var(--icon-accent)" opacity="0.12"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("sound", "waving"),
        body: r#"<circle cx="12" cy="20" r="0.8" style="fill:var(--icon-accent)" opacity="0.5"/><circle cx="6" cy="4" r="0.8" style="fill:var(--icon-accent)" opacity="0.4"/>"#,
    },
];

const PALETTE_LAYERS: [GlyphLayer; 5] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M12 2C6.5 2 2 6.5 2 12c0 1.7.4 3.3 1 4.7.6 1.4 1.4 2.6 2.4 3.6 1 1 2.2 1.8 3.6 2.4C10.4 23.3 11.2 23.6 12 23.6c.8 0 1.6-.3 2.2-.9.6-.6.9-1.4.9-2.2 0-.8-.3-1.6-.9-2.2C13.6 17.7 13.3 17 13.3 16.2c0-.8.3-1.6.9-2.2.6-.6 1.4-.9 2.2-.9.8 0 1.6.3 2.2.9.6.6.9 1.4.9 2.2 0 .8-.3 1.6-.9 2.2-.6.6-1.4.9-2.2.9h-3.1" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("paint", "painting"),
        body: r#"<circle cx="7" cy="9" r="1.5" style="fill:var(--icon-accent)" opacity="0.8"/><circle cx="11" cy="7" r="1.5" style="fill:var(--icon-accent)" opacity="0.7"/><circle cx="15" cy="8" r="1.5" style="fill:var(--icon-accent)" opacity="0.75"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("color", "flowing"),
        body: r#"<circle cx="17" cy="12" r="1.5" style="fill:var(--icon-accent)" opacity="0.65"/><circle cx="6" cy="13" r="1.5" style="fill:var(--icon-accent)" opacity="0.6"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("splash", "splashing"),
        body: r#"<circle cx="4" cy="5" r="0.5" style="fill:var(--icon-accent)" opacity="0.5"/><circle cx="20" cy="7" r="0.4" style="fill:var(--icon-accent)" opacity="0.45"/><circle cx="21" cy="17" r="0.35" style="fill:var(--icon-accent)" opacity="0.4"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("mix", "mixing"),
        body: r#"<circle cx="12" cy="12" r="11" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.2"/>"#,
    },
];

const PROFILE_LAYERS: [GlyphLayer; 3] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<circle cx="12" cy="7" r="4" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/><path d="M6 21v-2a4 4 0 0 1 4-4h.5" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/><path d="M13.5 15H14a4 4 0 0 1 4 4v2" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("pulse", "pulsing"),
        body: r#"<circle cx="16" cy="7" r="1.5" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.5"/><circle cx="16" cy="7" r="0.8" style="fill:var(--icon-accent)" opacity="0.8"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("aura", "breathing"),
        body: r#"<circle cx="12" cy="12" r="11" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.25"/><circle cx="5" cy="10" r="0.5" style="fill:var(--icon-accent)" opacity="0.5"/><circle cx="19" cy="14" r="0.4" style="fill:var(--icon-accent)" opacity="0.45"/>"#,
    },
];

const SEARCH_LAYERS: [GlyphLayer; 2] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<circle cx="11" cy="11" r="8" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/><path d="M21 21l-4.35-4.35" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("scan", "scanning"),
        body: r#"<path d="M9 11h4" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.6"/><path d="M11 9v4" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.6"/><circle cx="6" cy="6" r="1" style="fill:var(--icon-accent)" opacity="0.4"/><circle cx="16" cy="8" r="0.5" style="fill:var(--icon-accent)" opacity="0.45"/>"#,
    },
];

const SHOPPING_CART_LAYERS: [GlyphLayer; 4] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("wheel", "rolling"),
        body: r#"<circle cx="9" cy="20" r="2" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/><circle cx="20" cy="20" r="2" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("cart", "bouncing"),
        body: r#"<circle cx="10" cy="10" r="1.2" style="fill:var(--icon-accent)" opacity="0.7"/><circle cx="14" cy="9" r="1" style="fill:var(--icon-accent)" opacity="0.6"/><circle cx="17" cy="11" r="0.8" style="fill:var(--icon-accent)" opacity="0.55"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("checkout", "purchasing"),
        body: r#"<circle cx="12" cy="12" r="11" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.2"/>"#,
    },
];

const SPARKLES_LAYERS: [GlyphLayer; 5] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M12 2l3.09 6.31L22 9.27l-5.18 5.03L18.18 22L12 18.56 5.82 22l1.36-7.7L2 9.27l6.91-.96L12 2z" style="stroke:var(--icon-stroke);stroke-width:var(--icon-stroke-width);fill:var(--icon-fill)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("twinkle", "twinkling"),
        body: r#"<path d="M18 6l1 2 2 1-2 1-1 2-1-2-2-1 2-1z" style="fill:var(--icon-accent)" opacity="0.7"/><path d="M6 18l0.8 1.6 1.6 0.8-1.6 0.8-0.8 1.6-0.8-1.6-1.6-0.8 1.6-0.8z" style="fill:var(--icon-accent)" opacity="0.6"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("shimmer", "shimmering"),
        body: r#"<circle cx="12" cy="12" r="2" style="fill:var(--icon-accent)" opacity="0.5"/><path d="M4 8l0.6 1.2 1.2 0.6-1.2 0.6-0.6 1.2-0.6-1.2-1.2-0.6 1.2-0.6z" style="fill:var(--icon-accent)" opacity="0.55"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("magic", "magical"),
        body: r#"<circle cx="12" cy="12" r="11" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.2"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("stardust", "floating"),
        body: r#"<circle cx="18" cy="6" r="0.4" style="fill:var(--icon-accent)" opacity="0.6"/><circle cx="6" cy="18" r="0.35" style="fill:var(--icon-accent)" opacity="0.5"/><circle cx="20" cy="16" r="0.3" style="fill:var(--icon-accent)" opacity="0.45"/>"#,
    },
];

const WHATSAPP_LAYERS: [GlyphLayer; 4] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<g transform="translate(2 2) scale(1.25)"><path d="M13.601 2.326A7.85 7.85 0 0 0 7.994 0C3.627 0 .068 3.558.064 7.926c0 1.399.366 2.76 1.057 3.965L0 16l4.204-1.102a7.9 7.9 0 0 0 3.79.965h.004c4.368 0 7.926-3.558 7.93-7.93A7.9 7.9 0 0 0 13.6 2.326zM7.994 14.521a6.6 6.6 0 0 1-3.356-.92l-.24-.144-2.494.654.666-2.433-.156-.251a6.56 6.56 0 0 1-1.007-3.505c0-3.626 2.957-6.584 6.591-6.584a6.56 6.56 0 0 1 4.66 1.931 6.56 6.56 0 0 1 1.928 4.66c-.004 3.639-2.961 6.592-6.592 6.592m3.615-4.934c-.197-.099-1.17-.578-1.353-.646-.182-.065-.315-.099-.445.099-.133.197-.513.646-.627.775-.114.133-.232.148-.43.05-.197-.1-.836-.308-1.592-.985-.59-.525-.985-1.175-1.103-1.372-.114-.198-.011-.304.088-.403.087-.088.197-.232.296-.346.1-.114.133-.198.198-.33.065-.134.034-.248-.015-.347-.05-.099-.445-1.076-.612-1.47-.16-.389-.323-.335-.445-.34-.114-.007-.247-.007-.38-.007a.73.73 0 0 0-.529.247c-.182.198-.691.677-.691 1.654s.71 1.916.81 2.049c.098.133 1.394 2.132 3.383 2.992.47.205.84.326 1.129.418.475.152.904.129 1.246.08.38-.058 1.171-.48 1.338-.943.164-.464.164-.86.114-.943-.049-.084-.182-.133-.38-.232" style="stroke:var(--icon-stroke);stroke-width:1;fill:var(--icon-fill)"/></g>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("typing", "typing"),
        body: r#"<circle cx="9.5" cy="11" r="0.6" style="fill:var(--icon-accent)" opacity="0.8"/><circle cx="12" cy="11" r="0.6" style="fill:var(--icon-accent)" opacity="0.7"/><circle cx="14.5" cy="11" r="0.6" style="fill:var(--icon-accent)" opacity="0.6"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("message", "messaging"),
        body: r#"<circle cx="19" cy="5" r="1.5" style="fill:var(--icon-accent)" opacity="0.85"/><circle cx="19" cy="5" r="2.4" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.3"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("bubble", "bubbling"),
        body: r#"<path d="M2 6l0.5 0.5-0.5 0.5-0.5-0.5z" style="fill:var(--icon-accent)" opacity="0.4"/><path d="M22 18l0.3 0.3-0.3 0.3-0.3-0.3z" style="fill:var(--icon-accent)" opacity="0.35"/><path d="M23 2l0.35 0.35-0.35 0.35-0.35-0.35z" style="fill:var(--icon-accent)" opacity="0.3"/>"#,
    },
];

const X_LAYERS: [GlyphLayer; 4] = [
    GlyphLayer {
        channel: PRIMARY,
        body: r#"<path d="M18.9 1.13h3.68l-8.04 9.19L24 22.87h-7.41l-5.8-7.58-6.64 7.58H.47l8.6-9.83L0 1.13h7.59l5.24 6.93 6.07-6.93Zm-1.29 19.54h2.04L6.48 3.22H4.3l13.31 17.45z" style="stroke:var(--icon-stroke);stroke-width:1;fill:var(--icon-fill)"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("viral", "trending"),
        body: r#"<circle cx="20" cy="4" r="1.5" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.5"/><path d="M18.5 4l1-1 1 1" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.6"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("network", "connecting"),
        body: r#"<circle cx="6" cy="6" r="1" style="fill:var(--icon-accent)" opacity="0.5"/><circle cx="18" cy="18" r="0.8" style="fill:var(--icon-accent)" opacity="0.45"/><circle cx="12" cy="12" r="1" style="stroke:var(--icon-accent);stroke-width:1" opacity="0.3"/>"#,
    },
    GlyphLayer {
        channel: MotionChannel::new("share", "sharing"),
        body: r#"<path d="M1 1l0.5 0.5-0.5 0.5-0.5-0.5z" style="fill:var(--icon-accent)" opacity="0.4"/><path d="M23 23l0.3 0.3-0.3 0.3-0.3-0.3z" style="fill:var(--icon-accent)" opacity="0.35"/><path d="M23 1l0.4 0.4-0.4 0.4-0.4-0.4z" style="fill:var(--icon-accent)" opacity="0.3"/>"#,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::motion::{MotionState, IDLE_VARIANT};

    #[test]
    fn tokens_are_unique_and_nonempty() {
        let mut seen = HashSet::new();
        for glyph in GlyphName::ALL {
            assert!(!glyph.token().is_empty(), "{glyph:?} has an empty token");
            assert!(seen.insert(glyph.token()), "duplicate token for {glyph:?}");
        }
        assert_eq!(seen.len(), GlyphName::ALL.len());
    }

    #[test]
    fn every_glyph_starts_with_the_primary_draw_layer() {
        for glyph in GlyphName::ALL {
            let layers = glyph.layers();
            assert!(
                !layers.is_empty(),
                "{glyph:?} has no layers"
            );
            assert_eq!(layers[0].channel.token, "primary", "{glyph:?}");
            assert_eq!(
                layers[0].channel.variant_for(MotionState::Active),
                "drawing",
                "{glyph:?}"
            );
        }
    }

    #[test]
    fn channel_tokens_are_unique_within_each_glyph() {
        for glyph in GlyphName::ALL {
            let mut seen = HashSet::new();
            for layer in glyph.layers() {
                assert!(
                    seen.insert(layer.channel.token),
                    "{glyph:?} repeats channel {}",
                    layer.channel.token
                );
            }
        }
    }

    #[test]
    fn every_layer_rests_on_the_shared_idle_variant() {
        for glyph in GlyphName::ALL {
            for layer in glyph.layers() {
                assert_eq!(layer.channel.variant_for(MotionState::Idle), IDLE_VARIANT);
                assert!(!layer.channel.active.is_empty());
            }
        }
    }

    #[test]
    fn layer_bodies_carry_wellformed_fragments() {
        for glyph in GlyphName::ALL {
            for layer in glyph.layers() {
                let body = layer.body;
                assert!(!body.is_empty(), "{glyph:?} has an empty layer body");
                assert_eq!(
                    body.matches('<').count(),
                    body.matches('>').count(),
                    "unbalanced markup in {glyph:?} channel {}",
                    layer.channel.token
                );
            }
        }
    }

    #[test]
    fn accents_are_hex_colors() {
        for glyph in GlyphName::ALL {
            let accent = glyph.accent();
            assert!(accent.starts_with('#'), "{glyph:?} accent {accent}");
            assert!(
                accent.len() == 7 && accent[1..].chars().all(|c| c.is_ascii_hexdigit()),
                "{glyph:?} accent {accent}"
            );
        }
    }

    #[test]
    fn primary_layers_respect_the_fill_override_hook() {
        for glyph in GlyphName::ALL {
            assert!(
                glyph.layers()[0].body.contains("var(--icon-fill)"),
                "{glyph:?} primary layer ignores --icon-fill"
            );
        }
    }
}
