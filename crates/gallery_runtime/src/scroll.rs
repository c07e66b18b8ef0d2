//! Shared smooth-scroll capability.
//!
//! Scrolling is provided as a value on [`crate::GalleryContext`] rather than
//! hung off a window global, so its lifecycle matches the provider that
//! created it and tests can construct one without a browser.

use thiserror::Error;

/// Scroll animation preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollMotion {
    /// Animated scrolling.
    #[default]
    Smooth,
    /// Jump-cut scrolling, used when reduced motion is requested.
    Instant,
}

impl ScrollMotion {
    fn behavior(self) -> web_sys::ScrollBehavior {
        match self {
            Self::Smooth => web_sys::ScrollBehavior::Smooth,
            Self::Instant => web_sys::ScrollBehavior::Auto,
        }
    }
}

/// Failures surfaced by scroll requests.
///
/// Non-fatal by contract: callers log and carry on, page state is never
/// poisoned by a missed scroll.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollError {
    /// No document is available, e.g. outside a browser.
    #[error("document is not available")]
    DocumentUnavailable,
    /// No element with the requested id exists in the document.
    #[error("scroll target `{0}` was not found")]
    TargetMissing(String),
}

/// Scrolls named page sections into view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmoothScroll {
    motion: ScrollMotion,
}

impl SmoothScroll {
    /// Creates a capability with animated scrolling.
    pub const fn new() -> Self {
        Self {
            motion: ScrollMotion::Smooth,
        }
    }

    /// Creates a capability with an explicit motion preference.
    pub const fn with_motion(motion: ScrollMotion) -> Self {
        Self { motion }
    }

    /// The configured motion preference.
    pub const fn motion(self) -> ScrollMotion {
        self.motion
    }

    /// Scrolls the element with the given id into view.
    pub fn scroll_to_section(self, section_id: &str) -> Result<(), ScrollError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(ScrollError::DocumentUnavailable)?;
        let Some(element) = document.get_element_by_id(section_id) else {
            return Err(ScrollError::TargetMissing(section_id.to_string()));
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(self.motion.behavior());
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_to_smooth_motion() {
        assert_eq!(SmoothScroll::new().motion(), ScrollMotion::Smooth);
        assert_eq!(SmoothScroll::default().motion(), ScrollMotion::Smooth);
    }

    #[test]
    fn reduced_motion_preference_is_retained() {
        let scroll = SmoothScroll::with_motion(ScrollMotion::Instant);
        assert_eq!(scroll.motion(), ScrollMotion::Instant);
    }

    #[test]
    fn errors_render_actionable_messages() {
        assert_eq!(
            ScrollError::DocumentUnavailable.to_string(),
            "document is not available"
        );
        assert_eq!(
            ScrollError::TargetMissing("hero".to_string()).to_string(),
            "scroll target `hero` was not found"
        );
    }
}
