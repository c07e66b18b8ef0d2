//! Pointer-driven animation state for icon instances.
//!
//! Every icon owns exactly one [`MotionState`] machine. The machine never
//! talks to the animation backend directly: each rendered layer maps the
//! current state through its [`MotionChannel`] into a variant token, and the
//! CSS layer keys keyframe rules off the emitted `data-motion-*` attributes.

/// Two-state animation machine driven by pointer enter and leave.
///
/// The state is per icon instance, so several icons for the same glyph
/// animate independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MotionState {
    /// Resting state; every channel reports its idle variant.
    #[default]
    Idle,
    /// Pointer is over the icon; every channel reports its active variant.
    Active,
}

impl MotionState {
    /// Transition for a pointer entering the icon bounds.
    #[must_use]
    pub const fn on_pointer_enter(self) -> Self {
        Self::Active
    }

    /// Transition for a pointer leaving the icon bounds.
    #[must_use]
    pub const fn on_pointer_leave(self) -> Self {
        Self::Idle
    }

    /// Whether the machine is in the hover-activated state.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Variant token emitted by every channel while its machine rests.
pub const IDLE_VARIANT: &str = "idle";

/// Channel that toggles the wrapping element of an icon, used for the
/// container-level hover treatment (lift, glow).
pub const CONTAINER_CHANNEL: MotionChannel = MotionChannel::new("container", "hover");

/// An independently addressed animation group inside a glyph.
///
/// A channel couples a stable identity token with the variant token it emits
/// while active. Channels with the same token in different glyphs share CSS
/// rules; two instances of the same glyph never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MotionChannel {
    /// Stable channel identity, emitted as `data-motion-channel`.
    pub token: &'static str,
    /// Variant token emitted as `data-motion-variant` while active.
    pub active: &'static str,
}

impl MotionChannel {
    /// Creates a channel with the given identity and active variant tokens.
    pub const fn new(token: &'static str, active: &'static str) -> Self {
        Self { token, active }
    }

    /// Maps a machine state to this channel's variant token.
    ///
    /// Pure and total: the same state always yields the same token, and both
    /// states are covered, so the rendering layer can re-run it on every
    /// state change without further checks.
    pub const fn variant_for(self, state: MotionState) -> &'static str {
        if state.is_active() {
            self.active
        } else {
            IDLE_VARIANT
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pointer_enter_activates_and_is_idempotent() {
        let state = MotionState::default();
        assert_eq!(state, MotionState::Idle);

        let entered = state.on_pointer_enter();
        assert_eq!(entered, MotionState::Active);
        assert_eq!(entered.on_pointer_enter(), MotionState::Active);
    }

    #[test]
    fn pointer_leave_rests_and_is_idempotent() {
        let state = MotionState::Active.on_pointer_leave();
        assert_eq!(state, MotionState::Idle);
        assert_eq!(state.on_pointer_leave(), MotionState::Idle);
    }

    #[test]
    fn round_trip_returns_to_the_starting_state() {
        let state = MotionState::Idle;
        assert_eq!(state.on_pointer_enter().on_pointer_leave(), state);
    }

    #[test]
    fn channel_maps_states_to_variant_tokens() {
        let channel = MotionChannel::new("pulse", "beating");
        assert_eq!(channel.variant_for(MotionState::Idle), IDLE_VARIANT);
        assert_eq!(channel.variant_for(MotionState::Active), "beating");
    }

    #[test]
    fn container_channel_emits_hover_variant() {
        assert_eq!(CONTAINER_CHANNEL.token, "container");
        assert_eq!(
            CONTAINER_CHANNEL.variant_for(MotionState::Active),
            "hover"
        );
    }
}
