//! Presence transforms
//!
//! Entering toasts slide in from beyond the anchored edge while fading in;
//! exiting toasts play the same motion in reverse.

use toastrack_animation::{Easing, PresencePhase, PresenceState};
use toastrack_core::Placement;

/// Distance an entering toast travels
pub const PRESENCE_DISTANCE: f32 = 50.0;

/// Offset and opacity contributed by the enter/exit transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresenceTransform {
    pub translate_y: f32,
    pub opacity: f32,
}

impl PresenceTransform {
    pub const IDENTITY: PresenceTransform = PresenceTransform {
        translate_y: 0.0,
        opacity: 1.0,
    };
}

impl Default for PresenceTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Starting offset for a placement: above the region for top, below for bottom
pub fn presence_origin(placement: Placement) -> f32 {
    if placement.is_top() {
        -PRESENCE_DISTANCE
    } else {
        PRESENCE_DISTANCE
    }
}

/// Sample the transform for a toast's presence state
pub fn presence_transform(
    state: Option<PresenceState>,
    placement: Placement,
    easing: Easing,
) -> PresenceTransform {
    let Some(state) = state else {
        return PresenceTransform::IDENTITY;
    };

    let origin = presence_origin(placement);
    let t = state.progress;
    match state.phase {
        PresencePhase::Entering => PresenceTransform {
            translate_y: easing.lerp(origin, 0.0, t),
            opacity: easing.lerp(0.0, 1.0, t),
        },
        PresencePhase::Exiting => PresenceTransform {
            translate_y: easing.lerp(0.0, origin, t),
            opacity: easing.lerp(1.0, 0.0, t),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(phase: PresencePhase, progress: f32) -> Option<PresenceState> {
        Some(PresenceState { phase, progress })
    }

    #[test]
    fn test_settled_toast_is_identity() {
        let t = presence_transform(None, Placement::RightBottom, Easing::CSS_EASE_OUT);
        assert_eq!(t, PresenceTransform::IDENTITY);
    }

    #[test]
    fn test_enter_starts_off_edge() {
        let bottom = presence_transform(
            state(PresencePhase::Entering, 0.0),
            Placement::LeftBottom,
            Easing::Linear,
        );
        assert_eq!(bottom.translate_y, 50.0);
        assert_eq!(bottom.opacity, 0.0);

        let top = presence_transform(
            state(PresencePhase::Entering, 0.0),
            Placement::CenterTop,
            Easing::Linear,
        );
        assert_eq!(top.translate_y, -50.0);
    }

    #[test]
    fn test_exit_reverses_enter() {
        let half_in = presence_transform(
            state(PresencePhase::Entering, 0.5),
            Placement::RightTop,
            Easing::Linear,
        );
        let half_out = presence_transform(
            state(PresencePhase::Exiting, 0.5),
            Placement::RightTop,
            Easing::Linear,
        );
        assert_eq!(half_in, half_out);

        let gone = presence_transform(
            state(PresencePhase::Exiting, 1.0),
            Placement::RightTop,
            Easing::Linear,
        );
        assert_eq!(gone.opacity, 0.0);
        assert_eq!(gone.translate_y, -50.0);
    }
}
