// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::Bounds;

/// Complete transform state of one gesture-controlled piece of content.
///
/// The state is an explicitly owned value: controllers take it (or a session
/// wrapping it), mutate it, and the host reads it back to apply the visual
/// transform. Nothing here touches a view.
///
/// Invariants maintained by the session layer:
/// - `scale >= 1.0`; `1.0` is the resting identity.
/// - `bounds` matches `Bounds::for_scale(content, scale)` outside an
///   in-progress scale update.
/// - At rest, `bounds.contains(translation)`; during a live drag the X axis
///   may transiently exceed its extent (rubber-banding), Y may not.
/// - `offset` is only meaningful between a pan baseline capture and the
///   next one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Current uniform zoom factor, floored at `1.0`.
    pub scale: f64,
    /// Content offset from its centered resting position.
    pub translation: Vec2,
    /// Pan baseline: translation the current drag is measured against.
    pub offset: Vec2,
    /// Allowed translation extents at the current scale.
    pub bounds: Bounds,
    /// `true` while a pan gesture is actively moving the content.
    pub panning: bool,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::identity()
    }
}

impl TransformState {
    /// The resting identity: scale 1, no translation, no bounds, no pan.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            translation: Vec2::ZERO,
            offset: Vec2::ZERO,
            bounds: Bounds::ZERO,
            panning: false,
        }
    }

    /// Returns `true` if the content is fully unzoomed.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0
    }

    /// Reinitializes the state to the identity. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Captures the pan baseline for a drag currently reporting
    /// `total_delta` as its cumulative displacement.
    ///
    /// Subsequent samples of the same drag then resolve to
    /// `total_delta * scale + offset`, which keeps the content glued to the
    /// finger regardless of where in the gesture the baseline was taken.
    pub fn rebaseline(&mut self, total_delta: Vec2) {
        self.offset = self.translation - total_delta * self.scale;
    }

    /// Resolves a drag's cumulative displacement against the captured
    /// baseline, in content translation space.
    #[must_use]
    pub fn resolve_pan(&self, total_delta: Vec2) -> Vec2 {
        total_delta * self.scale + self.offset
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{Bounds, TransformState};

    #[test]
    fn default_is_identity() {
        let state = TransformState::default();
        assert!(state.is_identity());
        assert_eq!(state.translation, Vec2::ZERO);
        assert_eq!(state.offset, Vec2::ZERO);
        assert_eq!(state.bounds, Bounds::ZERO);
        assert!(!state.panning);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut state = TransformState {
            scale: 2.0,
            translation: Vec2::new(30.0, -10.0),
            offset: Vec2::new(5.0, 5.0),
            bounds: Bounds {
                width: 75.0,
                height: 75.0,
            },
            panning: true,
        };
        state.reset();
        let once = state;
        state.reset();
        assert_eq!(state, once);
        assert_eq!(state, TransformState::identity());
    }

    #[test]
    fn rebaseline_makes_resolution_continuous() {
        let mut state = TransformState {
            scale: 2.0,
            translation: Vec2::new(40.0, -20.0),
            ..TransformState::identity()
        };

        // A drag already reporting (10, 5) as its total displacement must
        // resolve back to the current translation at the capture point.
        let at_capture = Vec2::new(10.0, 5.0);
        state.rebaseline(at_capture);
        assert_eq!(state.resolve_pan(at_capture), state.translation);

        // Moving another (3, -2) fingers-worth shifts by scale times that.
        let moved = at_capture + Vec2::new(3.0, -2.0);
        assert_eq!(
            state.resolve_pan(moved),
            state.translation + Vec2::new(6.0, -4.0)
        );
    }

    #[test]
    fn rebaseline_at_gesture_origin_pins_offset_to_translation() {
        let mut state = TransformState {
            scale: 3.0,
            translation: Vec2::new(-12.0, 8.0),
            ..TransformState::identity()
        };
        state.rebaseline(Vec2::ZERO);
        assert_eq!(state.offset, state.translation);
    }
}
