// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Maximum allowed translation magnitude per axis at a given scale.
///
/// Content scaled beyond `1.0` overhangs its viewport by
/// `content * (scale - 1)` in total, half of it on each side; a centered
/// translation may therefore travel up to half the overhang in either
/// direction before exposing empty space. Both extents are `0.0` exactly
/// when the content is unzoomed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Maximum `|translation.x|` at the current scale.
    pub width: f64,
    /// Maximum `|translation.y|` at the current scale.
    pub height: f64,
}

impl Bounds {
    /// Zero extents: the content may not translate at all.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Derives the translation extents for `content` at `scale`.
    ///
    /// Scales at or below `1.0` yield [`Bounds::ZERO`]; the scale floor
    /// itself is enforced by the session, not here.
    #[must_use]
    pub fn for_scale(content: Size, scale: f64) -> Self {
        if scale <= 1.0 {
            return Self::ZERO;
        }
        Self {
            width: content.width * (scale - 1.0) * 0.5,
            height: content.height * (scale - 1.0) * 0.5,
        }
    }

    /// Clamps an X translation into `[-width, width]`.
    #[must_use]
    pub fn clamp_x(&self, x: f64) -> f64 {
        x.clamp(-self.width, self.width)
    }

    /// Clamps a Y translation into `[-height, height]`.
    #[must_use]
    pub fn clamp_y(&self, y: f64) -> f64 {
        y.clamp(-self.height, self.height)
    }

    /// Clamps both axes of a translation into the allowed extents.
    #[must_use]
    pub fn clamp(&self, translation: Vec2) -> Vec2 {
        Vec2::new(self.clamp_x(translation.x), self.clamp_y(translation.y))
    }

    /// Returns `true` if `translation` lies within the extents on both axes.
    #[must_use]
    pub fn contains(&self, translation: Vec2) -> bool {
        translation.x.abs() <= self.width && translation.y.abs() <= self.height
    }

    /// Returns `true` if both extents are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}
