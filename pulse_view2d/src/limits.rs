// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Smallest scale a [`crate::ViewTransform`] allows by default.
pub const DEFAULT_MIN_SCALE: f64 = 0.5;

/// Largest scale a [`crate::ViewTransform`] allows by default.
pub const DEFAULT_MAX_SCALE: f64 = 6.0;

/// Inclusive bounds for the zoom scale.
///
/// Every update to a [`crate::ViewTransform`]'s scale is clamped into these
/// bounds, whatever the magnitude or direction of the zoom input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// Creates limits from two bounds, normalizing them so that `min <= max`.
    ///
    /// Non-positive bounds are meaningless for a scale; they are replaced by
    /// the defaults.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        let a = if a > 0.0 { a } else { DEFAULT_MIN_SCALE };
        let b = if b > 0.0 { b } else { DEFAULT_MAX_SCALE };
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Self { min, max }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the limits.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SCALE,
            max: DEFAULT_MAX_SCALE,
        }
    }
}
