// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition with a spatial tolerance.
//!
//! A press followed by a release within [`ClickState::tolerance`] screen units
//! of the press position is a click. Anything that travelled further is a
//! drag and should not select whatever happens to be under the pointer at
//! release.

use kurbo::Point;

/// Default distance, in screen units, a pointer may travel and still click.
pub const DEFAULT_CLICK_TOLERANCE: f64 = 5.0;

/// Press/release tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickState {
    pressed_at: Option<Point>,
    tolerance: f64,
}

impl ClickState {
    /// Creates a tracker with the given tolerance.
    ///
    /// Negative tolerances are treated as zero.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            pressed_at: None,
            tolerance: tolerance.max(0.0),
        }
    }

    /// Maximum press-to-release distance for a click.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Records a press.
    pub fn on_down(&mut self, pos: Point) {
        self.pressed_at = Some(pos);
    }

    /// Records a release and returns `true` if the press/release pair is a click.
    ///
    /// A release without a preceding press is never a click.
    pub fn on_up(&mut self, pos: Point) -> bool {
        match self.pressed_at.take() {
            Some(down) => (pos - down).hypot() <= self.tolerance,
            None => false,
        }
    }

    /// Forgets any pending press.
    pub fn cancel(&mut self) {
        self.pressed_at = None;
    }

    /// Returns `true` between a press and its release.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }
}

impl Default for ClickState {
    fn default() -> Self {
        Self::with_tolerance(DEFAULT_CLICK_TOLERANCE)
    }
}
