// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel-to-zoom mapping.
//!
//! Each wheel event is one fixed multiplicative step regardless of the delta
//! magnitude, so trackpads and notched wheels zoom at the same pace per event.

/// Multiplicative zoom steps for wheel input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelZoom {
    /// Factor applied when scrolling up (negative delta).
    pub zoom_in: f64,
    /// Factor applied when scrolling down (positive delta).
    pub zoom_out: f64,
}

impl WheelZoom {
    /// Returns the zoom factor for a vertical wheel delta.
    ///
    /// Positive deltas (scrolling down) zoom out, negative deltas zoom in, and
    /// a zero or non-finite delta is not a zoom.
    #[must_use]
    pub fn factor(&self, delta_y: f64) -> Option<f64> {
        if delta_y > 0.0 {
            Some(self.zoom_out)
        } else if delta_y < 0.0 {
            Some(self.zoom_in)
        } else {
            None
        }
    }
}

impl Default for WheelZoom {
    fn default() -> Self {
        Self {
            zoom_in: 1.05,
            zoom_out: 0.95,
        }
    }
}
