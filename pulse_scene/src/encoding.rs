// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Metric to visual encodings.
//!
//! These functions are the only place marker color and size are computed;
//! the renderer and the hit tester both go through [`marker_diameter`], so a
//! marker is hittable exactly where it is drawn.
//!
//! Missing metrics encode as `0`.

use peniko::Color;

/// Metric range spanned by the color ramp. Values outside are clamped.
pub const COLOR_DOMAIN: (f64, f64) = (0.0, 300.0);

/// Metric range mapped onto [`BASE_DIAMETER`]. Values outside are clamped.
pub const SIZE_DOMAIN: (f64, f64) = (0.0, 2000.0);

/// Marker diameter, in world units, at `scale = 1` for the ends of [`SIZE_DOMAIN`].
pub const BASE_DIAMETER: (f64, f64) = (4.0, 36.0);

/// Bounds on the rendered marker diameter, in world units.
pub const DIAMETER_LIMITS: (f64, f64) = (2.0, 50.0);

/// Marker alpha.
pub const MARKER_ALPHA: u8 = 220;

const RAMP_START: [f64; 3] = [60.0, 180.0, 200.0];
const RAMP_END: [f64; 3] = [220.0, 40.0, 30.0];

/// Color for an intensity metric: teal-blue at the low end, red at the high end.
#[must_use]
pub fn marker_color(metric: Option<f64>) -> Color {
    let t = normalize(metric.unwrap_or(0.0), COLOR_DOMAIN);
    let [r, g, b] = [0, 1, 2].map(|i| channel(lerp(RAMP_START[i], RAMP_END[i], t)));
    Color::from_rgba8(r, g, b, MARKER_ALPHA)
}

/// Diameter for a magnitude metric at `scale = 1`.
#[must_use]
pub fn base_diameter(metric: Option<f64>) -> f64 {
    let t = normalize(metric.unwrap_or(0.0), SIZE_DOMAIN);
    lerp(BASE_DIAMETER.0, BASE_DIAMETER.1, t)
}

/// Diameter in world units for a magnitude metric at the given view scale.
///
/// Markers shrink as the view zooms in (by `1 / sqrt(scale)` in world units)
/// so that dense areas separate, while still growing on screen.
#[must_use]
pub fn marker_diameter(metric: Option<f64>, scale: f64) -> f64 {
    (base_diameter(metric) / scale.sqrt()).clamp(DIAMETER_LIMITS.0, DIAMETER_LIMITS.1)
}

fn normalize(v: f64, (lo, hi): (f64, f64)) -> f64 {
    (v.clamp(lo, hi) - lo) / (hi - lo)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "value is rounded and lies within the u8 ramp endpoints"
)]
fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
