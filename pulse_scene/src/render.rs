// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame rendering onto a [`MarkerBackend`].

use peniko::Color;
use pulse_imaging::MarkerBackend;

use crate::scene::{Placement, Scene};

/// Surface color behind everything.
pub const BACKGROUND: Color = Color::from_rgba8(7, 20, 39, 255);

/// Fill of the world canvas, drawn under the markers and moved with the view.
pub const BACKDROP: Color = Color::from_rgba8(10, 20, 30, 255);

/// Colors used for the non-marker parts of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    /// Surface clear color.
    pub background: Color,
    /// World canvas fill.
    pub backdrop: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            backdrop: BACKDROP,
        }
    }
}

/// What one frame drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Markers drawn.
    pub drawn: usize,
    /// Visible entities the projector could not place.
    pub unprojectable: usize,
    /// Markers skipped because they lie outside the viewport.
    pub culled: usize,
}

/// Draws one frame of `scene`.
///
/// The frame is a clear with the background color, the world canvas
/// rectangle transformed by the view, then one circle per drawn marker in
/// visible order.
pub fn render<B: MarkerBackend + ?Sized>(
    scene: &Scene<'_>,
    style: &RenderStyle,
    backend: &mut B,
) -> RenderStats {
    let view = scene.view();
    backend.clear(style.background);
    let backdrop = view
        .world_to_screen_affine()
        .transform_rect_bbox(scene.projector().world_rect());
    backend.fill_rect(backdrop, style.backdrop);

    let mut stats = RenderStats::default();
    for (_, placement) in scene.placements() {
        match placement {
            Placement::Drawn(marker) => {
                backend.fill_circle(marker.screen_circle(view), marker.color);
                stats.drawn += 1;
            }
            Placement::Culled(_) => stats.culled += 1,
            Placement::Unprojectable => stats.unprojectable += 1,
        }
    }
    tracing::trace!(
        drawn = stats.drawn,
        culled = stats.culled,
        unprojectable = stats.unprojectable,
        scale = view.scale(),
        "rendered frame"
    );
    stats
}
