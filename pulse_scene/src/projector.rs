// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geographic coordinates to world canvas positions.

use kurbo::{Point, Rect, Size};
use pulse_dataset::{Entity, GeoBounds};

/// Inset, in world units, between the canvas edge and the data extent.
pub const PADDING: f64 = 40.0;

/// Linear mapping from the dataset's lat/lon extent onto a padded canvas.
///
/// Longitude grows to the right and latitude grows upwards: the northernmost
/// entity lands on `y = PADDING`, the southernmost on `y = height - PADDING`.
/// This is a plain equirectangular fit, fine at city scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    bounds: Option<GeoBounds>,
    canvas: Size,
}

impl Projector {
    /// Creates a projector fitting `bounds` into a canvas of size `canvas`.
    #[must_use]
    pub fn new(bounds: Option<GeoBounds>, canvas: Size) -> Self {
        Self { bounds, canvas }
    }

    /// The geographic extent being mapped.
    #[must_use]
    pub fn bounds(&self) -> Option<GeoBounds> {
        self.bounds
    }

    /// Canvas size in world units.
    #[must_use]
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// The world rectangle `[0, 0, width, height]`.
    #[must_use]
    pub fn world_rect(&self) -> Rect {
        self.canvas.to_rect()
    }

    /// Returns `true` when nothing can be projected: no bounds, or a zero-width
    /// latitude or longitude span.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.bounds.is_none_or(|b| b.is_degenerate())
    }

    /// Maps a coordinate to a world position, or `None` for degenerate bounds.
    ///
    /// Coordinates outside the bounds extrapolate linearly.
    #[must_use]
    pub fn project(&self, lat: f64, lon: f64) -> Option<Point> {
        let bounds = self.bounds.filter(|b| !b.is_degenerate())?;
        let x = remap(
            lon,
            bounds.lon.min,
            bounds.lon.max,
            PADDING,
            self.canvas.width - PADDING,
        );
        let y = remap(
            lat,
            bounds.lat.max,
            bounds.lat.min,
            PADDING,
            self.canvas.height - PADDING,
        );
        Some(Point::new(x, y))
    }

    /// Projects an entity's coordinates.
    #[must_use]
    pub fn project_entity(&self, entity: &Entity) -> Option<Point> {
        self.project(entity.lat, entity.lon)
    }
}

fn remap(v: f64, from_start: f64, from_end: f64, to_start: f64, to_end: f64) -> f64 {
    to_start + (v - from_start) / (from_end - from_start) * (to_end - to_start)
}
