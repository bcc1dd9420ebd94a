// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hit testing against the drawn markers.

use kurbo::Point;
use pulse_dataset::EntityId;

use crate::scene::{Marker, Scene};

/// Extra reach, in world units, added to every marker radius.
pub const HIT_SLACK: f64 = 3.0;

/// Returns `true` if the world point `world` is within reach of `marker`.
#[must_use]
pub fn marker_contains(marker: &Marker, world: Point) -> bool {
    marker.world.distance(world) < marker.world_radius() + HIT_SLACK
}

/// Finds the marker under a screen position.
///
/// The point is converted to world space and tested against the scene's
/// drawn markers in draw order. The first match wins, which is not
/// necessarily the nearest marker when markers overlap.
#[must_use]
pub fn hit_test(scene: &Scene<'_>, screen: Point) -> Option<EntityId> {
    let world = scene.view().screen_to_world(screen);
    scene
        .markers()
        .find(|marker| marker_contains(marker, world))
        .map(|marker| marker.id)
}
