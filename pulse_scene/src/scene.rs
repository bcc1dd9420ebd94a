// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The marker sequence shared by rendering and hit testing.

use kurbo::{Circle, Point, Rect};
use peniko::Color;
use pulse_dataset::{Dataset, EntityId};
use pulse_view2d::ViewTransform;

use crate::encoding::{marker_color, marker_diameter};
use crate::projector::Projector;

/// One marker as it appears in the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Entity the marker represents.
    pub id: EntityId,
    /// Center in world units.
    pub world: Point,
    /// Center in screen units.
    pub screen: Point,
    /// Diameter in world units.
    pub diameter: f64,
    /// Fill color.
    pub color: Color,
}

impl Marker {
    /// Radius in world units.
    #[must_use]
    pub fn world_radius(&self) -> f64 {
        self.diameter * 0.5
    }

    /// The circle to draw, in screen units.
    #[must_use]
    pub fn screen_circle(&self, view: &ViewTransform) -> Circle {
        Circle::new(self.screen, view.world_to_screen_length(self.world_radius()))
    }
}

/// What happened to one visible entity while placing markers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// The projector could not place the entity (degenerate bounds).
    Unprojectable,
    /// The marker lies entirely outside the viewport and is skipped.
    Culled(Marker),
    /// The marker is drawn.
    Drawn(Marker),
}

/// Borrowed snapshot of everything needed to lay out one frame.
///
/// Rendering and hit testing both walk [`Scene::markers`], so the set of
/// hittable markers is by construction the set of drawn markers, in the same
/// order.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    dataset: &'a Dataset,
    visible: &'a [EntityId],
    projector: &'a Projector,
    view: &'a ViewTransform,
    cull: bool,
}

impl<'a> Scene<'a> {
    /// Creates a scene over the visible subset of `dataset`. Culling is on.
    #[must_use]
    pub fn new(
        dataset: &'a Dataset,
        visible: &'a [EntityId],
        projector: &'a Projector,
        view: &'a ViewTransform,
    ) -> Self {
        Self {
            dataset,
            visible,
            projector,
            view,
            cull: true,
        }
    }

    /// Enables or disables skipping markers that miss the viewport.
    #[must_use]
    pub fn with_culling(mut self, cull: bool) -> Self {
        self.cull = cull;
        self
    }

    /// The dataset.
    #[must_use]
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Ids in draw order.
    #[must_use]
    pub fn visible(&self) -> &'a [EntityId] {
        self.visible
    }

    /// The projector.
    #[must_use]
    pub fn projector(&self) -> &'a Projector {
        self.projector
    }

    /// The view transform.
    #[must_use]
    pub fn view(&self) -> &'a ViewTransform {
        self.view
    }

    /// Returns `true` if off-screen markers are skipped.
    #[must_use]
    pub fn culls(&self) -> bool {
        self.cull
    }

    /// Places every visible entity, in draw order.
    pub fn placements(&self) -> impl Iterator<Item = (EntityId, Placement)> + use<'a> {
        let Self {
            dataset,
            visible,
            projector,
            view,
            cull,
        } = *self;
        let scale = view.scale();
        let viewport = view.viewport().to_rect();
        visible.iter().filter_map(move |&id| {
            let entity = dataset.get(id)?;
            let Some(world) = projector.project_entity(entity) else {
                return Some((id, Placement::Unprojectable));
            };
            let marker = Marker {
                id,
                world,
                screen: view.world_to_screen(world),
                diameter: marker_diameter(entity.metric_size, scale),
                color: marker_color(entity.metric_color),
            };
            if cull && misses(viewport, &marker.screen_circle(view)) {
                Some((id, Placement::Culled(marker)))
            } else {
                Some((id, Placement::Drawn(marker)))
            }
        })
    }

    /// The markers that are drawn, in draw order.
    pub fn markers(&self) -> impl Iterator<Item = Marker> + use<'a> {
        self.placements().filter_map(|(_, placement)| match placement {
            Placement::Drawn(marker) => Some(marker),
            _ => None,
        })
    }
}

fn misses(viewport: Rect, circle: &Circle) -> bool {
    let c = circle.center;
    let r = circle.radius;
    c.x + r < viewport.x0 || c.x - r > viewport.x1 || c.y + r < viewport.y0 || c.y - r > viewport.y1
}
