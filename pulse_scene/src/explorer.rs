// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive session: filter selection, view, pointer state, hover and
//! selection over one dataset.

use std::sync::Arc;

use kurbo::{Point, Size};
use pulse_dataset::{Dataset, EntityId, FilterCriteria, Span, compute_visible};
use pulse_event_state::click::ClickState;
use pulse_event_state::drag::DragState;
use pulse_event_state::wheel::WheelZoom;
use pulse_imaging::MarkerBackend;
use pulse_view2d::{ViewState, ViewTransform};

use crate::details::{InfoText, Tooltip, detail_text, legend_text};
use crate::hit::hit_test;
use crate::input::{EventOutcome, InputEvent};
use crate::projector::Projector;
use crate::render::{RenderStats, RenderStyle, render};
use crate::scene::Scene;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Hover {
    id: EntityId,
    pointer: Point,
}

/// One user's view onto a dataset.
///
/// All mutable interaction state lives here and changes only through
/// `&mut self`. The visible subset is recomputed synchronously whenever the
/// criteria change, so [`Explorer::visible`], rendering and hit testing
/// always agree with the current selection.
#[derive(Clone, Debug)]
pub struct Explorer {
    dataset: Arc<Dataset>,
    criteria: FilterCriteria,
    visible: Vec<EntityId>,
    view: ViewTransform,
    projector: Projector,
    cull: bool,
    drag: DragState,
    click: ClickState,
    wheel: WheelZoom,
    pointer: Option<Point>,
    hover: Option<Hover>,
    selected: Option<EntityId>,
    restrict_region: Option<String>,
}

impl Explorer {
    /// Starts a session over `dataset` on a canvas of `viewport` size, showing
    /// every region and category in the latest year.
    pub fn new(dataset: impl Into<Arc<Dataset>>, viewport: Size) -> Self {
        let dataset = dataset.into();
        let criteria = FilterCriteria::initial(&dataset);
        let visible = compute_visible(&dataset, &criteria);
        let projector = Projector::new(dataset.geo_bounds(), viewport);
        tracing::info!(
            entities = dataset.len(),
            visible = visible.len(),
            year = criteria.year,
            "explorer started"
        );
        if projector.is_degenerate() && !dataset.is_empty() {
            tracing::warn!("dataset extent is degenerate; no marker can be placed");
        }
        Self {
            dataset,
            criteria,
            visible,
            view: ViewTransform::new(viewport),
            projector,
            cull: true,
            drag: DragState::default(),
            click: ClickState::default(),
            wheel: WheelZoom::default(),
            pointer: None,
            hover: None,
            selected: None,
            restrict_region: None,
        }
    }

    /// Names the region the dataset was restricted to at load, for the legend.
    #[must_use]
    pub fn with_region_label(mut self, region: Option<String>) -> Self {
        self.restrict_region = region;
        self
    }

    /// Replaces the click tracker, e.g. to change its tolerance.
    #[must_use]
    pub fn with_click_state(mut self, click: ClickState) -> Self {
        self.click = click;
        self
    }

    /// Replaces the wheel zoom steps.
    #[must_use]
    pub fn with_wheel_zoom(mut self, wheel: WheelZoom) -> Self {
        self.wheel = wheel;
        self
    }

    /// The dataset.
    #[must_use]
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// The current filter criteria.
    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces the filter criteria and recomputes the visible subset.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria == self.criteria {
            return;
        }
        self.criteria = criteria;
        self.visible = compute_visible(&self.dataset, &self.criteria);
        self.update_hover();
        tracing::debug!(
            region = self.criteria.region.as_deref(),
            category = self.criteria.category.as_deref(),
            year = self.criteria.year,
            visible = self.visible.len(),
            "filter changed"
        );
    }

    /// Sets the region selector; `None` or `"All"` shows every region.
    pub fn set_region(&mut self, region: Option<String>) {
        self.set_criteria(FilterCriteria {
            region,
            ..self.criteria.clone()
        });
    }

    /// Sets the category selector; `None` or `"All"` shows every category.
    pub fn set_category(&mut self, category: Option<String>) {
        self.set_criteria(FilterCriteria {
            category,
            ..self.criteria.clone()
        });
    }

    /// Sets the year.
    pub fn set_year(&mut self, year: i32) {
        self.set_criteria(FilterCriteria {
            year,
            ..self.criteria.clone()
        });
    }

    /// Bounds for a year picker.
    #[must_use]
    pub fn year_bounds(&self) -> Span<i32> {
        self.dataset.year_range()
    }

    /// Ids passing the current criteria, in dataset order.
    #[must_use]
    pub fn visible(&self) -> &[EntityId] {
        &self.visible
    }

    /// The view transform.
    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Current scale and offset.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view.state()
    }

    /// The projector for the current canvas size.
    #[must_use]
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Enables or disables culling of off-screen markers.
    pub fn set_culling(&mut self, cull: bool) {
        self.cull = cull;
    }

    /// Resizes the canvas. The view keeps its scale and offset; the
    /// projection is refitted to the new size.
    pub fn resize(&mut self, viewport: Size) {
        if viewport == self.view.viewport() {
            return;
        }
        self.view.set_viewport(viewport);
        self.projector = Projector::new(self.dataset.geo_bounds(), viewport);
        self.update_hover();
        tracing::debug!(width = viewport.width, height = viewport.height, "resized");
    }

    /// Restores the identity view.
    pub fn reset_view(&mut self) {
        self.view.reset();
        self.update_hover();
    }

    /// Snapshot of the current frame layout.
    #[must_use]
    pub fn scene(&self) -> Scene<'_> {
        Scene::new(&self.dataset, &self.visible, &self.projector, &self.view)
            .with_culling(self.cull)
    }

    /// Draws the current frame.
    pub fn render<B: MarkerBackend + ?Sized>(
        &self,
        style: &RenderStyle,
        backend: &mut B,
    ) -> RenderStats {
        render(&self.scene(), style, backend)
    }

    /// The entity drawn under a screen position, if any.
    #[must_use]
    pub fn hit_test(&self, screen: Point) -> Option<EntityId> {
        hit_test(&self.scene(), screen)
    }

    /// Handles one pointer event.
    pub fn on_event(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::Move(p) => self.on_move(p),
            InputEvent::Wheel { at, delta_y } => {
                self.pointer = Some(at);
                let Some(factor) = self.wheel.factor(delta_y) else {
                    return EventOutcome::Unchanged;
                };
                self.apply_view(|view| view.zoom_at(at, factor))
            }
            InputEvent::Down(p) => {
                self.drag.start(p);
                self.click.on_down(p);
                EventOutcome::Unchanged
            }
            InputEvent::Drag(p) => {
                self.pointer = Some(p);
                match self.drag.update(p) {
                    Some(delta) => self.apply_view(|view| view.pan(delta)),
                    None => EventOutcome::Unchanged,
                }
            }
            InputEvent::Up(p) => self.on_up(p),
        }
    }

    fn on_move(&mut self, pointer: Point) -> EventOutcome {
        self.pointer = Some(pointer);
        if self.update_hover() {
            EventOutcome::HoverChanged(self.hover())
        } else {
            EventOutcome::Unchanged
        }
    }

    /// Re-runs the hover hit test at the last pointer position. Returns `true`
    /// if the hovered entity changed.
    fn update_hover(&mut self) -> bool {
        let hover = self
            .pointer
            .and_then(|pointer| self.hit_test(pointer).map(|id| Hover { id, pointer }));
        let changed = hover.map(|h| h.id) != self.hover.map(|h| h.id);
        self.hover = hover;
        if changed {
            tracing::trace!(hit = ?self.hover(), "hover changed");
        }
        changed
    }

    fn on_up(&mut self, pointer: Point) -> EventOutcome {
        self.pointer = Some(pointer);
        let moved = match self.drag.update(pointer) {
            Some(delta) => self.apply_view(|view| view.pan(delta)),
            None => EventOutcome::Unchanged,
        };
        self.drag.end(pointer);
        if !self.click.on_up(pointer) {
            return moved;
        }
        match self.hit_test(pointer) {
            Some(id) => {
                self.selected = Some(id);
                tracing::debug!(id = id.0, name = %self.dataset[id].name, "selected");
                EventOutcome::Selected(id)
            }
            None => EventOutcome::ClickMissed,
        }
    }

    fn apply_view(&mut self, f: impl FnOnce(&mut ViewTransform)) -> EventOutcome {
        let before = self.view.state();
        f(&mut self.view);
        if self.view.state() == before {
            EventOutcome::Unchanged
        } else {
            self.update_hover();
            EventOutcome::ViewChanged
        }
    }

    /// The hovered entity.
    #[must_use]
    pub fn hover(&self) -> Option<EntityId> {
        self.hover.map(|h| h.id)
    }

    /// Tooltip for the hovered entity.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        let hover = self.hover?;
        let entity = self.dataset.get(hover.id)?;
        Some(Tooltip::new(hover.id, entity, hover.pointer))
    }

    /// The selected entity.
    ///
    /// Selection survives filter changes; the details panel keeps showing
    /// the last clicked entity.
    #[must_use]
    pub fn selected(&self) -> Option<EntityId> {
        self.selected
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Details panel text for the selected entity.
    #[must_use]
    pub fn details(&self) -> Option<InfoText> {
        self.selected
            .and_then(|id| self.dataset.get(id))
            .map(detail_text)
    }

    /// Legend text.
    #[must_use]
    pub fn legend(&self) -> InfoText {
        legend_text(self.restrict_region.as_deref())
    }
}
