// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed pointer input and what handling it changed.

use kurbo::Point;
use pulse_dataset::EntityId;

/// A pointer event in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved with no button held.
    Move(Point),
    /// Wheel scrolled over `at`. Positive `delta_y` is scrolling down.
    Wheel {
        /// Pointer position; the zoom anchor.
        at: Point,
        /// Vertical scroll delta.
        delta_y: f64,
    },
    /// Primary button pressed.
    Down(Point),
    /// Pointer moved with the primary button held.
    Drag(Point),
    /// Primary button released.
    Up(Point),
}

/// The observable effect of one [`InputEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing the caller needs to react to.
    Unchanged,
    /// The hovered entity changed; `None` means the pointer left all markers.
    HoverChanged(Option<EntityId>),
    /// Scale or offset changed; the frame should be redrawn. The hovered
    /// entity has been re-evaluated under the pointer and may have changed.
    ViewChanged,
    /// A click selected this entity.
    Selected(EntityId),
    /// A click hit no marker. The previous selection is kept.
    ClickMissed,
}

impl EventOutcome {
    /// Returns `true` if the frame or the overlays need redrawing.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}
