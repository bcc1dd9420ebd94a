// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: turn pointer positions into incremental pan deltas.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] on pointer down.
//! 2) On every drag event, call [`DragState::update`] and pan the view by the
//!    returned delta.
//! 3) Call [`DragState::end`] on pointer up; it reports the total offset of
//!    the gesture.

use kurbo::{Point, Vec2};

/// Tracks an in-progress drag gesture.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl DragState {
    /// Begins a drag at `pos`, discarding any gesture in progress.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a new pointer position and returns the movement since the
    /// previous one, or `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last_pos.filter(|_| self.start_pos.is_some())?;
        self.last_pos = Some(pos);
        Some(pos - last)
    }

    /// Offset of `pos` from where the drag started.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Ends the drag, returning the offset of `pos` from the start position.
    pub fn end(&mut self, pos: Point) -> Option<Vec2> {
        let total = self.total_offset(pos);
        self.start_pos = None;
        self.last_pos = None;
        total
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Last pointer position seen during the drag.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }
}
