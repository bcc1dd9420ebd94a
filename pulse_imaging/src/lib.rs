// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Energy Pulse Imaging: the drawing ops a scatter-plot frame is made of, and
//! the trait backends implement to consume them.
//!
//! A frame is a short, flat program of [`MarkerOp`]s in screen space: a clear,
//! a backdrop rectangle, then one filled circle per marker. There is no
//! resource table and no state stack; every op carries its own geometry and
//! color, so a recording can be replayed on any backend.
//!
//! - [`MarkerBackend`] accepts ops. Its provided methods ([`MarkerBackend::clear`],
//!   [`MarkerBackend::fill_rect`], [`MarkerBackend::fill_circle`]) are sugar
//!   over [`MarkerBackend::draw`].
//! - [`RecordingBackend`] keeps ops in memory, for tests and headless use.
//! - [`record_ops`] captures a segment of ops issued to any backend.
//!
//! ```rust
//! use pulse_imaging::{Circle, Color, MarkerBackend, MarkerOp, RecordingBackend, record_ops};
//!
//! let mut backend = RecordingBackend::default();
//! backend.clear(Color::BLACK);
//! let markers = record_ops(&mut backend, |b| {
//!     b.fill_circle(Circle::new((10.0, 10.0), 4.0), Color::WHITE);
//!     b.fill_circle(Circle::new((20.0, 10.0), 6.0), Color::WHITE);
//! });
//!
//! assert_eq!(backend.ops().len(), 3);
//! assert_eq!(markers.ops.len(), 2);
//! assert!(matches!(markers.ops[0], MarkerOp::FillCircle { .. }));
//! ```

#![no_std]

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

pub use kurbo::{Circle, Rect};
pub use peniko::Color;

/// One drawing operation, in screen coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkerOp {
    /// Fill the whole surface with a color.
    Clear(Color),
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle to fill. May extend past the surface.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Fill a circle.
    FillCircle {
        /// Circle to fill.
        circle: Circle,
        /// Fill color, alpha included.
        color: Color,
    },
}

impl MarkerOp {
    /// Returns `true` for [`MarkerOp::FillCircle`].
    #[must_use]
    pub fn is_marker(&self) -> bool {
        matches!(self, Self::FillCircle { .. })
    }
}

/// A captured sequence of ops.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedOps {
    /// The ops, in issue order.
    pub ops: Arc<[MarkerOp]>,
}

impl RecordedOps {
    /// Replays the recording onto `backend`.
    pub fn replay<B: MarkerBackend + ?Sized>(&self, backend: &mut B) {
        for op in self.ops.iter() {
            backend.draw(op.clone());
        }
    }
}

/// Something that consumes [`MarkerOp`]s.
pub trait MarkerBackend {
    /// Apply a drawing operation.
    ///
    /// When called inside an active recording, the operation must both be
    /// applied and appended to the recording.
    fn draw(&mut self, op: MarkerOp);

    /// Begin capturing subsequent operations into a recording.
    ///
    /// Callers should assume at most a single active recording.
    fn begin_record(&mut self);

    /// End the current recording and return the captured operations.
    fn end_record(&mut self) -> RecordedOps;

    /// Fill the whole surface.
    #[inline]
    fn clear(&mut self, color: Color) {
        self.draw(MarkerOp::Clear(color));
    }

    /// Fill a rectangle.
    #[inline]
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw(MarkerOp::FillRect { rect, color });
    }

    /// Fill a circle.
    #[inline]
    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.draw(MarkerOp::FillCircle { circle, color });
    }
}

/// Record a sequence of operations into a [`RecordedOps`].
///
/// Wraps [`MarkerBackend::begin_record`] / `end_record`; everything `f`
/// issues is captured and still applied to `backend`.
pub fn record_ops<B, F>(backend: &mut B, f: F) -> RecordedOps
where
    B: MarkerBackend + ?Sized,
    F: FnOnce(&mut B),
{
    backend.begin_record();
    f(backend);
    backend.end_record()
}

/// In-memory backend that keeps every op it is given.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    ops: Vec<MarkerOp>,
    recording_start: Option<usize>,
}

impl RecordingBackend {
    /// Returns the recorded ops.
    #[must_use]
    pub fn ops(&self) -> &[MarkerOp] {
        &self.ops
    }

    /// Clears the recorded ops.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
        self.recording_start = None;
    }

    /// Iterates the circles drawn so far.
    pub fn circles(&self) -> impl Iterator<Item = (Circle, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            MarkerOp::FillCircle { circle, color } => Some((*circle, *color)),
            _ => None,
        })
    }
}

impl MarkerBackend for RecordingBackend {
    fn draw(&mut self, op: MarkerOp) {
        self.ops.push(op);
    }

    fn begin_record(&mut self) {
        self.recording_start = Some(self.ops.len());
    }

    fn end_record(&mut self) -> RecordedOps {
        let start = self.recording_start.take().unwrap_or(self.ops.len());
        RecordedOps {
            ops: Arc::from(&self.ops[start..]),
        }
    }
}
