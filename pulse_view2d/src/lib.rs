// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Energy Pulse View 2D: the pan/zoom transform behind the scatter canvas.
//!
//! This crate provides a small, headless model of the view over the
//! projected "world" canvas. World coordinates are the canvas-space positions
//! markers receive from projection; screen coordinates are where they end up
//! after the user has panned and zoomed. It focuses on:
//! - View state (uniform scale + pan offset), clamped to scale limits.
//! - Coordinate conversion between world and screen space, in both directions.
//! - Zooming around a screen-space anchor so the point under the cursor stays put.
//!
//! The transform is anchored at the viewport center:
//!
//! ```text
//! screen = center + offset + scale * (world - center)
//! ```
//!
//! so `scale = 1, offset = 0` is the identity and zooming without an anchor
//! grows the picture around the middle of the canvas.
//!
//! It does **not** own any dataset, renderer or event loop. Callers are
//! expected to:
//! - Project their data into world space themselves.
//! - Use [`ViewTransform`] to map world points to the screen for drawing and
//!   screen points back to the world for hit testing.
//! - Translate pointer input into [`ViewTransform::pan`] and
//!   [`ViewTransform::zoom_at`] calls at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pulse_view2d::ViewTransform;
//!
//! let mut view = ViewTransform::new(Size::new(800.0, 600.0));
//!
//! // Zoom in around the cursor.
//! let cursor = Point::new(200.0, 150.0);
//! let under_cursor = view.screen_to_world(cursor);
//! view.zoom_at(cursor, 1.05);
//!
//! let back = view.world_to_screen(under_cursor);
//! assert!((back.x - cursor.x).abs() < 1e-9);
//! assert!((back.y - cursor.y).abs() < 1e-9);
//! ```
//!
//! ## Culling example
//!
//! [`ViewTransform::visible_world_rect`] reports the part of the world that is
//! currently on screen, which is handy for skipping off-screen markers:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pulse_view2d::ViewTransform;
//!
//! let mut view = ViewTransform::new(Size::new(800.0, 600.0));
//! view.zoom_at(Point::new(400.0, 300.0), 4.0);
//!
//! let visible = view.visible_world_rect();
//! assert!(visible.contains(Point::new(400.0, 300.0)));
//! assert!(!visible.contains(Point::new(10.0, 10.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod limits;
mod view;

pub use limits::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, ScaleLimits};
pub use view::{ViewState, ViewTransform, ViewTransformDebugInfo};
