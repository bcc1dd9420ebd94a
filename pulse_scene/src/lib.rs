// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Energy Pulse Scene: everything between a filtered dataset and pixels.
//!
//! - [`Projector`]: fits the dataset's lat/lon extent onto a padded world
//!   canvas, north up.
//! - [`encoding`]: the metric to color and metric to size functions.
//! - [`Scene`]: a borrowed snapshot producing the frame's [`Marker`]s. The
//!   renderer and the hit tester both walk it, so what is drawn is exactly
//!   what can be hit.
//! - [`render()`] draws a frame onto any [`pulse_imaging::MarkerBackend`].
//! - [`hit_test()`] finds the marker under a screen position.
//! - [`Explorer`]: the interactive session owning criteria, the cached
//!   visible subset, the view transform and pointer state, driven by
//!   [`InputEvent`]s.
//! - [`details`]: tooltip, details panel and legend text.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pulse_dataset::{DatasetBuilder, Entity, EntityId};
//! use pulse_imaging::RecordingBackend;
//! use pulse_scene::{EventOutcome, Explorer, InputEvent, RenderStyle};
//!
//! let mut builder = DatasetBuilder::new();
//! for (name, lat, lon) in [("South", 40.0, -74.0), ("North", 41.0, -73.0)] {
//!     builder.push(Entity {
//!         name: name.to_owned(),
//!         category: "Office".to_owned(),
//!         region: None,
//!         year: 2022,
//!         metric_color: Some(120.0),
//!         metric_size: Some(800.0),
//!         lat,
//!         lon,
//!     });
//! }
//! let mut explorer = Explorer::new(builder.finish(), Size::new(800.0, 600.0));
//!
//! let mut backend = RecordingBackend::default();
//! let stats = explorer.render(&RenderStyle::default(), &mut backend);
//! assert_eq!(stats.drawn, 2);
//!
//! // "North" sits in the padded top-right corner.
//! let north = Point::new(760.0, 40.0);
//! explorer.on_event(InputEvent::Down(north));
//! let outcome = explorer.on_event(InputEvent::Up(north));
//! assert_eq!(outcome, EventOutcome::Selected(EntityId(1)));
//! ```

pub mod details;
pub mod encoding;
mod explorer;
mod hit;
mod input;
mod projector;
mod render;
mod scene;

pub use explorer::Explorer;
pub use hit::{HIT_SLACK, hit_test, marker_contains};
pub use input::{EventOutcome, InputEvent};
pub use projector::{PADDING, Projector};
pub use render::{BACKDROP, BACKGROUND, RenderStats, RenderStyle, render};
pub use scene::{Marker, Placement, Scene};
