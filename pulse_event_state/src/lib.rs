// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Energy Pulse Event State: small state machines for canvas pointer input.
//!
//! Each module handles one interaction pattern that needs state across
//! several pointer events:
//!
//! - [`drag`]: Turn a press/move/release sequence into incremental pan deltas
//! - [`click`]: Decide whether a press/release pair was a click or a drag
//! - [`wheel`]: Map wheel deltas to multiplicative zoom steps
//!
//! None of these know about the scatter data, the view transform or any
//! windowing system. They accept raw pointer positions and produce deltas,
//! decisions or factors that a dispatcher applies to its own state.
//!
//! ## Panning with a drag
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use pulse_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 10.0));
//!
//! // Each move yields the delta since the previous pointer position.
//! assert_eq!(drag.update(Point::new(15.0, 12.0)), Some(Vec2::new(5.0, 2.0)));
//! assert_eq!(drag.update(Point::new(16.0, 12.0)), Some(Vec2::new(1.0, 0.0)));
//! ```
//!
//! ## Telling clicks from drags
//!
//! ```rust
//! use kurbo::Point;
//! use pulse_event_state::click::ClickState;
//!
//! let mut click = ClickState::default();
//! click.on_down(Point::new(100.0, 100.0));
//! assert!(click.on_up(Point::new(102.0, 101.0)));
//!
//! click.on_down(Point::new(100.0, 100.0));
//! assert!(!click.on_up(Point::new(180.0, 100.0)));
//! ```
//!
//! ## Wheel zoom
//!
//! ```rust
//! use pulse_event_state::wheel::WheelZoom;
//!
//! let wheel = WheelZoom::default();
//! assert_eq!(wheel.factor(120.0), Some(0.95)); // scroll down: zoom out
//! assert_eq!(wheel.factor(-120.0), Some(1.05)); // scroll up: zoom in
//! assert_eq!(wheel.factor(0.0), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod click;
pub mod drag;
pub mod wheel;
