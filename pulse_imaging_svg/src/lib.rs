// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export backend for Energy Pulse marker ops.
//!
//! [`SvgBackend`] records [`MarkerOp`]s and writes them out as a standalone
//! SVG document. It is meant for headless runs, snapshots and debugging:
//! - Clears become a full-surface `<rect>`.
//! - Colors are written as `#rrggbb` plus `fill-opacity` when not opaque.
//! - Numbers are printed with at most three decimals.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Write as _;

use kurbo::{Circle, Rect};
use peniko::Color;
use pulse_imaging::{MarkerBackend, MarkerOp, RecordedOps};

/// A recording SVG backend.
#[derive(Default, Debug)]
pub struct SvgBackend {
    ops: Vec<MarkerOp>,
    recording_start: Option<usize>,
}

impl SvgBackend {
    /// Clears the recorded ops.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
        self.recording_start = None;
    }

    /// Returns the recorded ops.
    pub fn ops(&self) -> &[MarkerOp] {
        &self.ops
    }

    /// Export the currently recorded ops as an SVG document.
    ///
    /// `width`/`height` are used both as the SVG `width`/`height` attributes and to set
    /// `viewBox="0 0 width height"`.
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        render_svg_document(width, height, &self.ops)
    }
}

impl MarkerBackend for SvgBackend {
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

fn render_svg_document(width: u32, height: u32, ops: &[MarkerOp]) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    for op in ops {
        match op {
            MarkerOp::Clear(color) => {
                let surface = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
                write_rect(&mut out, surface, *color);
            }
            MarkerOp::FillRect { rect, color } => write_rect(&mut out, *rect, *color),
            MarkerOp::FillCircle { circle, color } => write_circle(&mut out, circle, *color),
        }
    }
    out.push_str("</svg>");
    out
}

fn write_rect(out: &mut String, rect: Rect, color: Color) {
    // SVG rejects negative sizes.
    let rect = rect.abs();
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
        fmt_f64(rect.x0),
        fmt_f64(rect.y0),
        fmt_f64(rect.width()),
        fmt_f64(rect.height()),
        fill_attrs(color),
    );
}

fn write_circle(out: &mut String, circle: &Circle, color: Color) {
    let _ = write!(
        out,
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
        fmt_f64(circle.center.x),
        fmt_f64(circle.center.y),
        fmt_f64(circle.radius.abs()),
        fill_attrs(color),
    );
}

fn fill_attrs(color: Color) -> String {
    let (rgb, a) = color_to_svg(color);
    if a >= 1.0 {
        format!(" fill=\"{rgb}\"")
    } else {
        format!(" fill=\"{rgb}\" fill-opacity=\"{}\"", fmt_f64(a))
    }
}

fn color_to_svg(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    let a = f64::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn fmt_f64(v: f64) -> String {
    // Keep output readable and stable across runs.
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
