// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line-series rendering/interaction base for `tracery_core`.
//!
//! This crate is the shared base under line-style chart series (line, area,
//! spline): it turns upstream-computed point positions into dot markers and
//! draw-in line paths, wires hover callbacks between markers and chart-level
//! code, and toggles the idle/hover looks of single dots, whole hovered
//! columns, and the shared vertical tooltip line.
//!
//! Axis computation, scales, layout, and chart orchestration live upstream;
//! this layer receives positions, colors, and bounds and issues requests to
//! the [`tracery_core::Scene`] backend.

#![no_std]

extern crate alloc;

mod hover;
mod line_series;
mod style;

pub use hover::{DotIndex, HoverPayload};
pub use line_series::{
    DrawInPath, HoverBound, LineSeriesRenderer, draw_in_path, render_dot,
};
pub use style::{
    BorderStyle, DOT_RADIUS, HOVER_DOT_RADIUS, border_style, hover_dot_style, out_dot_style,
    tooltip_line_stroke,
};
