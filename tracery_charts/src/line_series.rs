// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared rendering/interaction base for line-style series.
//!
//! A [`LineSeriesRenderer`] owns the per-point dot markers of every series in
//! a chart, the shared vertical tooltip line, and the show/hide styling that
//! moves dots between their idle and hovered looks. Positions, colors, and
//! bounds are computed upstream; this layer only turns them into backend
//! primitives and keeps the marker table congruent with the positions it was
//! given: `group_dots[g][i]` always corresponds to `group_positions[g][i]`.

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;

use kurbo::{Line, Point, Size};
use peniko::{Brush, Color};
use tracery_core::{Attrs, PrimId, Scene, TweenHandle};

use crate::hover::{DotIndex, HoverPayload};
use crate::style;

/// The two path descriptors of an animated line draw-in.
///
/// Tween a segment primitive from `start` to `end` to make the line grow out
/// of its first point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawInPath {
    /// Zero-length segment at the start point.
    pub start: Line,
    /// The full segment.
    pub end: Line,
}

/// Builds draw-in paths for the segment `from → to`.
///
/// Pure: `start` is the degenerate `from → from` segment, `end` the full one,
/// for any pair of points including `from == to`.
pub fn draw_in_path(from: Point, to: Point) -> DrawInPath {
    DrawInPath {
        start: Line::new(from, from),
        end: Line::new(from, to),
    }
}

/// Renders a single dot marker: an invisible circle carrying its series color.
///
/// Visibility is a separate styling step (see
/// [`LineSeriesRenderer::show_animation`]), so dots start with zero fill and
/// stroke opacity.
pub fn render_dot(scene: &mut Scene, position: Point, color: Brush) -> PrimId {
    let dot = scene.create_circle(position, style::DOT_RADIUS);
    scene.set_attrs(
        dot,
        &Attrs::new()
            .with_fill(color)
            .with_fill_opacity(0.0)
            .with_stroke_opacity(0.0),
    );
    dot
}

/// The tooltip-line bound supplied with a group hover event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverBound {
    /// Hovered area dimensions; `size.height` is the line's bottom y.
    pub size: Size,
    /// Hovered position; `origin.x` is the line's x, `origin.y` its top y.
    pub origin: Point,
}

impl HoverBound {
    /// The vertical tooltip-line segment for this bound, bottom to top.
    fn segment(&self) -> Line {
        Line::new(
            (self.origin.x, self.size.height),
            (self.origin.x, self.origin.y),
        )
    }
}

/// Rendering/interaction base shared by line-style series.
///
/// One renderer instance serves a whole multi-series chart: the outer index
/// of every nested structure is the series (group), the inner index the data
/// point. Markers are replaced wholesale by [`render_dots`] on each render
/// pass; between passes the only mutation is style toggling.
///
/// [`render_dots`]: LineSeriesRenderer::render_dots
#[derive(Debug)]
pub struct LineSeriesRenderer {
    /// Dot markers, congruent with the positions passed to `render_dots`.
    group_dots: Vec<Vec<PrimId>>,
    /// Point-major transpose of `group_dots`; built lazily, dropped whenever
    /// the dot table is replaced.
    pivot_dots: Option<Vec<Vec<PrimId>>>,
    /// Cached idle style, applied on hide transitions.
    out_dot_style: Attrs,
    tooltip_line: Option<PrimId>,
}

impl LineSeriesRenderer {
    /// Creates an empty renderer.
    pub fn new() -> Self {
        Self {
            group_dots: Vec::new(),
            pivot_dots: None,
            out_dot_style: Attrs::new(),
            tooltip_line: None,
        }
    }

    /// Renders the shared vertical tooltip line.
    ///
    /// The line spans `(10, height) → (10, 0)` with a transparent stroke of
    /// width 1; it stays invisible until a group hover styles it. A previous
    /// tooltip line is removed first.
    pub fn render_tooltip_line(&mut self, scene: &mut Scene, height: f64) -> PrimId {
        if let Some(old) = self.tooltip_line.take() {
            scene.remove(old);
        }
        let line = scene.create_segment(
            Line::new((10.0, height), (10.0, 0.0)),
            Color::TRANSPARENT,
            1.0,
        );
        self.tooltip_line = Some(line);
        line
    }

    /// Renders one invisible dot per position, group-major.
    ///
    /// All dots of group `g` share `colors[g]`; a missing color falls back to
    /// `Brush::default()`. The previous pass's dots are removed and a new
    /// scene pass begins, so delayed tweens scheduled against the old dots
    /// can no longer fire. The resulting marker table has exactly the shape
    /// of `group_positions`, empty groups included.
    pub fn render_dots(
        &mut self,
        scene: &mut Scene,
        group_positions: &[Vec<Point>],
        colors: &[Brush],
    ) {
        for dots in self.group_dots.drain(..) {
            for dot in dots {
                scene.remove(dot);
            }
        }
        scene.begin_pass();

        let mut group_dots = Vec::with_capacity(group_positions.len());
        for (g, positions) in group_positions.iter().enumerate() {
            let color = colors.get(g).cloned().unwrap_or_default();
            let mut dots = Vec::with_capacity(positions.len());
            for &position in positions {
                dots.push(render_dot(scene, position, color.clone()));
            }
            group_dots.push(dots);
        }
        self.group_dots = group_dots;
        self.pivot_dots = None;
    }

    /// Wires hover callbacks onto every dot and caches the idle style.
    ///
    /// For the dot at `(group, point)`, pointer enter invokes
    /// `on_enter(position, point, group)` — position first, then the inner
    /// index, then the outer index — and pointer exit invokes `on_exit()`.
    /// `group_positions` must be the structure the dots were rendered from.
    pub fn attach_event<Enter, Exit>(
        &mut self,
        scene: &mut Scene,
        group_positions: &[Vec<Point>],
        out_dot_style: Attrs,
        on_enter: Enter,
        on_exit: Exit,
    ) where
        Enter: Fn(Point, usize, usize) + 'static,
        Exit: Fn() + 'static,
    {
        self.out_dot_style = out_dot_style;
        let on_enter = Rc::new(on_enter);
        let on_exit = Rc::new(on_exit);

        for (g, dots) in self.group_dots.iter().enumerate() {
            for (i, &dot) in dots.iter().enumerate() {
                let Some(&position) = group_positions.get(g).and_then(|ps| ps.get(i)) else {
                    continue;
                };
                let enter = {
                    let on_enter = Rc::clone(&on_enter);
                    move || on_enter(position, i, g)
                };
                let exit = {
                    let on_exit = Rc::clone(&on_exit);
                    move || on_exit()
                };
                scene.bind_hover(dot, enter, exit);
            }
        }
    }

    /// Applies the hover style to the dot named by `payload`.
    ///
    /// A payload that resolves to no marker (stale after a re-render, or out
    /// of range) is a silent no-op.
    pub fn show_animation(&self, scene: &mut Scene, payload: HoverPayload) {
        if let Some(dot) = self.dot_at(payload.dot_index()) {
            scene.set_attrs(dot, &style::hover_dot_style());
        }
    }

    /// Restores the cached idle style on the dot named by `payload`.
    ///
    /// A payload that resolves to no marker is a silent no-op.
    pub fn hide_animation(&self, scene: &mut Scene, payload: HoverPayload) {
        if let Some(dot) = self.dot_at(payload.dot_index()) {
            scene.set_attrs(dot, &self.out_dot_style);
        }
    }

    fn dot_at(&self, index: DotIndex) -> Option<PrimId> {
        self.group_dots
            .get(index.group)
            .and_then(|dots| dots.get(index.point))
            .copied()
    }

    /// The point-major transpose of the dot table.
    ///
    /// Column `i` lists dot `i` of every group that has one, in group order.
    /// Built on first access after the dot table is replaced, then reused.
    pub fn pivot_dots(&mut self) -> &[Vec<PrimId>] {
        self.pivot_dots
            .get_or_insert_with(|| build_pivot(&self.group_dots))
    }

    /// Shows a whole hovered column: every group's dot at `index`, plus the
    /// tooltip line positioned from `bound`.
    pub fn show_group_animation(&mut self, scene: &mut Scene, index: usize, bound: &HoverBound) {
        let shown = style::hover_dot_style();
        if let Some(column) = self.pivot_dots().get(index) {
            for &dot in column {
                scene.set_attrs(dot, &shown);
            }
        }
        if let Some(line) = self.tooltip_line {
            scene.set_attrs(
                line,
                &Attrs::new()
                    .with_segment(bound.segment())
                    .with_stroke(style::tooltip_line_stroke())
                    .with_stroke_opacity(1.0),
            );
        }
    }

    /// Hides a hovered column again: cached idle style on every dot, tooltip
    /// line stroke opacity to 0.
    ///
    /// Only opacity is written on the tooltip line; its segment and stroke
    /// stay as last shown, since zero opacity already hides them.
    pub fn hide_group_animation(&mut self, scene: &mut Scene, index: usize) {
        let out_style = self.out_dot_style.clone();
        if let Some(column) = self.pivot_dots().get(index) {
            for &dot in column {
                scene.set_attrs(dot, &out_style);
            }
        }
        if let Some(line) = self.tooltip_line {
            scene.set_attrs(line, &Attrs::new().with_stroke_opacity(0.0));
        }
    }

    /// Schedules the draw-in tween of a line primitive to `path`, starting
    /// after `delay` milliseconds and running for `duration`.
    ///
    /// The handle can cancel the tween; a tween outlived by the next render
    /// pass is dropped by the backend either way.
    pub fn animate_line(
        &self,
        scene: &mut Scene,
        line: PrimId,
        path: Line,
        duration: f64,
        delay: f64,
    ) -> TweenHandle {
        scene.tween_after(line, Attrs::new().with_segment(path), duration, delay)
    }

    /// Visits every `(dot, group_index, point_index)` triple in creation
    /// (group-major) order.
    pub fn for_each_dot(&self, mut visit: impl FnMut(PrimId, usize, usize)) {
        for (g, dots) in self.group_dots.iter().enumerate() {
            for (i, &dot) in dots.iter().enumerate() {
                visit(dot, g, i);
            }
        }
    }

    /// The dot marker table, group-major.
    pub fn group_dots(&self) -> &[Vec<PrimId>] {
        &self.group_dots
    }

    /// The cached idle dot style.
    pub fn out_dot_style(&self) -> &Attrs {
        &self.out_dot_style
    }

    /// The shared tooltip-line primitive, once rendered.
    pub fn tooltip_line(&self) -> Option<PrimId> {
        self.tooltip_line
    }
}

impl Default for LineSeriesRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn build_pivot(group_dots: &[Vec<PrimId>]) -> Vec<Vec<PrimId>> {
    let columns = group_dots.iter().map(Vec::len).max().unwrap_or(0);
    let mut pivot: Vec<Vec<PrimId>> = Vec::new();
    pivot.resize_with(columns, Vec::new);
    for dots in group_dots {
        for (i, &dot) in dots.iter().enumerate() {
            pivot[i].push(dot);
        }
    }
    pivot
}
